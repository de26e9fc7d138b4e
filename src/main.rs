use anyhow::Result;
use clap::Parser;
use qrcode_service::config::Config;
use qrcode_service::server;
use qrcode_service::state::ServiceInfo;
use tracing_subscriber::EnvFilter;

/// QR code generation service.
#[derive(Parser)]
#[command(name = "qrcode-service")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to listen on, overrides `LISTEN`
    #[arg(long)]
    listen: Option<String>,

    /// Deployment environment, overrides `APP_ENV`
    #[arg(long)]
    env: Option<String>,

    /// Seconds allowed for graceful shutdown, overrides `SHUTDOWN_TIMEOUT_SECS`
    #[arg(long)]
    shutdown_timeout: Option<u64>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if let Some(env) = self.env {
            config.environment = env;
        }
        if let Some(secs) = self.shutdown_timeout {
            config.shutdown_timeout_secs = secs;
        }
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::from_env();
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config);

    let service_info = ServiceInfo::new(&config.environment, &config.host);
    tracing::info!(
        service = %service_info.name,
        host = %service_info.host,
        version = %service_info.version,
        environment = %service_info.environment,
        "starting service"
    );
    config.print_summary();

    server::run(config, service_info).await
}
