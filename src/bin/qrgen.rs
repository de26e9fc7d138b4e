//! Command-line QR code generator.
//!
//! Uses the same resolution rules and renderer as the HTTP service, without
//! starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Print the base64 PNG for a URL
//! cargo run --bin qrgen -- https://example.com
//!
//! # Write a phone number code to a file
//! cargo run --bin qrgen -- --data-type tel --output phone.png 555-1234
//! ```

use qrcode_service::domain::{CodeError, CodeRenderer, CodeRequest, DataType};
use qrcode_service::infrastructure::qr::PngQrRenderer;

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use clap::{Parser, ValueEnum};
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate a 600x600 QR code PNG.
#[derive(Parser)]
#[command(name = "qrgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text to encode
    text: String,

    /// How the text should be interpreted when scanned
    #[arg(short, long, value_enum, default_value_t = TypeArg::Url)]
    data_type: TypeArg,

    /// Write the PNG to this file instead of printing base64
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum TypeArg {
    Url,
    Tel,
    Sms,
    Email,
}

impl From<TypeArg> for DataType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Url => DataType::Url,
            TypeArg::Tel => DataType::Tel,
            TypeArg::Sms => DataType::Sms,
            TypeArg::Email => DataType::Email,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let data_type = DataType::from(cli.data_type);
    let request = CodeRequest::new(cli.text, data_type.as_str());

    let content = request.resolve().map_err(describe)?;
    let png = PngQrRenderer::default()
        .render_png(&content)
        .context("Failed to render QR code")?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, &png)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} {} ({})",
                "✓".green().bold(),
                path.display(),
                content.cyan()
            );
        }
        None => println!("{}", STANDARD_NO_PAD.encode(&png)),
    }

    Ok(())
}

fn describe(err: CodeError) -> anyhow::Error {
    match err {
        CodeError::Required => anyhow::anyhow!("text must not be empty"),
        other => anyhow::Error::new(other),
    }
}
