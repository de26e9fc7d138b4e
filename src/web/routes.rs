//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{generate_form_handler, show_form_handler};
use axum::{Router, routing::get};

/// Public web routes.
///
/// # Endpoints
///
/// - `GET  /` - Empty form
/// - `POST /` - Submit the form, render the page with the generated code
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(show_form_handler).post(generate_form_handler))
}
