//! intake-api
//!
//! The HTTP service: request routing, API error mapping, and the
//! env-driven configuration binding the handlers to a concrete
//! spreadsheet store.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router. `main` layers CORS on top; tests drive this
/// directly with an in-memory store.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(routes::health::ping))
        .route("/create-sheet", post(routes::clients::create_sheet))
        .route("/client-forms", get(routes::clients::client_forms))
        .route("/submit-form", post(routes::submissions::submit_form))
        .route("/forms", get(routes::forms::list_forms))
        .route("/forms/{id}", get(routes::forms::form_detail))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .with_state(state)
}
