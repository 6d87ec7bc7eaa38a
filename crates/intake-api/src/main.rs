use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use intake_api::config::Config;
use intake_api::state::AppState;
use intake_sheets::auth::ServiceAccountKey;
use intake_sheets::google::GoogleSheets;
use intake_tracking::locks::SubmissionLocks;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging; verbosity via RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;

    let key = ServiceAccountKey::from_file(&config.service_account_key)?;
    let store = GoogleSheets::new(key, config.drive_folder_id.clone())?;

    let state = AppState {
        store: Arc::new(store),
        central_spreadsheet_id: config.central_spreadsheet_id.clone(),
        operator_email: config.operator_email.clone(),
        locks: SubmissionLocks::new(),
    };

    let app = intake_api::app(state).layer(config.cors_layer());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "intake API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
