//! Process configuration.
//!
//! Everything deployment-specific (spreadsheet ids, operator account,
//! CORS origins) lives here and is passed into constructed clients at
//! startup; handlers never read the environment.

use std::env;
use std::path::PathBuf;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub struct Config {
    /// Spreadsheet id of the central registry (`Clients`,
    /// `MeasurementTracking`, and the catalog tabs).
    pub central_spreadsheet_id: String,
    /// Operator account granted writer access on every client document.
    pub operator_email: String,
    /// Path to the service-account key file.
    pub service_account_key: PathBuf,
    /// Drive folder that client documents are created in, when set.
    pub drive_folder_id: Option<String>,
    /// Allowed CORS origins; empty means permissive.
    pub allowed_origins: Vec<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let central_spreadsheet_id = env::var("INTAKE_CENTRAL_SPREADSHEET_ID")
            .map_err(|_| eyre::eyre!("INTAKE_CENTRAL_SPREADSHEET_ID is required"))?;
        let operator_email = env::var("INTAKE_OPERATOR_EMAIL")
            .map_err(|_| eyre::eyre!("INTAKE_OPERATOR_EMAIL is required"))?;
        let service_account_key = env::var("INTAKE_SERVICE_ACCOUNT_KEY")
            .unwrap_or_else(|_| "./service-account.json".to_string())
            .into();
        let drive_folder_id = env::var("INTAKE_DRIVE_FOLDER_ID").ok().filter(|v| !v.is_empty());
        let allowed_origins = env::var("INTAKE_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| eyre::eyre!("PORT must be a number, got {raw:?}"))?,
            Err(_) => 8080,
        };

        Ok(Config {
            central_spreadsheet_id,
            operator_email,
            service_account_key,
            drive_folder_id,
            allowed_origins,
            port,
        })
    }

    pub fn cors_layer(&self) -> CorsLayer {
        if self.allowed_origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
