//! OAuth2 service-account flow.
//!
//! Signs an RS256 assertion with the service account's private key and
//! exchanges it for a bearer token at the key's token endpoint. Tokens are
//! cached until shortly before expiry.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::SheetsError;

/// Scopes requested for every token. Drive access is needed for document
/// creation, folder placement, and permission grants.
const SCOPES: &str =
    "https://www.googleapis.com/auth/spreadsheets https://www.googleapis.com/auth/drive";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Refresh this long before the token actually expires.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

fn default_token_uri() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

/// The fields of a service-account key file this client needs.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl ServiceAccountKey {
    pub fn from_file(path: &Path) -> Result<Self, SheetsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

pub(crate) struct TokenProvider {
    http: reqwest::Client,
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenProvider {
    pub(crate) fn new(http: reqwest::Client, key: ServiceAccountKey) -> Result<Self, SheetsError> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| SheetsError::Auth(format!("invalid service-account private key: {e}")))?;
        Ok(TokenProvider {
            http,
            key,
            encoding_key,
            cached: Mutex::new(None),
        })
    }

    /// A valid bearer token, minted on first use and whenever the cached
    /// one is within [`EXPIRY_MARGIN`] of expiry.
    pub(crate) async fn token(&self) -> Result<String, SheetsError> {
        let mut cached = self.cached.lock().await;
        if let Some(tok) = cached.as_ref()
            && tok.expires_at > Instant::now() + EXPIRY_MARGIN
        {
            return Ok(tok.access_token.clone());
        }

        let minted = self.mint().await?;
        let access_token = minted.access_token.clone();
        *cached = Some(minted);
        Ok(access_token)
    }

    async fn mint(&self) -> Result<CachedToken, SheetsError> {
        let iat = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| SheetsError::Auth(e.to_string()))?
            .as_secs();
        let claims = Claims {
            iss: &self.key.client_email,
            scope: SCOPES,
            aud: &self.key.token_uri,
            iat,
            exp: iat + 3600,
        };

        let assertion = jsonwebtoken::encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| SheetsError::Auth(format!("failed to sign assertion: {e}")))?;

        let resp = self
            .http
            .post(&self.key.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SheetsError::Auth(format!(
                "token endpoint returned {status}: {body}"
            )));
        }

        let token: TokenResponse = resp.json().await?;
        tracing::debug!(client_email = %self.key.client_email, "minted service-account token");

        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        })
    }
}
