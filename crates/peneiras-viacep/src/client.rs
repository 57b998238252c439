//! HTTP client for the ViaCEP postal-code lookup API.
//!
//! Wraps `reqwest` with CEP normalization, the `erro` not-found marker
//! check, and typed response deserialization. Lookups are a single GET with
//! no internal retries; every failure is terminal for the current search.

use std::time::Duration;

use reqwest::Client;

use crate::error::ViacepError;
use crate::normalize::normalize_cep;
use crate::types::CepAddress;

const DEFAULT_BASE_URL: &str = "https://viacep.com.br/ws";
const USER_AGENT: &str = "peneiras/0.1 (tryout-search)";

/// Client for the ViaCEP REST API.
///
/// Use [`ViacepClient::new`] for production or [`ViacepClient::with_base_url`]
/// to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct ViacepClient {
    client: Client,
    base_url: String,
}

impl ViacepClient {
    /// Creates a new client pointed at the public ViaCEP service.
    ///
    /// # Errors
    ///
    /// Returns [`ViacepError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, ViacepError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ViacepError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, ViacepError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a raw CEP string to a full address.
    ///
    /// The input is normalized first: separators are stripped and exactly 8
    /// digits are required before any network traffic happens.
    ///
    /// # Errors
    ///
    /// - [`ViacepError::InvalidCep`] if the digit count is not 8.
    /// - [`ViacepError::NotFound`] if the service reports an unknown CEP.
    /// - [`ViacepError::Http`] on network failure or non-2xx HTTP status.
    /// - [`ViacepError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn lookup(&self, raw_cep: &str) -> Result<CepAddress, ViacepError> {
        let cep = normalize_cep(raw_cep)?;
        let url = self.endpoint(&cep);
        tracing::debug!(cep, "resolving CEP via ViaCEP");

        let response = self.client.get(&url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ViacepError::Deserialize {
                context: url.clone(),
                source: e,
            })?;

        if is_not_found(&value) {
            tracing::debug!(cep, "ViaCEP reported an unknown CEP");
            return Err(ViacepError::NotFound(cep));
        }

        serde_json::from_value(value).map_err(|e| ViacepError::Deserialize {
            context: url,
            source: e,
        })
    }

    fn endpoint(&self, cep: &str) -> String {
        format!("{}/{cep}/json/", self.base_url)
    }
}

/// ViaCEP has served both `"erro": true` and `"erro": "true"` over time;
/// accept either form.
fn is_not_found(value: &serde_json::Value) -> bool {
    match value.get("erro") {
        Some(serde_json::Value::Bool(flag)) => *flag,
        Some(serde_json::Value::String(s)) => s == "true",
        _ => false,
    }
}
