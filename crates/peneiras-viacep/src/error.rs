use thiserror::Error;

/// Errors returned by the ViaCEP client.
#[derive(Debug, Error)]
pub enum ViacepError {
    /// The input does not have exactly 8 digits after stripping separators.
    #[error("CEP must have 8 digits (got \"{0}\")")]
    InvalidCep(String),

    /// Well-formed CEP with no matching record at the lookup service.
    #[error("CEP not found: {0}")]
    NotFound(String),

    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
