use thiserror::Error;

use peneiras_viacep::ViacepError;

/// Errors returned by the search entry point.
///
/// Every kind is terminal for the current search call; nothing is retried
/// internally and no partial results accompany an error.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Empty or whitespace-only search text.
    #[error("search text must not be empty")]
    EmptyQuery,

    /// CEP resolution failed; the resolver error propagates unchanged under
    /// a generic prefix.
    #[error("search failed: {0}")]
    Resolve(#[from] ViacepError),
}
