use agarathi_config::ProviderKind;
use agarathi_types::LookupFailure;

use crate::payload::RawPayload;

/// Word lookup provider interface
#[async_trait::async_trait]
pub trait WordSource: Send + Sync {
    /// Fetch the raw provider payload for a trimmed, non-empty term
    async fn lookup(&self, term: &str) -> Result<RawPayload, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub provider: ProviderKind,
    pub language: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("No entry found for '{0}'")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Provider returned HTTP {0}")]
    Status(u16),

    #[error("Malformed provider response: {0}")]
    Decode(String),

    #[error("Invalid provider URL: {0}")]
    InvalidUrl(String),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound(_))
    }

    pub fn to_failure(&self) -> LookupFailure {
        match self {
            LookupError::NotFound(term) => LookupFailure::NotFound { term: term.clone() },
            other => LookupFailure::Unavailable {
                reason: other.to_string(),
            },
        }
    }
}
