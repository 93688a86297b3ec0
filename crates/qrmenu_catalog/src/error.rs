//! Error types for payload decoding.

use thiserror::Error;

/// Errors raised while turning collaborator payloads into catalog types.
///
/// The engine itself is total; only decoding of external documents can fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid {kind} payload: {source}")]
    Payload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub(crate) fn payload(kind: &'static str, source: serde_json::Error) -> Self {
        CatalogError::Payload { kind, source }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
