//! Error types for catalog loading.

use thiserror::Error;

/// Result type alias using CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Document-level catalog failures. Both variants abort the whole load and
/// are surfaced to the caller with the raw detail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Malformed catalog: {0}")]
    MalformedCatalog(String),
}

/// Record-level failures. These never abort a load; the offending record
/// is dropped and its siblings are kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid value for field '{field}': {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}
