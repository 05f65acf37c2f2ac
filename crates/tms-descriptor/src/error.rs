//! Error types for descriptor generation.

use thiserror::Error;

/// Result type alias using DescriptorError.
pub type DescriptorResult<T> = Result<T, DescriptorError>;

#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The record's `type` tag was neither `xyz` nor `quadkey`. Fatal to
    /// this export only.
    #[error("Unsupported addressing mode: {0}")]
    UnsupportedAddressingMode(String),

    /// The target path has no usable file stem to name the sidecar after.
    #[error("Invalid target path: {0}")]
    InvalidTargetPath(String),

    #[error("XML serialization failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
