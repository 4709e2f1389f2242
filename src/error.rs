//! Error types for the extraction core.

use thiserror::Error;

use crate::models::MimeType;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Error, Debug)]
pub enum ExtractError {
    /// No language profile is registered for the MIME type.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(MimeType),

    /// The XML reader rejected the document.
    #[error("markup parse error at byte {position}: {source}")]
    Markup {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },
}
