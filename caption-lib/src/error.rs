use thiserror::Error;

use crate::types::CaptionFormat;

/// Errors surfaced by the caption engine.
///
/// The `Display` strings are user-facing and go straight into API responses.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaptionError {
    /// The file name does not end in a supported caption extension
    #[error("Unsupported file format. Use VTT, SRT, or TXT files.")]
    UnsupportedFormat(String),

    /// The parser recovered no cues from the content
    #[error("Could not parse caption file. Please check the format.")]
    Unparseable { format: CaptionFormat },
}

/// Coarse failure classes a caller maps onto its own transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    UnsupportedFormat,
    Unparseable,
    Internal,
}

impl CaptionError {
    /// Failure category of this error
    pub fn category(&self) -> FailureCategory {
        match self {
            CaptionError::UnsupportedFormat(_) => FailureCategory::UnsupportedFormat,
            CaptionError::Unparseable { .. } => FailureCategory::Unparseable,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CaptionError>;
