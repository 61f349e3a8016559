//! Error types for document conversion.

use thiserror::Error;

/// Errors that can abort a conversion.
///
/// Classification ambiguity is never an error: unparseable heading levels
/// and list depths fall back to defaults, and failed image descriptions
/// become placeholder text instead of propagating.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input is not a readable .docx package.
    #[error("invalid input: {0}")]
    InputFormat(String),

    /// The package opened but its document body could not be parsed.
    #[error("failed to parse document: {0}")]
    Parse(#[from] docx_rs::ReaderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
