//! Error types for the formatter
//!
//! Rendering itself never fails; these errors cover the strict
//! configuration checks around it.

pub type Result<T> = std::result::Result<T, FormatterError>;

#[derive(Debug, thiserror::Error)]
pub enum FormatterError {
    /// Timestamp format string that chrono cannot render
    #[error("Invalid timestamp format '{format}'")]
    InvalidTimestampFormat { format: String },
}

impl FormatterError {
    /// Create an invalid timestamp format error
    pub fn timestamp_format(format: impl Into<String>) -> Self {
        FormatterError::InvalidTimestampFormat {
            format: format.into(),
        }
    }
}
