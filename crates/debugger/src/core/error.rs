//! Error handling for debugger
//!
//! Printing never fails from the caller's point of view. The errors here
//! come from configuration (an unparsable timestamp format) and from the
//! underlying writer, which the logger reports through `tracing` and drops.

/// Type alias for Result with [`DebugError`]
pub type DebugResult<T> = Result<T, DebugError>;

/// Error type for logger operations
#[derive(Debug, thiserror::Error)]
pub enum DebugError {
    /// The timestamp format description could not be parsed
    #[error("Invalid timestamp format '{format}': {reason}")]
    TimestampFormat {
        /// The rejected format description
        format: String,
        /// Parser message
        reason: String,
    },

    /// Writing to the output sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DebugError {
    /// Create a timestamp format error
    pub fn timestamp_format(format: impl Into<String>, reason: impl ToString) -> Self {
        Self::TimestampFormat {
            format: format.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the error was caused by the caller's configuration
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::TimestampFormat { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_timestamp_format_error() {
        let error = DebugError::timestamp_format("[yeer]", "unknown component");
        assert!(error.is_config_error());
        assert_eq!(
            error.to_string(),
            "Invalid timestamp format '[yeer]': unknown component"
        );
    }

    #[test]
    fn test_io_error_from() {
        let error: DebugError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(!error.is_config_error());
        assert!(error.to_string().contains("pipe closed"));
    }
}
