//! Error types for the yamlcast library
//!
//! Malformed YAML surfaces as [`YamlCastError::Parse`] and is never swallowed.
//! Everything the decoder can recover from (scalar coercion, unresolved
//! nodes) is absorbed into a fallback and does not appear here.

use std::fmt;
use thiserror::Error;
use yaml_rust2::ScanError;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum YamlCastError {
    /// Malformed YAML reported by the parser
    #[error("YAML parse error at line {line}, column {col}: {reason}")]
    Parse {
        line: usize,
        col: usize,
        reason: String,
    },

    /// JSON encoding or decoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Caller supplied an argument that cannot be processed
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Input was well-formed but has the wrong shape
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, YamlCastError>;

impl From<ScanError> for YamlCastError {
    fn from(err: ScanError) -> Self {
        let marker = err.marker();
        Self::Parse {
            line: marker.line(),
            col: marker.col(),
            reason: err.info().to_string(),
        }
    }
}

impl YamlCastError {
    /// Create a new parse error
    pub fn parse(line: usize, col: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            col,
            reason: reason.into(),
        }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Check if this error is recoverable by fixing the input and retrying
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(io_err) => !matches!(
                io_err.kind(),
                std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied
            ),
            Self::InvalidArgument { .. } => false,
            Self::Parse { .. } | Self::Json(_) | Self::Validation { .. } => true,
        }
    }

    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io(_) => ErrorSeverity::Critical,
            Self::Parse { .. } | Self::Json(_) => ErrorSeverity::High,
            Self::InvalidArgument { .. } => ErrorSeverity::Medium,
            Self::Validation { .. } => ErrorSeverity::Low,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = YamlCastError::invalid_argument("no input");
        assert!(matches!(err, YamlCastError::InvalidArgument { .. }));
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.to_string(), "Invalid argument: no input");
    }

    #[test]
    fn test_parse_error_display() {
        let err = YamlCastError::parse(3, 7, "did not find expected key");
        assert_eq!(
            err.to_string(),
            "YAML parse error at line 3, column 7: did not find expected key"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_error_severity_ordering() {
        assert!(ErrorSeverity::Critical > ErrorSeverity::High);
        assert!(ErrorSeverity::High > ErrorSeverity::Medium);
        assert!(ErrorSeverity::Medium > ErrorSeverity::Low);
    }
}
