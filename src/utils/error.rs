use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrefixError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Term file error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl PrefixError {
    pub fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidArgument { .. } | Self::ConfigError { .. } => ErrorSeverity::High,
            Self::ValidationError { .. } | Self::CsvError(_) => ErrorSeverity::High,
            Self::SerializationError(_) => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "Check the command line arguments; prefix length must be zero or greater",
            Self::ConfigError { .. } => "Check the TOML configuration file syntax and field names",
            Self::ValidationError { .. } => "Fix the reported line in the term file",
            Self::CsvError(_) => "Term files must contain 'weight<TAB>word' rows",
            Self::SerializationError(_) => "Retry with --format text",
            Self::IoError(_) => "Make sure the file exists and is readable",
        }
    }

    /// Process exit code used by the CLI; never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PrefixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = PrefixError::invalid_argument("prefix_length", "must not be negative, got -1");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'prefix_length': must not be negative, got -1"
        );
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: PrefixError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_render_failure_exits_non_zero() {
        let err: PrefixError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
    }
}
