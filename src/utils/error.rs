use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("Setup error: {message}")]
    SetupError { message: String },

    #[error("Invalid transition: {message}")]
    InvalidTransitionError { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScorerError {
    pub fn setup(message: impl Into<String>) -> Self {
        Self::SetupError {
            message: message.into(),
        }
    }

    pub fn transition(message: impl Into<String>) -> Self {
        Self::InvalidTransitionError {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Operator mistakes are recoverable within a session; I/O failures are not.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ValidationError { .. } | Self::InvalidTransitionError { .. } => ErrorSeverity::Low,
            Self::SetupError { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            Self::CsvError(_) | Self::SerializationError(_) => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::SetupError { message } => format!("Match setup rejected: {}", message),
            Self::InvalidTransitionError { message } => format!("Not allowed right now: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::ValidationError { message } => format!("Input rejected: {}", message),
            Self::CsvError(_) | Self::SerializationError(_) => {
                "Failed to write the scorecard report".to_string()
            }
            Self::IoError(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::SetupError { .. } => {
                "Give the batting side at least 2 players and the bowling side at least 1, with unique names"
            }
            Self::InvalidTransitionError { .. } => {
                "Check the innings state: finish innings 1 before switching, and reset after the match ends"
            }
            Self::InvalidConfigValueError { .. } | Self::ConfigError { .. } => {
                "Fix the match configuration file or command line flags"
            }
            Self::ValidationError { .. } => "Type 'help' to list the accepted commands",
            Self::CsvError(_) | Self::SerializationError(_) | Self::IoError(_) => {
                "Make sure the output directory exists and is writable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScorerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_errors_are_low_severity() {
        assert_eq!(ScorerError::validation("bad").severity(), ErrorSeverity::Low);
        assert_eq!(ScorerError::transition("bad").severity(), ErrorSeverity::Low);
        assert_eq!(ScorerError::setup("bad").severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_display_includes_message() {
        let err = ScorerError::setup("team too small");
        assert_eq!(err.to_string(), "Setup error: team too small");
        assert!(err.user_friendly_message().contains("team too small"));
    }
}
