use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("Unsupported magnitude: {digits} digits (at most {max_digits} supported)")]
    UnsupportedMagnitude { digits: usize, max_digits: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Range,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ConvertError {
    pub fn invalid_input(input: &str, reason: impl Into<String>) -> Self {
        ConvertError::InvalidInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::InvalidInput { .. } => ErrorCategory::Input,
            ConvertError::UnsupportedMagnitude { .. } => ErrorCategory::Range,
            ConvertError::ConfigError { .. } | ConvertError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ConvertError::IoError(_) | ConvertError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Range => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::InvalidInput { input, .. } if input.is_empty() => {
                "No number was given".to_string()
            }
            ConvertError::InvalidInput { input, .. } => {
                format!("'{}' is not a non-negative whole number", input)
            }
            ConvertError::UnsupportedMagnitude { max_digits, .. } => {
                format!("Numbers longer than {} digits cannot be spelled", max_digits)
            }
            ConvertError::ConfigError { message } => format!("Configuration problem: {}", message),
            ConvertError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            ConvertError::IoError(e) => format!("Could not read or write data: {}", e),
            ConvertError::SerializationError(e) => format!("Could not encode output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::InvalidInput { .. } => {
                "Pass only the digits 0-9, without sign, separators or spaces"
            }
            ConvertError::UnsupportedMagnitude { .. } => {
                "Split the number or keep it below the trillion range"
            }
            ConvertError::ConfigError { .. } => "Check that the config file exists and is valid TOML",
            ConvertError::InvalidConfigValueError { .. } => {
                "Fix the listed field in the config file or on the command line"
            }
            ConvertError::IoError(_) => "Check file permissions and that the input stream is readable",
            ConvertError::SerializationError(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_errors_are_medium_severity() {
        let err = ConvertError::invalid_input("12a3", "contains a non-digit character");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.severity().exit_code(), 2);

        let err = ConvertError::UnsupportedMagnitude {
            digits: 16,
            max_digits: 15,
        };
        assert_eq!(err.category(), ErrorCategory::Range);
        assert!(err.to_string().contains("16 digits"));
    }

    #[test]
    fn test_user_friendly_message_for_empty_input() {
        let err = ConvertError::invalid_input("", "input is empty");
        assert_eq!(err.user_friendly_message(), "No number was given");
    }

    #[test]
    fn test_config_errors_outrank_input_errors() {
        let config = ConvertError::ConfigError {
            message: "missing".to_string(),
        };
        let input = ConvertError::invalid_input("x", "bad");
        assert!(config.severity() > input.severity());
    }
}
