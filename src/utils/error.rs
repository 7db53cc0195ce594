use thiserror::Error;

#[derive(Error, Debug)]
pub enum VinError {
    #[error("Please enter a VIN before fetching the vehicle information")]
    EmptyVinError,

    #[error("VIN must be exactly 17 characters long.")]
    VinLengthError { length: usize },

    #[error("VIN must be alpha-numeric and cannot include letters I, O, Q.")]
    VinAlphabetError { invalid: char },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Lookup service returned HTTP {status}")]
    ServiceStatusError { status: u16 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
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

impl VinError {
    /// Errors caught before the lookup service is contacted.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            VinError::EmptyVinError
                | VinError::VinLengthError { .. }
                | VinError::VinAlphabetError { .. }
        )
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            VinError::EmptyVinError
            | VinError::VinLengthError { .. }
            | VinError::VinAlphabetError { .. } => ErrorCategory::Input,
            VinError::ApiError(_)
            | VinError::ServiceStatusError { .. }
            | VinError::SerializationError(_) => ErrorCategory::Network,
            VinError::UrlError(_)
            | VinError::ConfigError { .. }
            | VinError::InvalidConfigValueError { .. }
            | VinError::MissingConfigError { .. }
            | VinError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            VinError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            VinError::ApiError(e) if e.is_timeout() => {
                "The VIN lookup service did not answer in time".to_string()
            }
            VinError::ApiError(e) if e.is_connect() => {
                "Could not connect to the VIN lookup service".to_string()
            }
            VinError::ServiceStatusError { status } => {
                format!("The VIN lookup service is unavailable (HTTP {})", status)
            }
            VinError::SerializationError(_) => {
                "The VIN lookup service sent a response that could not be read".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            VinError::EmptyVinError => "Type the 17-character VIN printed on the vehicle",
            VinError::VinLengthError { .. } => "Check that no characters were dropped or added",
            VinError::VinAlphabetError { .. } => {
                "VINs never contain I, O or Q; they are usually 1, 0 or 9"
            }
            VinError::ApiError(_) => "Check your network connection and try again",
            VinError::ServiceStatusError { .. } | VinError::SerializationError(_) => {
                "Wait a moment and try the lookup again"
            }
            VinError::UrlError(_)
            | VinError::ConfigError { .. }
            | VinError::InvalidConfigValueError { .. }
            | VinError::MissingConfigError { .. }
            | VinError::ConfigValidationError { .. } => {
                "Review the command line flags and the TOML configuration file"
            }
            VinError::IoError(_) => "Check file permissions and that the terminal is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, VinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_errors_are_low_severity_input() {
        let errors = [
            VinError::EmptyVinError,
            VinError::VinLengthError { length: 16 },
            VinError::VinAlphabetError { invalid: 'Q' },
        ];
        for e in &errors {
            assert!(e.is_format_error());
            assert_eq!(e.category(), ErrorCategory::Input);
            assert_eq!(e.severity(), ErrorSeverity::Low);
        }
    }

    #[test]
    fn test_service_status_is_not_format_error() {
        let e = VinError::ServiceStatusError { status: 503 };
        assert!(!e.is_format_error());
        assert_eq!(e.category(), ErrorCategory::Network);
        assert!(e.user_friendly_message().contains("503"));
    }

    #[test]
    fn test_format_messages_match_page_wording() {
        assert_eq!(
            VinError::VinLengthError { length: 3 }.to_string(),
            "VIN must be exactly 17 characters long."
        );
        assert_eq!(
            VinError::VinAlphabetError { invalid: 'I' }.to_string(),
            "VIN must be alpha-numeric and cannot include letters I, O, Q."
        );
    }
}
