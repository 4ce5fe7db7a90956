use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaltError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Could not parse '{input}' as {field}")]
    Parse { field: String, input: String },

    #[error("Session cancelled by user")]
    Cancelled,

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

impl SaltError {
    pub fn parse(field: &str, input: &str) -> Self {
        SaltError::Parse {
            field: field.to_string(),
            input: input.to_string(),
        }
    }

    /// 使用者看得懂的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            SaltError::Parse { .. } | SaltError::InvalidArgument { .. } => {
                "Please enter valid numbers!".to_string()
            }
            SaltError::Cancelled => "Thanks for using the BBQ calculator! 🍖".to_string(),
            SaltError::ConfigError { message } => format!("Could not load settings: {}", message),
            SaltError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            SaltError::IoError(e) => format!("Console I/O failed: {}", e),
            SaltError::SerializationError(e) => format!("Could not serialize result: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SaltError::Parse { .. } => {
                "Enter plain numbers, e.g. 5 or 2.5 (integers for mg values)"
            }
            SaltError::InvalidArgument { .. } => {
                "Weights and amounts must be zero or more, and the target must be above zero"
            }
            SaltError::Cancelled => "Run the calculator again whenever you're ready",
            SaltError::ConfigError { .. } => "Check that the config file exists and is valid TOML",
            SaltError::ConfigValidationError { .. } => {
                "Fix the highlighted setting in the config file"
            }
            SaltError::IoError(_) => {
                "Check that stdin and stdout are connected to a terminal or pipe"
            }
            SaltError::SerializationError(_) => "Re-run without --json",
        }
    }

    /// Errors that end an interactive session without failing the process.
    pub fn ends_session_cleanly(&self) -> bool {
        matches!(
            self,
            SaltError::Parse { .. } | SaltError::InvalidArgument { .. } | SaltError::Cancelled
        )
    }
}

pub type Result<T> = std::result::Result<T, SaltError>;
