use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DemoError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DemoError::InvalidArgument { .. } => ErrorSeverity::High,
            DemoError::ConfigError { .. } => ErrorSeverity::High,
            DemoError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            DemoError::SerializationError(_) => ErrorSeverity::High,
            DemoError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DemoError::InvalidArgument { .. } => {
                "Pass strictly positive values for both --length and --width".to_string()
            }
            DemoError::ConfigError { .. } => {
                "Check that the configuration file exists and is valid TOML".to_string()
            }
            DemoError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' value and try again", field)
            }
            DemoError::SerializationError(_) => {
                "Report could not be serialized; try running without --json".to_string()
            }
            DemoError::IoError(_) => "Check file permissions and that the path exists".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::InvalidArgument { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
