use thiserror::Error;

#[derive(Error, Debug)]
pub enum PracticeError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Worker pool error: {message}")]
    WorkerPoolError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Low severity is a warning, so the process still exits successfully.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl PracticeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PracticeError::DivisionByZero => ErrorSeverity::Low,
            PracticeError::ConfigError { .. } | PracticeError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            PracticeError::WorkerPoolError { .. } => ErrorSeverity::Medium,
            PracticeError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PracticeError::DivisionByZero => "Use a non-zero divisor".to_string(),
            PracticeError::IoError(_) => {
                "Check that stdout is writable and the config path exists".to_string()
            }
            PracticeError::ConfigError { .. } => {
                "Check the TOML syntax of the configuration file".to_string()
            }
            PracticeError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            PracticeError::WorkerPoolError { .. } => "Run the concurrency practice again".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PracticeError::DivisionByZero => "Cannot divide by zero".to_string(),
            PracticeError::IoError(e) => format!("Could not read or write: {}", e),
            PracticeError::ConfigError { message } => format!("Bad configuration: {}", message),
            PracticeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            PracticeError::WorkerPoolError { message } => {
                format!("The worker pool stopped early: {}", message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PracticeError>;
