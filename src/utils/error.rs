use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Persistence error: {message}")]
    PersistenceError { message: String },

    #[error("Unknown payment method: {name}")]
    UnknownPaymentMethod { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Storage,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code reported by the CLI.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SolidError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SolidError::ConfigValidationError { .. }
            | SolidError::InvalidConfigValueError { .. }
            | SolidError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SolidError::IoError(_)
            | SolidError::CsvError(_)
            | SolidError::SerializationError(_)
            | SolidError::PersistenceError { .. } => ErrorCategory::Storage,
            SolidError::UnknownPaymentMethod { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SolidError::IoError(e) => format!("Could not access a file: {}", e),
            SolidError::CsvError(e) => format!("Could not write CSV data: {}", e),
            SolidError::PersistenceError { message } => {
                format!("Transaction could not be stored: {}", message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the configuration file and command-line flags",
            ErrorCategory::Storage => "Check that the output path exists and is writable",
            ErrorCategory::Input => "Use one of: cash, credit, debit",
        }
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;
