use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Could not locate the '{array_name}' block in {input_path}")]
    BlockNotLocated {
        array_name: String,
        input_path: String,
    },

    #[error("Normalized literal is not valid JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("TSV serialization error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML config error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    System,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::InvalidConfigValueError { .. } | EtlError::TomlError(_) => {
                ErrorCategory::Configuration
            }
            EtlError::BlockNotLocated { .. }
            | EtlError::ParseError(_)
            | EtlError::CsvError(_)
            | EtlError::ProcessingError { .. } => ErrorCategory::Data,
            EtlError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EtlError::InvalidConfigValueError { .. } | EtlError::TomlError(_) => {
                ErrorSeverity::Medium
            }
            EtlError::BlockNotLocated { .. }
            | EtlError::ParseError(_)
            | EtlError::CsvError(_)
            | EtlError::ProcessingError { .. } => ErrorSeverity::High,
            EtlError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::BlockNotLocated {
                array_name,
                input_path,
            } => format!(
                "The array '{}' was not found in '{}'",
                array_name, input_path
            ),
            EtlError::ParseError(e) => {
                format!("The extracted literal could not be parsed: {}", e)
            }
            EtlError::CsvError(e) => format!("Writing the TSV table failed: {}", e),
            EtlError::IoError(e) => format!("File operation failed: {}", e),
            EtlError::TomlError(e) => format!("The config file is not valid TOML: {}", e),
            EtlError::ProcessingError { message } => message.clone(),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the CLI flags / TOML config for typos and re-run".to_string()
            }
            ErrorCategory::Data => {
                "Verify the input file contains the expected 'const <NAME> = [ ... ];' block"
                    .to_string()
            }
            ErrorCategory::System => {
                "Check that the input file exists and the output path is writable".to_string()
            }
        }
    }
}
