use crate::domain::model::Domain;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContextError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    PatternError(#[from] globset::Error),

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

    #[error("{domain} source not found: {}", .path.display())]
    SourceRootMissing { domain: Domain, path: PathBuf },

    #[error("Cannot create output directory {}: {source}", .path.display())]
    OutputDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Source,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 單一項目或單一領域失敗，掃描繼續
    Low,
    /// 設定錯誤，無法開始掃描
    High,
    /// 輸出失敗
    Critical,
}

impl ContextError {
    pub fn config(message: impl Into<String>) -> Self {
        ContextError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ContextError::IoError(_) => ErrorCategory::Io,
            ContextError::PatternError(_)
            | ContextError::ConfigError { .. }
            | ContextError::InvalidConfigValueError { .. }
            | ContextError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ContextError::SourceRootMissing { .. } => ErrorCategory::Source,
            ContextError::OutputDirError { .. } | ContextError::WriteError { .. } => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io | ErrorCategory::Source => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Fatal errors abort the run; everything else degrades a single item or domain.
    pub fn is_fatal(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Process exit code for an error that reached `main`.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 2,
            ErrorSeverity::Critical => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ContextError::IoError(_) => {
                "Check file permissions inside the project source tree".to_string()
            }
            ContextError::PatternError(_) => {
                "Fix the glob in [api].pattern, e.g. \"*/index.{ts,js}\"".to_string()
            }
            ContextError::ConfigError { .. } => {
                "Check that ai-context.toml is valid TOML".to_string()
            }
            ContextError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' in ai-context.toml", field)
            }
            ContextError::MissingConfigError { field } => {
                format!("Add '{}' to ai-context.toml", field)
            }
            ContextError::SourceRootMissing { .. } => {
                "Pass --root or adjust source_dir if the project layout differs".to_string()
            }
            ContextError::OutputDirError { .. } | ContextError::WriteError { .. } => {
                "Make sure the output directory is writable or pass --output-dir".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read part of the project: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Source => format!("Nothing to scan: {}", self),
            ErrorCategory::Output => format!("Failed to write context files: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContextError>;
