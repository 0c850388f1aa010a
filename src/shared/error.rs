use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and monitors to distinguish a clean refresh
/// from one that could only show partially stale data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every requested group was refreshed
    Success = 0,
    /// At least one group failed to refresh; cached or missing data was shown
    DegradedData = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, I/O error, admin API rejection, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::DegradedData => write!(f, "Degraded Data (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the dashboard data layer.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Fetch failures are never surfaced through these to the rendering layer;
/// they end up as per-group error strings in the snapshot instead.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("API rejected request to {endpoint}: {message}")]
    ApiRejected { endpoint: String, message: String },

    #[error("API returned status {status} for {endpoint}\n\n💡 Hint: Check that the API base URL points at the admin API")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("Invalid configuration in {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    InvalidConfig {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for value objects and request payloads
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Push channel error for {url}: {details}")]
    PushChannel { url: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl SyncError {
    pub fn validation(message: impl Into<String>) -> Self {
        SyncError::Validation {
            message: message.into(),
        }
    }
}
