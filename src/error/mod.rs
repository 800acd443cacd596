mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::{format_error_chain, format_error_with_color};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BinvokeError {
    #[error("Package '{package}' has no downloaded binary for {platform}/{arch}")]
    BinaryNotFound {
        package: String,
        platform: String,
        arch: String,
        searched_path: String,
        candidates: Vec<String>,
    },

    #[error("Unsupported platform: {platform}/{arch}")]
    UnsupportedPlatform { platform: String, arch: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration file error: {0}")]
    ConfigFile(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("System error: {0}")]
    SystemError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BinvokeError>;
