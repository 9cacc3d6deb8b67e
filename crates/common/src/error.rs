//! Error types shared across deskwall crates.

use std::path::PathBuf;

/// Top-level error type for deskwall operations.
#[derive(Debug, thiserror::Error)]
pub enum WallError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Layout error: {message}")]
    Layout { message: String },

    #[error("No active monitors in the current layout")]
    EmptyLayout,

    #[error("Monitor {index} reports an unrecognized orientation")]
    BadOrientation { index: usize },

    #[error("Monitor {index} has no usable source image for its orientation")]
    NoSource { index: usize },

    #[error("Failed to load image {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    #[error("Style engine failed applying {style} to monitor {index}: {message}")]
    StyleFailed {
        style: String,
        index: usize,
        message: String,
    },

    #[error("Failed to rotate image for monitor {index}: {message}")]
    RotateFailed { index: usize, message: String },

    #[error("Failed to write composited canvas to {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    #[error("Platform error: {message}")]
    Platform { message: String },

    #[error("Failed to install wallpaper: {message}")]
    InstallFailed { message: String },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using WallError.
pub type WallResult<T> = Result<T, WallError>;

impl WallError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout {
            message: msg.into(),
        }
    }

    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform {
            message: msg.into(),
        }
    }

    pub fn install_failed(msg: impl Into<String>) -> Self {
        Self::InstallFailed {
            message: msg.into(),
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }
}
