//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Notice Types** - user-facing status messages

use dstorage::{UploadError, WalletError};

// =============================================================================
// Notice Types
// =============================================================================

/// Notice severity level.
#[derive(Clone, Debug, PartialEq)]
pub enum NoticeLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl NoticeLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice notice-info",
            NoticeLevel::Success => "notice notice-success",
            NoticeLevel::Warning => "notice notice-warning",
            NoticeLevel::Error => "notice notice-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "ℹ️",
            NoticeLevel::Success => "✅",
            NoticeLevel::Warning => "⚠️",
            NoticeLevel::Error => "❌",
        }
    }
}

/// A message shown under the upload control.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }

    /// Shown while a picked file is read into memory.
    pub fn reading(file_name: &str) -> Self {
        Notice::info(format!("📖 Reading {}...", file_name))
    }

    /// Notice for a failed or refused upload.
    pub fn from_upload_error(err: &UploadError) -> Self {
        match err {
            UploadError::NoFileSelected => Notice::info("No file selected"),
            UploadError::Busy => Notice::warning("An upload is already in progress, please wait"),
            other => Notice::error(format!("Error uploading file to IPFS: {}", other)),
        }
    }

    /// Notice for a wallet error the user should see.
    ///
    /// Rejections stay in the console; only a missing provider is surfaced.
    pub fn from_wallet_error(err: &WalletError) -> Option<Self> {
        err.is_environment_missing().then(|| Notice::error(err.to_string()))
    }
}
