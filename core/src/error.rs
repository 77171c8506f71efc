//! Error types for the wallet session and upload flow.
//!
//! One enum per concern:
//!
//! - [`WalletError`] - Injected provider errors (missing, rejected, ...)
//! - [`UploadError`] - File selection and gateway errors
//! - [`ConfigError`] - Gateway configuration errors
//!
//! None of these is fatal to the session: every operation that returns
//! an error leaves its state at the last valid value.

use thiserror::Error;

// =============================================================================
// Wallet Errors
// =============================================================================

/// Errors from the wallet session manager.
#[derive(Debug, Clone, Error)]
pub enum WalletError {
    /// No injected provider in the execution environment.
    #[error("No wallet provider found. Please install MetaMask to use this app.")]
    ProviderMissing,

    /// The user declined the request or the provider failed.
    #[error("Wallet request rejected: {0}")]
    Rejected(String),

    /// The provider resolved with an empty account list.
    #[error("Wallet returned no accounts")]
    NoAccounts,

    /// Registering or removing the account-change listener failed.
    #[error("Account subscription failed: {0}")]
    Subscription(String),

    /// The session was torn down while the request was pending.
    #[error("Wallet session is closed")]
    SessionClosed,
}

impl WalletError {
    /// Configuration condition (no provider installed), as opposed to a
    /// runtime failure the user can retry.
    pub fn is_environment_missing(&self) -> bool {
        matches!(self, WalletError::ProviderMissing)
    }
}

// =============================================================================
// Upload Errors
// =============================================================================

/// Errors from the upload coordinator and gateway clients.
#[derive(Debug, Clone, Error)]
pub enum UploadError {
    /// The file picker closed without a selection.
    #[error("No file selected")]
    NoFileSelected,

    /// Another upload is still in flight.
    #[error("An upload is already in progress")]
    Busy,

    /// The selected file has no content.
    #[error("Selected file is empty")]
    EmptyFile,

    /// The selected file exceeds the configured limit.
    #[error("File is too large ({size} bytes, limit is {limit} bytes)")]
    TooLarge { size: usize, limit: usize },

    /// Transport failure before a response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// The gateway answered with a non-success status.
    #[error("Gateway error ({status}): {message}")]
    Gateway { status: u16, message: String },

    /// The gateway answered but the body carried no usable CID.
    #[error("Invalid gateway response: {0}")]
    InvalidResponse(String),

    /// Reading the selected file failed.
    #[error("Failed to read file: {0}")]
    Read(String),
}

impl UploadError {
    /// User-facing notice rather than a failed upload attempt.
    pub fn is_notice(&self) -> bool {
        matches!(self, UploadError::NoFileSelected | UploadError::Busy)
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while building a [`crate::GatewayConfig`].
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Protocol other than `http` / `https`.
    #[error("Unsupported gateway protocol: {0}")]
    InvalidProtocol(String),

    /// Port is not a valid `u16`.
    #[error("Invalid gateway port: {0}")]
    InvalidPort(String),

    /// Numeric setting could not be parsed.
    #[error("Invalid value for {key}: {value}")]
    InvalidNumber { key: String, value: String },

    /// Host is empty.
    #[error("Gateway host must not be empty")]
    EmptyHost,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_missing_is_distinct() {
        assert!(WalletError::ProviderMissing.is_environment_missing());
        assert!(!WalletError::Rejected("User rejected the request.".into()).is_environment_missing());
        assert!(!WalletError::NoAccounts.is_environment_missing());
    }

    #[test]
    fn test_upload_error_format() {
        let err = UploadError::Gateway {
            status: 413,
            message: "request body too large".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("413"));
        assert!(msg.contains("request body too large"));

        let err = UploadError::TooLarge { size: 10, limit: 5 };
        assert!(err.to_string().contains("limit is 5"));
    }

    #[test]
    fn test_notices_are_not_failures() {
        assert!(UploadError::NoFileSelected.is_notice());
        assert!(UploadError::Busy.is_notice());
        assert!(!UploadError::Network("timeout".into()).is_notice());
    }
}
