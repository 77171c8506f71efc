//! # dstorage - wallet session and IPFS upload core
//!
//! Platform-independent logic behind the Decentralized Storage app: connect
//! an injected Ethereum wallet, upload files to an IPFS gateway, and keep
//! the resulting content identifiers.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐  request_accounts   ┌──────────────────┐
//! │  WalletSession   │────────────────────▶│  WalletProvider  │
//! │  (WalletState)   │◀────────────────────│ (window.ethereum)│
//! └──────────────────┘   accountsChanged   └──────────────────┘
//!
//! ┌──────────────────┐        add          ┌──────────────────┐
//! │ UploadCoordinator│────────────────────▶│  StorageGateway  │
//! │  (UploadState)   │◀────────────────────│  (IPFS HTTP API) │
//! └──────────────────┘        CID          └──────────────────┘
//! ```
//!
//! Both components write their state through a [`StateCell`], so the
//! browser frontend can back them with reactive signals while tests use
//! [`LocalCell`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dstorage::{FileUpload, GatewayConfig, HttpGateway, LocalCell, UploadCoordinator, UploadState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = GatewayConfig::from_env().unwrap();
//!     let state = LocalCell::new(UploadState::default());
//!     let uploads = UploadCoordinator::new(HttpGateway::new(config.clone()), state, config.max_upload_bytes);
//!
//!     let file = FileUpload::new("hello.txt", b"hello".to_vec());
//!     let cid = uploads.select_and_upload(Some(file)).await.unwrap();
//!     println!("{}", config.retrieval_url(&cid));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per concern
//! - [`types`] - Identifiers and component state
//! - [`state`] - State cell abstraction
//! - [`config`] - Gateway configuration
//! - [`wallet`] - Wallet session manager
//! - [`upload`] - Upload coordinator
//! - [`gateway`] - IPFS add wire format
//! - `http` - reqwest gateway client (feature `http-client`)

// Core modules
pub mod error;
pub mod types;
pub mod state;
pub mod config;

// Session components
pub mod wallet;
pub mod upload;

// Gateway
pub mod gateway;
#[cfg(feature = "http-client")]
pub mod http;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{
    ConfigError, ConfigResult,
    UploadError, UploadResult,
    WalletError, WalletResult,
};

pub use types::{
    ContentId,
    FileUpload,
    UploadState,
    WalletAddress,
    WalletState,
};

pub use state::{LocalCell, StateCell};

pub use config::{GatewayConfig, MAX_UPLOAD_BYTES};

pub use wallet::{AccountsHandler, Subscription, WalletProvider, WalletSession};

pub use upload::{check_file_size, StorageGateway, UploadCoordinator};

pub use gateway::{gateway_error, parse_add_response, AddResponse, ADD_FORM_FIELD};

#[cfg(feature = "http-client")]
pub use http::HttpGateway;
