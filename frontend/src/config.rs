//! Application configuration.
//!
//! Static gateway settings for the browser build. The native client reads
//! the same settings from the environment instead.

use dstorage::GatewayConfig;

/// IPFS API protocol.
pub const IPFS_API_PROTOCOL: &str = "https";

/// IPFS API host.
pub const IPFS_API_HOST: &str = "ipfs.infura.io";

/// IPFS API port.
pub const IPFS_API_PORT: u16 = 5001;

/// Public gateway used for CID links.
pub const IPFS_PUBLIC_GATEWAY: &str = "https://ipfs.io/ipfs";

/// Application name, shown in the page title.
pub const APP_NAME: &str = "Decentralized Storage";

/// Maximum file size for upload (in bytes).
///
/// 50 MB limit.
pub const MAX_FILE_SIZE: usize = 50 * 1024 * 1024;

/// Gateway configuration built from the constants above.
pub fn gateway_config() -> GatewayConfig {
    GatewayConfig {
        protocol: IPFS_API_PROTOCOL.to_string(),
        host: IPFS_API_HOST.to_string(),
        port: IPFS_API_PORT,
        public_base_url: IPFS_PUBLIC_GATEWAY.to_string(),
        max_upload_bytes: MAX_FILE_SIZE,
    }
}
