//! Storage gateway configuration.
//!
//! Defaults point at the public Infura IPFS API and the ipfs.io retrieval
//! gateway. Native callers can override them from the environment (or a
//! `.env` file) with [`GatewayConfig::from_env`].
//!
//! | Variable                 | Default                 |
//! |--------------------------|-------------------------|
//! | `IPFS_API_PROTOCOL`      | `https`                 |
//! | `IPFS_API_HOST`          | `ipfs.infura.io`        |
//! | `IPFS_API_PORT`          | `5001`                  |
//! | `IPFS_PUBLIC_GATEWAY`    | `https://ipfs.io/ipfs`  |
//! | `IPFS_MAX_UPLOAD_BYTES`  | `52428800` (50 MB)      |

use crate::error::{ConfigError, ConfigResult};
use crate::types::ContentId;

/// Default IPFS API protocol.
pub const DEFAULT_API_PROTOCOL: &str = "https";

/// Default IPFS API host.
pub const DEFAULT_API_HOST: &str = "ipfs.infura.io";

/// Default IPFS API port.
pub const DEFAULT_API_PORT: u16 = 5001;

/// Public retrieval gateway used for CID links.
pub const DEFAULT_PUBLIC_GATEWAY: &str = "https://ipfs.io/ipfs";

/// Maximum file size for upload (in bytes).
///
/// 50 MB limit.
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Endpoint of the gateway add operation, relative to the API base.
const ADD_PATH: &str = "/add?pin=true";

/// Where uploads go and where CIDs are linked to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    /// `http` or `https`
    pub protocol: String,
    /// IPFS API host
    pub host: String,
    /// IPFS API port
    pub port: u16,
    /// Base URL of the public retrieval gateway
    pub public_base_url: String,
    /// Uploads larger than this are refused before any network call
    pub max_upload_bytes: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_API_PROTOCOL.to_string(),
            host: DEFAULT_API_HOST.to_string(),
            port: DEFAULT_API_PORT,
            public_base_url: DEFAULT_PUBLIC_GATEWAY.to_string(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

impl GatewayConfig {
    /// Create a validated config for the given API endpoint.
    pub fn new(protocol: &str, host: &str, port: u16) -> ConfigResult<Self> {
        let config = Self {
            protocol: protocol.to_ascii_lowercase(),
            host: host.trim().to_string(),
            port,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the public retrieval gateway
    pub fn with_public_gateway(mut self, base_url: &str) -> Self {
        self.public_base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set the upload size limit
    pub fn with_max_upload_bytes(mut self, limit: usize) -> Self {
        self.max_upload_bytes = limit;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.protocol != "http" && self.protocol != "https" {
            return Err(ConfigError::InvalidProtocol(self.protocol.clone()));
        }
        if self.host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        Ok(())
    }

    /// `<protocol>://<host>:<port>/api/v0`
    pub fn api_base(&self) -> String {
        format!("{}://{}:{}/api/v0", self.protocol, self.host, self.port)
    }

    /// Full URL of the add operation.
    pub fn add_url(&self) -> String {
        format!("{}{}", self.api_base(), ADD_PATH)
    }

    /// Public link for a CID: `<public_base_url>/<cid>`.
    pub fn retrieval_url(&self, cid: &ContentId) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), cid)
    }

    /// Build a config from a key lookup, falling back to defaults for
    /// missing keys.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(protocol) = lookup("IPFS_API_PROTOCOL") {
            config.protocol = protocol.trim().to_ascii_lowercase();
        }
        if let Some(host) = lookup("IPFS_API_HOST") {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup("IPFS_API_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(gateway) = lookup("IPFS_PUBLIC_GATEWAY") {
            config = config.with_public_gateway(gateway.trim());
        }
        if let Some(limit) = lookup("IPFS_MAX_UPLOAD_BYTES") {
            config.max_upload_bytes =
                limit
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber {
                        key: "IPFS_MAX_UPLOAD_BYTES".to_string(),
                        value: limit.clone(),
                    })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Build a config from the process environment, loading `.env` first.
    #[cfg(feature = "http-client")]
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}
