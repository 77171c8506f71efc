//! Session state types.
//!
//! # Categories
//!
//! - **Identifiers** - [`WalletAddress`], [`ContentId`]
//! - **Component State** - [`WalletState`], [`UploadState`]
//! - **Input** - [`FileUpload`]

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::GatewayConfig;

// =============================================================================
// Identifiers
// =============================================================================

/// Account address reported by the wallet provider.
///
/// Never empty; an empty string from the provider means "disconnected"
/// and is represented by `None` at the state level.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Parse a provider-reported account. Empty input yields `None`;
    /// anything else is kept exactly as reported.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for the header: first 6 and last 4 characters.
    pub fn short(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 10 {
            return self.0.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content identifier returned by the storage gateway (an IPFS CID).
///
/// Opaque to this crate: no format validation beyond non-emptiness.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    /// Wrap a gateway-produced identifier. Blank input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Public retrieval link, `<gateway-base-url>/<cid>`.
    pub fn retrieval_url(&self, config: &GatewayConfig) -> String {
        config.retrieval_url(self)
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Component State
// =============================================================================

/// State owned by the wallet session manager.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletState {
    /// Connected account, `None` when disconnected.
    pub address: Option<WalletAddress>,
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }
}

/// State owned by the upload coordinator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    /// Most recent successful upload.
    pub latest: Option<ContentId>,
    /// Every successful upload of this page session, in completion order.
    pub history: Vec<ContentId>,
    /// True only while a gateway call is pending.
    pub in_flight: bool,
}

// =============================================================================
// Input
// =============================================================================

/// A file picked by the user, read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    /// File name as reported by the picker
    pub name: String,
    /// Raw file content
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_address_is_disconnected() {
        assert!(WalletAddress::parse("").is_none());
        assert_eq!(WalletAddress::parse("0xABC").unwrap().as_str(), "0xABC");
    }

    #[test]
    fn test_address_is_kept_as_reported() {
        assert_eq!(WalletAddress::parse(" 0xABC ").unwrap().as_str(), " 0xABC ");
        assert_eq!(WalletAddress::parse("   ").unwrap().as_str(), "   ");
    }

    #[test]
    fn test_short_address() {
        let addr = WalletAddress::parse("0x52908400098527886E0F7030069857D2E4169EE7").unwrap();
        assert_eq!(addr.short(), "0x5290...9EE7");

        let addr = WalletAddress::parse("0xABC").unwrap();
        assert_eq!(addr.short(), "0xABC");
    }

    #[test]
    fn test_content_id_is_transparent_in_json() {
        let cid = ContentId::parse("QmT78zSuBmuS4z925WZfrqQ1qHaJ56DQaTfyMUF7F8ff5o").unwrap();
        let json = serde_json::to_string(&cid).unwrap();
        assert_eq!(json, "\"QmT78zSuBmuS4z925WZfrqQ1qHaJ56DQaTfyMUF7F8ff5o\"");
    }

    #[test]
    fn test_retrieval_url() {
        let cid = ContentId::parse("Qm123").unwrap();
        assert_eq!(
            cid.retrieval_url(&GatewayConfig::default()),
            "https://ipfs.io/ipfs/Qm123"
        );
    }

    #[test]
    fn test_initial_state() {
        let wallet = WalletState::default();
        assert!(!wallet.is_connected());

        let upload = UploadState::default();
        assert!(upload.history.is_empty());
        assert!(upload.latest.is_none());
        assert!(!upload.in_flight);
    }
}
