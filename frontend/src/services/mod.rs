//! Browser bindings for the external collaborators.
//!
//! # Services
//!
//! - [`ethereum`] - Injected EIP-1193 wallet provider (`window.ethereum`)
//! - [`ipfs`] - IPFS HTTP API client over `fetch`

pub mod ethereum;
pub mod ipfs;

pub use ethereum::*;
pub use ipfs::*;
