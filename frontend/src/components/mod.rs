//! UI Components for the Decentralized Storage application.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with wallet connection
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - File picker, upload indicator and latest CID
//! - [`UploadHistory`] - Every CID uploaded this session

mod header;
mod hero;
mod upload;
mod history;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use history::*;
pub use footer::*;
