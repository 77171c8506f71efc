//! IPFS HTTP API wire format.
//!
//! `POST /api/v0/add` takes a multipart body with one `file` part and
//! answers with one JSON object per added entry, newline-delimited:
//!
//! ```json
//! {"Name":"hello.txt","Hash":"QmWATWQ7fVPP2EFGu71UkfnqhYXDYH566qy47CnJDgvs8u","Size":"20"}
//! ```
//!
//! Errors come back as `{"Message": "...", "Code": 0, "Type": "error"}`.

use serde::Deserialize;

use crate::error::{UploadError, UploadResult};
use crate::types::ContentId;

/// Multipart field name expected by the add endpoint.
pub const ADD_FORM_FIELD: &str = "file";

/// One entry of an add response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hash: String,
    /// Cumulative size, sent as a decimal string
    #[serde(default)]
    pub size: Option<String>,
}

/// Error body of the IPFS HTTP API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ApiErrorBody {
    message: String,
}

/// Extract the CID of the uploaded file from an add response body.
///
/// The wrapped file is the last entry, so the last non-empty line wins.
pub fn parse_add_response(body: &str) -> UploadResult<ContentId> {
    let line = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .ok_or_else(|| UploadError::InvalidResponse("empty response body".to_string()))?;

    let entry: AddResponse = serde_json::from_str(line)
        .map_err(|e| UploadError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    ContentId::parse(&entry.hash)
        .ok_or_else(|| UploadError::InvalidResponse("response has no Hash".to_string()))
}

/// Map a non-success HTTP answer to an [`UploadError::Gateway`].
pub fn gateway_error(status: u16, body: &str) -> UploadError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|err| err.message)
        .unwrap_or_else(|_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "Unknown error".to_string()
            } else {
                trimmed.to_string()
            }
        });
    UploadError::Gateway { status, message }
}
