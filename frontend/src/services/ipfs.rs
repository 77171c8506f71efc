//! IPFS HTTP API client for the browser (gloo-net / fetch).

use async_trait::async_trait;
use dstorage::{
    check_file_size, gateway_error, parse_add_response, ContentId, FileUpload, GatewayConfig, StorageGateway,
    UploadError, UploadResult, ADD_FORM_FIELD,
};
use gloo_net::http::Request;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, FormData};

/// Uploads to the configured IPFS API with a multipart `fetch`.
#[derive(Clone)]
pub struct BrowserGateway {
    config: GatewayConfig,
}

impl BrowserGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl StorageGateway for BrowserGateway {
    async fn add(&self, file: FileUpload) -> UploadResult<ContentId> {
        let form_data = FormData::new()
            .map_err(|e| UploadError::Network(format!("Failed to create FormData: {:?}", e)))?;

        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(file.bytes.as_slice()));
        let blob = Blob::new_with_u8_array_sequence(&parts)
            .map_err(|e| UploadError::Read(format!("Failed to create Blob: {:?}", e)))?;

        form_data
            .append_with_blob_and_filename(ADD_FORM_FIELD, &blob, &file.name)
            .map_err(|e| UploadError::Network(format!("Failed to append file: {:?}", e)))?;

        let request = Request::post(&self.config.add_url())
            .body(form_data)
            .map_err(|e| UploadError::Network(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| UploadError::Network(format!("HTTP request failed: {}", e)))?;

        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Network(format!("Failed to read response: {}", e)))?;

        if !response.ok() {
            return Err(gateway_error(response.status(), &body));
        }

        parse_add_response(&body)
    }
}

/// Read a picked file into memory.
///
/// The reported size is checked against `max_bytes` first, so an oversized
/// file is refused without buffering it.
pub async fn read_file(file: File, max_bytes: usize) -> UploadResult<FileUpload> {
    check_file_size(file.size() as usize, max_bytes)?;

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| UploadError::Read(format!("{:?}", e)))?;

    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(FileUpload::new(file.name(), bytes))
}
