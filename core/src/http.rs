//! Native IPFS gateway client (reqwest).

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::config::GatewayConfig;
use crate::error::{UploadError, UploadResult};
use crate::gateway::{gateway_error, parse_add_response, ADD_FORM_FIELD};
use crate::types::{ContentId, FileUpload};
use crate::upload::StorageGateway;

/// Uploads through the IPFS HTTP API over reqwest.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl StorageGateway for HttpGateway {
    async fn add(&self, file: FileUpload) -> UploadResult<ContentId> {
        let part = Part::bytes(file.bytes).file_name(file.name);
        let form = Form::new().part(ADD_FORM_FIELD, part);

        let response = self
            .client
            .post(self.config.add_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Network(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Network(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(gateway_error(status.as_u16(), &body));
        }

        parse_add_response(&body)
    }
}
