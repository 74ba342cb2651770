//! Queue Backend Client
//!
//! A reqwest client for the email-queue backend: batch upload plus the two
//! read-only status endpoints.

use crate::backend::Backend;
use crate::backend::error::BackendError;
use crate::backend::types::{QueueSnapshot, StatsSnapshot, UploadResult};
use crate::consts::cli_consts::{http, UPLOAD_FIELD_NAME};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("mailq-dash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, BackendError> {
        if !response.status().is_success() {
            return Err(BackendError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, BackendError> {
        let url = self.build_url(endpoint);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let response = Self::handle_response_status(response).await?;
        // Decode from bytes so a malformed body surfaces as `Decode`, not `Reqwest`.
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait::async_trait]
impl Backend for BackendClient {
    fn base_url(&self) -> String {
        self.base_url.clone()
    }

    async fn upload_batch(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<UploadResult, BackendError> {
        let url = self.build_url("upload");
        log::debug!("POST {} ({} bytes from {})", url, contents.len(), file_name);

        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str("text/csv")?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        let response = self.client.post(&url).multipart(form).send().await?;
        let response = Self::handle_response_status(response).await?;
        Ok(UploadResult(response.text().await?))
    }

    async fn get_queue(&self) -> Result<QueueSnapshot, BackendError> {
        self.get_json("queue").await
    }

    async fn get_stats(&self) -> Result<StatsSnapshot, BackendError> {
        self.get_json("stats").await
    }
}
