#![warn(missing_docs)]
//! An HTTP client for the carrier marketplace's label API.
//!
//! [`ReqwestCarrier`] implements the carrier port of `parcel-core`: it signs
//! and sends label-creation requests, and downloads the resulting label
//! documents.

use parcel_core::{
    ApiError, DownloadError,
    models::{ApiResponse, LabelPayload, SignedRequest},
    ports::CarrierApi,
};
use reqwest::{Client, header};
use thiserror::Error;
use tracing::{Level, event};

pub mod config;

use config::ApiConfig;

/// The header carrying the client key
pub const CLIENT_KEY_HEADER: &str = "shop-client-key";
/// The header carrying the request signature
pub const SIGNATURE_HEADER: &str = "shop-signature";
/// The header carrying the signed unix timestamp
pub const TIMESTAMP_HEADER: &str = "shop-timestamp";

/// The client could not be set up.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required setting is blank
    #[error("API setting `{0}` is not configured")]
    MissingConfig(&'static str),

    /// The underlying HTTP client could not be built
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// The marketplace API over HTTP.
#[derive(Clone, Debug)]
pub struct ReqwestCarrier {
    config: ApiConfig,
    client: Client,
}

impl ReqwestCarrier {
    /// Create a client for the configured endpoint.
    ///
    /// Fails if the client key, the secret key or the selected endpoint is
    /// blank.
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let missing = [
            ("client_key", config.client_key.as_str()),
            ("secret_key", config.secret_key.as_str()),
            (
                if config.sandbox { "test_uri" } else { "live_uri" },
                config.endpoint(),
            ),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty());
        if let Some((setting, _)) = missing {
            return Err(ClientError::MissingConfig(setting));
        }

        let client = Client::builder().build()?;
        Ok(Self { config, client })
    }

    /// The configuration this client was created with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl CarrierApi for ReqwestCarrier {
    async fn create_label(&self, payload: &LabelPayload) -> Result<ApiResponse, ApiError> {
        let body = payload.to_body().map_err(|err| ApiError {
            status: None,
            message: format!("failed to serialize the request: {err}"),
            body: String::new(),
        })?;

        // The body is signed as text and sent as exactly that text.
        let request = SignedRequest::now(
            "POST",
            self.config.endpoint(),
            body,
            &self.config.secret_key,
        )
        .map_err(|err| ApiError {
            status: None,
            message: format!("failed to sign the request: {err}"),
            body: String::new(),
        })?;
        event!(
            Level::DEBUG,
            uri = request.uri.as_str(),
            timestamp = request.timestamp.as_str(),
            "sending label request"
        );

        let response = self
            .client
            .post(&request.uri)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
            .header(CLIENT_KEY_HEADER, &self.config.client_key)
            .header(SIGNATURE_HEADER, &request.signature)
            .header(TIMESTAMP_HEADER, &request.timestamp)
            .body(request.body)
            .send()
            .await
            .map_err(|err| ApiError {
                status: None,
                message: err.to_string(),
                body: String::new(),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|err| ApiError {
            status: Some(status.as_u16()),
            message: err.to_string(),
            body: String::new(),
        })?;

        if !status.is_success() {
            return Err(ApiError {
                status: Some(status.as_u16()),
                message: format!("HTTP status {status}"),
                body: text,
            });
        }

        match serde_json::from_str(&text) {
            Ok(json) => Ok(ApiResponse { body: text, json }),
            Err(err) => Err(ApiError {
                status: Some(status.as_u16()),
                message: format!("response is not valid JSON: {err}"),
                body: text,
            }),
        }
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        let download_error = |err: reqwest::Error| DownloadError {
            status: err.status().map(|status| status.as_u16()),
            message: err.to_string(),
        };

        let response = self
            .client
            .get(url)
            .timeout(self.config.download_timeout)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(download_error)?;

        let bytes = response.bytes().await.map_err(download_error)?;
        event!(Level::DEBUG, url, size = bytes.len(), "downloaded label");
        Ok(bytes.to_vec())
    }
}
