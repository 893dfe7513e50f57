//! Configuration types for the marketplace API client.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Credentials and endpoints of the marketplace's label API.
///
/// # Examples
///
/// ```
/// use parcel_reqwest::config::ApiConfig;
///
/// let config = ApiConfig {
///     client_key: "client".to_owned(),
///     secret_key: "secret".to_owned(),
///     test_uri: "https://sandbox.example/v2/labels".to_owned(),
///     live_uri: "https://api.example/v2/labels".to_owned(),
///     ..Default::default()
/// };
/// assert_eq!(config.endpoint(), "https://sandbox.example/v2/labels");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Sent as `shop-client-key`
    #[serde(default)]
    pub client_key: String,

    /// The HMAC key requests are signed with. Never sent.
    #[serde(default)]
    pub secret_key: String,

    /// Whether to talk to the sandbox (`test_uri`) instead of production
    #[serde(default = "default_true")]
    pub sandbox: bool,

    /// The label endpoint of the sandbox
    #[serde(default)]
    pub test_uri: String,

    /// The label endpoint of production
    #[serde(default)]
    pub live_uri: String,

    /// Upper bound for fetching a label document
    #[serde(default = "default_download_timeout", with = "humantime_serde")]
    pub download_timeout: Duration,
}

fn default_true() -> bool {
    true
}

fn default_download_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            client_key: String::new(),
            secret_key: String::new(),
            sandbox: default_true(),
            test_uri: String::new(),
            live_uri: String::new(),
            download_timeout: default_download_timeout(),
        }
    }
}

impl ApiConfig {
    /// The label endpoint selected by `sandbox`.
    pub fn endpoint(&self) -> &str {
        if self.sandbox {
            &self.test_uri
        } else {
            &self.live_uri
        }
    }
}
