//! Settings of a label run: API credentials, label directory, database
//! statements and the log file.

use crate::Cli;
use parcel_reqwest::config::ApiConfig;
use parcel_sqlx::config::DatabaseConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Marketplace API credentials and endpoints
    #[serde(default)]
    pub api: ApiConfig,

    /// Where label documents are stored
    #[serde(default)]
    pub labels: LabelConfig,

    /// Order database connection and statements
    #[serde(default)]
    pub database: DatabaseConfig,

    /// The append-only log file
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

/// Storage of label documents.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LabelConfig {
    /// The directory labels are written to; created if missing
    #[serde(default = "default_label_path")]
    pub path: PathBuf,
}

fn default_label_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("log.log")
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            path: default_label_path(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            labels: LabelConfig::default(),
            database: DatabaseConfig::default(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Merge the built-in defaults, the file named by `--config` and `APP_*`
    /// environment variables, later sources winning. `APP_<SECTION>__<KEY>`
    /// sets `<section>.<key>`.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Keep the secret out of the config file
    /// export APP_API__SECRET_KEY="..."
    ///
    /// # Switch to the production endpoint
    /// export APP_API__SANDBOX=false
    ///
    /// # Point at another database
    /// export APP_DATABASE__URL="postgres://erp@db/orders"
    /// ```
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        // Built-in defaults: sandbox on, labels in the working directory, `log.log`
        let mut layers =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        // `--config`/`APP_CONFIG` must name an existing TOML or JSON file
        if let Some(path) = &cli.config {
            anyhow::ensure!(path.exists(), "Config file {} does not exist", path.display());
            layers = layers.add_source(config::File::from(path.as_path()));
        }

        // APP_DATABASE__ORDER_QUERY sets database.order_query, and so on
        layers = layers.add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Ok(layers.build()?.try_deserialize()?)
    }
}
