#![warn(missing_docs)]
//! An SQL backend for `parcel-core`.
//!
//! [`SqlStore`] implements the order-source and result-sink ports on top of
//! sqlx's `Any` driver, so the same binary can talk to SQLite, PostgreSQL or
//! MySQL depending on the configured URL.

use thiserror::Error;

pub mod config;
mod r#impl;
mod types;

use config::DatabaseConfig;

/// Failures of the SQL backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The driver reported an error
    #[error(transparent)]
    Sql(#[from] sqlx::Error),

    /// A required setting is blank
    #[error("database setting `{0}` is not configured")]
    MissingConfig(&'static str),

    /// The order query returned a column of a type that cannot be decoded
    #[error("column `{column}` has unsupported type {type_name}")]
    UnsupportedColumn {
        /// The column's name as returned by the database
        column: String,
        /// The database's name for the column type
        type_name: String,
    },
}

/// The order database.
///
/// No connection is held between operations: every query opens its own
/// connection and closes it once the query is done, so nothing stays locked
/// while the pipeline waits on the network.
///
/// # Example
///
/// ```no_run
/// # use parcel_sqlx::{SqlStore, config::DatabaseConfig};
/// # fn example(config: DatabaseConfig) -> Result<(), parcel_sqlx::StoreError> {
/// let store = SqlStore::new(config)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct SqlStore {
    config: DatabaseConfig,
}

impl SqlStore {
    /// Create a store for the configured database.
    ///
    /// This does not connect yet. It fails if any connection setting or
    /// statement is blank.
    pub fn new(config: DatabaseConfig) -> Result<Self, StoreError> {
        if let Some(setting) = config.missing_setting() {
            return Err(StoreError::MissingConfig(setting));
        }

        sqlx::any::install_default_drivers();
        Ok(Self { config })
    }

    /// The configuration this store was created with.
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }
}
