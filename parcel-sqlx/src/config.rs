//! Configuration types for the order database.
//!
//! The schema of the order database belongs to the ERP system, not to this
//! crate, so every statement is configured rather than compiled in.

use serde::{Deserialize, Serialize};

/// Connection URL and statements for the order database.
///
/// Statements use the placeholder syntax of the target database (`?` for
/// SQLite and MySQL, `$1` for PostgreSQL) and receive their parameters in
/// the order documented per field. Numeric columns the `Any` driver cannot
/// decode (e.g. `NUMERIC`/`DECIMAL`) must be cast in `order_query`, to a
/// floating-point or text type.
///
/// # Examples
///
/// ```
/// use parcel_sqlx::config::DatabaseConfig;
///
/// let config = DatabaseConfig {
///     url: "sqlite://orders.db".to_owned(),
///     order_query: "select code1, cast(bgewicht as real) as weight_gram from items where belegnr = ?".to_owned(),
///     insert_tracking_query: "insert into tracking (fsrowid, value) values (?, ?)".to_owned(),
///     insert_carrier_query: "insert into carrier (fsrowid, value) values (?, 'GLS')".to_owned(),
///     update_memo_query: "update orders set memo = ? where belegnr = ?".to_owned(),
/// };
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// The sqlx connection URL, e.g. `sqlite://orders.db` or `postgres://...`
    pub url: String,

    /// Selects the rows of one order. Parameter: the order number
    pub order_query: String,

    /// Stores a tracking number. Parameters: row id, tracking number
    pub insert_tracking_query: String,

    /// Stores the carrier marker. Parameter: row id
    pub insert_carrier_query: String,

    /// Replaces an order's memo. Parameters: memo text, order number
    pub update_memo_query: String,
}

impl DatabaseConfig {
    /// The name of the first setting that is blank, if any.
    pub fn missing_setting(&self) -> Option<&'static str> {
        [
            ("url", &self.url),
            ("order_query", &self.order_query),
            ("insert_tracking_query", &self.insert_tracking_query),
            ("insert_carrier_query", &self.insert_carrier_query),
            ("update_memo_query", &self.update_memo_query),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}
