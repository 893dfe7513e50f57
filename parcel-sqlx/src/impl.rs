//! Port implementations for the SQL backend.

use crate::{SqlStore, StoreError};
use sqlx::{AnyConnection, Connection as _};

mod orders;
mod sink;

impl SqlStore {
    async fn connect(&self) -> Result<AnyConnection, sqlx::Error> {
        AnyConnection::connect(&self.config.url).await
    }

    /// Run one write statement on a fresh connection, returning the number of
    /// affected rows.
    async fn execute(&self, sql: &str, params: &[&str]) -> Result<u64, StoreError> {
        let mut conn = self.connect().await?;

        let mut query = sqlx::query(sql);
        for param in params {
            query = query.bind(*param);
        }
        let result = query.execute(&mut conn).await;

        // close before reporting, so the connection is released either way
        let closed = conn.close().await;
        let affected = result?.rows_affected();
        closed?;

        Ok(affected)
    }
}
