use crate::{SqlStore, StoreError, types::order_row};
use parcel_core::{models::OrderRow, ports::OrderRepository};
use sqlx::Connection as _;
use tracing::{Level, event};

impl OrderRepository for SqlStore {
    type Error = StoreError;

    async fn fetch_order_rows(&self, order_number: &str) -> Result<Vec<OrderRow>, Self::Error> {
        let mut conn = self.connect().await?;

        let rows = sqlx::query(&self.config.order_query)
            .bind(order_number)
            .fetch_all(&mut conn)
            .await;

        let closed = conn.close().await;
        let rows = rows?;
        closed?;

        event!(
            Level::DEBUG,
            order_number,
            rows = rows.len(),
            "fetched order rows"
        );
        rows.iter().map(order_row).collect()
    }
}
