use crate::{SqlStore, StoreError};
use parcel_core::ports::ResultSink;
use tracing::{Level, event};

impl ResultSink for SqlStore {
    type Error = StoreError;

    async fn store_tracking_number(
        &self,
        row_id: &str,
        tracking_number: &str,
    ) -> Result<(), Self::Error> {
        let affected = self
            .execute(
                &self.config.insert_tracking_query,
                &[row_id, tracking_number],
            )
            .await?;
        event!(Level::DEBUG, row_id, affected, "stored tracking number");
        Ok(())
    }

    async fn store_carrier_marker(&self, row_id: &str) -> Result<(), Self::Error> {
        let affected = self
            .execute(&self.config.insert_carrier_query, &[row_id])
            .await?;
        event!(Level::DEBUG, row_id, affected, "stored carrier marker");
        Ok(())
    }

    async fn store_memo(&self, order_number: &str, memo: &str) -> Result<(), Self::Error> {
        let affected = self
            .execute(&self.config.update_memo_query, &[memo, order_number])
            .await?;
        if affected == 0 {
            event!(
                Level::WARN,
                order_number,
                "memo update matched no order"
            );
        }
        Ok(())
    }
}
