use std::future::Future;

/// Write access to the order record, for the results of a run.
///
/// Each call is an independent write; the pipeline does not require them to
/// share a transaction.
pub trait ResultSink {
    /// The error type for underlying database failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// Associate a tracking number with an order row.
    fn store_tracking_number(
        &self,
        row_id: &str,
        tracking_number: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Mark an order row as shipped with the pipeline's carrier.
    fn store_carrier_marker(&self, row_id: &str)
    -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Replace the memo of an order with the run's execution log.
    fn store_memo(
        &self,
        order_number: &str,
        memo: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
