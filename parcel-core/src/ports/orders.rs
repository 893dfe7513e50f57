use crate::models::OrderRow;
use std::future::Future;

/// Read access to the order database.
pub trait OrderRepository {
    /// The error type for underlying database failures
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch every shipment-relevant row of an order.
    ///
    /// An unknown order is not an error: it yields an empty vector.
    fn fetch_order_rows(
        &self,
        order_number: &str,
    ) -> impl Future<Output = Result<Vec<OrderRow>, Self::Error>> + Send;
}
