mod label;
mod line_item;
mod log;
mod request;
mod row;
mod shipment;
mod tracking;

pub use label::FetchedLabel;
pub use line_item::OrderLineItem;
pub(crate) use line_item::{resolve_order_number, resolve_row_id};
pub use log::ExecutionLog;
pub use request::{ApiResponse, LabelPayload, SignedRequest};
pub use row::{FieldValue, OrderRow};
pub use shipment::{AggregatedShipment, PackageMeasurements};
pub use tracking::TrackingResult;
