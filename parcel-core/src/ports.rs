mod carrier;
mod orders;
mod sink;

pub use carrier::CarrierApi;
pub use orders::OrderRepository;
pub use sink::ResultSink;
