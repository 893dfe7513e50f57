use crate::CARRIER;
use serde::{Deserialize, Serialize};

/// A tracking number recovered from a label, with the carrier it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingResult {
    /// The carrier's 12-digit tracking number
    pub tracking_number: String,
    /// The carrier that issued it
    pub carrier: String,
}

impl TrackingResult {
    /// A tracking number issued by the pipeline's carrier.
    pub fn new(tracking_number: impl Into<String>) -> Self {
        Self {
            tracking_number: tracking_number.into(),
            carrier: CARRIER.to_owned(),
        }
    }
}
