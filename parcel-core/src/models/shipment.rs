use crate::ValidationError;
use serde::{Deserialize, Serialize};

/// Package measurements as the carrier API expects them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMeasurements {
    /// Total weight in grams
    pub weight_gram: i64,
    /// Total width in centimeters
    pub width_cm: i64,
    /// Total height in centimeters
    pub height_cm: i64,
    /// Total length in centimeters
    pub length_cm: i64,
}

/// The shipment an order reduces to: every order unit it contains and the
/// summed package measurements.
///
/// Built once per run and never modified afterwards. The list of unit
/// identifiers is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregatedShipment {
    unit_ids: Vec<String>,
    measurements: PackageMeasurements,
}

impl AggregatedShipment {
    /// Create a shipment, rejecting an empty list of unit identifiers.
    pub fn new(
        unit_ids: Vec<String>,
        measurements: PackageMeasurements,
    ) -> Result<Self, ValidationError> {
        if unit_ids.is_empty() {
            return Err(ValidationError::NoUnitIds);
        }
        Ok(Self {
            unit_ids,
            measurements,
        })
    }

    /// All unit identifiers, in order of appearance.
    pub fn unit_ids(&self) -> &[String] {
        &self.unit_ids
    }

    /// The unit identifier used to name the label file.
    pub fn primary_unit_id(&self) -> &str {
        &self.unit_ids[0]
    }

    /// The summed and scaled package measurements.
    pub fn measurements(&self) -> &PackageMeasurements {
        &self.measurements
    }
}
