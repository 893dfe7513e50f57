//! Reduction of an order's line items to one shipment.
//!
//! Each measurement is summed over all line items, where a line item without
//! a value contributes [`DEFAULT_MEASURE`]. The sums are then scaled to the
//! API's units (kilograms to grams, decimeters to centimeters) and rounded
//! half away from zero. All arithmetic is exact decimal arithmetic.

use crate::{
    ValidationError,
    models::{AggregatedShipment, OrderLineItem, PackageMeasurements},
};
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive as _};

/// What a line item without a measurement contributes to the sum.
pub const DEFAULT_MEASURE: Decimal = Decimal::TEN;

const GRAMS_PER_KILOGRAM: u32 = 1000;
const CENTIMETERS_PER_DECIMETER: u32 = 10;

/// Reduce the line items of one order to a single shipment.
///
/// Unit identifiers are collected in line-item order, trimmed, with blanks
/// dropped. Fails if there are no line items or none of them carries a
/// unit identifier.
pub fn aggregate(items: &[OrderLineItem]) -> Result<AggregatedShipment, ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::NoLineItems);
    }

    let unit_ids = items
        .iter()
        .filter_map(|item| item.unit_id.as_deref())
        .map(str::trim)
        .filter(|unit_id| !unit_id.is_empty())
        .map(str::to_owned)
        .collect::<Vec<_>>();

    let measurements = PackageMeasurements {
        weight_gram: scaled_total(items, |item| item.weight, GRAMS_PER_KILOGRAM, "weight_gram")?,
        width_cm: scaled_total(items, |item| item.width, CENTIMETERS_PER_DECIMETER, "width_cm")?,
        height_cm: scaled_total(items, |item| item.height, CENTIMETERS_PER_DECIMETER, "height_cm")?,
        length_cm: scaled_total(items, |item| item.length, CENTIMETERS_PER_DECIMETER, "length_cm")?,
    };

    AggregatedShipment::new(unit_ids, measurements)
}

fn scaled_total(
    items: &[OrderLineItem],
    measure: impl Fn(&OrderLineItem) -> Option<Decimal>,
    factor: u32,
    field: &'static str,
) -> Result<i64, ValidationError> {
    let out_of_range = || ValidationError::OutOfRange { field };

    let total = items
        .iter()
        .map(|item| measure(item).unwrap_or(DEFAULT_MEASURE))
        .try_fold(Decimal::ZERO, |sum, value| sum.checked_add(value))
        .ok_or_else(out_of_range)?;

    total
        .checked_mul(Decimal::from(factor))
        .ok_or_else(out_of_range)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(out_of_range)
}
