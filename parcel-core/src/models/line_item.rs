use super::{FieldValue, OrderRow};
use crate::ValidationError;
use rust_decimal::Decimal;

const WEIGHT_COLUMNS: &[&str] = &["weight_gram", "bgewicht"];
const WIDTH_COLUMNS: &[&str] = &["width_cm", "bbreite"];
const HEIGHT_COLUMNS: &[&str] = &["height_cm", "bhoehe"];
const LENGTH_COLUMNS: &[&str] = &["length_cm", "btiefe"];
const UNIT_ID_COLUMN: &str = "code1";
const ORDER_NUMBER_COLUMN: &str = "belegnr";
const ROW_ID_COLUMN: &str = "fsrowid";

/// One shipment-relevant line of an order.
///
/// Measurements are in the units the order database stores them in
/// (kilograms and decimeters); `None` means the column was NULL or missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderLineItem {
    /// Weight in kilograms
    pub weight: Option<Decimal>,
    /// Width in decimeters
    pub width: Option<Decimal>,
    /// Height in decimeters
    pub height: Option<Decimal>,
    /// Length in decimeters
    pub length: Option<Decimal>,
    /// The marketplace's order-unit identifier, trimmed
    pub unit_id: Option<String>,
    /// The internal row key used for write-back, trimmed
    pub row_id: Option<String>,
    /// The business order number, trimmed
    pub order_number: Option<String>,
}

impl TryFrom<&OrderRow> for OrderLineItem {
    type Error = ValidationError;

    fn try_from(row: &OrderRow) -> Result<Self, Self::Error> {
        let measure = |columns: &[&str], field| {
            row.first_present(columns)
                .map_or(Ok(None), |value| value.to_decimal(field))
        };
        let text = |column| row.get(column).and_then(FieldValue::to_text);

        Ok(Self {
            weight: measure(WEIGHT_COLUMNS, "weight_gram")?,
            width: measure(WIDTH_COLUMNS, "width_cm")?,
            height: measure(HEIGHT_COLUMNS, "height_cm")?,
            length: measure(LENGTH_COLUMNS, "length_cm")?,
            unit_id: text(UNIT_ID_COLUMN),
            row_id: text(ROW_ID_COLUMN),
            order_number: text(ORDER_NUMBER_COLUMN),
        })
    }
}

/// The business order number to key the memo on: the first non-blank one
/// found in the line items, falling back to the number that was requested.
pub(crate) fn resolve_order_number(items: &[OrderLineItem], requested: &str) -> String {
    items
        .iter()
        .filter_map(|item| item.order_number.as_deref())
        .find(|number| !number.is_empty())
        .unwrap_or(requested)
        .to_owned()
}

/// The row key of the first line item that has one at all. A blank key on
/// that item counts as no key.
pub(crate) fn resolve_row_id(items: &[OrderLineItem]) -> Option<String> {
    items
        .iter()
        .find_map(|item| item.row_id.as_deref())
        .filter(|row_id| !row_id.is_empty())
        .map(str::to_owned)
}
