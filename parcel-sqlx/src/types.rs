//! Decoding of database rows into the core's untyped order rows.

use crate::StoreError;
use parcel_core::models::{FieldValue, OrderRow};
use sqlx::{Any, Column as _, Database, Row as _, TypeInfo as _, ValueRef as _, any::AnyRow};

type AnyColumn = <Any as Database>::Column;

/// Convert a driver row into an [`OrderRow`], keeping the column order.
pub(crate) fn order_row(row: &AnyRow) -> Result<OrderRow, StoreError> {
    row.columns()
        .iter()
        .map(|column| Ok((column.name().to_owned(), field_value(row, column)?)))
        .collect::<Result<Vec<(String, FieldValue)>, StoreError>>()
        .map(OrderRow::from_iter)
}

fn field_value(row: &AnyRow, column: &AnyColumn) -> Result<FieldValue, StoreError> {
    let index = column.ordinal();
    if row.try_get_raw(index)?.is_null() {
        return Ok(FieldValue::Null);
    }

    // The `Any` driver only decodes exact type matches, so try each kind in turn.
    if let Ok(value) = row.try_get::<i64, _>(index) {
        return Ok(FieldValue::Int(value));
    }
    if let Ok(value) = row.try_get::<i32, _>(index) {
        return Ok(FieldValue::Int(value.into()));
    }
    if let Ok(value) = row.try_get::<i16, _>(index) {
        return Ok(FieldValue::Int(value.into()));
    }
    if let Ok(value) = row.try_get::<f64, _>(index) {
        return Ok(FieldValue::Float(value));
    }
    if let Ok(value) = row.try_get::<f32, _>(index) {
        return Ok(FieldValue::from(value));
    }
    if let Ok(value) = row.try_get::<String, _>(index) {
        return Ok(FieldValue::Text(value));
    }
    if let Ok(value) = row.try_get::<bool, _>(index) {
        return Ok(FieldValue::Bool(value));
    }

    Err(StoreError::UnsupportedColumn {
        column: column.name().to_owned(),
        type_name: column.type_info().name().to_owned(),
    })
}
