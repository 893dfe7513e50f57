use crate::{Map, ValidationError};
use rust_decimal::Decimal;
use std::str::FromStr;

/// A single column value as delivered by the order source.
///
/// The order query is configurable, so the pipeline cannot assume column
/// types; adapters hand over whatever the database produced and the
/// conversions below decide what is acceptable.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// SQL NULL
    Null,
    /// A boolean column
    Bool(bool),
    /// Any integer column
    Int(i64),
    /// Any floating point column
    Float(f64),
    /// Any textual column
    Text(String),
}

impl FieldValue {
    /// True for SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Render the value as trimmed text, or `None` for NULL.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Bool(value) => Some(value.to_string()),
            Self::Int(value) => Some(value.to_string()),
            Self::Float(value) => Some(value.to_string()),
            Self::Text(value) => Some(value.trim().to_owned()),
        }
    }

    /// Convert the value to an exact decimal.
    ///
    /// NULL yields `Ok(None)`. Floats go through their shortest round-trip
    /// text so that a stored `2.5` becomes exactly `2.5` rather than the
    /// nearest binary fraction. Text is trimmed and may use plain or
    /// scientific notation. Anything else is rejected.
    pub fn to_decimal(&self, field: &'static str) -> Result<Option<Decimal>, ValidationError> {
        let invalid = || ValidationError::InvalidDecimal {
            field,
            value: self.to_text().unwrap_or_default(),
        };

        match self {
            Self::Null => Ok(None),
            Self::Int(value) => Ok(Some(Decimal::from(*value))),
            Self::Float(value) if value.is_finite() => {
                parse_decimal(&value.to_string()).map(Some).ok_or_else(invalid)
            }
            Self::Text(value) => parse_decimal(value.trim()).map(Some).ok_or_else(invalid),
            Self::Float(_) | Self::Bool(_) => Err(invalid()),
        }
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Single precision values keep their own shortest text, so `1.0005f32`
/// stays `1.0005` instead of picking up the noise of widening to `f64`.
impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        Self::Float(value.to_string().parse().unwrap_or(f64::from(value)))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// One row of the order query, keyed by lower-cased column name.
///
/// Column order is preserved as returned by the database.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderRow(Map<String, FieldValue>);

impl OrderRow {
    /// Look up a column by (case-insensitive) name.
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.0.get(column.to_lowercase().as_str())
    }

    /// The value of the first of `columns` that is present in the row.
    ///
    /// Presence is what counts: a present NULL column wins over a later alias.
    pub fn first_present(&self, columns: &[&str]) -> Option<&FieldValue> {
        columns.iter().find_map(|column| self.get(column))
    }
}

impl std::ops::Deref for OrderRow {
    type Target = Map<String, FieldValue>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K: AsRef<str>, V: Into<FieldValue>> FromIterator<(K, V)> for OrderRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.as_ref().to_lowercase(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for OrderRow {
    type Item = (String, FieldValue);
    type IntoIter = indexmap::map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
