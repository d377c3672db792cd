use serde::{Serialize, Serializer};
use serde::ser::SerializeMap;
use serde_json::{Map, Number, Value};

use crate::domain::error::RowError;
use crate::domain::value::{BLOB_KEY, CellValue, decode_hex};

/// One table row as an ordered list of `(column, value)` pairs.
///
/// Column order is preserved exactly as inserted. For expected rows this is
/// the declaration order; for rows read from a store it is the store's order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, CellValue)>,
}

/// Rows a caller asserts should exist in a table, in declaration order.
pub type ExpectedContent = Vec<Row>;

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column, builder style.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.columns.push((column.into(), value.into()));
    }

    /// Looks up a column by exact name. The first occurrence wins.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.columns
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Builds a row from one fixture object, keeping its key order.
    ///
    /// `index` is only used to label errors.
    pub fn from_json(index: usize, value: &Value) -> Result<Self, RowError> {
        let Value::Object(map) = value else {
            return Err(RowError::NotAnObject {
                index,
                found: json_type_name(value),
            });
        };

        let mut row = Self::new();
        for (column, cell) in map {
            let cell = cell_from_json(cell).map_err(|reason| RowError::InvalidCell {
                index,
                column: column.clone(),
                reason,
            })?;
            row.push(column.clone(), cell);
        }
        Ok(row)
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (column, value) in iter {
            row.push(column, value);
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in &self.columns {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Converts parsed fixture values into expected rows.
pub fn rows_from_json(values: &[Value]) -> Result<ExpectedContent, RowError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| Row::from_json(index, value))
        .collect()
}

fn cell_from_json(value: &Value) -> Result<CellValue, String> {
    match value {
        Value::Null => Ok(CellValue::Null),
        Value::Bool(flag) => Ok(CellValue::from(*flag)),
        Value::Number(number) => number_cell(number),
        Value::String(text) => Ok(CellValue::Text(text.clone())),
        Value::Object(map) => blob_cell(map),
        Value::Array(_) => Err("arrays are not storable column values".to_string()),
    }
}

fn number_cell(number: &Number) -> Result<CellValue, String> {
    if let Some(integer) = number.as_i64() {
        return Ok(CellValue::Integer(integer));
    }
    if number.is_u64() {
        return Err(format!("integer {number} does not fit in a signed 64-bit column"));
    }
    number
        .as_f64()
        .map(CellValue::Real)
        .ok_or_else(|| format!("number {number} is not representable"))
}

fn blob_cell(map: &Map<String, Value>) -> Result<CellValue, String> {
    match (map.len(), map.get(BLOB_KEY)) {
        (1, Some(Value::String(hex))) => decode_hex(hex)
            .map(CellValue::Blob)
            .ok_or_else(|| format!("`{BLOB_KEY}` must be an even-length hex string")),
        _ => Err(format!(
            "objects are only allowed as {{\"{BLOB_KEY}\": \"<hex>\"}} blob literals"
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
