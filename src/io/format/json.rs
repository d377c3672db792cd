use std::io::Read;

use serde_json::Value;

use crate::io::IoError;

/// Reads a JSON array of rows, or a single row object.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Value>, IoError> {
    let value: Value = serde_json::from_reader(reader)?;
    Ok(match value {
        Value::Array(items) => items,
        single => vec![single],
    })
}
