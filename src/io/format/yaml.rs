use std::io::Read;

use serde_json::Value;

use crate::io::IoError;

/// Reads a YAML sequence of rows, or a single row mapping.
///
/// An empty document reads as no rows.
pub fn read_yaml<R: Read>(reader: R) -> Result<Vec<Value>, IoError> {
    let yaml_value: serde_yaml::Value = serde_yaml::from_reader(reader)?;
    let json_value = serde_json::to_value(yaml_value)?;
    Ok(match json_value {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        single => vec![single],
    })
}
