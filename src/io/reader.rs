use std::io::Read;

use serde_json::Value;

use crate::domain::row::{ExpectedContent, rows_from_json};
use crate::io::format::{json, jsonl, yaml};
use crate::io::{Format, IoError};

pub fn read_values<R: Read>(reader: R, format: Format) -> Result<Vec<Value>, IoError> {
    match format {
        Format::Json => json::read_json(reader),
        Format::Yaml => yaml::read_yaml(reader),
        Format::Jsonl => jsonl::read_jsonl(reader),
    }
}

/// Reads a fixture and converts every entry into an expected row.
pub fn read_expected_rows<R: Read>(reader: R, format: Format) -> Result<ExpectedContent, IoError> {
    let values = read_values(reader, format)?;
    Ok(rows_from_json(&values)?)
}
