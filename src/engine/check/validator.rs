use crate::domain::error::ValidationError;
use crate::domain::row::Row;

/// Outcome of comparing a table against expected rows.
///
/// `matched` is true exactly when `error` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub matched: bool,
    pub error: Option<ValidationError>,
}

impl CheckReport {
    fn from_messages(messages: Vec<String>) -> Self {
        let error = ValidationError::from_messages(messages);
        Self {
            matched: error.is_none(),
            error,
        }
    }

    pub fn discrepancy_count(&self) -> usize {
        self.error
            .as_ref()
            .map_or(0, |error| error.messages().len())
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Compares expected rows with actual rows position by position.
///
/// Messages come out in discovery order: the count mismatch first, then one
/// message per column problem by ascending row index and, within a row, by
/// the expected row's column order. Columns only present in the actual row
/// are ignored.
pub fn validate(expected: &[Row], actual: &[Row]) -> CheckReport {
    let mut messages = Vec::new();

    if expected.len() != actual.len() {
        messages.push(format!(
            "row count mismatch: expected {} got {}",
            expected.len(),
            actual.len()
        ));
    }

    for (index, (expected_row, actual_row)) in expected.iter().zip(actual).enumerate() {
        compare_row(index, expected_row, actual_row, &mut messages);
    }

    CheckReport::from_messages(messages)
}

fn compare_row(index: usize, expected: &Row, actual: &Row, messages: &mut Vec<String>) {
    for (column, expected_value) in expected.iter() {
        match actual.get(column) {
            None => messages.push(format!("row {index} missing expected column {column}")),
            Some(actual_value) if actual_value != expected_value => messages.push(format!(
                "row {index} column {column} expected {expected_value} got {actual_value}"
            )),
            Some(_) => {}
        }
    }
}
