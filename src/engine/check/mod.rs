pub mod format;
pub mod validator;

use tracing::{debug, info};

use crate::adapters::{StorageError, TableAccessor};
use crate::domain::row::Row;

pub use format::{format_errors, format_errors_with};
pub use validator::{CheckReport, validate};

/// Reads every row of `table` once and compares it with `expected`.
///
/// A content mismatch is returned as `Ok` with `matched == false`. `Err` means
/// the table could not be read at all.
pub fn check_table<A: TableAccessor + ?Sized>(
    accessor: &A,
    table: &str,
    expected: &[Row],
) -> Result<CheckReport, StorageError> {
    if table.is_empty() {
        return Err(StorageError::InvalidTableName);
    }

    let actual = accessor.read_rows(table)?;
    debug!(
        table,
        expected = expected.len(),
        actual = actual.len(),
        "comparing table rows"
    );

    let report = validator::validate(expected, &actual);
    info!(
        table,
        matched = report.matched,
        discrepancies = report.discrepancy_count(),
        "table check finished"
    );
    Ok(report)
}

/// Panics with every discrepancy unless `table` holds exactly `expected`.
///
/// Intended for test code. A storage failure panics with the storage error.
#[track_caller]
pub fn assert_table_content<A: TableAccessor + ?Sized>(
    accessor: &A,
    table: &str,
    expected: &[Row],
) {
    match check_table(accessor, table, expected) {
        Ok(report) => {
            if let Err(error) = report.into_result() {
                panic!("table `{table}` content mismatch:\n{}", format_errors(&error));
            }
        }
        Err(error) => panic!("could not check table `{table}`: {error}"),
    }
}
