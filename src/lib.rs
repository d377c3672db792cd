//! Table content checks for test suites.
//!
//! [`check_table`] reads every row of a table once and compares it with the
//! rows a test expects, collecting one message per discrepancy into a
//! [`ValidationError`]. [`format_errors`] joins those messages for an
//! assertion message.

pub mod adapters;
pub mod cmd;
pub mod domain;
pub mod engine;
pub mod io;

pub use adapters::{MemoryTables, StorageError, TableAccessor};
pub use domain::error::{ERROR_DOMAIN, ERRORS_ARRAY_KEY, ErrorKind, ValidationError};
pub use domain::row::{ExpectedContent, Row};
pub use domain::value::CellValue;
pub use engine::check::{
    CheckReport, assert_table_content, check_table, format_errors, format_errors_with,
};
