pub mod memory;
pub mod sqlite;

use thiserror::Error;

use crate::domain::row::Row;

pub use memory::MemoryTables;

/// Read access to the rows of named tables.
pub trait TableAccessor {
    /// Reads every row of `table`, fully materialized.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the table cannot be read. A read
    /// failure is never a content mismatch.
    fn read_rows(&self, table: &str) -> Result<Vec<Row>, StorageError>;
}

/// The table read itself failed, so no comparison could run.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("table name must not be empty")]
    InvalidTableName,

    #[error("table `{table}` does not exist")]
    MissingTable { table: String },

    #[error("failed to open database `{path}`: {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to read table `{table}`: {source}")]
    Query {
        table: String,
        #[source]
        source: rusqlite::Error,
    },
}
