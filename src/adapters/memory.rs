use std::collections::BTreeMap;

use crate::adapters::{StorageError, TableAccessor};
use crate::domain::row::Row;

/// Named tables held in memory, for checking rows without a database.
#[derive(Debug, Clone, Default)]
pub struct MemoryTables {
    tables: BTreeMap<String, Vec<Row>>,
}

impl MemoryTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or replaces `table` with `rows`.
    pub fn with_table(mut self, table: impl Into<String>, rows: Vec<Row>) -> Self {
        self.tables.insert(table.into(), rows);
        self
    }

    pub fn insert(&mut self, table: impl Into<String>, row: Row) {
        self.tables.entry(table.into()).or_default().push(row);
    }
}

impl TableAccessor for MemoryTables {
    fn read_rows(&self, table: &str) -> Result<Vec<Row>, StorageError> {
        self.tables
            .get(table)
            .cloned()
            .ok_or_else(|| StorageError::MissingTable {
                table: table.to_string(),
            })
    }
}
