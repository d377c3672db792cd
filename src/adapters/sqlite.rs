use std::path::Path;

use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, OpenFlags};
use tracing::{debug, warn};

use crate::adapters::{StorageError, TableAccessor};
use crate::domain::row::Row;
use crate::domain::value::CellValue;

/// Opens an existing database file without write access.
pub fn open_read_only(path: &Path) -> Result<Connection, StorageError> {
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|source| StorageError::Open {
        path: path.display().to_string(),
        source,
    })
}

/// Names SQLite accepts for the implicit row id, in preference order.
const ROWID_ALIASES: [&str; 3] = ["rowid", "_rowid_", "oid"];

impl TableAccessor for Connection {
    fn read_rows(&self, table: &str) -> Result<Vec<Row>, StorageError> {
        let query_error = |source: rusqlite::Error| StorageError::Query {
            table: table.to_string(),
            source,
        };
        let quoted = quote_identifier(table);
        let sql = match rowid_order_column(self, table).map_err(query_error)? {
            Some(alias) => format!("SELECT * FROM {quoted} ORDER BY {alias}"),
            None => {
                warn!(table, "no usable rowid; reading rows in storage order");
                format!("SELECT * FROM {quoted}")
            }
        };
        select_rows(self, &sql).map_err(query_error)
    }
}

/// Picks a rowid alias that orders `table` by insertion.
///
/// Returns `None` for views, `WITHOUT ROWID` tables, unknown objects and
/// tables that declare a column under every alias. An unknown object is left
/// for the read itself to reject.
fn rowid_order_column(
    conn: &Connection,
    table: &str,
) -> Result<Option<&'static str>, rusqlite::Error> {
    let mut stmt = conn.prepare(
        "SELECT type, wr FROM pragma_table_list WHERE name = ?1 COLLATE NOCASE \
         ORDER BY schema = 'temp' DESC LIMIT 1",
    )?;
    let mut rows = stmt.query([table])?;
    let has_rowid = match rows.next()? {
        Some(row) => row.get::<_, String>(0)? == "table" && row.get::<_, i64>(1)? == 0,
        None => false,
    };
    if !has_rowid {
        return Ok(None);
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let declared = stmt
        .query_map([table], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ROWID_ALIASES.into_iter().find(|alias| {
        !declared
            .iter()
            .any(|column| column.eq_ignore_ascii_case(alias))
    }))
}

fn select_rows(conn: &Connection, sql: &str) -> Result<Vec<Row>, rusqlite::Error> {
    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect();
    let rows = stmt
        .query_map([], |sql_row| {
            let mut row = Row::new();
            for (index, column) in columns.iter().enumerate() {
                let value: SqlValue = sql_row.get(index)?;
                row.push(column.clone(), cell_from_sql(value));
            }
            Ok(row)
        })?
        .collect::<Result<Vec<_>, _>>()?;
    debug!(sql, rows = rows.len(), "read table rows");
    Ok(rows)
}

fn cell_from_sql(value: SqlValue) -> CellValue {
    match value {
        SqlValue::Null => CellValue::Null,
        SqlValue::Integer(i) => CellValue::Integer(i),
        SqlValue::Real(f) => CellValue::Real(f),
        SqlValue::Text(s) => CellValue::Text(s),
        SqlValue::Blob(b) => CellValue::Blob(b),
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
