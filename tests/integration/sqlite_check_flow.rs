use rusqlite::Connection;
use rowcheck::{
    CellValue, ErrorKind, Row, StorageError, TableAccessor, check_table, format_errors,
};

fn users_db(seed: &str) -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    conn.execute_batch("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT, created_at TEXT);")
        .expect("create users");
    conn.execute_batch(seed).expect("seed users");
    conn
}

#[test]
fn empty_table_matches_empty_expectation() {
    let conn = users_db("");
    let report = check_table(&conn, "users", &[]).expect("table readable");
    assert!(report.matched);
    assert!(report.error.is_none());
}

#[test]
fn matching_row_succeeds() {
    let conn = users_db("INSERT INTO users (id, name) VALUES (1, 'Alice');");
    let expected = vec![Row::new().with("id", 1).with("name", "Alice")];

    let report = check_table(&conn, "users", &expected).expect("table readable");
    assert!(report.matched);
}

#[test]
fn value_mismatch_names_row_column_and_both_values() {
    let conn = users_db("INSERT INTO users (id, name) VALUES (1, 'Alice');");
    let expected = vec![Row::new().with("id", 1).with("name", "Bob")];

    let report = check_table(&conn, "users", &expected).expect("table readable");
    assert!(!report.matched);
    let error = report.error.expect("validation error");
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(
        error.messages(),
        ["row 0 column name expected \"Bob\" got \"Alice\""]
    );
}

#[test]
fn missing_rows_only_report_counts() {
    let conn = users_db("");
    let expected = vec![Row::new().with("id", 1).with("name", "Alice")];

    let error = check_table(&conn, "users", &expected)
        .expect("table readable")
        .error
        .expect("validation error");
    assert_eq!(error.messages(), ["row count mismatch: expected 1 got 0"]);
}

#[test]
fn unchecked_columns_are_ignored() {
    let conn = users_db(
        "INSERT INTO users VALUES (1, 'Alice', '2024-01-01');
         INSERT INTO users VALUES (2, 'Bob', NULL);",
    );
    let expected = vec![
        Row::new().with("name", "Alice"),
        Row::new().with("id", 2).with("created_at", CellValue::Null),
    ];

    assert!(check_table(&conn, "users", &expected).expect("table readable").matched);
}

#[test]
fn stored_text_does_not_match_expected_integer() {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    conn.execute_batch("CREATE TABLE t (v); INSERT INTO t VALUES ('1');")
        .expect("seed t");

    let error = check_table(&conn, "t", &[Row::new().with("v", 1)])
        .expect("table readable")
        .error
        .expect("validation error");
    assert_eq!(format_errors(&error), "row 0 column v expected 1 got \"1\"");
}

#[test]
fn every_discrepancy_is_reported_in_order() {
    let conn = users_db(
        "INSERT INTO users (id, name) VALUES (1, 'Alice');
         INSERT INTO users (id, name) VALUES (2, 'Bob');",
    );
    let expected = vec![
        Row::new().with("id", 1).with("name", "Alicia"),
        Row::new().with("id", 3).with("email", "bob@example.com"),
        Row::new().with("id", 4),
    ];

    let error = check_table(&conn, "users", &expected)
        .expect("table readable")
        .error
        .expect("validation error");
    assert_eq!(
        format_errors(&error),
        [
            "row count mismatch: expected 3 got 2",
            "row 0 column name expected \"Alicia\" got \"Alice\"",
            "row 1 column id expected 3 got 2",
            "row 1 missing expected column email",
        ]
        .join("\n")
    );
}

#[test]
fn missing_table_is_a_storage_error() {
    let conn = users_db("");
    let err = check_table(&conn, "orders", &[]).expect_err("must fail");
    assert!(matches!(err, StorageError::Query { ref table, .. } if table == "orders"));
}

#[test]
fn works_through_a_trait_object() {
    let conn = users_db("INSERT INTO users (id, name) VALUES (1, 'Alice');");
    let accessor: &dyn TableAccessor = &conn;
    let report = check_table(accessor, "users", &[Row::new().with("id", 1)]).expect("readable");
    assert!(report.matched);
}
