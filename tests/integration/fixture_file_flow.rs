use std::fs::File;
use std::io::Cursor;

use rowcheck::io::Format;
use rowcheck::io::reader::read_expected_rows;
use rowcheck::{MemoryTables, Row, assert_table_content, check_table};
use rusqlite::Connection;
use tempfile::tempdir;

#[test]
fn yaml_fixture_checks_against_sqlite_table() {
    let dir = tempdir().expect("tempdir");
    let fixture = dir.path().join("users.yaml");
    std::fs::write(
        &fixture,
        "- id: 1\n  name: Alice\n  avatar: {$blob: \"CAFE\"}\n- id: 2\n  name: null\n",
    )
    .expect("write fixture");

    let conn = Connection::open_in_memory().expect("open in-memory db");
    conn.execute_batch(
        "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT, avatar BLOB);
         INSERT INTO users VALUES (1, 'Alice', X'CAFE');
         INSERT INTO users VALUES (2, NULL, NULL);",
    )
    .expect("seed db");

    let expected =
        read_expected_rows(File::open(&fixture).expect("open fixture"), Format::Yaml)
            .expect("read fixture");
    assert_table_content(&conn, "users", &expected);
}

#[test]
fn json_fixture_reports_blob_mismatch() {
    let expected = read_expected_rows(
        Cursor::new(r#"[{"payload": {"$blob": "0001"}}]"#),
        Format::Json,
    )
    .expect("read fixture");
    let tables = MemoryTables::new().with_table(
        "events",
        vec![Row::new().with("payload", vec![0x00u8, 0x02])],
    );

    let error = check_table(&tables, "events", &expected)
        .expect("table readable")
        .error
        .expect("validation error");
    assert_eq!(
        error.messages(),
        ["row 0 column payload expected X'0001' got X'0002'"]
    );
}

#[test]
fn payload_carries_errors_array_for_reporting() {
    let tables = MemoryTables::new().with_table("users", Vec::new());
    let expected = read_expected_rows(Cursor::new("{\"id\":1}\n"), Format::Jsonl)
        .expect("read fixture");

    let error = check_table(&tables, "users", &expected)
        .expect("table readable")
        .error
        .expect("validation error");
    let payload = error.to_payload();
    assert_eq!(payload["code"], 1);
    assert_eq!(payload["domain"], "rowcheck.table_content");
    assert_eq!(
        payload[rowcheck::ERRORS_ARRAY_KEY],
        serde_json::json!(["row count mismatch: expected 1 got 0"])
    );
}
