//! Unit tests for the barky storage gateway.
//!
//! Exercises `Database` against in-memory and on-disk SQLite, using the
//! bookmarks schema and an ad-hoc table to show the gateway is table-agnostic.

use barky::commands::bookmark_commands::{BOOKMARKS_TABLE, BOOKMARK_COLUMNS};
use barky::database::{Database, Record};
use barky::types::errors::DatabaseError;
use rusqlite::types::Value;
use tempfile::TempDir;

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn record(pairs: &[(&str, Value)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn bookmarks_db() -> Database {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    db.create_table(BOOKMARKS_TABLE, &BOOKMARK_COLUMNS)
        .expect("create_table failed");
    db
}

fn table_sql(db: &Database, table: &str) -> String {
    db.connection()
        .query_row(
            "SELECT sql FROM sqlite_master WHERE type='table' AND name=?1",
            [table],
            |row| row.get(0),
        )
        .expect("table should exist")
}

fn bookmark(title: &str, url: &str, notes: Option<&str>, date: &str) -> Record {
    record(&[
        ("title", text(title)),
        ("url", text(url)),
        ("notes", notes.map_or(Value::Null, text)),
        ("date_added", text(date)),
    ])
}

#[test]
fn test_open_in_memory_succeeds() {
    assert!(Database::open_in_memory().is_ok());
}

#[test]
fn test_create_table_is_idempotent() {
    let db = bookmarks_db();
    let before = table_sql(&db, BOOKMARKS_TABLE);

    db.create_table(BOOKMARKS_TABLE, &BOOKMARK_COLUMNS)
        .expect("second create_table should succeed");

    assert_eq!(table_sql(&db, BOOKMARKS_TABLE), before);
}

#[test]
fn test_bookmarks_schema_columns() {
    let db = bookmarks_db();
    let mut stmt = db
        .connection()
        .prepare("SELECT name, type, \"notnull\", pk FROM pragma_table_info('bookmarks')")
        .unwrap();
    let columns: Vec<(String, String, bool, bool)> = stmt
        .query_map([], |row| {
            let name: String = row.get(0)?;
            let declared: String = row.get(1)?;
            let not_null: bool = row.get(2)?;
            let pk: bool = row.get(3)?;
            Ok((name, declared.to_lowercase(), not_null, pk))
        })
        .unwrap()
        .collect::<rusqlite::Result<_>>()
        .unwrap();

    assert_eq!(
        columns,
        vec![
            ("id".to_string(), "integer".to_string(), false, true),
            ("title".to_string(), "text".to_string(), true, false),
            ("url".to_string(), "text".to_string(), true, false),
            ("notes".to_string(), "text".to_string(), false, false),
            ("date_added".to_string(), "text".to_string(), true, false),
        ]
    );
}

#[test]
fn test_add_then_select_returns_row_in_column_order() {
    let db = bookmarks_db();
    let id = db
        .add(
            BOOKMARKS_TABLE,
            &bookmark("Rust", "https://rust-lang.org", Some("lang"), "2024-01-01T00:00:00Z"),
        )
        .unwrap();

    let rows = db.select(BOOKMARKS_TABLE, None, None).unwrap();
    assert_eq!(
        rows,
        vec![vec![
            Value::Integer(id),
            text("Rust"),
            text("https://rust-lang.org"),
            text("lang"),
            text("2024-01-01T00:00:00Z"),
        ]]
    );
}

#[test]
fn test_select_orders_ascending_by_column() {
    let db = bookmarks_db();
    db.add(BOOKMARKS_TABLE, &bookmark("b", "u1", None, "2024-03-01T00:00:00Z"))
        .unwrap();
    db.add(BOOKMARKS_TABLE, &bookmark("c", "u2", None, "2024-01-01T00:00:00Z"))
        .unwrap();
    db.add(BOOKMARKS_TABLE, &bookmark("a", "u3", None, "2024-02-01T00:00:00Z"))
        .unwrap();

    let titles = db
        .select(BOOKMARKS_TABLE, Some(&["title"][..]), Some("title"))
        .unwrap();
    assert_eq!(titles, vec![vec![text("a")], vec![text("b")], vec![text("c")]]);

    let by_date = db
        .select(BOOKMARKS_TABLE, Some(&["title"][..]), Some("date_added"))
        .unwrap();
    assert_eq!(by_date, vec![vec![text("c")], vec![text("a")], vec![text("b")]]);
}

#[test]
fn test_select_reissue_sees_new_rows() {
    let db = bookmarks_db();
    assert!(db.select(BOOKMARKS_TABLE, None, None).unwrap().is_empty());
    db.add(BOOKMARKS_TABLE, &bookmark("a", "u", None, "d")).unwrap();
    assert_eq!(db.select(BOOKMARKS_TABLE, None, None).unwrap().len(), 1);
}

#[test]
fn test_delete_absent_row_is_not_an_error() {
    let db = bookmarks_db();
    let removed = db
        .delete(BOOKMARKS_TABLE, &record(&[("id", Value::Integer(42))]))
        .unwrap();
    assert_eq!(removed, 0);
}

#[test]
fn test_deleted_ids_are_not_reused() {
    let db = bookmarks_db();
    let first = db.add(BOOKMARKS_TABLE, &bookmark("a", "u", None, "d")).unwrap();
    db.delete(BOOKMARKS_TABLE, &record(&[("id", Value::Integer(first))]))
        .unwrap();
    let second = db.add(BOOKMARKS_TABLE, &bookmark("b", "u", None, "d")).unwrap();
    assert!(second > first, "id {} was reused", first);
}

#[test]
fn test_values_with_quotes_are_stored_verbatim() {
    let db = bookmarks_db();
    let nasty = "O'Reilly\"; DROP TABLE bookmarks; --";
    db.add(BOOKMARKS_TABLE, &bookmark(nasty, nasty, Some(nasty), "d"))
        .unwrap();

    let rows = db.select(BOOKMARKS_TABLE, Some(&["title", "notes"][..]), None).unwrap();
    assert_eq!(rows, vec![vec![text(nasty), text(nasty)]]);

    let removed = db
        .delete(BOOKMARKS_TABLE, &record(&[("title", text(nasty))]))
        .unwrap();
    assert_eq!(removed, 1);
}

#[test]
fn test_missing_required_column_is_a_constraint_error() {
    let db = bookmarks_db();
    let err = db
        .add(BOOKMARKS_TABLE, &record(&[("title", text("only title"))]))
        .unwrap_err();
    assert!(matches!(err, DatabaseError::Sqlite(_)));
}

#[test]
fn test_invalid_identifiers_are_rejected() {
    let db = bookmarks_db();
    assert!(matches!(
        db.select(BOOKMARKS_TABLE, None, Some("title; DROP TABLE bookmarks")),
        Err(DatabaseError::InvalidIdentifier(_))
    ));
    assert!(matches!(
        db.add("bookmarks x", &bookmark("a", "u", None, "d")),
        Err(DatabaseError::InvalidIdentifier(_))
    ));
    assert!(matches!(
        db.delete(BOOKMARKS_TABLE, &record(&[("id = 1 OR 1", Value::Integer(1))])),
        Err(DatabaseError::InvalidIdentifier(_))
    ));
}

#[test]
fn test_empty_insert_is_rejected() {
    let db = bookmarks_db();
    assert!(matches!(
        db.add(BOOKMARKS_TABLE, &Record::new()),
        Err(DatabaseError::EmptyRecord(_))
    ));
}

#[test]
fn test_gateway_serves_any_table_shape() {
    let db = Database::open_in_memory().unwrap();
    db.create_table(
        "tags",
        &[("name", "text primary key"), ("weight", "real not null default 1.0")],
    )
    .unwrap();
    db.add("tags", &record(&[("name", text("rust"))])).unwrap();

    let rows = db.select("tags", None, Some("name")).unwrap();
    assert_eq!(rows, vec![vec![text("rust"), Value::Real(1.0)]]);
}

#[test]
fn test_file_database_persists_across_connections() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bookmarks.db");

    {
        let db = Database::open(&path).expect("open with file path should succeed");
        db.create_table(BOOKMARKS_TABLE, &BOOKMARK_COLUMNS).unwrap();
        db.add(BOOKMARKS_TABLE, &bookmark("kept", "u", None, "d")).unwrap();
    }
    assert!(path.exists(), "Database file should exist on disk");

    let db = Database::open(&path).unwrap();
    let rows = db.select(BOOKMARKS_TABLE, Some(&["title"][..]), None).unwrap();
    assert_eq!(rows, vec![vec![text("kept")]]);
}
