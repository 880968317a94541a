//! SQLite storage gateway for barky.
//!
//! Provides the [`Database`] struct that owns the process-wide
//! `rusqlite::Connection` and turns table-shaped requests (column
//! descriptors and column/value records) into parameterized statements.

use std::collections::BTreeMap;
use std::path::Path;

use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};
use tracing::debug;

use super::statement;
use crate::types::errors::DatabaseError;

/// A column-name to value mapping, used for inserts and delete criteria.
pub type Record = BTreeMap<String, Value>;

/// One selected row, values in column order.
pub type Row = Vec<Value>;

/// Storage gateway owning a single SQLite connection.
///
/// Every value handed to [`Database::add`], [`Database::delete`] or used as a
/// filter is bound as a statement parameter. Table and column names are
/// spliced into SQL text only after passing [`statement::is_identifier`].
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) a SQLite database at the given file path.
    ///
    /// # Errors
    /// Returns `DatabaseError::Sqlite` if the connection cannot be established.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened database");
        Ok(Self { conn })
    }

    /// Opens an in-memory SQLite database.
    ///
    /// Useful for testing — the database is discarded when the `Database` is dropped.
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Creates `table` from `(column, descriptor)` pairs unless it already exists.
    ///
    /// Calling this for an existing table has no effect and is not an error.
    pub fn create_table(&self, table: &str, columns: &[(&str, &str)]) -> Result<(), DatabaseError> {
        let sql = statement::create_table(table, columns)?;
        debug!(%sql, "create table");
        self.conn.execute(&sql, [])?;
        Ok(())
    }

    /// Inserts one row built from `data`. Returns the store-assigned rowid.
    ///
    /// Columns missing from `data` take their schema default; a missing
    /// `NOT NULL` column surfaces as a constraint error from SQLite.
    pub fn add(&self, table: &str, data: &Record) -> Result<i64, DatabaseError> {
        let sql = statement::insert(table, data.keys().map(String::as_str))?;
        debug!(%sql, "insert");
        self.conn.execute(&sql, params_from_iter(data.values()))?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Selects rows from `table`.
    ///
    /// `columns` restricts the projection (all columns when `None`), and
    /// `order_by` sorts ascending by the named column. Each call re-runs the
    /// query against the current table contents.
    pub fn select(
        &self,
        table: &str,
        columns: Option<&[&str]>,
        order_by: Option<&str>,
    ) -> Result<Vec<Row>, DatabaseError> {
        let sql = statement::select(table, columns, order_by)?;
        let mut stmt = self.conn.prepare(&sql)?;
        let width = stmt.column_count();
        debug!(%sql, width, "select");

        let rows = stmt.query_map([], |row| {
            (0..width).map(|i| row.get::<_, Value>(i)).collect::<rusqlite::Result<Row>>()
        })?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// Like [`Database::select`], but maps each row through `f`.
    pub fn select_map<T, F>(
        &self,
        table: &str,
        columns: Option<&[&str]>,
        order_by: Option<&str>,
        f: F,
    ) -> Result<Vec<T>, DatabaseError>
    where
        F: FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
    {
        let sql = statement::select(table, columns, order_by)?;
        debug!(%sql, "select");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], f)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    /// Deletes every row of `table` whose columns equal all of `criteria`.
    ///
    /// Returns the number of rows removed; zero matches is not an error.
    pub fn delete(&self, table: &str, criteria: &Record) -> Result<usize, DatabaseError> {
        let sql = statement::delete(table, criteria.keys().map(String::as_str))?;
        debug!(%sql, "delete");
        let affected = self.conn.execute(&sql, params_from_iter(criteria.values()))?;
        Ok(affected)
    }
}
