//! barky storage gateway.
//!
//! Provides SQLite connection management and generic, parameterized
//! create/insert/select/delete operations driven by column mappings.
//!
//! # Usage
//!
//! ```no_run
//! use barky::database::{Database, Record};
//! use rusqlite::types::Value;
//!
//! let db = Database::open("bookmarks.db").expect("failed to open database");
//! db.create_table("notes", &[("id", "integer primary key"), ("body", "text")])
//!     .expect("failed to create table");
//!
//! let mut row = Record::new();
//! row.insert("body".to_string(), Value::Text("hello".to_string()));
//! db.add("notes", &row).expect("failed to insert");
//!
//! let rows = db.select("notes", None, Some("id")).expect("failed to select");
//! ```

pub mod connection;
pub mod statement;

pub use connection::{Database, Record, Row};
