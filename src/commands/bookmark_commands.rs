//! Bookmark commands.
//!
//! `CreateBookmarksTable`, `AddBookmark`, `ListBookmarks`, `DeleteBookmark`
//! and `Quit`, each delegating to the generic storage gateway.

use chrono::{SecondsFormat, Utc};
use rusqlite::types::Value;
use tracing::info;

use super::{Command, CommandInput, CommandOutput};
use crate::database::{Database, Record};
use crate::types::bookmark::Bookmark;
use crate::types::errors::CommandError;

/// Name of the bookmarks table.
pub const BOOKMARKS_TABLE: &str = "bookmarks";

/// Schema of the bookmarks table, in declared column order.
pub const BOOKMARK_COLUMNS: [(&str, &str); 5] = [
    ("id", "integer primary key autoincrement"),
    ("title", "text not null"),
    ("url", "text not null"),
    ("notes", "text"),
    ("date_added", "text not null"),
];

/// Column used by [`ListBookmarksCommand::default_order`].
pub const DEFAULT_ORDER_BY: &str = "date_added";

/// Creates the bookmarks table if it does not exist yet.
pub struct CreateBookmarksTableCommand<'a> {
    db: &'a Database,
}

impl<'a> CreateBookmarksTableCommand<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

impl<'a> Command for CreateBookmarksTableCommand<'a> {
    fn execute(&self, _input: Option<CommandInput>) -> Result<CommandOutput, CommandError> {
        self.db.create_table(BOOKMARKS_TABLE, &BOOKMARK_COLUMNS)?;
        Ok(CommandOutput::Done)
    }
}

/// Adds a bookmark, stamping `date_added` with the current UTC time.
pub struct AddBookmarkCommand<'a> {
    db: &'a Database,
}

impl<'a> AddBookmarkCommand<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Current UTC time as an RFC 3339 string with microseconds, e.g.
    /// `2024-05-01T09:30:00.123456Z`. Fixed width, so text order is time order.
    fn now() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}

impl<'a> Command for AddBookmarkCommand<'a> {
    fn execute(&self, input: Option<CommandInput>) -> Result<CommandOutput, CommandError> {
        let bookmark = match input {
            Some(CommandInput::Bookmark(b)) => b,
            _ => return Err(CommandError::MissingInput("bookmark data")),
        };

        let mut data = Record::new();
        data.insert("title".to_string(), Value::Text(bookmark.title().to_string()));
        data.insert("url".to_string(), Value::Text(bookmark.url().to_string()));
        data.insert(
            "notes".to_string(),
            bookmark
                .notes()
                .map_or(Value::Null, |n| Value::Text(n.to_string())),
        );
        data.insert("date_added".to_string(), Value::Text(Self::now()));

        let id = self.db.add(BOOKMARKS_TABLE, &data)?;
        info!(id, url = bookmark.url(), "bookmark added");
        Ok(CommandOutput::Message("Bookmark added!".to_string()))
    }
}

/// Lists every bookmark ordered by a fixed column.
pub struct ListBookmarksCommand<'a> {
    db: &'a Database,
    order_by: String,
}

impl<'a> ListBookmarksCommand<'a> {
    /// Lists ordered ascending by `order_by`.
    pub fn new(db: &'a Database, order_by: impl Into<String>) -> Self {
        Self {
            db,
            order_by: order_by.into(),
        }
    }

    /// Lists ordered by `date_added`.
    pub fn default_order(db: &'a Database) -> Self {
        Self::new(db, DEFAULT_ORDER_BY)
    }

    pub fn order_by(&self) -> &str {
        &self.order_by
    }
}

impl<'a> Command for ListBookmarksCommand<'a> {
    fn execute(&self, _input: Option<CommandInput>) -> Result<CommandOutput, CommandError> {
        let columns: Vec<&str> = BOOKMARK_COLUMNS.iter().map(|(name, _)| *name).collect();
        let bookmarks = self.db.select_map(
            BOOKMARKS_TABLE,
            Some(columns.as_slice()),
            Some(self.order_by.as_str()),
            Bookmark::from_row,
        )?;
        Ok(CommandOutput::Bookmarks(bookmarks))
    }
}

/// Deletes the bookmark with the given id. Absent ids are a no-op.
pub struct DeleteBookmarkCommand<'a> {
    db: &'a Database,
}

impl<'a> DeleteBookmarkCommand<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

impl<'a> Command for DeleteBookmarkCommand<'a> {
    fn execute(&self, input: Option<CommandInput>) -> Result<CommandOutput, CommandError> {
        let id = match input {
            Some(CommandInput::Id(id)) => id,
            _ => return Err(CommandError::MissingInput("bookmark id")),
        };

        let mut criteria = Record::new();
        criteria.insert("id".to_string(), Value::Integer(id));
        let removed = self.db.delete(BOOKMARKS_TABLE, &criteria)?;
        info!(id, removed, "bookmark delete");
        Ok(CommandOutput::Message("Bookmark deleted!".to_string()))
    }
}

/// Exits the process with status 0. Never returns to the caller.
#[derive(Default)]
pub struct QuitCommand;

impl QuitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for QuitCommand {
    fn execute(&self, _input: Option<CommandInput>) -> Result<CommandOutput, CommandError> {
        info!("quit");
        std::process::exit(0)
    }
}
