use serde::{Deserialize, Serialize};

use super::errors::CommandError;

/// Represents a saved bookmark, one row of the `bookmarks` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub notes: Option<String>,
    pub date_added: String,
}

impl Bookmark {
    /// Reads a `bookmarks` row selected in declared column order.
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            url: row.get(2)?,
            notes: row.get(3)?,
            date_added: row.get(4)?,
        })
    }
}

/// Input for adding a bookmark. Title and URL are checked to be non-empty on
/// construction, so commands receiving one can trust it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    title: String,
    url: String,
    notes: Option<String>,
}

impl NewBookmark {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        notes: Option<String>,
    ) -> Result<Self, CommandError> {
        let title = title.into();
        let url = url.into();
        if title.trim().is_empty() {
            return Err(CommandError::EmptyField("title"));
        }
        if url.trim().is_empty() {
            return Err(CommandError::EmptyField("url"));
        }
        Ok(Self { title, url, notes })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}
