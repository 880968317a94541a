//! Command layer for barky.
//!
//! Each user-facing operation is a struct implementing [`Command`]. Commands
//! borrow the [`Database`](crate::database::Database) owned by the caller and
//! return a [`CommandOutput`] for the presentation layer to render.

pub mod bookmark_commands;

pub use bookmark_commands::{
    AddBookmarkCommand, CreateBookmarksTableCommand, DeleteBookmarkCommand, ListBookmarksCommand,
    QuitCommand,
};

use crate::types::bookmark::{Bookmark, NewBookmark};
use crate::types::errors::CommandError;

/// Input handed to [`Command::execute`] by a preparation step.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandInput {
    /// A validated bookmark to add.
    Bookmark(NewBookmark),
    /// A bookmark identifier.
    Id(i64),
}

/// Result of running a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// A status line such as `"Bookmark added!"`.
    Message(String),
    /// Rows returned by a listing, in the requested order.
    Bookmarks(Vec<Bookmark>),
    /// The command completed and has nothing to report.
    Done,
}

/// The single contract shared by every command.
pub trait Command {
    /// Runs the command with the optional prepared input.
    fn execute(&self, input: Option<CommandInput>) -> Result<CommandOutput, CommandError>;
}
