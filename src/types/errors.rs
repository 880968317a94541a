use std::fmt;
use std::io;

// === DatabaseError ===

/// Errors raised by the storage gateway.
#[derive(Debug)]
pub enum DatabaseError {
    /// The underlying SQLite call failed (constraint violation, I/O, bad SQL).
    Sqlite(rusqlite::Error),
    /// A table or column name is not a plain SQL identifier.
    InvalidIdentifier(String),
    /// A statement was requested with no columns or values.
    EmptyRecord(String),
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseError::Sqlite(e) => write!(f, "Database error: {}", e),
            DatabaseError::InvalidIdentifier(name) => {
                write!(f, "Invalid SQL identifier: {}", name)
            }
            DatabaseError::EmptyRecord(table) => {
                write!(f, "No columns given for table: {}", table)
            }
        }
    }
}

impl std::error::Error for DatabaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatabaseError::Sqlite(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(e: rusqlite::Error) -> Self {
        DatabaseError::Sqlite(e)
    }
}

// === CommandError ===

/// Errors raised while executing a command.
#[derive(Debug)]
pub enum CommandError {
    /// The command needs input and none (or the wrong kind) was supplied.
    MissingInput(&'static str),
    /// A required bookmark field was empty.
    EmptyField(&'static str),
    /// The storage gateway rejected the operation.
    Database(DatabaseError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::MissingInput(what) => write!(f, "Missing command input: {}", what),
            CommandError::EmptyField(field) => write!(f, "Required field is empty: {}", field),
            CommandError::Database(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DatabaseError> for CommandError {
    fn from(e: DatabaseError) -> Self {
        CommandError::Database(e)
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === MenuError ===

/// Errors raised by the interactive menu.
#[derive(Debug)]
pub enum MenuError {
    /// Reading from or writing to the terminal failed.
    Io(io::Error),
    /// Input ended while a prompt was waiting for an answer.
    EndOfInput,
    /// The chosen command failed.
    Command(CommandError),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::Io(e) => write!(f, "Terminal I/O error: {}", e),
            MenuError::EndOfInput => write!(f, "Input closed"),
            MenuError::Command(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for MenuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MenuError::Io(e) => Some(e),
            MenuError::Command(e) => Some(e),
            MenuError::EndOfInput => None,
        }
    }
}

impl From<io::Error> for MenuError {
    fn from(e: io::Error) -> Self {
        MenuError::Io(e)
    }
}

impl From<CommandError> for MenuError {
    fn from(e: CommandError) -> Self {
        MenuError::Command(e)
    }
}
