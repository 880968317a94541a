//! SQL text generation for the storage gateway.
//!
//! Statements are built from table and column names only. Values never reach
//! this module: every generated statement uses numbered placeholders
//! (`?1`, `?2`, ...) that the caller binds. Identifiers cannot be bound, so
//! each one is checked to be a plain SQL identifier before it is spliced in.

use crate::types::errors::DatabaseError;

/// Returns `true` when `name` matches `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn identifier(name: &str) -> Result<&str, DatabaseError> {
    if is_identifier(name) {
        Ok(name)
    } else {
        Err(DatabaseError::InvalidIdentifier(name.to_string()))
    }
}

fn identifiers<'a, I>(names: I) -> Result<Vec<&'a str>, DatabaseError>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().map(identifier).collect()
}

/// `CREATE TABLE IF NOT EXISTS` from `(column, descriptor)` pairs.
///
/// Descriptors are schema text supplied by the program, not user data; they
/// are still refused if they could end the statement early.
pub fn create_table(table: &str, columns: &[(&str, &str)]) -> Result<String, DatabaseError> {
    let table = identifier(table)?;
    if columns.is_empty() {
        return Err(DatabaseError::EmptyRecord(table.to_string()));
    }

    let mut defs = Vec::with_capacity(columns.len());
    for (name, descriptor) in columns {
        let name = identifier(name)?;
        if descriptor.contains(';') || descriptor.contains("--") {
            return Err(DatabaseError::InvalidIdentifier(descriptor.to_string()));
        }
        defs.push(format!("{} {}", name, descriptor));
    }

    Ok(format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        table,
        defs.join(", ")
    ))
}

/// `INSERT INTO table (a, b) VALUES (?1, ?2)`.
pub fn insert<'a, I>(table: &str, columns: I) -> Result<String, DatabaseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let table = identifier(table)?;
    let columns = identifiers(columns)?;
    if columns.is_empty() {
        return Err(DatabaseError::EmptyRecord(table.to_string()));
    }

    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{}", i)).collect();
    Ok(format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders.join(", ")
    ))
}

/// `SELECT * FROM table [ORDER BY column]`, or the named columns when given.
pub fn select(
    table: &str,
    columns: Option<&[&str]>,
    order_by: Option<&str>,
) -> Result<String, DatabaseError> {
    let table = identifier(table)?;
    let projection = match columns {
        Some(cols) if !cols.is_empty() => identifiers(cols.iter().copied())?.join(", "),
        _ => "*".to_string(),
    };

    let mut sql = format!("SELECT {} FROM {}", projection, table);
    if let Some(column) = order_by {
        sql.push_str(" ORDER BY ");
        sql.push_str(identifier(column)?);
    }
    Ok(sql)
}

/// `DELETE FROM table WHERE a = ?1 AND b = ?2`.
///
/// An empty criteria list is refused rather than turned into an unfiltered
/// delete.
pub fn delete<'a, I>(table: &str, columns: I) -> Result<String, DatabaseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let table = identifier(table)?;
    let columns = identifiers(columns)?;
    if columns.is_empty() {
        return Err(DatabaseError::EmptyRecord(table.to_string()));
    }

    let predicates: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{} = ?{}", col, i + 1))
        .collect();
    Ok(format!(
        "DELETE FROM {} WHERE {}",
        table,
        predicates.join(" AND ")
    ))
}
