// Traversal client: consumes any Iterable through the trait alone
// Demonstrates polymorphic use of the pattern with no concrete-type knowledge

use std::fmt::Display;
use std::io::{self, Write};

use thiserror::Error;

use crate::cursor::{CursorError, Iterable};

/// Failure while driving a traversal to an output sink.
#[derive(Error, Debug)]
pub enum TraverseError {
    #[error("cursor failed during traversal")]
    Cursor(#[from] CursorError),

    #[error("failed to write element")]
    Io(#[from] io::Error),
}

/// Walks `collection` front to back, calling `visit` on each element.
///
/// Knows nothing about the concrete collection type; everything happens
/// through [`Iterable`] and the cursor it hands out. Cursor failures
/// propagate to the caller unchanged.
pub fn traverse<T>(
    collection: &dyn Iterable<Item = T>,
    mut visit: impl FnMut(&T),
) -> Result<(), CursorError> {
    let mut cursor = collection.create_cursor();
    while cursor.has_more() {
        visit(cursor.current()?);
        cursor.advance();
    }
    Ok(())
}

/// Writes every element of `collection` to `out`, one per line.
pub fn write_lines<T: Display>(
    collection: &dyn Iterable<Item = T>,
    out: &mut impl Write,
) -> Result<(), TraverseError> {
    let mut cursor = collection.create_cursor();
    while cursor.has_more() {
        writeln!(out, "{}", cursor.current()?)?;
        cursor.advance();
    }
    Ok(())
}
