// Abstract contracts of the Iterator pattern
// Demonstrates object-safe traits and dynamic dispatch at the seam

use thiserror::Error;

/// Raised when a cursor is queried after it has yielded its last element.
///
/// The classic formulation of the pattern leaves this case undefined; here
/// it is reported explicitly so callers can tell a protocol mistake from a
/// legitimate end of traversal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("cursor exhausted at position {position} (collection holds {len} elements)")]
    Exhausted { position: usize, len: usize },
}

/// A stateful position within some ordered sequence of elements.
///
/// Protocol: check [`has_more`](Cursor::has_more), read
/// [`current`](Cursor::current), then [`advance`](Cursor::advance).
/// A cursor never moves backwards and has no reset.
pub trait Cursor {
    type Item;

    /// The element at the cursor, or [`CursorError::Exhausted`] once the
    /// cursor has moved past the last element.
    fn current(&self) -> Result<&Self::Item, CursorError>;

    /// Moves the cursor one position forward. Returns `false` (and does
    /// nothing) if the cursor is already exhausted.
    fn advance(&mut self) -> bool;

    /// Whether `current()` would succeed right now.
    fn has_more(&self) -> bool;
}

/// A collection that can manufacture a fresh cursor over its contents.
///
/// Each call hands the caller an independent cursor starting at position 0;
/// cursors borrow the collection, so the borrow checker rules out mutating
/// the collection while any cursor is alive.
pub trait Iterable {
    type Item;

    fn create_cursor(&self) -> Box<dyn Cursor<Item = Self::Item> + '_>;
}
