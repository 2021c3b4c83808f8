// Concrete collection/cursor pair backed by a Vec
// Demonstrates a borrowing cursor whose validity is tied to its collection

use crate::cursor::{Cursor, CursorError, Iterable};

/// An insertion-ordered, duplicate-permitting collection of elements.
///
/// Grows via [`add`](SequenceCollection::add); elements are never removed.
#[derive(Debug, Clone, Default)]
pub struct SequenceCollection<T> {
    items: Vec<T>,
}

impl<T> SequenceCollection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        SequenceCollection { items: Vec::new() }
    }

    /// Appends an element at the end. Order of iteration is exactly
    /// insertion order.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> From<Vec<T>> for SequenceCollection<T> {
    fn from(items: Vec<T>) -> Self {
        SequenceCollection { items }
    }
}

impl<T> FromIterator<T> for SequenceCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SequenceCollection {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Iterable for SequenceCollection<T> {
    type Item = T;

    fn create_cursor(&self) -> Box<dyn Cursor<Item = T> + '_> {
        Box::new(SequenceCursor::new(&self.items))
    }
}

/// Cursor over a borrowed slice of elements.
///
/// Holds the slice plus a zero-based position; `position == len` means
/// exhausted, and exhaustion is terminal. The lifetime parameter keeps the
/// cursor from outliving (or racing a mutation of) the data it walks.
#[derive(Debug)]
pub struct SequenceCursor<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<'a, T> SequenceCursor<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        SequenceCursor { items, position: 0 }
    }

    /// Current zero-based position; equals the slice length once exhausted.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<'a, T> Cursor for SequenceCursor<'a, T> {
    type Item = T;

    fn current(&self) -> Result<&T, CursorError> {
        self.items.get(self.position).ok_or(CursorError::Exhausted {
            position: self.position,
            len: self.items.len(),
        })
    }

    fn advance(&mut self) -> bool {
        if self.has_more() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn has_more(&self) -> bool {
        self.position < self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_elements_in_insertion_order() {
        let mut collection = SequenceCollection::new();
        collection.add(10);
        collection.add(20);
        collection.add(30);

        let mut cursor = collection.create_cursor();
        let mut seen = Vec::new();
        while cursor.has_more() {
            seen.push(*cursor.current().unwrap());
            cursor.advance();
        }

        assert_eq!(seen, vec![10, 20, 30]);
        assert!(!cursor.has_more());
    }

    #[test]
    fn empty_collection_cursor_is_immediately_exhausted() {
        let collection: SequenceCollection<i32> = SequenceCollection::new();
        let cursor = collection.create_cursor();

        assert!(!cursor.has_more());
        assert_eq!(
            cursor.current(),
            Err(CursorError::Exhausted { position: 0, len: 0 })
        );
    }

    #[test]
    fn cursors_from_same_collection_advance_independently() {
        let collection: SequenceCollection<_> = vec!["a", "b", "c"].into();

        let mut first = collection.create_cursor();
        let second = collection.create_cursor();

        first.advance();
        first.advance();

        assert_eq!(first.current().unwrap(), &"c");
        assert_eq!(second.current().unwrap(), &"a");
    }

    #[test]
    fn advance_on_exhausted_cursor_is_a_noop() {
        let collection: SequenceCollection<_> = vec![1].into();
        let mut cursor = collection.create_cursor();

        assert!(cursor.advance());
        assert!(!cursor.has_more());

        assert!(!cursor.advance());
        assert!(!cursor.advance());
        assert_eq!(
            cursor.current(),
            Err(CursorError::Exhausted { position: 1, len: 1 })
        );
    }

    #[test]
    fn position_tracks_advancement() {
        let data = [1, 2];
        let mut cursor = SequenceCursor::new(&data);

        assert_eq!(cursor.position(), 0);
        cursor.advance();
        assert_eq!(cursor.position(), 1);
        cursor.advance();
        assert_eq!(cursor.position(), 2);
        cursor.advance();
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn duplicates_are_kept_and_yielded() {
        let collection: SequenceCollection<_> = vec!["x", "x", "x"].into();
        assert_eq!(collection.len(), 3);

        let mut cursor = collection.create_cursor();
        let mut count = 0;
        while cursor.has_more() {
            assert_eq!(cursor.current().unwrap(), &"x");
            cursor.advance();
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn from_iterator_preserves_order() {
        let collection: SequenceCollection<_> = (1..=4).collect();
        assert_eq!(collection.len(), 4);

        let mut cursor = collection.create_cursor();
        assert_eq!(cursor.current().unwrap(), &1);
    }
}
