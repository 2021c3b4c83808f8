//! # Iterator Pattern
//!
//! A small demonstration of the classic two-interface Iterator design
//! pattern: traversal logic lives behind a [`Cursor`] trait, collection
//! storage behind an [`Iterable`] trait, and a client walks any iterable
//! through those traits alone.
//!
//! ## Pieces
//!
//! 1. **Cursor / Iterable traits** - the abstract contracts every
//!    concrete collection/cursor pair must satisfy
//! 2. **SequenceCollection / SequenceCursor** - a `Vec`-backed collection
//!    and the borrowing cursor it manufactures
//! 3. **Traversal client** - walks a `&dyn Iterable` with no knowledge of
//!    the concrete collection type
//!
//! ## Running the demo
//!
//! ```bash
//! cargo run --bin iterator_demo
//! ```

mod cursor;
mod sequence;
mod traverse;

pub use cursor::{Cursor, CursorError, Iterable};
pub use sequence::{SequenceCollection, SequenceCursor};
pub use traverse::{traverse, write_lines, TraverseError};
