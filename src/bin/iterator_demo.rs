//! Iterator pattern demo
//! Example: a client walks a collection through the Cursor/Iterable traits
//!
//! Run with: cargo run --bin iterator_demo

use std::io;

use colored::Colorize;
use iterator_pattern::{traverse, write_lines, SequenceCollection, TraverseError};

fn main() -> Result<(), TraverseError> {
    let mut collection = SequenceCollection::new();
    collection.add("Element 1".to_string());
    collection.add("Element 2".to_string());
    collection.add("Element 3".to_string());

    println!("{}", "=== Traversing collection elements ===".bold());
    write_lines(&collection, &mut io::stdout())?;

    // Same collection, this time through the visitor form of the client.
    println!("\n{}", "=== Visitor traversal ===".bold());
    let mut count = 0;
    traverse(&collection, |element| {
        count += 1;
        println!("visit {}: {}", count, element);
    })?;

    println!("\n{} traversed {} elements", "✓".green(), count);
    Ok(())
}
