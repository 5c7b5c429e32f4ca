//! Chapters command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{print_separator, truncate_string};

/// List every chapter of the book with its id and heading.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let book = ctx.book();

    println!("{}\n", book.title());
    println!("{:<8} {:<12} Title", "ID", "Chapter");
    print_separator(60);

    for chapter in book.chapters() {
        let (label, name) = chapter.heading();
        println!(
            "{:<8} {:<12} {}",
            truncate_string(&chapter.id, 8),
            truncate_string(label.unwrap_or("--"), 12),
            truncate_string(name, 38)
        );
    }

    Ok(())
}
