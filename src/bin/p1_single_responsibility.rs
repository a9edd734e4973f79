//! Pattern 1: Single Responsibility
//!
//! Run with: cargo run --bin p1_single_responsibility

use colored::Colorize;
use solid_patterns::solid::single_responsibility::{persistence, Journal};

fn main() -> solid_patterns::Result<()> {
    solid_patterns::init()?;

    println!("{}", "=== Journal ===".bold().cyan());
    let mut journal = Journal::new();
    journal.add_entry("Woke up");
    journal.add_entry("Brushed my teeth");
    let count = journal.add_entry("Went for a walk");
    println!("{} entries", count);

    let removed = journal.remove_entry(1)?;
    println!("Removed: {}", removed);
    println!("{}", journal);

    println!("\n{}", "=== Out of range removal ===".bold().cyan());
    match journal.remove_entry(5) {
        Ok(entry) => println!("Removed: {}", entry),
        Err(e) => println!("{}", e.to_string().red()),
    }

    // Saving is somebody else's job.
    println!("\n{}", "=== Persistence (separate module) ===".bold().cyan());
    let mut buffer = Vec::new();
    persistence::save(&journal, &mut buffer)?;
    println!("{}", String::from_utf8_lossy(&buffer));

    let restored = persistence::load(buffer.as_slice())?;
    println!("Restored {} entries intact: {}", restored.len(), restored == journal);

    Ok(())
}
