//! Error handling example for gaul-rs
//!
//! This example demonstrates proper error handling and edge cases

use gaul_core::model::NamesQuery;
use gaul_core::{Continents, DefaultTable, GaulError, Result};

fn main() -> Result<()> {
    println!("=== GAUL-RS Error Handling Example ===\n");

    // Example 1: Handling table load errors
    println!("--- Example 1: Loading the table with error handling ---");
    let table = match DefaultTable::load() {
        Ok(table) => {
            println!("✓ Table loaded successfully ({} rows)", table.len());
            table
        }
        Err(e) => {
            eprintln!("✗ Failed to load the table: {e}");
            return Err(e);
        }
    };
    let continents = Continents::load()?;
    println!();

    // Example 2: Misspelled names come back with suggestions
    println!("--- Example 2: Misspelled name ---");
    let q = NamesQuery {
        name: "Franc".into(),
        ..Default::default()
    };
    match table.resolve(&q, &continents) {
        Ok(_) => println!("  Found (unexpected)"),
        Err(GaulError::NotFound { id, suggestions }) => {
            println!("  \"{id}\" is unknown; closest matches:");
            for s in suggestions {
                println!("  - {s}");
            }
        }
        Err(e) => return Err(e),
    }
    println!();

    // Example 3: name and admin are mutually exclusive
    println!("--- Example 3: Conflicting parameters ---");
    let q = NamesQuery {
        name: "Singapore".into(),
        admin: "269".into(),
        ..Default::default()
    };
    match table.resolve(&q, &continents) {
        Ok(_) => println!("  Resolved (unexpected)"),
        Err(e) => println!("  Rejected as expected: {e}"),
    }
    println!();

    // Example 4: Warnings are not errors
    println!("--- Example 4: Level fallback completes with a warning ---");
    let q = NamesQuery {
        admin: "2658".into(),
        content_level: Some(0),
        ..Default::default()
    };
    let set = table.resolve(&q, &continents)?;
    for w in &set.warnings {
        println!("  warning: {w}");
    }
    for row in &set.rows {
        println!("  {} ({}) at level {}", row.name, row.code, row.level);
    }

    Ok(())
}
