//! Basic usage example for gaul-rs
//!
//! This example demonstrates how to:
//! - Load the bundled reference table
//! - Resolve areas by name or GAUL code (the level is detected on the fly)
//! - Request a specific content level
//! - Use the continent groupings

use gaul_core::model::NamesQuery;
use gaul_core::{Continents, DefaultTable, Result};

fn main() -> Result<()> {
    println!("=== GAUL-RS Basic Usage Example ===\n");

    // Load the table
    println!("Loading the reference table...");
    let table = DefaultTable::load()?;
    let continents = Continents::load()?;
    println!("✓ Table loaded successfully\n");

    // Example 1: Table statistics
    println!("--- Example 1: Table statistics ---");
    let stats = table.stats();
    println!("Countries: {}", stats.countries);
    println!("Regions: {}", stats.regions);
    println!("Districts: {}", stats.districts);
    println!();

    // Example 2: Resolve a country by name
    println!("--- Example 2: Resolve a country by name ---");
    let q = NamesQuery {
        name: "Singapore".into(),
        ..Default::default()
    };
    for row in &table.resolve(&q, &continents)?.rows {
        println!("{} ({}) at level {}", row.name, row.code, row.level);
    }
    println!();

    // Example 3: List all districts of a country
    println!("--- Example 3: Districts of Singapore ---");
    let q = NamesQuery {
        name: "Singapore".into(),
        content_level: Some(1),
        ..Default::default()
    };
    for row in &table.resolve(&q, &continents)?.rows {
        println!("- {} ({})", row.name, row.code);
    }
    println!();

    // Example 4: Resolve by GAUL code
    println!("--- Example 4: Resolve by GAUL code ---");
    let q = NamesQuery {
        admin: "1501".into(),
        ..Default::default()
    };
    for row in &table.resolve(&q, &continents)?.rows {
        println!("{} ({}) at level {}", row.name, row.code, row.level);
    }
    println!();

    // Example 5: A whole continent at once
    println!("--- Example 5: Countries of Europe ---");
    let q = NamesQuery {
        name: "europe".into(),
        ..Default::default()
    };
    for row in &table.resolve(&q, &continents)?.rows {
        println!("- {} ({})", row.name, row.code);
    }
    println!();

    // Example 6: Level clamping with warnings
    println!("--- Example 6: Requesting a level the area does not have ---");
    let q = NamesQuery {
        name: "Monaco".into(),
        content_level: Some(2),
        ..Default::default()
    };
    let set = table.resolve(&q, &continents)?;
    for w in &set.warnings {
        println!("warning: {w}");
    }
    for row in &set.rows {
        println!("{} ({}) at level {}", row.name, row.code, row.level);
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
