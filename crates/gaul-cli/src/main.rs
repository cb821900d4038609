//! gaul-cli — Command-line interface for gaul-core
//!
//! This binary provides a simple way to inspect the bundled administrative
//! boundary table from your terminal. It supports printing basic
//! statistics, resolving an area by name or GAUL code, listing the
//! continent groupings, and showing close matches for a misspelled name.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ gaul-cli stats
//!
//! - Resolve an area by name (level detected on the fly)
//!   $ gaul-cli names --name singapore
//!
//! - List all regions of a country
//!   $ gaul-cli names --name France --level 1
//!
//! - Resolve by GAUL code, keeping the full hierarchy columns
//!   $ gaul-cli names --admin 2658 --complete
//!
//! - Show the continent groupings
//!   $ gaul-cli continents
//!
//! Data source
//! -----------
//!
//! By default, the CLI loads the compressed dataset bundled with the
//! `gaul-core` crate and automatically caches a binary version next to it
//! for fast subsequent runs. Use `--input <path>` to point to a custom
//! `.json.gz` dataset.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use gaul_core::model::NamesQuery;
use gaul_core::{Continents, DefaultTable, GaulError};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let table = match &args.input {
        Some(path) => DefaultTable::load_from_path(path)?,
        None => DefaultTable::load()?,
    };
    let continents = Continents::load()?;

    match args.command {
        Commands::Stats => {
            let stats = table.stats();
            println!("Table statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Regions: {}", stats.regions);
            println!("  Districts: {}", stats.districts);
        }

        Commands::Names {
            name,
            admin,
            level,
            complete,
        } => {
            let q = NamesQuery {
                name,
                admin,
                content_level: level,
                complete,
            };
            let set = table.resolve(&q, &continents)?;
            for w in &set.warnings {
                eprintln!("warning: {w}");
            }
            for row in &set.rows {
                match &row.complete {
                    Some(full) => {
                        let columns: Vec<String> = full
                            .names
                            .iter()
                            .zip(full.codes.iter())
                            .filter(|(n, _)| !n.is_empty())
                            .map(|(n, c)| format!("{n} ({c})"))
                            .collect();
                        println!("{}", columns.join(" / "));
                    }
                    None => println!("{} ({})", row.name, row.code),
                }
            }
        }

        Commands::Continents => {
            for (name, codes) in continents.iter() {
                println!("{name}: {}", codes.join(", "));
            }
        }

        Commands::Suggest { query } => {
            let q = NamesQuery {
                name: query.clone(),
                ..Default::default()
            };
            match table.resolve(&q, &continents) {
                Ok(set) => {
                    println!("\"{query}\" is a known area:");
                    for row in &set.rows {
                        println!("- {} ({})", row.name, row.code);
                    }
                }
                Err(GaulError::NotFound { suggestions, .. }) => {
                    println!("No area named \"{query}\". Closest matches:");
                    for s in suggestions {
                        println!("- {s}");
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}
