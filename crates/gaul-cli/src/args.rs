use clap::{Parser, Subcommand};

/// CLI arguments for gaul-cli
#[derive(Debug, Parser)]
#[command(
    name = "gaul",
    version,
    about = "CLI for querying the FAO GAUL administrative boundary table"
)]
pub struct CliArgs {
    /// Path to a custom dataset (default: the bundled gaul_database.json.gz)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the table contents
    Stats,

    /// Resolve an administrative area by name or GAUL code
    Names {
        /// Name of an administrative area (cannot be set along with --admin)
        #[arg(long, default_value = "")]
        name: String,

        /// GAUL code of an administrative area (cannot be set along with --name)
        #[arg(long, default_value = "")]
        admin: String,

        /// Level of the returned content (0=country, 1=region, 2=district)
        #[arg(long)]
        level: Option<u8>,

        /// Keep the full hierarchy columns in the output
        #[arg(long)]
        complete: bool,
    },

    /// List the continent groupings
    Continents,

    /// Show the closest matches for a (possibly misspelled) name
    Suggest {
        /// Name to look up
        query: String,
    },
}
