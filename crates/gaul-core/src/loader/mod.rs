// crates/gaul-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression, binary cache) and the
//! process-wide memoization of the reference table and the continent
//! grouping. Both are loaded lazily on first use and never mutated
//! afterwards; callers operate on filtered copies.

use crate::error::{GaulError, Result};
use crate::model::{build_table, DefaultTable, GaulTable, CACHE_SUFFIX};
use crate::raw::{ContinentsRaw, RowsRaw};
use crate::text::fold_key;
use crate::traits::DefaultBackend;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

static TABLE_CACHE: OnceCell<DefaultTable> = OnceCell::new();
static CONTINENT_CACHE: OnceCell<Continents> = OnceCell::new();

pub const DATA_REPO_URL: &str = "https://data.apps.fao.org/catalog/dataset/gaul-codes";

impl GaulTable<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    #[cfg(feature = "compact")]
    pub fn default_dataset_filename() -> &'static str {
        "gaul_database.json.gz"
    }

    #[cfg(not(feature = "compact"))]
    pub fn default_dataset_filename() -> &'static str {
        "gaul_database.json"
    }

    pub fn get_3rd_party_data_url() -> &'static str {
        DATA_REPO_URL
    }

    /// Load the bundled reference table.
    ///
    /// The table is read from disk exactly once per process; subsequent
    /// calls return the cached instance.
    pub fn load() -> Result<Self> {
        TABLE_CACHE.get_or_try_init(load_from_disk).cloned()
    }

    /// Parse a dataset from an explicit path.
    ///
    /// Bypasses the process cache but still uses the binary fast path next
    /// to the file (see [`GaulTable::load`]).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        load_path(path.as_ref())
    }
}

/// Internal helper that actually reads from disk and builds the table.
fn load_from_disk() -> Result<DefaultTable> {
    let dir = DefaultTable::default_data_dir();
    load_path(&dir.join(DefaultTable::default_dataset_filename()))
}

/// - Tries the bincode cache next to the source file.
/// - Falls back to the (gzipped) JSON source, builds the table, and writes
///   the cache back (best-effort).
fn load_path(json_path: &Path) -> Result<DefaultTable> {
    let bin_path = cache_path(json_path);

    // 1) binary cache first
    if let Ok(bytes) = std::fs::read(&bin_path) {
        if let Ok(table) = DefaultTable::from_bytes(&bytes) {
            tracing::debug!(path = %bin_path.display(), "loaded table from binary cache");
            return Ok(table);
        }
    }

    // 2) fall back to the JSON source
    let reader = open_stream(json_path)?;
    let raw: RowsRaw = serde_json::from_reader(reader)?;
    let table = build_table::<DefaultBackend>(raw);
    tracing::debug!(path = %json_path.display(), rows = table.len(), "built table from source");

    // 3) best-effort: write cache (ignore errors)
    if let Ok(bin) = table.to_bytes() {
        let _ = std::fs::write(&bin_path, bin);
    }

    Ok(table)
}

// -----------------------------------------------------------------------
// INTERNAL TRANSPORT HELPERS
// -----------------------------------------------------------------------

/// Opens a file, buffers it, and optionally wraps it in a Gzip decoder.
/// Returns a generic Reader so the caller doesn't care about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GaulError::Dataset(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Ok(Box::new(reader))
    }
}

fn cache_path(json_path: &Path) -> PathBuf {
    let filename = json_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    json_path.with_file_name(format!("{filename}.{CACHE_SUFFIX}"))
}

/// Curated grouping of level-0 codes by continent.
///
/// Continents are not a level of the GAUL hierarchy; they are shipped as a
/// separate JSON file associating each lowercase continent name with the
/// codes of its member countries. Every level-0 code of the reference table
/// belongs to exactly one continent.
#[derive(Clone, Debug)]
pub struct Continents {
    groups: ContinentsRaw,
}

impl Continents {
    pub fn default_filename() -> &'static str {
        "continents.json"
    }

    /// Load the bundled grouping, once per process.
    pub fn load() -> Result<Self> {
        CONTINENT_CACHE
            .get_or_try_init(|| {
                let path = DefaultTable::default_data_dir().join(Self::default_filename());
                Self::load_from_path(&path)
            })
            .cloned()
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            GaulError::Dataset(format!(
                "Continent grouping not found at {}: {}",
                path.display(),
                e
            ))
        })?;
        let groups: ContinentsRaw = serde_json::from_reader(BufReader::new(file))?;
        Ok(Continents { groups })
    }

    /// Build a grouping from an in-memory map (used by tests and tooling).
    pub fn from_groups(groups: ContinentsRaw) -> Self {
        Continents { groups }
    }

    /// Level-0 codes of `name`, if it is a known continent
    /// (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.groups.get(&fold_key(name)).map(|v| v.as_slice())
    }

    /// All (continent, codes) pairs in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(|s| s.as_str())
    }
}
