// crates/gaul-core/src/raw.rs

use serde::Deserialize;
use std::collections::BTreeMap;

/// Raw row structure as it comes from the bundled JSON.
/// NOTE: This type mirrors the external dataset and may be subject to that
/// dataset's license. We do *not* expose this type from the public API.
#[derive(Debug, Deserialize)]
pub struct RowRaw {
    #[serde(default)]
    pub gaul0_name: String,
    #[serde(default)]
    pub gaul0_code: String,
    #[serde(default)]
    pub gaul1_name: String,
    #[serde(default)]
    pub gaul1_code: String,
    #[serde(default)]
    pub gaul2_name: String,
    #[serde(default)]
    pub gaul2_code: String,
    /// Any extra columns are carried through for `complete` output.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

pub type RowsRaw = Vec<RowRaw>;

/// Raw continent grouping file: lowercase continent name → level-0 codes.
pub type ContinentsRaw = BTreeMap<String, Vec<String>>;
