// crates/gaul-core/src/model/table.rs

use crate::raw::RowsRaw;
use crate::text::fold_key;
use crate::traits::{DefaultBackend, GaulBackend};
use bincode::Options;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Number of administrative levels in the GAUL hierarchy
/// (0 = country, 1 = region, 2 = district).
pub const LEVELS: usize = 3;

/// Deserialization guard against malformed cache files.
const CACHE_LIMIT: u64 = 64 * 1024 * 1024;

/// The reference table.
///
/// "Structure of Arrays": one column per (level, name|code) pair. The
/// hierarchy is denormalized — a row is one unit at its native (deepest)
/// level and repeats the names/codes of all its ancestors, so a flat row
/// scan with level-indexed column access replaces any tree structure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GaulTable<B: GaulBackend> {
    pub(crate) names: [Vec<B::Str>; LEVELS],
    pub(crate) codes: [Vec<B::Str>; LEVELS],
    /// Extra per-row attributes preserved for `complete` output.
    pub(crate) extras: Vec<Vec<(String, B::Str)>>,
}

/// Convenient alias for the default backend.
pub type DefaultTable = GaulTable<DefaultBackend>;

/// Aggregate statistics: distinct units per level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TableStats {
    pub countries: usize,
    pub regions: usize,
    pub districts: usize,
}

impl<B: GaulBackend> GaulTable<B> {
    /// Number of rows (units at their native level).
    pub fn len(&self) -> usize {
        self.names[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.names[0].is_empty()
    }

    /// Name of row `row` at `level`; empty if the row's hierarchy does not
    /// reach that level.
    pub fn name(&self, level: usize, row: usize) -> &str {
        self.names[level][row].as_ref()
    }

    /// Code of row `row` at `level`; empty under the same conditions as
    /// [`GaulTable::name`].
    pub fn code(&self, level: usize, row: usize) -> &str {
        self.codes[level][row].as_ref()
    }

    pub fn stats(&self) -> TableStats {
        let distinct = |level: usize| {
            self.codes[level]
                .iter()
                .map(|c| c.as_ref())
                .filter(|c| !c.is_empty())
                .collect::<BTreeSet<_>>()
                .len()
        };
        TableStats {
            countries: distinct(0),
            regions: distinct(1),
            districts: distinct(2),
        }
    }

    /// The name or code column searched at `level`.
    pub(crate) fn column(&self, is_name: bool, level: usize) -> &[B::Str] {
        if is_name {
            &self.names[level]
        } else {
            &self.codes[level]
        }
    }

    /// Reconstructs the table from the serialized binary cache format.
    pub fn from_bytes(data: &[u8]) -> std::result::Result<Self, bincode::Error> {
        bincode::DefaultOptions::new()
            .with_limit(CACHE_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)
    }

    /// Serializes the table into the binary cache format.
    pub fn to_bytes(&self) -> std::result::Result<Vec<u8>, bincode::Error> {
        bincode::DefaultOptions::new()
            .with_limit(CACHE_LIMIT)
            .serialize(self)
    }
}

/// Convert raw JSON rows into a `GaulTable` using the given backend.
pub fn build_table<B: GaulBackend>(raw: RowsRaw) -> GaulTable<B> {
    let mut names: [Vec<B::Str>; LEVELS] = std::array::from_fn(|_| Vec::with_capacity(raw.len()));
    let mut codes: [Vec<B::Str>; LEVELS] = std::array::from_fn(|_| Vec::with_capacity(raw.len()));
    let mut extras = Vec::with_capacity(raw.len());

    for row in raw {
        let columns = [
            (&row.gaul0_name, &row.gaul0_code),
            (&row.gaul1_name, &row.gaul1_code),
            (&row.gaul2_name, &row.gaul2_code),
        ];
        for (level, (name, code)) in columns.into_iter().enumerate() {
            names[level].push(B::str_from(name));
            codes[level].push(B::str_from(code));
        }
        extras.push(
            row.extra
                .into_iter()
                .map(|(k, v)| (k, B::str_from(&v)))
                .collect(),
        );
    }

    GaulTable {
        names,
        codes,
        extras,
    }
}

impl<B: GaulBackend> GaulTable<B> {
    /// Row indices whose column at `level` equals `folded_id` (the id must
    /// already be folded with [`fold_key`]).
    pub(crate) fn matching_rows(
        &self,
        is_name: bool,
        level: usize,
        folded_id: &str,
    ) -> Vec<usize> {
        self.column(is_name, level)
            .iter()
            .enumerate()
            .filter(|(_, v)| fold_key(v.as_ref()) == folded_id)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RowRaw;
    use std::collections::BTreeMap;

    fn row(cols: [&str; 6]) -> RowRaw {
        RowRaw {
            gaul0_name: cols[0].into(),
            gaul0_code: cols[1].into(),
            gaul1_name: cols[2].into(),
            gaul1_code: cols[3].into(),
            gaul2_name: cols[4].into(),
            gaul2_code: cols[5].into(),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn stats_count_distinct_codes_per_level() {
        let table = build_table::<DefaultBackend>(vec![
            row(["France", "85", "Bretagne", "1501", "Finistere", "15012"]),
            row(["France", "85", "Bretagne", "1501", "Morbihan", "15014"]),
            row(["Monaco", "153", "", "", "", ""]),
        ]);
        let stats = table.stats();
        assert_eq!(stats.countries, 2);
        assert_eq!(stats.regions, 1);
        assert_eq!(stats.districts, 2);
    }

    #[test]
    fn binary_roundtrip() {
        let table = build_table::<DefaultBackend>(vec![row([
            "Singapore",
            "269",
            "Jurong",
            "2661",
            "",
            "",
        ])]);
        let bytes = table.to_bytes().expect("serialize");
        let back = DefaultTable::from_bytes(&bytes).expect("deserialize");
        assert_eq!(back.len(), 1);
        assert_eq!(back.name(1, 0), "Jurong");
        assert_eq!(back.code(0, 0), "269");
    }
}
