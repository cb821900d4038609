// crates/gaul-core/src/model/resolve.rs

//! The resolution core: locate a name or GAUL code in the reference table,
//! detect its administrative level, apply the level-clamping policy and
//! project the matched region to (name, code) pairs.

use super::table::{GaulTable, LEVELS};
use crate::error::{GaulError, Result};
use crate::loader::Continents;
use crate::suggest::close_matches;
use crate::text::{capitalize, fold_key};
use crate::traits::GaulBackend;
use std::collections::HashSet;
use std::fmt;

/// A resolution request.
///
/// Exactly one of `name`/`admin` may be set; both empty means "the whole
/// table" (every country, unless `content_level` says otherwise).
#[derive(Debug, Clone, Default)]
pub struct NamesQuery {
    /// Name of an administrative area. Cannot be set along with `admin`.
    pub name: String,
    /// GAUL code of an administrative area. Cannot be set along with `name`.
    pub admin: String,
    /// Level at which results are expressed. `None` infers the level of the
    /// matched area.
    pub content_level: Option<u8>,
    /// Keep all hierarchy columns in the output instead of the two
    /// projected ones.
    pub complete: bool,
}

/// One resolved (name, code) pair at `level`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRow {
    pub level: u8,
    pub name: String,
    pub code: String,
    /// All columns of the backing row when `complete` was requested.
    pub complete: Option<CompleteRow>,
}

/// Full hierarchy columns of a matched row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteRow {
    pub names: [String; LEVELS],
    pub codes: [String; LEVELS],
    pub extra: Vec<(String, String)>,
}

/// Non-fatal fallbacks applied during content-level resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// The requested level is higher in the hierarchy than the matched area;
    /// the result falls back to the area's own level.
    CoarserThanArea { requested: u8, level: u8 },
    /// The requested level is deeper than the data available inside the
    /// matched area; the result falls back to the deepest populated level.
    DeeperThanAvailable { requested: u8, max_level: u8 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::CoarserThanArea { requested, level } => write!(
                f,
                "The requested level ({requested}) is higher than the area ({level}). Fallback to {level}."
            ),
            Warning::DeeperThanAvailable {
                requested,
                max_level,
            } => write!(
                f,
                "The requested level ({requested}) is higher than the max level in this area ({max_level}). Fallback to {max_level}."
            ),
        }
    }
}

/// The outcome of a resolution: deduplicated rows plus any level fallbacks.
///
/// Guarantees: no duplicate (name, code) pairs, no blank names.
#[derive(Debug, Clone, Default)]
pub struct NameSet {
    pub rows: Vec<NameRow>,
    pub warnings: Vec<Warning>,
}

impl NameSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The common level of all rows, or `None` when a union mixed levels
    /// (possible for continent queries whose members clamp differently).
    pub fn level(&self) -> Option<u8> {
        let mut levels = self.rows.iter().map(|r| r.level);
        let first = levels.next()?;
        levels.all(|l| l == first).then_some(first)
    }

    /// Codes parsed for the boundary-fetch layer, grouped by level in order
    /// of first appearance.
    pub fn codes_by_level(&self) -> Result<Vec<(u8, Vec<i64>)>> {
        let mut out: Vec<(u8, Vec<i64>)> = Vec::new();
        for row in &self.rows {
            let code = row
                .code
                .parse::<i64>()
                .map_err(|_| GaulError::BadCode(row.code.clone()))?;
            match out.iter_mut().find(|(l, _)| *l == row.level) {
                Some((_, codes)) => codes.push(code),
                None => out.push((row.level, vec![code])),
            }
        }
        Ok(out)
    }

    /// Append another resolution, keeping row order and deduplicating the
    /// recorded warnings.
    pub fn merge(&mut self, other: NameSet) {
        self.rows.extend(other.rows);
        for w in other.warnings {
            if !self.warnings.contains(&w) {
                self.warnings.push(w);
            }
        }
    }
}

impl<B: GaulBackend> GaulTable<B> {
    /// Resolve a query against the table.
    ///
    /// The level of the requested area is identified on the fly: names are
    /// searched across the `gaul{0,1,2}_name` columns, codes across the
    /// `gaul{0,1,2}_code` columns, case- and accent-insensitively. A name
    /// matching a continent of `continents` is substituted by the continent's
    /// member country codes and resolved as their union.
    pub fn resolve(&self, q: &NamesQuery, continents: &Continents) -> Result<NameSet> {
        // sanitary check on parameters
        if !q.name.is_empty() && !q.admin.is_empty() {
            return Err(GaulError::InvalidQuery(
                "\"name\" and \"admin\" cannot be set at the same time".into(),
            ));
        }

        // nothing requested: the world dataset
        if q.name.is_empty() && q.admin.is_empty() {
            let rows: Vec<usize> = (0..self.len()).collect();
            return Ok(self.resolve_region(&rows, 0, q.content_level, q.complete));
        }

        // continents are grouped country codes, not a level of the table
        if !q.name.is_empty() {
            if let Some(members) = continents.get(&q.name) {
                let mut set = NameSet::default();
                for code in members {
                    set.merge(self.resolve_one(code, false, q.content_level, q.complete)?);
                }
                return Ok(set);
            }
        }

        let (id, is_name) = if q.name.is_empty() {
            (q.admin.as_str(), false)
        } else {
            (q.name.as_str(), true)
        };
        self.resolve_one(id, is_name, q.content_level, q.complete)
    }

    /// Resolve a single id (one name or one code).
    fn resolve_one(
        &self,
        id: &str,
        is_name: bool,
        content_level: Option<u8>,
        complete: bool,
    ) -> Result<NameSet> {
        let folded = fold_key(id);

        // the leftmost level column containing the id decides the native
        // level: descendant rows repeat their ancestors' names and codes
        let matched_level = (0..LEVELS).find(|&level| {
            self.column(is_name, level)
                .iter()
                .any(|v| fold_key(v.as_ref()) == folded)
        });
        let Some(level) = matched_level else {
            return Err(self.not_found(id, is_name));
        };

        let rows = self.matching_rows(is_name, level, &folded);
        Ok(self.resolve_region(&rows, level as u8, content_level, complete))
    }

    /// Clamp the content level inside the matched region and project it.
    fn resolve_region(
        &self,
        rows: &[usize],
        matched_level: u8,
        content_level: Option<u8>,
        complete: bool,
    ) -> NameSet {
        // deepest level for which the region has any data
        let mut max_level = 0u8;
        for level in (0..LEVELS).rev() {
            if rows.iter().any(|&i| !self.name(level, i).is_empty()) {
                max_level = level as u8;
                break;
            }
        }

        let mut warnings = Vec::new();
        let mut level = content_level.unwrap_or(matched_level);
        if level < matched_level {
            let w = Warning::CoarserThanArea {
                requested: level,
                level: matched_level,
            };
            tracing::warn!("{w}");
            warnings.push(w);
            level = matched_level;
        }
        if level > max_level {
            let w = Warning::DeeperThanAvailable {
                requested: level,
                max_level,
            };
            tracing::warn!("{w}");
            warnings.push(w);
            level = max_level;
        }

        NameSet {
            rows: self.project(rows, level, complete),
            warnings,
        }
    }

    /// Select the (name, code) pair at `level` from the region rows,
    /// dropping blanks (ancestors whose hierarchy does not reach `level`)
    /// and duplicate pairs, in table order.
    fn project(&self, rows: &[usize], level: u8, complete: bool) -> Vec<NameRow> {
        let l = level as usize;
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for &i in rows {
            let name = self.name(l, i);
            if name.is_empty() {
                continue;
            }
            let code = self.code(l, i);
            if !seen.insert((name.to_string(), code.to_string())) {
                continue;
            }
            out.push(NameRow {
                level,
                name: name.to_string(),
                code: code.to_string(),
                complete: complete.then(|| self.complete_row(i)),
            });
        }
        out
    }

    fn complete_row(&self, row: usize) -> CompleteRow {
        CompleteRow {
            names: std::array::from_fn(|level| self.name(level, row).to_string()),
            codes: std::array::from_fn(|level| self.code(level, row).to_string()),
            extra: self.extras[row]
                .iter()
                .map(|(k, v)| (k.clone(), B::str_to_string(v)))
                .collect(),
        }
    }

    /// Build the `NotFound` error: pool every distinct value across the
    /// three searched columns and keep the 5 closest matches, re-cased to
    /// the query style (capitalized names, upper-case codes).
    fn not_found(&self, id: &str, is_name: bool) -> GaulError {
        let mut seen = HashSet::new();
        let mut pool = Vec::new();
        for level in 0..LEVELS {
            for v in self.column(is_name, level) {
                let folded = fold_key(v.as_ref());
                if !folded.is_empty() && seen.insert(folded.clone()) {
                    pool.push(folded);
                }
            }
        }

        let suggestions = close_matches(&fold_key(id), &pool, 5)
            .into_iter()
            .map(|s| {
                if is_name {
                    capitalize(&s)
                } else {
                    s.to_uppercase()
                }
            })
            .collect();
        GaulError::NotFound {
            id: id.to_string(),
            suggestions,
        }
    }
}
