// crates/gaul-core/src/items.rs

//! Composition of the resolver with the remote boundary dataset.
//!
//! The remote side is abstracted behind [`BoundaryProvider`]: given a level
//! and the resolved codes at that level, return the matching geometries.
//! The core performs one fetch per resolved id and merges the resulting
//! [`FeatureSet`]s by union; codes are unique per level, so the merge never
//! produces duplicates. Failures propagate immediately — no retries.

use crate::error::{GaulError, Result};
use crate::loader::Continents;
use crate::model::{GaulTable, NameSet, NamesQuery};
use crate::traits::GaulBackend;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One geographic feature returned by a boundary provider (GeoJSON shaped).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: serde_json::Map<String, Value>,
    #[serde(default)]
    pub geometry: Option<Value>,
}

/// A set of features.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FeatureSet {
    pub features: Vec<Feature>,
}

impl FeatureSet {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Set union by concatenation, preserving insertion order.
    pub fn merge(&mut self, other: FeatureSet) {
        self.features.extend(other.features);
    }
}

/// The remote per-level feature dataset, filtered by an "in-list" predicate
/// on the level's code attribute.
pub trait BoundaryProvider {
    fn fetch(&self, level: u8, codes: &[i64]) -> Result<FeatureSet>;
}

/// A boundary request. `name` and `admin` accept several ids at once.
#[derive(Debug, Clone, Default)]
pub struct ItemsQuery {
    /// Names of administrative areas. Cannot be set along with `admin`.
    pub name: Vec<String>,
    /// GAUL codes of administrative areas. Cannot be set along with `name`.
    pub admin: Vec<String>,
    /// Level of the returned features. `None` infers the level of each
    /// matched area.
    pub content_level: Option<u8>,
}

impl<B: GaulBackend> GaulTable<B> {
    /// Fetch the boundaries of the requested areas through `provider`.
    ///
    /// Each id is resolved independently; the FeatureSets are merged in
    /// input order. A single name equal to a continent is substituted by
    /// the continent's member country codes first.
    pub fn resolve_items<P: BoundaryProvider>(
        &self,
        provider: &P,
        q: &ItemsQuery,
        continents: &Continents,
    ) -> Result<FeatureSet> {
        let mut names = if q.name.is_empty() {
            vec![String::new()]
        } else {
            q.name.clone()
        };
        let mut admins = if q.admin.is_empty() {
            vec![String::new()]
        } else {
            q.admin.clone()
        };

        if names.iter().all(|s| s.is_empty()) && admins.iter().all(|s| s.is_empty()) {
            return Err(GaulError::InvalidQuery(
                "at least \"name\" or \"admin\" need to be set".into(),
            ));
        }

        // special parsing for continents: they are associated to the
        // countries by FAO, not a level of the table
        if names.len() == 1 {
            if let Some(codes) = continents.get(&names[0]) {
                admins = codes.to_vec();
                names = vec![String::new()];
            }
        }

        // one of the lists is normally all-empty; a pair with both sides
        // set fails inside the resolver
        let mut out = FeatureSet::default();
        for name in &names {
            for admin in &admins {
                let set = self.resolve_pair(name, admin, q.content_level, continents)?;
                for (level, codes) in set.codes_by_level()? {
                    out.merge(provider.fetch(level, &codes)?);
                }
            }
        }
        Ok(out)
    }

    /// Resolve one (name, admin) pair for the fetch layer.
    fn resolve_pair(
        &self,
        name: &str,
        admin: &str,
        content_level: Option<u8>,
        continents: &Continents,
    ) -> Result<NameSet> {
        // resolve once without a level to surface ambiguity before fetching
        let probe = self.resolve(
            &NamesQuery {
                name: name.into(),
                admin: admin.into(),
                ..Default::default()
            },
            continents,
        )?;
        if probe.len() > 1 {
            return Err(GaulError::NotUnique {
                name: name.to_string(),
                count: probe.len(),
            });
        }

        self.resolve(
            &NamesQuery {
                name: name.into(),
                admin: admin.into(),
                content_level,
                complete: false,
            },
            continents,
        )
    }
}
