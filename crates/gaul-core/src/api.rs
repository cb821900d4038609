// crates/gaul-core/src/api.rs

//! Process-cached convenience surface over the resolver.
//!
//! These free functions load the bundled table and continent grouping
//! (memoized for the process lifetime) and forward to the [`GaulTable`]
//! methods. Use the methods directly when working with a custom dataset.
//!
//! [`GaulTable`]: crate::model::GaulTable

use crate::error::Result;
use crate::items::{BoundaryProvider, FeatureSet, ItemsQuery};
use crate::loader::Continents;
use crate::model::{DefaultTable, NameSet, NamesQuery};

/// Resolve names/codes against the bundled reference table.
pub fn resolve_names(q: &NamesQuery) -> Result<NameSet> {
    let table = DefaultTable::load()?;
    let continents = Continents::load()?;
    table.resolve(q, &continents)
}

/// Resolve boundaries through `provider` against the bundled table.
pub fn resolve_items<P: BoundaryProvider>(provider: &P, q: &ItemsQuery) -> Result<FeatureSet> {
    let table = DefaultTable::load()?;
    let continents = Continents::load()?;
    table.resolve_items(provider, q, &continents)
}
