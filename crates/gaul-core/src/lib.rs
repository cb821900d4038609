// crates/gaul-core/src/lib.rs

//! Easy access to administrative boundaries defined by FAO GAUL 2015.
//!
//! The crate bundles a reference table listing every administrative unit up
//! to level 2 (country, region, district) together with a curated
//! continent-to-country grouping. The resolver identifies the level of a
//! requested name or GAUL code on the fly, validates it against the table
//! and returns the (name, code) pairs at the requested content level. The
//! [`items`] module composes the resolver with a remote boundary dataset
//! behind the [`BoundaryProvider`] trait.

pub mod api; // Process-cached convenience surface
pub mod compat; // Deprecated aliases of the pre-0.3 surface
pub mod error;
pub mod items;
pub mod loader; // The public loader
pub mod model;
#[cfg(feature = "fetch")]
pub mod remote;
pub mod suggest;
pub mod text;
pub mod traits;
// Shared Raw Input (used by the loader)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{GaulError, Result};
pub use crate::items::{BoundaryProvider, Feature, FeatureSet, ItemsQuery};
pub use crate::loader::Continents;
// Export the Model Types
pub use crate::model::{
    CompleteRow, DefaultTable, GaulTable, NameRow, NameSet, NamesQuery, TableStats, Warning,
    LEVELS,
};
// Export Text Utils
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::{DefaultBackend, GaulBackend, StandardBackend};
