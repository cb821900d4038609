// crates/gaul-core/src/compat.rs

//! Deprecated aliases kept for callers of the pre-0.3 surface. Thin
//! forwarders only; no logic lives here.

use crate::api;
use crate::error::Result;
use crate::items::{BoundaryProvider, FeatureSet, ItemsQuery};
use crate::model::{NameSet, NamesQuery};

/// Return the list of names available in an administrative layer using the
/// name or the administrative code.
#[deprecated(since = "0.3.0", note = "use `api::resolve_names` instead")]
pub fn get_names(
    name: &str,
    admin: &str,
    content_level: Option<u8>,
    complete: bool,
) -> Result<NameSet> {
    api::resolve_names(&NamesQuery {
        name: name.to_string(),
        admin: admin.to_string(),
        content_level,
        complete,
    })
}

/// Return the requested administrative boundaries using the name or the
/// administrative code.
#[deprecated(since = "0.3.0", note = "use `api::resolve_items` instead")]
pub fn get_items<P: BoundaryProvider>(
    provider: &P,
    name: &[&str],
    admin: &[&str],
    content_level: Option<u8>,
) -> Result<FeatureSet> {
    api::resolve_items(
        provider,
        &ItemsQuery {
            name: name.iter().map(|s| s.to_string()).collect(),
            admin: admin.iter().map(|s| s.to_string()).collect(),
            content_level,
        },
    )
}
