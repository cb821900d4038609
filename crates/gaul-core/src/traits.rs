// crates/gaul-core/src/traits.rs

use serde::{Deserialize, Serialize};

/// Storage backend for strings used by the reference table.
///
/// This abstraction allows the crate to swap how textual data is stored
/// internally (for example to use more compact types) without changing the
/// public API of accessors that return `&str` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and ensure the
/// associated type can be serialized/deserialized so tables can be cached
/// via bincode.
pub trait GaulBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;

    fn str_from(s: &str) -> Self::Str;

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }
}

/// Default backend: plain `String`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

impl GaulBackend for DefaultBackend {
    type Str = String;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }
}

/// Convenient alias used in the demos.
pub type StandardBackend = DefaultBackend;
