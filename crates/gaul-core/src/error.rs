// crates/gaul-core/src/error.rs

use thiserror::Error;

/// Convenient alias used across the crate.
pub type Result<T> = std::result::Result<T, GaulError>;

/// Errors raised by the resolver, the loader and the boundary-fetch layer.
///
/// Level clamping is not an error: it is reported as [`Warning`] values on
/// the returned [`NameSet`] and logged through `tracing`.
///
/// [`Warning`]: crate::model::Warning
/// [`NameSet`]: crate::model::NameSet
#[derive(Error, Debug)]
pub enum GaulError {
    /// Both or neither of `name`/`admin` were set where exactly one is
    /// required.
    #[error("{0}")]
    InvalidQuery(String),

    /// The requested id is absent from every level column of the table.
    /// Carries the 5 closest matches, ordered by similarity.
    #[error("The requested \"{id}\" is not part of FAO GAUL 2015. The closest matches are: {}.", .suggestions.join(", "))]
    NotFound { id: String, suggestions: Vec<String> },

    /// A name matched more than one administrative unit at its level.
    #[error("The requested name (\"{name}\") is not unique ({count} results). To retrieve it, use the `admin` parameter instead.")]
    NotUnique { name: String, count: usize },

    /// An administrative code in the table is not numeric.
    #[error("invalid administrative code \"{0}\"")]
    BadCode(String),

    /// Backing file missing or unreadable.
    #[error("{0}")]
    Dataset(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Cache(#[from] bincode::Error),

    /// Error reported by a boundary provider.
    #[error("boundary fetch failed: {0}")]
    Fetch(String),
}
