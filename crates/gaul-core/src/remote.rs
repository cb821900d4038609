// crates/gaul-core/src/remote.rs

//! HTTP boundary provider (blocking).
//!
//! Thin collaborator over a per-level feature endpoint. The endpoint is
//! expected to serve a GeoJSON FeatureCollection filtered by the `codes`
//! query parameter.

use crate::error::{GaulError, Result};
use crate::items::{BoundaryProvider, FeatureSet};

/// Default per-level asset URL template. `{}` is replaced by the level.
pub const DEFAULT_ASSET_URL: &str = "https://data.apps.fao.org/gaul/2015/level{}/features";

pub struct HttpBoundaryProvider {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpBoundaryProvider {
    /// `base_url` must contain a `{}` placeholder for the level.
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpBoundaryProvider {
            base_url: base_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpBoundaryProvider {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_URL)
    }
}

impl BoundaryProvider for HttpBoundaryProvider {
    fn fetch(&self, level: u8, codes: &[i64]) -> Result<FeatureSet> {
        let url = self.base_url.replace("{}", &level.to_string());
        let codes = codes
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let response = self
            .client
            .get(&url)
            .query(&[("codes", codes.as_str())])
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| GaulError::Fetch(e.to_string()))?;

        serde_json::from_reader(response).map_err(|e| GaulError::Fetch(e.to_string()))
    }
}
