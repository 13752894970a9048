pub mod io;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use crate::sheets::{GalleryOptions, ResolveOptions};

/// Environment variable that overrides the saved endpoint.
pub const ENDPOINT_ENV: &str = "SHEETSLUG_ENDPOINT";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AppSettings {
    /// Base URL of the grid endpoint; slugs are appended as a path segment.
    pub endpoint: Option<String>,
    pub resolve: ResolveOptions,
    pub gallery: GalleryOptions,
    pub request_timeout_secs: Option<u64>,
}

impl AppSettings {
    /// Apply `SHEETSLUG_ENDPOINT` when it is set and non-blank.
    pub fn apply_env(mut self) -> Self {
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            self.apply_endpoint_override(Some(endpoint));
        }
        self
    }

    fn apply_endpoint_override(&mut self, endpoint: Option<String>) {
        let Some(endpoint) = endpoint.map(|e| e.trim().to_string()) else {
            return;
        };
        if endpoint.is_empty() {
            return;
        }
        info!("AppSettings: endpoint overridden by {}", ENDPOINT_ENV);
        self.endpoint = Some(endpoint);
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
