// src/sheets/page.rs
//! Fetch-then-resolve for callers rendering pages. Transport and decode failures
//! come back as `Err`; a sheet that simply has no such slug is `Ok(NotFound)`.

use tracing::{debug, info, warn};

use super::gallery::{gallery, GalleryEntry};
use super::resolve_options::ResolveOptions;
use super::resolver::{explain, Resolution};
use super::source::{GridSource, SourceError};

pub async fn lookup_page(
    source: &GridSource,
    slug: &str,
    options: &ResolveOptions,
) -> Result<Resolution, SourceError> {
    let data = source.fetch(slug).await.map_err(|e| {
        warn!("Could not load grid for '{}': {}", slug, e);
        e
    })?;

    match explain(&data, slug, options) {
        Ok(record) => {
            info!("Resolved '{}' ({} field(s))", slug, record.len());
            Ok(Resolution::Found(record))
        }
        Err(miss) => {
            debug!("No page for '{}': {}", slug, miss);
            Ok(Resolution::NotFound)
        }
    }
}

pub async fn load_gallery(
    source: &GridSource,
    resolve_options: &ResolveOptions,
) -> Result<Vec<GalleryEntry>, SourceError> {
    let data = source.fetch_all().await.map_err(|e| {
        warn!("Could not load gallery grid: {}", e);
        e
    })?;
    let entries = gallery(&data, resolve_options);
    info!("Gallery has {} entr(ies)", entries.len());
    Ok(entries)
}
