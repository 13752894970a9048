// src/sheets/gallery.rs
//! List view over a whole grid: every data row as a record, with the slug that
//! resolves back to it when the row has one.

use serde::{Deserialize, Serialize};

use super::record::Record;
use super::resolve_options::ResolveOptions;
use super::resolver::GridView;
use super::sheet_grid_data::SheetGridData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryOptions {
    /// Column whose value titles an entry, used for search.
    pub title_column: String,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            title_column: "name".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryEntry {
    /// Trimmed lookup-column cell. `None` when blank or absent: such a row
    /// has no page of its own.
    pub slug: Option<String>,
    pub record: Record,
}

impl GalleryEntry {
    pub fn title(&self, title_column: &str) -> Option<&str> {
        self.record.get(title_column)
    }
}

/// All data rows of `data`, filtered through the toggle row like [`super::resolve`].
///
/// A grid below the row floor lists nothing.
pub fn gallery(data: &SheetGridData, resolve_options: &ResolveOptions) -> Vec<GalleryEntry> {
    let Ok(view) = GridView::new(data, resolve_options) else {
        return Vec::new();
    };
    let slug_idx = view.index.position(&resolve_options.lookup_column_name);

    view.data_rows()
        .map(|row| {
            let slug = slug_idx
                .and_then(|idx| row.get(idx))
                .map(|cell| cell.trim())
                .filter(|cell| !cell.is_empty())
                .map(str::to_string);
            GalleryEntry {
                slug,
                record: view.build_record(row),
            }
        })
        .collect()
}

/// Entries whose title contains `query`, case-insensitively.
pub fn search<'a>(
    entries: &'a [GalleryEntry],
    query: &str,
    title_column: &str,
) -> Vec<&'a GalleryEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            if needle.is_empty() {
                return true;
            }
            entry
                .title(title_column)
                .is_some_and(|title| title.to_lowercase().contains(&needle))
        })
        .collect()
}
