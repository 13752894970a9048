// src/sheets/resolve_options.rs
use serde::{Deserialize, Serialize};

/// How a grid is read when resolving a lookup key to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Header of the column the lookup key is matched against.
    pub lookup_column_name: String,
    /// Row 1 holds per-column visibility markers instead of data.
    pub has_toggle_row: bool,
    /// Marker (case-insensitive) that makes a column visible.
    pub toggle_on_value: String,
    /// Extra row floor on top of the structural one. Older sheets required
    /// 2 or 3 rows before any lookup was attempted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rows: Option<usize>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            lookup_column_name: "slug".to_string(),
            has_toggle_row: false,
            toggle_on_value: "on".to_string(),
            min_rows: None,
        }
    }
}

impl ResolveOptions {
    pub fn with_toggle_row(mut self) -> Self {
        self.has_toggle_row = true;
        self
    }

    pub fn with_lookup_column(mut self, name: impl Into<String>) -> Self {
        self.lookup_column_name = name.into();
        self
    }

    /// Index of the first data row.
    pub fn data_start(&self) -> usize {
        if self.has_toggle_row {
            2
        } else {
            1
        }
    }

    /// Fewest rows a grid must have before it is looked at.
    pub fn row_floor(&self) -> usize {
        let structural = if self.has_toggle_row { 2 } else { 1 };
        self.min_rows.map_or(structural, |extra| extra.max(structural))
    }
}
