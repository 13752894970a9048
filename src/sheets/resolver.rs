// src/sheets/resolver.rs
//! Turns a header row, an optional toggle row and one matched data row into a
//! [`Record`].
//!
//! Everything here is a pure function of its inputs. Malformed grids are not
//! errors: they resolve to [`Resolution::NotFound`] exactly like a missing
//! slug, and telling "the fetch failed" apart from "no such page" is left to
//! the caller (see `sheets::page`).

use std::fmt;

use super::header_index::{normalize_cell, HeaderIndex};
use super::record::Record;
use super::resolve_options::ResolveOptions;
use super::sheet_grid_data::SheetGridData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(Record),
    NotFound,
}

impl Resolution {
    pub fn found(&self) -> Option<&Record> {
        match self {
            Resolution::Found(record) => Some(record),
            Resolution::NotFound => None,
        }
    }

    pub fn into_found(self) -> Option<Record> {
        match self {
            Resolution::Found(record) => Some(record),
            Resolution::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

/// Which `NotFound` case a lookup hit. Only for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Miss {
    TooFewRows { rows: usize, floor: usize },
    MissingLookupColumn,
    NoMatch,
}

impl fmt::Display for Miss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Miss::TooFewRows { rows, floor } => {
                write!(f, "grid has {} row(s), at least {} required", rows, floor)
            }
            Miss::MissingLookupColumn => write!(f, "lookup column not in header row"),
            Miss::NoMatch => write!(f, "no data row matches"),
        }
    }
}

/// Resolve `lookup_key` against the lookup column of `data`.
pub fn resolve(data: &SheetGridData, lookup_key: &str, options: &ResolveOptions) -> Resolution {
    match explain(data, lookup_key, options) {
        Ok(record) => Resolution::Found(record),
        Err(_) => Resolution::NotFound,
    }
}

/// Same lookup as [`resolve`], keeping the reason for a miss.
pub fn explain(
    data: &SheetGridData,
    lookup_key: &str,
    options: &ResolveOptions,
) -> Result<Record, Miss> {
    let view = GridView::new(data, options)?;
    let lookup_idx = view
        .index
        .position(&options.lookup_column_name)
        .ok_or(Miss::MissingLookupColumn)?;

    let wanted = normalize_cell(lookup_key);

    // First match wins; later duplicates are never looked at.
    let row = view
        .data_rows()
        .find(|row| {
            row.get(lookup_idx)
                .is_some_and(|cell| normalize_cell(cell) == wanted)
        })
        .ok_or(Miss::NoMatch)?;

    Ok(view.build_record(row))
}

/// A grid that passed the row floor, with its header index and toggle row split out.
pub(crate) struct GridView<'a> {
    pub(crate) headers: &'a [String],
    pub(crate) index: HeaderIndex,
    visible: Vec<bool>,
    rows: &'a [Vec<String>],
}

impl<'a> GridView<'a> {
    pub(crate) fn new(data: &'a SheetGridData, options: &ResolveOptions) -> Result<Self, Miss> {
        let floor = options.row_floor();
        if data.len() < floor {
            return Err(Miss::TooFewRows {
                rows: data.len(),
                floor,
            });
        }
        // floor >= 1 (>= 2 with a toggle row), so these rows exist.
        let headers = data.headers().unwrap_or_default();
        let visible = if options.has_toggle_row {
            let toggles = data.row(1).unwrap_or_default();
            let on = normalize_cell(&options.toggle_on_value);
            (0..headers.len())
                .map(|i| toggles.get(i).is_some_and(|t| normalize_cell(t) == on))
                .collect()
        } else {
            vec![true; headers.len()]
        };
        let start = options.data_start().min(data.len());

        Ok(Self {
            headers,
            index: HeaderIndex::new(headers),
            visible,
            rows: &data.grid[start..],
        })
    }

    pub(crate) fn data_rows(&self) -> impl Iterator<Item = &'a [String]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    pub(crate) fn is_visible(&self, column: usize) -> bool {
        self.visible.get(column).copied().unwrap_or(false)
    }

    pub(crate) fn build_record(&self, row: &[String]) -> Record {
        let mut record = Record::new();
        for (idx, header) in self.headers.iter().enumerate() {
            if !self.is_visible(idx) {
                continue;
            }
            let value = row.get(idx).map(String::as_str).unwrap_or_default();
            record.insert(header.as_str(), value);
        }
        record
    }
}
