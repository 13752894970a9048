// src/sheets/mod.rs

// --- Pure grid handling ---
pub mod gallery;
pub mod header_index;
pub mod record;
pub mod resolve_options;
pub mod resolver;
pub mod sheet_grid_data;

// --- I/O around it ---
pub mod page;
pub mod source;

pub use gallery::{gallery, search, GalleryEntry, GalleryOptions};
pub use record::Record;
pub use resolve_options::ResolveOptions;
pub use resolver::{explain, resolve, Miss, Resolution};
pub use sheet_grid_data::SheetGridData;
pub use source::{GridSource, SourceError};
