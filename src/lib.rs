// src/lib.rs
//! Resolve spreadsheet rows into page records.
//!
//! A sheet's first row names the columns, an optional second row switches
//! columns on or off, and every further row is one page keyed by its slug.
//! [`sheets::resolve`] does the lookup; the rest of the crate fetches grids,
//! persists settings and drives the `sheetslug` binary.

pub mod cli;
pub mod logging;
pub mod settings;
pub mod sheets;

pub use sheets::{resolve, Record, ResolveOptions, Resolution, SheetGridData};
