// src/sheets/header_index.rs
use std::collections::HashMap;

/// Trim and lowercase, the form in which lookup keys, lookup cells and toggle
/// markers are compared.
pub fn normalize_cell(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Header name -> column position, built once per grid.
///
/// Names map to their first occurrence so a repeated header behaves like a
/// left-to-right `indexOf`.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn new(headers: &[String]) -> Self {
        let mut positions = HashMap::with_capacity(headers.len());
        for (idx, name) in headers.iter().enumerate() {
            positions.entry(name.clone()).or_insert(idx);
        }
        Self { positions }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }
}
