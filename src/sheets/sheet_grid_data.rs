// src/sheets/sheet_grid_data.rs
use serde::{
    de::{self, Deserializer},
    Deserialize, Serialize,
};

/// Raw rows-of-cells as served by the spreadsheet endpoint.
///
/// Row 0 is the header row. Rows are allowed to be ragged; a cell past the end
/// of a row is treated as absent, which is not the same as an empty string.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetGridData {
    #[serde(rename = "values")]
    pub grid: Vec<Vec<String>>,
}

impl SheetGridData {
    /// Convenience for literals in tests and call sites that already hold `&str`s.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            grid: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn from_json_str(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }

    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.grid.get(index).map(Vec::as_slice)
    }

    pub fn headers(&self) -> Option<&[String]> {
        self.row(0)
    }
}

// The endpoint is loose about cell types: sheets hand back numbers, booleans and
// nulls alongside strings, and omit `values` entirely for an empty range.
impl<'de> Deserialize<'de> for SheetGridData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let Some(obj) = value.as_object() else {
            return Err(de::Error::custom(format!(
                "grid payload must be an object, got {}",
                value
            )));
        };
        let rows = match obj.get("values") {
            None | Some(serde_json::Value::Null) => return Ok(Self::default()),
            Some(serde_json::Value::Array(rows)) => rows,
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "`values` must be an array of rows, got {}",
                    other
                )))
            }
        };

        let mut grid = Vec::with_capacity(rows.len());
        for (row_idx, row) in rows.iter().enumerate() {
            match row {
                serde_json::Value::Array(cells) => {
                    grid.push(cells.iter().map(cell_to_string).collect());
                }
                serde_json::Value::Null => grid.push(Vec::new()),
                other => {
                    return Err(de::Error::custom(format!(
                        "row {} must be an array of cells, got {}",
                        row_idx, other
                    )))
                }
            }
        }
        Ok(Self { grid })
    }
}

fn cell_to_string(cell: &serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
