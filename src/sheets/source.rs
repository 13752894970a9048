// src/sheets/source.rs
//! Where grids come from: the spreadsheet endpoint or a JSON dump on disk.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use super::sheet_grid_data::SheetGridData;

/// Path segment the endpoint serves the whole sheet under.
pub const ALL_ROWS_SEGMENT: &str = "all";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Grid endpoint returned HTTP {0}")]
    Status(u16),

    #[error("I/O error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed grid payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub enum GridSource {
    /// `GET <endpoint>/<key>` returning `{ "values": [[...]] }`.
    Http {
        endpoint: String,
        timeout: Option<Duration>,
    },
    /// A saved payload; every key reads the same file.
    File { path: PathBuf },
}

impl GridSource {
    pub fn http(endpoint: impl Into<String>) -> Self {
        GridSource::Http {
            endpoint: endpoint.into(),
            timeout: None,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        GridSource::File { path: path.into() }
    }

    /// Rows for one page. The endpoint may narrow the sheet by `slug`.
    pub async fn fetch(&self, slug: &str) -> Result<SheetGridData, SourceError> {
        match self {
            GridSource::Http { endpoint, timeout } => {
                fetch_http(endpoint, slug, *timeout).await
            }
            GridSource::File { path } => read_file(path).await,
        }
    }

    /// Rows for the whole sheet.
    pub async fn fetch_all(&self) -> Result<SheetGridData, SourceError> {
        self.fetch(ALL_ROWS_SEGMENT).await
    }
}

/// `endpoint` with `segment` appended as a single percent-encoded path segment.
pub fn segment_url(endpoint: &str, segment: &str) -> Result<reqwest::Url, SourceError> {
    let invalid = |reason: String| SourceError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };
    let mut url = reqwest::Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("cannot be a base URL".to_string()))?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}

async fn fetch_http(
    endpoint: &str,
    slug: &str,
    timeout: Option<Duration>,
) -> Result<SheetGridData, SourceError> {
    let url = segment_url(endpoint, slug)?;
    debug!("Fetching grid from {}", url);

    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let response = builder.build()?.get(url.clone()).send().await?;

    if !response.status().is_success() {
        return Err(SourceError::Status(response.status().as_u16()));
    }

    let body = response.text().await?;
    let data = SheetGridData::from_json_str(&body)?;
    info!("Fetched {} row(s) from {}", data.len(), url);
    Ok(data)
}

async fn read_file(path: &Path) -> Result<SheetGridData, SourceError> {
    debug!("Reading grid from {:?}", path);
    let body = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let data = SheetGridData::from_json_str(&body)?;
    info!("Read {} row(s) from {:?}", data.len(), path);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_becomes_one_segment() {
        let url = segment_url("https://sheets.example.com/google-sheets", "nvidia").unwrap();
        assert_eq!(url.as_str(), "https://sheets.example.com/google-sheets/nvidia");
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        let url = segment_url("https://sheets.example.com/google-sheets/", "all").unwrap();
        assert_eq!(url.as_str(), "https://sheets.example.com/google-sheets/all");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let url = segment_url("https://sheets.example.com/g", "a/b c?").unwrap();
        assert_eq!(url.as_str(), "https://sheets.example.com/g/a%2Fb%20c%3F");
    }

    #[test]
    fn bad_endpoints_are_rejected() {
        assert!(matches!(
            segment_url("not a url", "x"),
            Err(SourceError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            segment_url("mailto:someone@example.com", "x"),
            Err(SourceError::InvalidEndpoint { .. })
        ));
    }
}
