// tests/file_source.rs
// Page and gallery lookups against a grid saved on disk.

use std::path::PathBuf;

use sheetslug::sheets::page::{load_gallery, lookup_page};
use sheetslug::sheets::{search, GridSource, ResolveOptions, Resolution, SourceError};

const PAYLOAD: &str = r#"{
  "range": "Sheet1!A1:E5",
  "values": [
    ["slug", "name", "channel", "view", "note"],
    ["on", "on", "on", "on", "off"],
    ["rust-talk", "Rust Talk", "RustConf", "1200", "draft"],
    ["", "Async in Depth", "Tokio", "800", ""],
    ["intro", "Intro to Sheets", "Docs", 42]
  ]
}"#;

struct ScratchFile(PathBuf);

impl ScratchFile {
    fn with(contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("sheetslug-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        ScratchFile(path)
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn toggled() -> ResolveOptions {
    ResolveOptions::default().with_toggle_row()
}

#[tokio::test]
async fn page_found_in_file() {
    let file = ScratchFile::with(PAYLOAD);
    let source = GridSource::file(&file.0);

    let res = lookup_page(&source, "RUST-TALK", &toggled()).await.unwrap();
    let record = res.into_found().expect("rust-talk is in the sheet");
    assert_eq!(record.get("channel"), Some("RustConf"));
    assert!(!record.contains_key("note"));
}

#[tokio::test]
async fn page_missing_from_file_is_not_found() {
    let file = ScratchFile::with(PAYLOAD);
    let source = GridSource::file(&file.0);

    let res = lookup_page(&source, "nope", &toggled()).await.unwrap();
    assert_eq!(res, Resolution::NotFound);
}

#[tokio::test]
async fn unreadable_source_is_an_error_not_a_miss() {
    let source = GridSource::file(std::env::temp_dir().join(format!("sheetslug-missing-{}.json", uuid::Uuid::new_v4())));
    let err = lookup_page(&source, "rust-talk", &toggled()).await.unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
}

#[tokio::test]
async fn malformed_payload_is_a_decode_error() {
    let file = ScratchFile::with(r#"{"values": "not rows"}"#);
    let source = GridSource::file(&file.0);
    let err = lookup_page(&source, "x", &ResolveOptions::default()).await.unwrap_err();
    assert!(matches!(err, SourceError::Decode(_)));
}

#[tokio::test]
async fn empty_range_is_not_found() {
    let file = ScratchFile::with(r#"{"range": "Sheet1!A1:A1"}"#);
    let source = GridSource::file(&file.0);
    let res = lookup_page(&source, "x", &ResolveOptions::default()).await.unwrap();
    assert_eq!(res, Resolution::NotFound);
}

#[tokio::test]
async fn gallery_lists_every_row() {
    let file = ScratchFile::with(PAYLOAD);
    let source = GridSource::file(&file.0);

    let entries = load_gallery(&source, &toggled()).await.unwrap();
    let slugs: Vec<_> = entries.iter().map(|e| e.slug.as_deref()).collect();
    assert_eq!(slugs, [Some("rust-talk"), None, Some("intro")]);
    assert_eq!(entries[2].record.get("view"), Some("42"));

    let hits = search(&entries, "in", "name");
    let hit_titles: Vec<_> = hits.iter().filter_map(|e| e.title("name")).collect();
    assert_eq!(hit_titles, ["Async in Depth", "Intro to Sheets"]);
}

#[tokio::test]
async fn listed_slugs_open_their_pages() {
    let file = ScratchFile::with(PAYLOAD);
    let source = GridSource::file(&file.0);

    let entries = load_gallery(&source, &toggled()).await.unwrap();
    for slug in entries.iter().filter_map(|e| e.slug.as_deref()) {
        let res = lookup_page(&source, slug, &toggled()).await.unwrap();
        assert!(res.is_found(), "{} is listed but has no page", slug);
    }
}
