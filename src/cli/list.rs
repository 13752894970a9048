// src/cli/list.rs
use std::process::ExitCode;

use super::CliError;
use crate::settings::AppSettings;
use crate::sheets::page::load_gallery;
use crate::sheets::{search, GridSource};

pub async fn run(source: &GridSource, settings: &AppSettings, query: Option<&str>) -> Result<ExitCode, CliError> {
    let entries = load_gallery(source, &settings.resolve).await?;
    let title_column = settings.gallery.title_column.as_str();

    for entry in search(&entries, query.unwrap_or_default(), title_column) {
        // Rows without a slug have no page; list them so gaps in the sheet show up.
        let slug = entry.slug.as_deref().unwrap_or("-");
        println!("{}\t{}", slug, entry.title(title_column).unwrap_or_default());
    }
    Ok(ExitCode::SUCCESS)
}
