// src/cli/resolve.rs
use std::process::ExitCode;

use super::{CliError, NOT_FOUND_EXIT};
use crate::settings::AppSettings;
use crate::sheets::page::lookup_page;
use crate::sheets::{GridSource, Resolution};

pub async fn run(slug: &str, source: &GridSource, settings: &AppSettings) -> Result<ExitCode, CliError> {
    match lookup_page(source, slug, &settings.resolve).await? {
        Resolution::Found(record) => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(ExitCode::SUCCESS)
        }
        Resolution::NotFound => {
            eprintln!("404 - no page for '{}'", slug.trim());
            Ok(ExitCode::from(NOT_FOUND_EXIT))
        }
    }
}
