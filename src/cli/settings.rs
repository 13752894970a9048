// src/cli/settings.rs
use std::process::ExitCode;

use super::CliError;
use crate::settings::{io as settings_io, AppSettings};

pub fn run(settings: &AppSettings, save: bool) -> Result<ExitCode, CliError> {
    println!("{}", serde_json::to_string_pretty(settings)?);
    if save {
        let path = settings_io::save_settings_to_file(settings)?;
        eprintln!("Saved to {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}
