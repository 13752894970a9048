// src/cli/mod.rs
// Command-line front end over the grid source and resolver

pub mod list;
pub mod resolve;
pub mod settings;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::warn;

use crate::settings::{io as settings_io, AppSettings};
use crate::sheets::{GridSource, SourceError};

#[derive(Parser)]
#[command(name = "sheetslug")]
#[command(about = "Resolve spreadsheet rows into page records by slug", long_about = None)]
pub struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the record for one slug as JSON
    Resolve {
        /// Slug to look up (case and surrounding whitespace are ignored)
        slug: String,
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// List every visible row with its slug
    List {
        /// Only rows whose title contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Column used as the row title
        #[arg(long)]
        title_column: Option<String>,
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// Show the effective settings
    Settings {
        /// Write the effective settings back to the settings file
        #[arg(long)]
        save: bool,
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        lookup: LookupArgs,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct SourceArgs {
    /// Grid endpoint base URL
    #[arg(long, conflicts_with = "file")]
    pub endpoint: Option<String>,
    /// Read the grid payload from a JSON file instead
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct LookupArgs {
    /// Header of the slug column
    #[arg(long)]
    pub lookup_column: Option<String>,
    /// Treat row 2 of the sheet as the column visibility row
    #[arg(long)]
    pub toggle_row: bool,
    /// Marker that turns a column on in the visibility row
    #[arg(long)]
    pub toggle_on: Option<String>,
    /// Minimum number of rows before a lookup is attempted
    #[arg(long)]
    pub min_rows: Option<usize>,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("No grid source: pass --endpoint or --file, set {env}, or save an endpoint in settings")]
    NoSource { env: &'static str },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Settings error: {0}")]
    Settings(#[from] std::io::Error),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(2)
    }
}

/// Exit code for a lookup that ran but found nothing.
pub const NOT_FOUND_EXIT: u8 = 1;

pub async fn run(cli: Cli) -> Result<ExitCode, CliError> {
    match cli.command {
        Commands::Resolve { slug, source, lookup } => {
            let settings = effective_settings(&source, &lookup)?;
            resolve::run(&slug, &grid_source(&source, &settings)?, &settings).await
        }
        Commands::List {
            search,
            title_column,
            source,
            lookup,
        } => {
            let mut settings = effective_settings(&source, &lookup)?;
            if let Some(title_column) = title_column {
                settings.gallery.title_column = title_column;
            }
            let grid_source = grid_source(&source, &settings)?;
            list::run(&grid_source, &settings, search.as_deref()).await
        }
        Commands::Settings {
            save,
            source,
            lookup,
        } => {
            let settings = effective_settings(&source, &lookup)?;
            settings::run(&settings, save)
        }
    }
}

/// Saved settings, then `.env`/environment, then command-line flags.
pub fn effective_settings(source: &SourceArgs, lookup: &LookupArgs) -> Result<AppSettings, CliError> {
    let saved: AppSettings = settings_io::load_settings_from_file().or_else(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            // No config dir on this platform; run on defaults.
            warn!("{}", e);
            Ok(AppSettings::default())
        } else {
            Err(e)
        }
    })?;
    let mut settings = saved.apply_env();
    apply_flags(&mut settings, source, lookup);
    Ok(settings)
}

pub fn apply_flags(settings: &mut AppSettings, source: &SourceArgs, lookup: &LookupArgs) {
    if let Some(endpoint) = &source.endpoint {
        settings.endpoint = Some(endpoint.clone());
    }
    if let Some(secs) = source.timeout_secs {
        settings.request_timeout_secs = Some(secs);
    }
    if let Some(column) = &lookup.lookup_column {
        settings.resolve.lookup_column_name = column.clone();
    }
    if lookup.toggle_row {
        settings.resolve.has_toggle_row = true;
    }
    if let Some(on) = &lookup.toggle_on {
        settings.resolve.toggle_on_value = on.clone();
    }
    if let Some(min_rows) = lookup.min_rows {
        settings.resolve.min_rows = Some(min_rows);
    }
}

pub fn grid_source(source: &SourceArgs, settings: &AppSettings) -> Result<GridSource, CliError> {
    if let Some(path) = &source.file {
        return Ok(GridSource::file(path.clone()));
    }
    match &settings.endpoint {
        Some(endpoint) => Ok(GridSource::Http {
            endpoint: endpoint.clone(),
            timeout: settings.request_timeout(),
        }),
        None => Err(CliError::NoSource {
            env: crate::settings::ENDPOINT_ENV,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_settings() {
        let mut settings = AppSettings::default();
        settings.endpoint = Some("https://saved.test".to_string());
        let source = SourceArgs {
            endpoint: Some("https://flag.test".to_string()),
            timeout_secs: Some(3),
            ..Default::default()
        };
        let lookup = LookupArgs {
            lookup_column: Some("id".to_string()),
            toggle_row: true,
            toggle_on: Some("yes".to_string()),
            min_rows: Some(3),
        };
        apply_flags(&mut settings, &source, &lookup);

        assert_eq!(settings.endpoint.as_deref(), Some("https://flag.test"));
        assert_eq!(settings.request_timeout_secs, Some(3));
        assert_eq!(settings.resolve.lookup_column_name, "id");
        assert!(settings.resolve.has_toggle_row);
        assert_eq!(settings.resolve.toggle_on_value, "yes");
        assert_eq!(settings.resolve.row_floor(), 3);
    }

    #[test]
    fn file_wins_over_endpoint() {
        let mut settings = AppSettings::default();
        settings.endpoint = Some("https://saved.test".to_string());
        let source = SourceArgs {
            file: Some(PathBuf::from("grid.json")),
            ..Default::default()
        };
        assert!(matches!(
            grid_source(&source, &settings),
            Ok(GridSource::File { .. })
        ));
    }

    #[test]
    fn no_source_is_an_error() {
        let err = grid_source(&SourceArgs::default(), &AppSettings::default()).unwrap_err();
        assert!(matches!(err, CliError::NoSource { .. }));
    }

    #[test]
    fn parses_resolve_command() {
        let cli = Cli::try_parse_from([
            "sheetslug",
            "resolve",
            "NVIDIA",
            "--file",
            "grid.json",
            "--toggle-row",
        ])
        .unwrap();
        match cli.command {
            Commands::Resolve { slug, source, lookup } => {
                assert_eq!(slug, "NVIDIA");
                assert_eq!(source.file, Some(PathBuf::from("grid.json")));
                assert!(lookup.toggle_row);
            }
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn endpoint_and_file_conflict() {
        assert!(Cli::try_parse_from([
            "sheetslug",
            "list",
            "--file",
            "grid.json",
            "--endpoint",
            "https://x.test",
        ])
        .is_err());
    }
}
