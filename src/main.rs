// src/main.rs

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use sheetslug::cli::{self, Cli};
use sheetslug::logging;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            e.exit_code()
        }
    }
}
