// src/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,reqwest=warn,hyper=warn,hyper_util=warn";

/// Install the stderr subscriber. `RUST_LOG` wins over the default filter.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        DEFAULT_FILTER.replacen("info", "debug", 1)
    } else {
        DEFAULT_FILTER.to_string()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
