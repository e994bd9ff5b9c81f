use std::process::exit;

use contact_book::prelude::run_app;
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Diagnostics go to stderr so they never interleave with the prompts.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run_app() {
        error!(error = %e, "contact book stopped");
        eprintln!("Error: {}", e);
        exit(1);
    }
}
