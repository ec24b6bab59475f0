//! Wiring-guide generator binary.
//!
//! Reads a machine configuration as JSON and prints the full installation
//! report, also as JSON, on standard output. Logs go to standard error so
//! the report stays pipeable.

use std::fs;
use std::process::ExitCode;

use hexloom_layout::{pipeline, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexloom=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: hexloom <config.json>");
        return ExitCode::from(2);
    };
    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config: Config = serde_json::from_str(&fs::read_to_string(path)?)?;
    tracing::info!(
        width = config.machine.width,
        height = config.machine.height,
        "generating wiring guide"
    );

    let placements = pipeline::run(&config)?;
    let report = hexloom_metrics::build_report(&placements, &config);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
