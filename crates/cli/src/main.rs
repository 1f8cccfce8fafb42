//! starmap-check - run a JSON payload through a family's decode, map and
//! project pipeline.
//!
//! Exit status: 0 on success, 2 when the payload is rejected with a domain
//! error code, 1 for usage and I/O failures.

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use starmap_domain::DomainError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;

use args::Args;

const REJECTED: u8 = 2;

fn main() -> ExitCode {
    load_dotenv();

    // Parsed after `.env` so STARMAP_OUTPUT can come from it. Usage errors
    // exit 1; --help and --version exit 0.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Logs go to stderr so stdout stays pipeable JSON.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "starmap_check=info,starmap_shared=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match try_main(&args) {
        Ok(Ok(output)) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Ok(Err(err)) => {
            eprintln!("{}: {}", err.code(), err.message());
            ExitCode::from(REJECTED)
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// The outer `Result` carries I/O failures, the inner one the domain verdict
/// on the payload.
fn try_main(args: &Args) -> anyhow::Result<Result<String, DomainError>> {
    let shape = args.shape();
    let raw = read_input(args.input())?;
    tracing::info!(family = %args.family, shape = %shape, bytes = raw.len(), "Checking payload");

    let payload: Value = match serde_json::from_str(&raw) {
        Ok(payload) => payload,
        Err(e) => {
            return Ok(Err(DomainError::invalid_payload(format!(
                "input is not valid JSON: {e}"
            ))))
        }
    };

    match starmap_shared::run(args.family, &payload, shape) {
        Ok(output) => {
            let pretty = serde_json::to_string_pretty(&output).context("failed to render output")?;
            Ok(Ok(pretty))
        }
        Err(err) => {
            tracing::info!(family = %args.family, code = %err.code(), "Payload rejected");
            Ok(Err(err))
        }
    }
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Loads `.env.local` then `.env` from the working directory; later files do
/// not override earlier ones.
fn load_dotenv() {
    for filename in [".env.local", ".env"] {
        let path = Path::new(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
