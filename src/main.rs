//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `region_verify` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing the result and optionally appending it to a JSONL audit file
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use region_verify::config::Opt;
use region_verify::initialization::init_logger_with;
use region_verify::{AuditSink, Config, JsonlSink, Verifier};

#[tokio::main]
async fn main() -> Result<()> {
    // Load PROXY_* settings from .env if present; real environment wins
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = match Config::from_env() {
        Ok(config) => opt.apply(config),
        Err(e) => {
            eprintln!("region_verify configuration error: {e}");
            process::exit(2);
        }
    };
    if config.credential_service_url.is_none() && config.proxy_template.is_none() {
        log::warn!("No proxy credential source configured; only the client path will be checked");
    }

    let verifier = Verifier::new(config).context("Failed to initialize verifier")?;

    // Ctrl-C aborts in-flight calls; the verifier still returns a result
    let cancel = tokio_util::sync::CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_cancel.cancel();
        }
    });

    let result = verifier
        .verify_with_cancel(&opt.state, &opt.client_ip, &cancel)
        .await;

    if let Some(path) = opt.output.as_ref() {
        let sink = JsonlSink::new(path);
        let caller_fields = [("claimed_state", opt.state.trim().to_string())];
        sink.append_row(&caller_fields, &result)
            .await
            .with_context(|| format!("Failed to append result to {}", path.display()))?;
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&result).context("Failed to serialize result")?
    );
    Ok(())
}
