#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! CLI entrypoint for the prediction engine.
//!
//! Responsibilities:
//! - Parse flags and an optional config TOML (equipment overrides, Monte
//!   Carlo defaults)
//! - Initialize tracing and manage log sinks
//! - Offer `--json` mode emitting a single structured JSON line per run
//! - Handle Ctrl-C as cooperative cancellation of an in-flight prediction

mod cli;
mod commands;
mod error_fmt;
mod tracing_setup;

use std::fs;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use clap::Parser;
use eyre::WrapErr;

use bbq_config::Config;
use cli::{Cli, Commands, JSON_MODE};
use error_fmt::{exit_code_for_error, format_error_json, humanize};
use tracing_setup::init_tracing;

fn main() -> eyre::Result<()> {
    let _ = color_eyre::install();

    let cancel = Arc::new(AtomicBool::new(false));
    let cancel_for_handler = Arc::clone(&cancel);
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!("\nreceived interrupt, cancelling prediction...");
        cancel_for_handler.store(true, std::sync::atomic::Ordering::SeqCst);
    }) {
        eprintln!("warning: failed to set signal handler: {e}");
    }

    if let Err(e) = real_main(cancel) {
        let json = *JSON_MODE.get().unwrap_or(&false);
        let code = exit_code_for_error(&e);
        if json {
            println!("{}", format_error_json(&e));
        } else {
            eprintln!("{}", humanize(&e));
        }
        std::process::exit(code);
    }
    Ok(())
}

fn real_main(cancel: Arc<AtomicBool>) -> eyre::Result<()> {
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);

    let cfg: Config = match &cli.config {
        Some(path) => {
            let text =
                fs::read_to_string(path).wrap_err_with(|| format!("read config {path:?}"))?;
            toml::from_str(&text).wrap_err_with(|| format!("parse config {path:?}"))?
        }
        None => Config::default(),
    };
    cfg.validate().wrap_err("invalid configuration")?;

    init_tracing(
        cli.json,
        &cli.log_level,
        cfg.logging.file.as_deref(),
        cfg.logging.rotation.as_deref(),
    );

    match &cli.cmd {
        Commands::Predict { session } => {
            commands::run_predict(session, &cfg, cancel, cli.json)
        }
        Commands::Plan {
            session,
            dinner_time,
            preheat_minutes,
            rest_minutes,
        } => commands::run_plan(
            session,
            dinner_time,
            *preheat_minutes,
            *rest_minutes,
            &cfg,
            cancel,
            cli.json,
        ),
        Commands::Hold {
            pull_temp_f,
            ambient_temp_f,
            serving_temp_f,
            unwrapped,
        } => commands::run_hold(
            *pull_temp_f,
            *ambient_temp_f,
            *serving_temp_f,
            !unwrapped,
            cli.json,
        ),
    }
}
