//! HandSign application binary - composition root.
//!
//! 1. Parse CLI arguments and install the tracing subscriber
//! 2. Load configuration from TOML and apply its log level
//! 3. Build the builtin gesture catalog and a recognition session
//! 4. Replay the recorded tracker stream through the session
//! 5. Print the recognized text (and events, with `--events`)

mod cli;
mod replay;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use clap::Parser;
use handsign_core::config::HandSignConfig;
use handsign_core::error::{HandSignError, Result as HandSignResult};
use handsign_core::RecognitionEvent;
use handsign_gesture::RecognitionSession;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use crate::cli::CliArgs;
use crate::replay::ReplayFrame;

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Install the subscriber on stderr. RUST_LOG, when set, is final; otherwise
/// the returned handle lets the config file's level apply once loaded.
fn init_tracing(args: &CliArgs) -> Option<FilterHandle> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .init();
            None
        }
        Err(_) => {
            let (filter, handle) = reload::Layer::new(EnvFilter::new(args.resolve_log_level("info")));
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .init();
            Some(handle)
        }
    }
}

/// Write the default configuration to `path`. An existing file is kept.
fn init_config(path: &Path) -> HandSignResult<()> {
    if path.exists() {
        return Err(HandSignError::Config(format!(
            "{} already exists",
            path.display()
        )));
    }
    HandSignConfig::default().save(path)
}

fn read_input(args: &CliArgs) -> HandSignResult<Vec<ReplayFrame>> {
    match args.input.as_deref() {
        Some(path) if !args.reads_stdin() => {
            let file = File::open(path)?;
            replay::read_frames(BufReader::new(file))
        }
        _ => replay::read_frames(io::stdin().lock()),
    }
}

fn print_event(event: &RecognitionEvent) {
    match serde_json::to_string(event) {
        Ok(json) => {
            let mut out = io::stdout().lock();
            if let Err(e) = writeln!(out, "{}", json) {
                tracing::warn!(error = %e, "Failed to write event");
            }
        }
        Err(e) => tracing::warn!(error = %e, kind = event.kind(), "Failed to serialize event"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Tracing. RUST_LOG wins over --log-level, which wins over the config file.
    let filter_handle = init_tracing(&args);
    tracing::info!("Starting HandSign v{}", env!("CARGO_PKG_VERSION"));

    // Config.
    let config_file = args.resolve_config_path();
    if args.init_config {
        if let Err(e) = init_config(&config_file) {
            tracing::error!(path = %config_file.display(), error = %e, "Failed to write config");
            return Err(e.into());
        }
        println!("{}", config_file.display());
        return Ok(());
    }
    let config = HandSignConfig::load_or_default(&config_file);
    if let Some(handle) = filter_handle {
        let level = args.resolve_log_level(&config.general.log_level);
        if let Err(e) = handle.reload(EnvFilter::new(&level)) {
            tracing::warn!(level = %level, error = %e, "Failed to apply configured log level");
        }
    }
    tracing::info!(path = %config_file.display(), "Configuration ready");

    // Input.
    let frames = match read_input(&args) {
        Ok(frames) => frames,
        Err(e) => {
            tracing::error!(input = ?args.input, error = %e, "Failed to read input");
            return Err(e.into());
        }
    };
    tracing::info!(frames = frames.len(), "Recording loaded");

    // Recognition.
    let mut session = RecognitionSession::with_builtin_catalog(&config);
    tracing::info!(
        session = %session.id(),
        gestures = session.recognizer().catalog().len(),
        "Gesture catalog ready"
    );

    let print_events = args.events;
    let summary = replay::run(&mut session, &frames, args.realtime, |event| {
        if print_events {
            print_event(event);
        }
    })
    .await;

    let first = frames.first().map(|f| f.timestamp_ms).unwrap_or_default();
    let last = frames.last().map(|f| f.timestamp_ms).unwrap_or_default();
    let span_ms = last.saturating_sub(first);
    tracing::info!(
        frames = summary.frames,
        commits = summary.commits,
        events = summary.events,
        seconds = span_ms as f64 / 1000.0,
        "Replay finished"
    );

    if !print_events {
        println!("{}", summary.text);
    }

    Ok(())
}
