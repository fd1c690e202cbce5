//! CLI argument definitions for the `handsign` replay tool.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// HandSign - replays recorded hand-tracker output through the gesture
/// recognizer and prints the recognized text.
#[derive(Parser, Debug)]
#[command(name = "handsign", version, about)]
pub struct CliArgs {
    /// JSON-lines file of tracker results, one video frame per line. `-` reads stdin.
    #[arg(short = 'i', long = "input", required_unless_present = "init_config")]
    pub input: Option<PathBuf>,

    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Print recognition events as JSON lines on stdout.
    #[arg(short = 'e', long = "events")]
    pub events: bool,

    /// Pace frames by their recorded timestamps instead of replaying at full speed.
    #[arg(long = "realtime")]
    pub realtime: bool,

    /// Write a default configuration file to the config path and exit.
    #[arg(long = "init-config")]
    pub init_config: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > HANDSIGN_CONFIG env var > platform default (~/.handsign/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("HANDSIGN_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    /// Whether the input is standard input.
    pub fn reads_stdin(&self) -> bool {
        self.input.as_deref().is_some_and(|p| p.as_os_str() == "-")
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".handsign").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".handsign").join("config.toml");
    }
    PathBuf::from("config.toml")
}
