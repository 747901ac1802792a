//! Command-line argument parsing for legible.
//!
//! This module provides the `Cli` struct which encapsulates all command-line
//! options and the method that folds them into the configuration.

use clap::Parser;
use legible::config::{Config, ConfigValue, KEY_ALGORITHM, KEY_ENABLED, KEY_THEME};
use std::path::PathBuf;

/// Command-line interface configuration.
#[derive(Parser, Debug, Default)]
#[command(name = "legible")]
#[command(about = "Sentence-level readability highlighting for markdown documents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File to read (`-` or nothing reads stdin)
    pub files: Vec<PathBuf>,

    /// Readability formula: dale-chall, gunning-fog, coleman-liau or ari
    #[arg(short, long, env = "LEGIBLE_ALGORITHM")]
    pub algorithm: Option<String>,

    /// Start with readability highlighting turned off
    #[arg(long)]
    pub disable: bool,

    /// Print a plain report even when stdout is a terminal
    #[arg(short, long)]
    pub report: bool,

    /// Score color theme (default, mono)
    #[arg(short, long)]
    pub theme: Option<String>,
}

impl Cli {
    /// Apply CLI overrides to a configuration object.
    ///
    /// Values are stored unvalidated; `Config::readability_settings` rejects
    /// bad ones.
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(algorithm) = &self.algorithm {
            config.set(KEY_ALGORITHM, ConfigValue::String(algorithm.clone()));
        }
        if self.disable {
            config.set(KEY_ENABLED, false);
        }
        if let Some(theme) = &self.theme {
            config.set(KEY_THEME, ConfigValue::String(theme.clone()));
        }
    }

    /// Reads from stdin when no file, or only `-`, was given
    pub fn reads_stdin(&self) -> bool {
        match self.files.as_slice() {
            [] => true,
            [only] => only.as_os_str() == "-",
            _ => false,
        }
    }
}
