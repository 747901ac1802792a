//! Application execution modes for legible.
//!
//! - Report mode prints sentence scores as plain text
//! - Terminal mode opens the interactive viewer

mod report;
mod tui;

use std::io::{self, IsTerminal};

use anyhow::{Context, bail};
use legible::core::document::Document;

use crate::cli::Cli;

pub use report::run_report_mode;
pub use tui::run_terminal_mode;

/// Output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Report,
    Terminal,
}

/// Detect the appropriate output mode based on flags and environment.
pub fn detect_mode(cli: &Cli) -> OutputMode {
    detect_mode_internal(cli.report, io::stdout().is_terminal())
}

/// Internal mode detection with injectable terminal state.
pub fn detect_mode_internal(force_report: bool, is_stdout_tty: bool) -> OutputMode {
    if force_report || !is_stdout_tty {
        OutputMode::Report
    } else {
        OutputMode::Terminal
    }
}

/// Load every document named on the command line, or stdin.
pub fn load_documents(cli: &Cli) -> anyhow::Result<Vec<Document>> {
    if cli.reads_stdin() {
        if io::stdin().is_terminal() {
            bail!("no input: pass a file or pipe text on stdin");
        }
        let doc = Document::from_reader(io::stdin().lock()).context("reading stdin")?;
        return Ok(vec![doc]);
    }

    cli.files
        .iter()
        .map(|path| Document::from_file(path).with_context(|| format!("loading {}", path.display())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_mode_piped_output() {
        assert_eq!(detect_mode_internal(false, false), OutputMode::Report);
    }

    #[test]
    fn test_detect_mode_terminal() {
        assert_eq!(detect_mode_internal(false, true), OutputMode::Terminal);
    }

    #[test]
    fn test_report_flag_wins() {
        assert_eq!(detect_mode_internal(true, true), OutputMode::Report);
    }
}
