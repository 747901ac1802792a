//! Report mode implementation.

use std::io::{self, Write};

use anyhow::Context;
use legible::config::Config;
use legible::core::document::Document;
use legible::report::write_report;

/// Print a report for each document to stdout.
pub fn run_report_mode(documents: &[Document], config: &Config) -> anyhow::Result<()> {
    let settings = config
        .readability_settings()
        .context("invalid readability settings")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let with_headers = documents.len() > 1;

    for document in documents {
        if with_headers {
            writeln!(out, "== {}", document.display_name())?;
        }
        write_report(&mut out, document, &settings)?;
    }
    out.flush()?;
    Ok(())
}
