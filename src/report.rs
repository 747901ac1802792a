//! Plain-text readability report
//!
//! Used when output is not a terminal: one line per scored sentence followed
//! by a summary line.

use std::io::Write;

use crate::config::ReadabilitySettings;
use crate::core::document::Document;
use crate::core::pipeline::{self, ScoredRange};

/// Preview width in characters
const PREVIEW_CHARS: usize = 60;

/// Aggregate figures for one document
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub sentences: usize,
    pub mean_score: f64,
    pub max_score: u8,
}

impl Summary {
    pub fn from_ranges(ranges: &[ScoredRange]) -> Self {
        if ranges.is_empty() {
            return Self {
                sentences: 0,
                mean_score: 0.0,
                max_score: 0,
            };
        }
        let total: u64 = ranges.iter().map(|r| u64::from(r.score)).sum();
        Self {
            sentences: ranges.len(),
            mean_score: total as f64 / ranges.len() as f64,
            max_score: ranges.iter().map(|r| r.score).max().unwrap_or(0),
        }
    }
}

/// Text of `range` on one line, truncated for display
fn preview(chars: &[char], range: &ScoredRange) -> String {
    let end = range.to.min(chars.len());
    let start = range.from.min(end);
    let mut text: String = chars[start..end]
        .iter()
        .map(|c| if c.is_whitespace() { ' ' } else { *c })
        .take(PREVIEW_CHARS + 1)
        .collect();
    if text.chars().count() > PREVIEW_CHARS {
        text = text.chars().take(PREVIEW_CHARS - 3).collect();
        text.push_str("...");
    }
    text
}

/// Score the whole document and write the report to `out`
pub fn write_report(
    out: &mut impl Write,
    document: &Document,
    settings: &ReadabilitySettings,
) -> std::io::Result<Summary> {
    let region = document.full_region();
    let ranges = pipeline::recompute(std::slice::from_ref(&region), settings);
    let chars: Vec<char> = region.text.chars().collect();

    for range in &ranges {
        writeln!(
            out,
            "{}..{}\t{}\t{}",
            range.from,
            range.to,
            range.score,
            preview(&chars, range)
        )?;
    }

    let summary = Summary::from_ranges(&ranges);
    let label = if settings.enabled {
        settings.algorithm.label()
    } else {
        "disabled"
    };
    writeln!(
        out,
        "# {}: {} sentences, mean {:.1}, max {}",
        label, summary.sentences, summary.mean_score, summary.max_score
    )?;
    Ok(summary)
}
