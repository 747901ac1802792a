//! Terminal rendering for the viewer
//!
//! [`line_spans`] turns one document line plus the current scored ranges
//! into runs of equally styled text; [`render`] paints those runs and the
//! status line with crossterm.

use std::io::Write;

use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, queue, terminal};
use unicode_width::UnicodeWidthChar;

use crate::core::pipeline::ScoredRange;
use crate::error::Result;
use crate::terminal::theme::Theme;
use crate::terminal::viewer::ViewerState;

/// A run of text sharing one score (or none)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub score: Option<u8>,
}

/// Split `line` (starting at document character `line_start`) into styled
/// runs, clipped to `width` display columns.
pub fn line_spans(
    line: &str,
    line_start: usize,
    ranges: &[ScoredRange],
    width: usize,
) -> Vec<StyledSpan> {
    let mut spans: Vec<StyledSpan> = Vec::new();
    let mut idx = ranges.partition_point(|r| r.to <= line_start);
    let mut used = 0;

    for (i, ch) in line.chars().enumerate() {
        let offset = line_start + i;
        while idx < ranges.len() && ranges[idx].to <= offset {
            idx += 1;
        }
        let score = ranges
            .get(idx)
            .filter(|r| r.contains(offset))
            .map(|r| r.score);

        let ch = if ch == '\t' || ch.is_control() { ' ' } else { ch };
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;

        match spans.last_mut() {
            Some(last) if last.score == score => last.text.push(ch),
            _ => spans.push(StyledSpan {
                text: ch.to_string(),
                score,
            }),
        }
    }

    spans
}

/// Paint the viewer into a `cols` x `rows` terminal
pub fn render(
    out: &mut impl Write,
    state: &ViewerState,
    theme: &Theme,
    truecolor: bool,
    cols: u16,
    rows: u16,
) -> Result<()> {
    let width = cols as usize;
    let text_rows = rows.saturating_sub(1);
    let bg = theme.palette.bg.to_crossterm(truecolor);
    let fg = theme.palette.fg.to_crossterm(truecolor);
    let ranges = state.host.ranges();

    queue!(out, cursor::Hide)?;
    for row in 0..text_rows {
        let line_idx = state.viewport.top_line + row as usize;
        queue!(
            out,
            cursor::MoveTo(0, row),
            SetBackgroundColor(bg),
            SetForegroundColor(fg),
            terminal::Clear(terminal::ClearType::UntilNewLine)
        )?;
        if line_idx >= state.document.len_lines() {
            continue;
        }

        let line = state.document.line(line_idx);
        let line_start = state.document.line_to_char(line_idx);
        for span in line_spans(&line, line_start, ranges, width) {
            let span_bg = match span.score {
                Some(score) => theme.score_color(score, truecolor),
                None => bg,
            };
            queue!(out, SetBackgroundColor(span_bg), Print(span.text))?;
        }
    }

    let status: String = state.status_line().chars().take(width).collect();
    queue!(
        out,
        cursor::MoveTo(0, text_rows),
        SetBackgroundColor(theme.palette.status_bg.to_crossterm(truecolor)),
        SetForegroundColor(theme.palette.status_fg.to_crossterm(truecolor)),
        terminal::Clear(terminal::ClearType::UntilNewLine),
        Print(status),
        ResetColor
    )?;
    out.flush()?;
    Ok(())
}
