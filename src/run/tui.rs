//! Terminal (TUI) mode implementation.

use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use legible::config::{Config, KEY_THEME};
use legible::core::document::Document;
use legible::terminal::capabilities::ColorDepth;
use legible::terminal::keys::{KeyMap, Lookup, key_name};
use legible::terminal::raw::RawMode;
use legible::terminal::theme::Theme;
use legible::terminal::view;
use legible::terminal::viewer::ViewerState;
use log::{debug, warn};

/// Run the interactive viewer over the first document.
pub fn run_terminal_mode(documents: Vec<Document>, config: &Config) -> anyhow::Result<()> {
    let settings = config
        .readability_settings()
        .context("invalid readability settings")?;

    let theme_name = config.get_string(KEY_THEME).unwrap_or("default");
    let theme = Theme::by_name(theme_name).with_context(|| {
        format!(
            "unknown theme `{}` (available: {})",
            theme_name,
            Theme::names().join(", ")
        )
    })?;

    let mut documents = documents.into_iter();
    let document = documents.next().context("no document to show")?;
    if documents.next().is_some() {
        warn!("terminal mode shows only the first file; use --report for the rest");
    }

    let mut keymap = KeyMap::from_bindings(&config.keybindings);
    let truecolor = ColorDepth::detect().is_truecolor();

    let (mut cols, mut rows) = crossterm::terminal::size()?;
    let mut state = ViewerState::new(
        document,
        settings,
        rows.saturating_sub(1) as usize,
        config.scroll_margin(),
    );

    let _raw_mode = RawMode::new()?;
    let mut stdout = io::stdout();
    view::render(&mut stdout, &state, &theme, truecolor, cols, rows)?;

    loop {
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(name) = key_name(&key) else {
                    continue;
                };
                match keymap.feed(&name) {
                    Lookup::Command(command) => {
                        debug!("{} -> {:?}", name, command);
                        if state.apply(command) {
                            break;
                        }
                    }
                    Lookup::Pending | Lookup::Unbound => continue,
                }
            }
            Event::Resize(new_cols, new_rows) => {
                cols = new_cols;
                rows = new_rows;
                state.resize(rows.saturating_sub(1) as usize);
            }
            _ => continue,
        }

        view::render(&mut stdout, &state, &theme, truecolor, cols, rows)?;
    }

    Ok(())
}
