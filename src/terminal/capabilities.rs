/// Terminal color capability detection, with injectable environment lookup
/// so the rules can be tested without touching the process environment.
use std::env::{self, VarError};

/// Color depth the viewer will render with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    /// 24-bit color
    TrueColor,
    /// xterm 256-color palette
    Ansi256,
}

impl ColorDepth {
    pub fn detect() -> Self {
        Self::detect_with_env(|k| env::var(k))
    }

    pub fn detect_with_env<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        if let Ok(colorterm) = get_env("COLORTERM") {
            if colorterm.contains("truecolor") || colorterm.contains("24bit") {
                return ColorDepth::TrueColor;
            }
        }

        if let Ok(term) = get_env("TERM") {
            if term.contains("24bit")
                || term.contains("truecolor")
                || term.starts_with("xterm-kitty")
                || term.starts_with("tmux")
            {
                return ColorDepth::TrueColor;
            }
        }

        let known_program = get_env("TERM_PROGRAM").is_ok_and(|tp| {
            tp == "iTerm.app" || tp == "Hyper" || tp == "WezTerm" || tp == "vscode"
        });
        if known_program {
            ColorDepth::TrueColor
        } else {
            ColorDepth::Ansi256
        }
    }

    pub fn is_truecolor(self) -> bool {
        self == ColorDepth::TrueColor
    }
}
