//! Viewer state
//!
//! Everything the terminal viewer knows, minus the terminal. Every command
//! that changes what is on screen ends in [`ViewerState::refresh`], which is
//! the single view-update hook for the annotation host.

use crate::config::ReadabilitySettings;
use crate::core::annotate::AnnotationHost;
use crate::core::document::{Document, Viewport};
use crate::terminal::keys::ViewerCommand;

pub struct ViewerState {
    pub document: Document,
    pub viewport: Viewport,
    pub settings: ReadabilitySettings,
    pub host: AnnotationHost,
    scroll_margin: usize,
}

impl ViewerState {
    /// `height` is the number of text rows available
    pub fn new(
        document: Document,
        settings: ReadabilitySettings,
        height: usize,
        scroll_margin: usize,
    ) -> Self {
        let mut state = Self {
            document,
            viewport: Viewport::new(0, height),
            settings,
            host: AnnotationHost::new(),
            scroll_margin,
        };
        state.refresh();
        state
    }

    /// Recompute annotations for what is currently visible
    pub fn refresh(&mut self) {
        let regions = self.document.visible_regions(&[self.viewport]);
        self.host.update(&regions, &self.settings);
    }

    /// Apply a command. Returns true when the viewer should exit.
    pub fn apply(&mut self, command: ViewerCommand) -> bool {
        let total = self.document.len_lines();
        match command {
            ViewerCommand::Quit => return true,
            ViewerCommand::ScrollDown => self.viewport.scroll_by(1, total),
            ViewerCommand::ScrollUp => self.viewport.scroll_by(-1, total),
            ViewerCommand::PageDown => self.viewport.page_down(self.scroll_margin, total),
            ViewerCommand::PageUp => self.viewport.page_up(self.scroll_margin, total),
            ViewerCommand::Top => self.viewport.to_top(),
            ViewerCommand::Bottom => self.viewport.to_bottom(total),
            ViewerCommand::ToggleReadability => self.settings.enabled = !self.settings.enabled,
            ViewerCommand::NextAlgorithm => self.settings.algorithm = self.settings.algorithm.next(),
        }
        self.refresh();
        false
    }

    /// Handle a terminal resize to `height` text rows
    pub fn resize(&mut self, height: usize) {
        self.viewport.resize(height, self.document.len_lines());
        self.refresh();
    }

    pub fn status_line(&self) -> String {
        let total = self.document.len_lines();
        let last_visible = (self.viewport.top_line + self.viewport.height).min(total);
        let mode = if self.settings.enabled {
            format!("{} on", self.settings.algorithm.label())
        } else {
            "readability off".to_string()
        };
        format!(
            " {} | {} | {} sentences | lines {}-{}/{} ",
            self.document.display_name(),
            mode,
            self.host.ranges().len(),
            (self.viewport.top_line + 1).min(total),
            last_visible,
            total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::readability::Algorithm;

    fn state(height: usize) -> ViewerState {
        let text: String = (0..50)
            .map(|i| format!("Sentence number {} is here.\n", i))
            .collect();
        ViewerState::new(
            Document::from_string(text),
            ReadabilitySettings {
                enabled: true,
                algorithm: Algorithm::DaleChall,
            },
            height,
            1,
        )
    }

    #[test]
    fn test_initial_refresh_scores_visible_lines_only() {
        let state = state(10);
        assert_eq!(state.host.ranges().len(), 10);
        assert_eq!(state.host.passes(), 1);
    }

    #[test]
    fn test_scrolling_recomputes() {
        let mut state = state(10);
        assert!(!state.apply(ViewerCommand::PageDown));
        assert_eq!(state.viewport.top_line, 9);
        assert_eq!(state.host.passes(), 2);
        let first = state.host.ranges()[0];
        assert_eq!(first.from, state.document.line_to_char(9));
    }

    #[test]
    fn test_toggle_readability() {
        let mut state = state(10);
        state.apply(ViewerCommand::ToggleReadability);
        assert!(!state.host.is_enabled());
        assert!(state.host.ranges().is_empty());
        assert!(state.status_line().contains("readability off"));
        state.apply(ViewerCommand::ToggleReadability);
        assert!(state.host.is_enabled());
    }

    #[test]
    fn test_next_algorithm() {
        let mut state = state(10);
        state.apply(ViewerCommand::NextAlgorithm);
        assert_eq!(state.settings.algorithm, Algorithm::GunningFog);
        assert!(state.status_line().contains("Gunning-Fog on"));
    }

    #[test]
    fn test_quit() {
        let mut state = state(10);
        assert!(state.apply(ViewerCommand::Quit));
    }

    #[test]
    fn test_resize_and_bottom() {
        let mut state = state(10);
        state.apply(ViewerCommand::Bottom);
        // 50 lines plus the empty line after the final newline
        assert_eq!(state.viewport.top_line, 41);
        state.resize(20);
        assert_eq!(state.viewport.top_line, 31);
        assert!(state.status_line().contains("lines 32-51/51"));
    }
}
