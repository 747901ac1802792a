// legible Configuration
// Edit this file to customize the viewer, then rebuild

use crate::config::{Config, KEY_ALGORITHM, KEY_ENABLED, KEY_SCROLL_MARGIN, KEY_THEME};
use crate::core::readability::Algorithm;

/// User configuration function
pub fn configure(config: &mut Config) {
    // Readability
    config.set(KEY_ENABLED, true);
    config.set(KEY_ALGORITHM, Algorithm::DaleChall);

    // Appearance
    config.set(KEY_THEME, "default");
    config.set(KEY_SCROLL_MARGIN, 0);

    // Movement
    config.bind("Down", "scroll-down");
    config.bind("j", "scroll-down");
    config.bind("^N", "scroll-down");
    config.bind("Up", "scroll-up");
    config.bind("k", "scroll-up");
    config.bind("^P", "scroll-up");
    config.bind("PageDown", "page-down");
    config.bind("Space", "page-down");
    config.bind("^V", "page-down");
    config.bind("PageUp", "page-up");
    config.bind("b", "page-up");
    config.bind("Home", "top");
    config.bind("g", "top");
    config.bind("End", "bottom");
    config.bind("G", "bottom");

    // Readability toggles
    config.bind("r", "toggle-readability");
    config.bind("a", "next-algorithm");

    // Exit
    config.bind("q", "quit");
    config.bind("Esc", "quit");
    config.bind("^C", "quit");
    config.bind("^X^C", "quit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let mut config = Config::default();
        configure(&mut config);
        let settings = config.readability_settings().unwrap();
        assert!(settings.enabled);
        assert_eq!(settings.algorithm, Algorithm::DaleChall);
        assert_eq!(config.get_string(KEY_THEME), Some("default"));
    }

    #[test]
    fn test_quit_is_bound() {
        let mut config = Config::default();
        configure(&mut config);
        assert_eq!(config.keybindings.get("q").map(String::as_str), Some("quit"));
    }
}
