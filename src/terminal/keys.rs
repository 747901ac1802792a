//! Key names and viewer key bindings
//!
//! Keys are named the way the configuration spells them: `"j"`, `"G"`,
//! `"^C"`, `"Down"`, `"PageUp"`, `"Space"`, `"Esc"`. A binding may be a short
//! sequence such as `"^X^C"` or `"^X q"`.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::warn;

/// Commands understood by the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Quit,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    Top,
    Bottom,
    ToggleReadability,
    NextAlgorithm,
}

impl FromStr for ViewerCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "quit" => ViewerCommand::Quit,
            "scroll-down" => ViewerCommand::ScrollDown,
            "scroll-up" => ViewerCommand::ScrollUp,
            "page-down" => ViewerCommand::PageDown,
            "page-up" => ViewerCommand::PageUp,
            "top" => ViewerCommand::Top,
            "bottom" => ViewerCommand::Bottom,
            "toggle-readability" => ViewerCommand::ToggleReadability,
            "next-algorithm" => ViewerCommand::NextAlgorithm,
            other => return Err(format!("unknown viewer command: {}", other)),
        })
    }
}

/// Name a crossterm key event; `None` for keys that cannot be bound
pub fn key_name(event: &KeyEvent) -> Option<String> {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);

    let name = match event.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) if ctrl => format!("^{}", c.to_ascii_uppercase()),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => return None,
    };
    Some(name)
}

/// Control keys are always spelled with an uppercase letter
fn normalize_key(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('^'), Some(c), None) => format!("^{}", c.to_ascii_uppercase()),
        _ => key.to_string(),
    }
}

/// Split a binding like `"^X^C"` or `"^X q"` into key names
fn parse_sequence(sequence: &str) -> Vec<String> {
    if sequence.contains(char::is_whitespace) {
        return sequence.split_whitespace().map(normalize_key).collect();
    }

    let chars: Vec<char> = sequence.chars().collect();
    if chars.first() != Some(&'^') || chars.len() < 2 {
        return vec![sequence.to_string()];
    }

    let mut keys = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '^' && i + 1 < chars.len() {
            keys.push(format!("^{}", chars[i + 1].to_ascii_uppercase()));
            i += 2;
        } else {
            keys.push(chars[i].to_string());
            i += 1;
        }
    }
    keys
}

/// Result of feeding one key to the [`KeyMap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Command(ViewerCommand),
    /// A prefix of a longer binding; wait for the next key
    Pending,
    Unbound,
}

/// Resolves key sequences to viewer commands
#[derive(Debug, Default)]
pub struct KeyMap {
    bindings: HashMap<Vec<String>, ViewerCommand>,
    prefixes: HashSet<Vec<String>>,
    pending: Vec<String>,
}

impl KeyMap {
    /// Build from configured `key -> command` bindings, skipping unknown commands
    pub fn from_bindings(bindings: &HashMap<String, String>) -> Self {
        let mut map = Self::default();
        for (sequence, command) in bindings {
            match command.parse::<ViewerCommand>() {
                Ok(cmd) => map.bind(sequence, cmd),
                Err(e) => warn!("ignoring binding {}: {}", sequence, e),
            }
        }
        map
    }

    pub fn bind(&mut self, sequence: &str, command: ViewerCommand) {
        let keys = parse_sequence(sequence);
        if keys.is_empty() {
            return;
        }
        for len in 1..keys.len() {
            self.prefixes.insert(keys[..len].to_vec());
        }
        self.bindings.insert(keys, command);
    }

    /// Feed one key name
    pub fn feed(&mut self, key: &str) -> Lookup {
        self.pending.push(key.to_string());

        if let Some(cmd) = self.bindings.get(&self.pending) {
            let cmd = *cmd;
            self.pending.clear();
            return Lookup::Command(cmd);
        }
        if self.prefixes.contains(&self.pending) {
            return Lookup::Pending;
        }

        self.pending.clear();
        Lookup::Unbound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_key_names() {
        assert_eq!(key_name(&key(KeyCode::Char('j'), KeyModifiers::NONE)).as_deref(), Some("j"));
        assert_eq!(key_name(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)).as_deref(), Some("G"));
        assert_eq!(key_name(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)).as_deref(), Some("^C"));
        assert_eq!(key_name(&key(KeyCode::Char(' '), KeyModifiers::NONE)).as_deref(), Some("Space"));
        assert_eq!(key_name(&key(KeyCode::PageDown, KeyModifiers::NONE)).as_deref(), Some("PageDown"));
        assert_eq!(key_name(&key(KeyCode::Null, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_parse_sequence() {
        assert_eq!(parse_sequence("^X^C"), vec!["^X", "^C"]);
        assert_eq!(parse_sequence("^x q"), vec!["^X", "q"]);
        assert_eq!(parse_sequence("PageDown"), vec!["PageDown"]);
        assert_eq!(parse_sequence("^"), vec!["^"]);
    }

    #[test]
    fn test_single_key_binding() {
        let mut map = KeyMap::default();
        map.bind("q", ViewerCommand::Quit);
        assert_eq!(map.feed("q"), Lookup::Command(ViewerCommand::Quit));
        assert_eq!(map.feed("x"), Lookup::Unbound);
    }

    #[test]
    fn test_sequence_binding() {
        let mut map = KeyMap::default();
        map.bind("^X^C", ViewerCommand::Quit);
        assert_eq!(map.feed("^X"), Lookup::Pending);
        assert_eq!(map.feed("^C"), Lookup::Command(ViewerCommand::Quit));
        // A broken sequence resets
        assert_eq!(map.feed("^X"), Lookup::Pending);
        assert_eq!(map.feed("z"), Lookup::Unbound);
        assert_eq!(map.feed("^C"), Lookup::Unbound);
    }

    #[test]
    fn test_from_bindings_skips_unknown_commands() {
        let mut bindings = HashMap::new();
        bindings.insert("j".to_string(), "scroll-down".to_string());
        bindings.insert("x".to_string(), "explode".to_string());
        let mut map = KeyMap::from_bindings(&bindings);
        assert_eq!(map.feed("j"), Lookup::Command(ViewerCommand::ScrollDown));
        assert_eq!(map.feed("x"), Lookup::Unbound);
    }

    #[test]
    fn test_command_names() {
        assert_eq!("next-algorithm".parse::<ViewerCommand>(), Ok(ViewerCommand::NextAlgorithm));
        assert!("nope".parse::<ViewerCommand>().is_err());
    }
}
