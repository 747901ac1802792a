// Configuration module
// Internal representation of user configuration

use std::collections::HashMap;

use log::warn;

use crate::core::readability::Algorithm;
use crate::error::{Error, Result};

pub const KEY_ENABLED: &str = "readability.enabled";
pub const KEY_ALGORITHM: &str = "readability.algorithm";
pub const KEY_THEME: &str = "theme";
pub const KEY_SCROLL_MARGIN: &str = "scroll.margin";

#[derive(Debug, Clone)]
pub struct Config {
    pub keybindings: HashMap<String, String>,
    pub settings: HashMap<String, ConfigValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    String(String),
}

/// The slice of configuration the readability engine reads on every pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadabilitySettings {
    pub enabled: bool,
    pub algorithm: Algorithm,
}

impl Default for ReadabilitySettings {
    /// Highlighting is on unless configuration turns it off
    fn default() -> Self {
        Self {
            enabled: true,
            algorithm: Algorithm::default(),
        }
    }
}

impl Config {
    pub fn default() -> Self {
        Self {
            keybindings: HashMap::new(),
            settings: HashMap::new(),
        }
    }

    /// Bind a key to a command
    pub fn bind(&mut self, key: &str, command: &str) {
        self.keybindings
            .insert(key.to_string(), command.to_string());
    }

    /// Set a configuration value
    pub fn set<V: Into<ConfigValue>>(&mut self, key: &str, value: V) {
        self.settings.insert(key.to_string(), value.into());
    }

    /// Get a setting value
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.settings.get(key)
    }

    /// Get boolean setting
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| match v {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        })
    }

    /// Get integer setting
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| match v {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        })
    }

    /// Get string setting
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| match v {
            ConfigValue::String(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Validate and snapshot the readability settings.
    ///
    /// Missing keys fall back to defaults; present keys must have the right
    /// type and the algorithm must name a known formula.
    pub fn readability_settings(&self) -> Result<ReadabilitySettings> {
        let defaults = ReadabilitySettings::default();

        let enabled = match self.get(KEY_ENABLED) {
            None => defaults.enabled,
            Some(ConfigValue::Bool(b)) => *b,
            Some(_) => return Err(type_error(KEY_ENABLED, "boolean")),
        };

        let algorithm = match self.get(KEY_ALGORITHM) {
            None => defaults.algorithm,
            Some(ConfigValue::String(name)) => name.parse()?,
            Some(_) => return Err(type_error(KEY_ALGORITHM, "string")),
        };

        Ok(ReadabilitySettings { enabled, algorithm })
    }

    /// Scroll margin in lines, never negative
    pub fn scroll_margin(&self) -> usize {
        match self.get_int(KEY_SCROLL_MARGIN) {
            Some(margin) if margin >= 0 => margin as usize,
            Some(margin) => {
                warn!("ignoring negative {} = {}", KEY_SCROLL_MARGIN, margin);
                0
            }
            None => 0,
        }
    }
}

fn type_error(key: &str, expected: &'static str) -> Error {
    Error::SettingType {
        key: key.to_string(),
        expected,
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Int(i)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<Algorithm> for ConfigValue {
    fn from(a: Algorithm) -> Self {
        ConfigValue::String(a.name().to_string())
    }
}
