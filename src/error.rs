//! Error type shared by the library

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown readability algorithm `{0}` (expected dale-chall, gunning-fog, coleman-liau or ari)")]
    UnknownAlgorithm(String),

    #[error("setting `{key}` expects a {expected} value")]
    SettingType { key: String, expected: &'static str },

    #[error("cannot open {}: {reason}", .path.display())]
    InvalidPath { path: PathBuf, reason: String },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
