pub mod config;
pub mod core;
pub mod error;
pub mod report;
pub mod terminal;
pub mod user_config;

pub use crate::config::ReadabilitySettings;
pub use crate::core::annotate::{AnnotationHost, ScoreStyles};
pub use crate::core::pipeline::{Region, ScoredRange, recompute};
pub use crate::core::readability::Algorithm;
