//! Scoring pipeline
//!
//! `regions -> sentences -> raw grade -> normalized score -> ScoredRange`.
//! Each call is independent; nothing is cached between passes.

use log::debug;

use crate::config::ReadabilitySettings;
use crate::core::sentence;

/// A contiguous slice of the document currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub text: String,
    /// Character offset of `text`'s first character in the document
    pub offset: usize,
}

impl Region {
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }
}

/// A scored span of the document, in character offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredRange {
    pub from: usize,
    pub to: usize,
    /// Normalized score in `0..=10`
    pub score: u8,
}

impl ScoredRange {
    pub fn contains(&self, offset: usize) -> bool {
        self.from <= offset && offset < self.to
    }

    pub fn len(&self) -> usize {
        self.to - self.from
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

/// Score every sentence in `regions`.
///
/// Regions must be disjoint and sorted by offset; the output then is too.
/// Sentences that reduce to no words after markup stripping are not emitted.
pub fn recompute(regions: &[Region], settings: &ReadabilitySettings) -> Vec<ScoredRange> {
    if !settings.enabled {
        return Vec::new();
    }

    let algorithm = settings.algorithm;
    let mut ranges = Vec::new();

    for region in regions {
        for sentence in sentence::extract(&region.text, region.offset) {
            if sentence.words.is_empty() {
                continue;
            }
            ranges.push(ScoredRange {
                from: sentence.from,
                to: sentence.to,
                score: algorithm.score(&sentence.words),
            });
        }
    }

    debug!(
        "scored {} ranges over {} regions with {}",
        ranges.len(),
        regions.len(),
        algorithm
    );
    ranges
}
