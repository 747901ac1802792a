//! Readability formulas
//!
//! Four interchangeable per-sentence formulas. None of them count syllables
//! or consult a dictionary: a word is "difficult" when it is unusually long
//! for its own sentence, i.e. longer than `mean + 2 * stddev` of the word
//! lengths in that sentence.
//!
//! Each formula reports a raw grade clamped into its own range, which
//! [`Algorithm::score`] then normalizes onto `0..=10`.

use std::fmt;
use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

use crate::core::normalize::normalize;
use crate::error::Error;

/// Supported readability formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    DaleChall,
    GunningFog,
    ColemanLiau,
    AutomatedReadabilityIndex,
}

impl Algorithm {
    /// All algorithms, in cycling order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::DaleChall,
        Algorithm::GunningFog,
        Algorithm::ColemanLiau,
        Algorithm::AutomatedReadabilityIndex,
    ];

    /// Canonical configuration name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::DaleChall => "dale-chall",
            Algorithm::GunningFog => "gunning-fog",
            Algorithm::ColemanLiau => "coleman-liau",
            Algorithm::AutomatedReadabilityIndex => "automated-readability-index",
        }
    }

    /// Human-readable label for status lines and reports
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::DaleChall => "Dale-Chall",
            Algorithm::GunningFog => "Gunning-Fog",
            Algorithm::ColemanLiau => "Coleman-Liau",
            Algorithm::AutomatedReadabilityIndex => "Automated Readability Index",
        }
    }

    /// The algorithm after this one, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Native range of the raw score. Raw scores are clamped into it.
    ///
    /// The Dale-Chall and Gunning-Fog bounds are observed on real prose
    /// rather than derived; the clamps are what keep normalization in range.
    pub fn raw_range(self) -> (f64, f64) {
        match self {
            Algorithm::DaleChall => (0.0, 10.0),
            Algorithm::GunningFog => (0.0, 20.0),
            Algorithm::ColemanLiau => (0.0, 30.0),
            Algorithm::AutomatedReadabilityIndex => (0.0, 50.0),
        }
    }

    /// Raw grade for one sentence, clamped into [`Algorithm::raw_range`].
    ///
    /// An empty word list scores the bottom of the range.
    pub fn raw_score<S: AsRef<str>>(self, words: &[S]) -> f64 {
        let (min, max) = self.raw_range();
        let stats = WordStats::from_words(words);
        if stats.count == 0 {
            return min;
        }

        let total = stats.count as f64;
        let difficult = stats.difficult_count(words) as f64;

        let raw = match self {
            Algorithm::DaleChall => {
                let ratio = difficult / total;
                let mut grade = 0.1579 * (ratio * 100.0) + 0.0496 * total;
                if ratio > 0.05 {
                    grade += 3.6365;
                }
                grade.floor()
            }
            Algorithm::GunningFog => 0.4 * (total + 100.0 * (difficult / total)),
            Algorithm::ColemanLiau => 5.89 * stats.mean_len - 0.3 / (100.0 * total) - 15.8,
            Algorithm::AutomatedReadabilityIndex => {
                (4.71 * stats.mean_len + 0.5 * total - 21.43).ceil()
            }
        };

        raw.clamp(min, max)
    }

    /// Normalized `0..=10` score for one sentence
    pub fn score<S: AsRef<str>>(self, words: &[S]) -> u8 {
        let (min, max) = self.raw_range();
        normalize(self.raw_score(words), min, max)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dale-chall" | "dalechall" | "dc" => Ok(Algorithm::DaleChall),
            "gunning-fog" | "gunningfog" | "fog" | "gf" => Ok(Algorithm::GunningFog),
            "coleman-liau" | "colemanliau" | "cl" => Ok(Algorithm::ColemanLiau),
            "automated-readability-index" | "automated-readability" | "ari" => {
                Ok(Algorithm::AutomatedReadabilityIndex)
            }
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Word length statistics for one sentence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordStats {
    pub count: usize,
    /// Mean word length in grapheme clusters
    pub mean_len: f64,
    /// Sample standard deviation of word lengths; zero for fewer than two words
    pub std_dev: f64,
}

impl WordStats {
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let count = words.len();
        if count == 0 {
            return Self {
                count,
                mean_len: 0.0,
                std_dev: 0.0,
            };
        }

        let lengths: Vec<f64> = words.iter().map(|w| word_len(w.as_ref()) as f64).collect();
        let mean_len = lengths.iter().sum::<f64>() / count as f64;

        // n - 1 is zero for a single word; treat its spread as zero
        let std_dev = if count > 1 {
            let sum_sq: f64 = lengths.iter().map(|len| (len - mean_len).powi(2)).sum();
            (sum_sq / (count - 1) as f64).sqrt()
        } else {
            0.0
        };

        Self {
            count,
            mean_len,
            std_dev,
        }
    }

    /// Words strictly longer than this are difficult
    pub fn difficulty_threshold(&self) -> f64 {
        self.mean_len + 2.0 * self.std_dev
    }

    pub fn is_difficult(&self, word: &str) -> bool {
        word_len(word) as f64 > self.difficulty_threshold()
    }

    pub fn difficult_count<S: AsRef<str>>(&self, words: &[S]) -> usize {
        words.iter().filter(|w| self.is_difficult(w.as_ref())).count()
    }
}

/// Length of a word as perceived by a reader
fn word_len(word: &str) -> usize {
    word.graphemes(true).count()
}
