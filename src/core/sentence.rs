//! Sentence extraction
//!
//! Splits a slice of document text into sentence-like units and recovers the
//! exact character range of each unit in the document. Splitting happens on a
//! markup-stripped copy, but ranges are always found by searching the
//! original text with a cursor that only moves forward, so a sentence that
//! occurs twice maps to two distinct ranges.

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::markup::{self, Stripped};

/// Sentence-ending punctuation followed by whitespace, or a bare newline
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.:!?]\s|\n").unwrap());

/// Candidates shorter than this (after trimming) are noise
const MIN_SENTENCE_CHARS: usize = 2;

/// A sentence located in the document
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Character offset of the first character (inclusive)
    pub from: usize,
    /// Character offset past the last character (exclusive)
    pub to: usize,
    /// Words of the inline-stripped sentence
    pub words: Vec<String>,
}

/// Returns true for characters that end a sentence and belong in its range
fn is_terminal_punctuation(ch: char) -> bool {
    matches!(ch, '.' | ':' | '!' | '?')
}

/// Find `candidate` in `text` at or after byte `cursor`, skipping matches
/// that touch a removed block construct. The match is extended over one
/// terminal punctuation mark directly after it. Returns the byte range.
fn locate(
    text: &str,
    candidate: &str,
    cursor: usize,
    stripped: &Stripped,
) -> Option<(usize, usize)> {
    let mut search = cursor;
    let start = loop {
        let found = search + text.get(search..)?.find(candidate)?;
        match stripped.removed_overlap(found..found + candidate.len()) {
            Some(removed_end) => search = removed_end,
            None => break found,
        }
    };

    let mut end = start + candidate.len();
    if let Some(next) = text[end..].chars().next().filter(|c| is_terminal_punctuation(*c)) {
        end += next.len_utf8();
    }
    Some((start, end))
}

/// Extract sentences from `text`, whose first character sits at character
/// offset `offset` in the full document.
pub fn extract(text: &str, offset: usize) -> Vec<Sentence> {
    extract_stripped(text, offset, &markup::strip_blocks(text))
}

fn extract_stripped(text: &str, offset: usize, stripped: &Stripped) -> Vec<Sentence> {
    let mut sentences = Vec::new();

    // Search cursor into `text`, kept as both a byte index and a char count
    let mut cursor_byte = 0;
    let mut cursor_char = 0;

    for candidate in SENTENCE_BREAK.split(&stripped.text) {
        let candidate = candidate.trim();
        if candidate.chars().count() < MIN_SENTENCE_CHARS {
            continue;
        }

        let Some((start_byte, end_byte)) = locate(text, candidate, cursor_byte, stripped) else {
            trace!("sentence {:?} not found after byte {}", candidate, cursor_byte);
            continue;
        };

        let from = cursor_char + text[cursor_byte..start_byte].chars().count();
        let to = from + text[start_byte..end_byte].chars().count();
        cursor_byte = end_byte;
        cursor_char = to;

        let words: Vec<String> = markup::strip_inline(candidate)
            .split(' ')
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();

        sentences.push(Sentence {
            from: offset + from,
            to: offset + to,
            words,
        });
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ranges(sentences: &[Sentence]) -> Vec<(usize, usize)> {
        sentences.iter().map(|s| (s.from, s.to)).collect()
    }

    #[test]
    fn test_split_on_terminal_punctuation() {
        let sentences = extract("The cat sat. The dog ran! Did it? Yes: quickly", 0);
        assert_eq!(
            ranges(&sentences),
            vec![(0, 12), (13, 25), (26, 33), (34, 38), (39, 46)]
        );
        assert_eq!(sentences[0].words, vec!["The", "cat", "sat"]);
    }

    #[test]
    fn test_repeated_sentences_map_to_distinct_ranges() {
        let sentences = extract("Go. Go. Go.", 0);
        assert_eq!(ranges(&sentences), vec![(0, 3), (4, 7), (8, 11)]);
    }

    #[test]
    fn test_offset_is_applied() {
        let sentences = extract("Hi there. Bye now.", 100);
        assert_eq!(ranges(&sentences), vec![(100, 109), (110, 118)]);
    }

    #[test]
    fn test_newline_splits() {
        let sentences = extract("first line\nsecond line", 0);
        assert_eq!(ranges(&sentences), vec![(0, 10), (11, 22)]);
    }

    #[test]
    fn test_short_candidates_discarded() {
        let sentences = extract("a. b. Real sentence here.", 0);
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].words, vec!["Real", "sentence", "here."]);
    }

    #[test]
    fn test_inline_markup_only_affects_words() {
        let sentences = extract("*hello* world", 0);
        assert_eq!(ranges(&sentences), vec![(0, 13)]);
        assert_eq!(sentences[0].words, vec!["hello", "world"]);
    }

    #[test]
    fn test_heading_range_excludes_marker() {
        let sentences = extract("# Title\nBody text.", 0);
        assert_eq!(ranges(&sentences), vec![(2, 7), (8, 18)]);
    }

    #[test]
    fn test_code_fence_is_skipped() {
        let text = "Intro text.\n```\nlet x = 1;\n```\nOutro text.";
        let sentences = extract(text, 0);
        assert_eq!(sentences.len(), 2);
        let last = &sentences[1];
        assert_eq!(&text[last.from..last.to], "Outro text.");
    }

    #[test]
    fn test_offsets_count_characters_not_bytes() {
        let text = "Café au lait. Naïve idea.";
        let sentences = extract(text, 0);
        assert_eq!(ranges(&sentences), vec![(0, 13), (14, 25)]);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract("", 0).is_empty());
        assert!(extract("\n\n  \n", 0).is_empty());
    }

    #[test]
    fn test_frontmatter_text_is_never_matched() {
        let text = "---\nsummary: Short intro\n---\nShort intro";
        assert_eq!(ranges(&extract(text, 0)), vec![(29, 40)]);
    }

    #[test]
    fn test_fenced_text_is_never_matched() {
        let text = "```\nthis\n```\nis";
        assert_eq!(ranges(&extract(text, 0)), vec![(13, 15)]);
    }

    #[test]
    fn test_locate_extends_over_punctuation() {
        let stripped = Stripped::default();
        assert_eq!(locate("Go. Go.", "Go", 0, &stripped), Some((0, 3)));
        assert_eq!(locate("Go. Go.", "Go", 3, &stripped), Some((4, 7)));
    }

    #[test]
    fn test_locate_misses_text_behind_cursor() {
        let stripped = Stripped::default();
        assert_eq!(locate("Alpha one. Beta two.", "Alpha one", 4, &stripped), None);
        assert_eq!(locate("Alpha one.", "Gamma", 0, &stripped), None);
    }

    #[test]
    fn test_unlocatable_sentence_is_skipped() {
        let text = "Alpha one.\nBeta two.";
        let stripped = Stripped {
            text: "Alpha one.\nGhost line\nBeta two.".to_string(),
            removed: Vec::new(),
        };
        let sentences = extract_stripped(text, 0, &stripped);
        assert_eq!(ranges(&sentences), vec![(0, 10), (11, 20)]);
        assert_eq!(sentences[1].words, vec!["Beta", "two."]);
    }
}
