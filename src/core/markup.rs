//! Markdown noise removal
//!
//! Two passes with different contracts:
//! - [`strip_blocks`] removes whole constructs (fences, frontmatter, heading
//!   and checkbox markers) before sentence splitting.
//! - [`strip_inline`] cleans a single sentence before its words are counted.
//!
//! Neither pass is used to compute offsets. Ranges are always recovered from
//! the original text.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

static BACKTICK_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)^[ \t]{0,3}```.*?^[ \t]{0,3}```[^\n]*$").unwrap());

static TILDE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)^[ \t]{0,3}~~~.*?^[ \t]{0,3}~~~[^\n]*$").unwrap());

/// YAML (`---` / `...`) or TOML (`+++`) frontmatter at the very top of a document
static FRONTMATTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A(?:---|\+\+\+)[ \t]*\r?\n.*?\n(?:---|\.\.\.|\+\+\+)[ \t]*(?:\r?\n|\z)")
        .unwrap()
});

static HEADING_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]{0,3}#{1,6}(?:[ \t]+|$)").unwrap());

static CHECKBOX_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]+\[[ xX]\][ \t]*").unwrap());

static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap());

static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap());

/// `[[target]]` or `[[target|label]]`, keeping the label when present
static WIKI_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[(?:[^\]|]*\|)?([^\]]*)\]\]").unwrap());

/// Pandoc citations `[@doe99]` and footnote references `[^1]`
static CITATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[@^][^\]]*\]").unwrap());

static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*+|~~|==").unwrap());

static UNDERSCORE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|\s)_{1,3}(\S)").unwrap());

static UNDERSCORE_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\S)_{1,3}(\s|$|[.,;:!?])").unwrap());

/// Block-stripped text together with the input bytes that were dropped
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stripped {
    pub text: String,
    /// Byte ranges of the input that were removed, sorted and disjoint
    pub removed: Vec<Range<usize>>,
}

impl Stripped {
    /// End of the first removed range that intersects `range`, if any
    pub fn removed_overlap(&self, range: Range<usize>) -> Option<usize> {
        let idx = self.removed.partition_point(|r| r.end <= range.start);
        self.removed
            .get(idx)
            .filter(|r| r.start < range.end)
            .map(|r| r.end)
    }

    /// Map a byte offset in the stripped text back to the input
    fn to_input(&self, pos: usize) -> usize {
        let mut input = pos;
        for r in &self.removed {
            if r.start > input {
                break;
            }
            input += r.len();
        }
        input
    }

    fn remove_matches(&mut self, re: &Regex) {
        let found: Vec<Range<usize>> = re
            .find_iter(&self.text)
            .map(|m| m.range())
            .filter(|r| !r.is_empty())
            .collect();
        if found.is_empty() {
            return;
        }

        let mut kept = String::with_capacity(self.text.len());
        let mut last = 0;
        for r in &found {
            kept.push_str(&self.text[last..r.start]);
            last = r.end;
        }
        kept.push_str(&self.text[last..]);

        let mapped: Vec<Range<usize>> = found
            .iter()
            .map(|r| self.to_input(r.start)..self.to_input(r.end - 1) + 1)
            .collect();
        self.text = kept;
        self.removed.extend(mapped);
        self.removed.sort_by_key(|r| r.start);

        let mut merged: Vec<Range<usize>> = Vec::with_capacity(self.removed.len());
        for r in self.removed.drain(..) {
            match merged.last_mut() {
                Some(prev) if r.start <= prev.end => prev.end = prev.end.max(r.end),
                _ => merged.push(r),
            }
        }
        self.removed = merged;
    }
}

/// Remove block-level markdown constructs.
///
/// Removed spans are replaced by nothing. Newlines outside the removed spans
/// survive, so sentence boundaries on either side stay where they were. Each
/// pass runs on the output of the previous one, and the dropped input bytes
/// are recorded so callers can avoid matching text that was never scored.
pub fn strip_blocks(text: &str) -> Stripped {
    let mut stripped = Stripped {
        text: text.to_string(),
        removed: Vec::new(),
    };
    for re in [
        &*FRONTMATTER,
        &*BACKTICK_FENCE,
        &*TILDE_FENCE,
        &*HEADING_MARKER,
        &*CHECKBOX_MARKER,
    ] {
        stripped.remove_matches(re);
    }
    stripped
}

/// Remove inline markup from a single sentence.
///
/// Links and images keep their display text, wiki links keep their label,
/// citations vanish and emphasis markers are dropped.
pub fn strip_inline(sentence: &str) -> String {
    let text = IMAGE.replace_all(sentence, "$1");
    let text = WIKI_LINK.replace_all(&text, "$1");
    let text = LINK.replace_all(&text, "$1");
    let text = CITATION.replace_all(&text, "");
    let text = EMPHASIS.replace_all(&text, "");
    let text = UNDERSCORE_OPEN.replace_all(&text, "$1$2");
    let text = UNDERSCORE_CLOSE.replace_all(&text, "$1$2");
    text.into_owned()
}
