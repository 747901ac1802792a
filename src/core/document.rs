//! Document: read-only rope-backed text plus the viewports looking into it
//!
//! The document is the source of visible regions for the annotation host.
//! Offsets are character indices, matching ropey's indexing.

use log::warn;
use ropey::Rope;
use std::borrow::Cow;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::core::pipeline::Region;
use crate::error::{Error, Result};

/// Decode `bytes` as UTF-8, replacing invalid sequences with U+FFFD
fn decode<'a>(bytes: &'a [u8], source: &str) -> Cow<'a, str> {
    let text = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = text {
        warn!(
            "{} is not valid UTF-8; invalid bytes were replaced and offsets may differ from the file",
            source
        );
    }
    text
}

/// Read-only text document
#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
    /// Filename (if loaded from file)
    pub filename: Option<PathBuf>,
}

impl Document {
    pub fn from_string(content: impl AsRef<str>) -> Self {
        Self {
            rope: Rope::from_str(content.as_ref()),
            filename: None,
        }
    }

    /// Load a document from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = validate_file_path(path.as_ref())?;
        let bytes = fs::read(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let text = decode(&bytes, &path.display().to_string());

        Ok(Self {
            rope: Rope::from_str(&text),
            filename: Some(path),
        })
    }

    /// Load a document from any reader (stdin in pipe mode)
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| Error::Read {
                path: PathBuf::from("-"),
                source,
            })?;
        Ok(Self::from_string(decode(&bytes, "stdin")))
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Text of line `idx` without its line break, empty past the end
    pub fn line(&self, idx: usize) -> String {
        if idx >= self.rope.len_lines() {
            return String::new();
        }
        let line = self.rope.line(idx).to_string();
        line.trim_end_matches(['\n', '\r']).to_string()
    }

    /// Character offset of the start of line `idx`
    pub fn line_to_char(&self, idx: usize) -> usize {
        self.rope.line_to_char(idx.min(self.rope.len_lines()))
    }

    /// Display name for status lines
    pub fn display_name(&self) -> String {
        self.filename
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "[stdin]".to_string())
    }

    /// The whole document as a single region
    pub fn full_region(&self) -> Region {
        Region::new(self.rope.to_string(), 0)
    }

    /// Regions shown by `viewports`, merged where they overlap or touch and
    /// sorted by offset.
    pub fn visible_regions(&self, viewports: &[Viewport]) -> Vec<Region> {
        let total = self.rope.len_lines();
        let mut spans: Vec<(usize, usize)> = viewports
            .iter()
            .map(|v| {
                let start = v.top_line.min(total);
                (start, (start + v.height).min(total))
            })
            .filter(|(start, end)| start < end)
            .collect();
        spans.sort_unstable();

        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
        for (start, end) in spans {
            match merged.last_mut() {
                Some(last) if start <= last.1 => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }

        merged
            .into_iter()
            .map(|(start_line, end_line)| {
                let from = self.rope.line_to_char(start_line);
                let to = self.rope.line_to_char(end_line);
                Region::new(self.rope.slice(from..to).to_string(), from)
            })
            .collect()
    }
}

/// A window onto a document, measured in lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top_line: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(top_line: usize, height: usize) -> Self {
        Self { top_line, height }
    }

    /// Furthest `top_line` that still fills the viewport
    fn max_top(&self, total_lines: usize) -> usize {
        total_lines.saturating_sub(self.height)
    }

    pub fn scroll_by(&mut self, delta: isize, total_lines: usize) {
        let top = if delta < 0 {
            self.top_line.saturating_sub(delta.unsigned_abs())
        } else {
            self.top_line.saturating_add(delta as usize)
        };
        self.top_line = top.min(self.max_top(total_lines));
    }

    /// Scroll one page down, keeping `margin` lines of overlap
    pub fn page_down(&mut self, margin: usize, total_lines: usize) {
        let step = self.height.saturating_sub(margin).max(1);
        self.scroll_by(step as isize, total_lines);
    }

    pub fn page_up(&mut self, margin: usize, total_lines: usize) {
        let step = self.height.saturating_sub(margin).max(1);
        self.scroll_by(-(step as isize), total_lines);
    }

    pub fn to_top(&mut self) {
        self.top_line = 0;
    }

    pub fn to_bottom(&mut self, total_lines: usize) {
        self.top_line = self.max_top(total_lines);
    }

    /// Re-apply bounds after a resize
    pub fn resize(&mut self, height: usize, total_lines: usize) {
        self.height = height;
        self.top_line = self.top_line.min(self.max_top(total_lines));
    }
}

/// Validate a path before reading it; device files and pipes can hang the reader.
fn validate_file_path(path: &Path) -> Result<PathBuf> {
    let invalid = |reason: &str| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    let canonical = path
        .canonicalize()
        .map_err(|e| invalid(&e.to_string()))?;

    if canonical.is_dir() {
        return Err(invalid("is a directory"));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        let metadata = fs::metadata(&canonical).map_err(|e| invalid(&e.to_string()))?;
        let ft = metadata.file_type();
        if ft.is_char_device() || ft.is_block_device() {
            return Err(invalid("device files are not supported"));
        }
        if ft.is_fifo() {
            return Err(invalid("FIFO/named pipe files are not supported"));
        }
        if ft.is_socket() {
            return Err(invalid("socket files are not supported"));
        }
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn doc() -> Document {
        Document::from_string("line zero\nline one\nline two\nline three\n")
    }

    #[test]
    fn test_line_access() {
        let doc = doc();
        assert_eq!(doc.len_lines(), 5);
        assert_eq!(doc.line(1), "line one");
        assert_eq!(doc.line(4), "");
        assert_eq!(doc.line(99), "");
        assert_eq!(doc.line_to_char(1), 10);
    }

    #[test]
    fn test_visible_region_offsets() {
        let doc = doc();
        let regions = doc.visible_regions(&[Viewport::new(1, 2)]);
        assert_eq!(regions, vec![Region::new("line one\nline two\n", 10)]);
    }

    #[test]
    fn test_visible_regions_merge_and_sort() {
        let doc = doc();
        let regions = doc.visible_regions(&[Viewport::new(2, 2), Viewport::new(0, 1), Viewport::new(1, 2)]);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].offset, 0);
        assert_eq!(regions[0].text, "line zero\nline one\nline two\nline three\n");
    }

    #[test]
    fn test_disjoint_viewports_stay_separate() {
        let doc = doc();
        let regions = doc.visible_regions(&[Viewport::new(3, 1), Viewport::new(0, 1)]);
        assert_eq!(
            regions,
            vec![
                Region::new("line zero\n", 0),
                Region::new("line three\n", 28),
            ]
        );
    }

    #[test]
    fn test_viewport_past_end_is_empty() {
        let doc = doc();
        assert!(doc.visible_regions(&[Viewport::new(40, 10)]).is_empty());
    }

    #[test]
    fn test_region_offsets_are_chars() {
        let doc = Document::from_string("héllo\nwörld\n");
        let regions = doc.visible_regions(&[Viewport::new(1, 1)]);
        assert_eq!(regions[0].offset, 6);
    }

    #[test]
    fn test_viewport_scrolling_bounds() {
        let mut view = Viewport::new(0, 10);
        view.scroll_by(-5, 100);
        assert_eq!(view.top_line, 0);
        view.scroll_by(95, 100);
        assert_eq!(view.top_line, 90);
        view.page_up(2, 100);
        assert_eq!(view.top_line, 82);
        view.page_down(2, 100);
        assert_eq!(view.top_line, 90);
        view.to_top();
        assert_eq!(view.top_line, 0);
        view.to_bottom(100);
        assert_eq!(view.top_line, 90);
        view.resize(30, 100);
        assert_eq!(view.top_line, 70);
    }

    #[test]
    fn test_short_document_never_scrolls() {
        let mut view = Viewport::new(0, 10);
        view.scroll_by(3, 4);
        assert_eq!(view.top_line, 0);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "# Title\nSome prose.").unwrap();
        let doc = Document::from_file(file.path()).unwrap();
        assert_eq!(doc.len_lines(), 2);
        assert!(doc.filename.is_some());
    }

    #[test]
    fn test_from_file_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Document::from_file(dir.path()),
            Err(Error::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_from_file_missing() {
        assert!(Document::from_file("/definitely/not/here.md").is_err());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let doc = Document::from_reader(&b"caf\xe9 au lait"[..]).unwrap();
        assert_eq!(doc.line(0), "caf\u{fffd} au lait");
        assert!(matches!(decode(b"plain", "test"), Cow::Borrowed("plain")));
        assert!(matches!(decode(b"\xff", "test"), Cow::Owned(_)));
    }

    #[test]
    fn test_from_reader() {
        let doc = Document::from_reader("piped text".as_bytes()).unwrap();
        assert_eq!(doc.line(0), "piped text");
        assert_eq!(doc.display_name(), "[stdin]");
    }
}
