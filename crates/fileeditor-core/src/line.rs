//! Single-line text values with inclusive 1-based column ranges.
//!
//! Columns count chars, not bytes. Every range taken by a `Line` method is
//! inclusive at both ends, so `sub_line(4, 8)` yields five characters.

use std::fmt;

use crate::ordinal::Ordinal;
use crate::pattern::Pattern;

/// Outcome of a regex search within one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineMatch {
    /// The pattern matched starting at `column`, spanning `length` chars.
    Found { column: Ordinal, length: usize },
    NotFound,
    /// No match, and the whole line matched the stop pattern.
    Aborted,
}

impl LineMatch {
    pub fn is_found(&self) -> bool {
        matches!(self, LineMatch::Found { .. })
    }
}

/// A mutable line of text.
///
/// [`Line::is_empty`] means no chars at all, while [`Line::is_blank`] also
/// accepts whitespace only. Blank-line searches use `is_blank`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Line {
    text: String,
}

impl Line {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Byte offset of the char at 0-based `idx`, or the end of the text.
    fn byte_index(&self, idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(idx)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// 0-based char index of a byte offset.
    fn char_index(&self, byte: usize) -> usize {
        self.text[..byte].chars().count()
    }

    pub fn empty(&mut self) -> &mut Self {
        self.text.clear();
        self
    }

    /// Replace the whole line.
    pub fn replace(&mut self, text: &str) -> &mut Self {
        self.text.clear();
        self.text.push_str(text);
        self
    }

    pub fn prepend(&mut self, text: &str) -> &mut Self {
        self.text.insert_str(0, text);
        self
    }

    pub fn append(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    /// Insert `text` before the char at `column`. Columns past the end append.
    pub fn insert(&mut self, text: &str, column: usize) -> &mut Self {
        let idx = (column.max(1) - 1).min(self.len());
        let at = self.byte_index(idx);
        self.text.insert_str(at, text);
        self
    }

    /// Delete columns `start..=end`. The end is clamped to the line.
    pub fn delete(&mut self, start: usize, end: usize) -> &mut Self {
        let len = self.len();
        let first = start.max(1) - 1;
        let last = end.min(len);
        if first >= len || last <= first {
            return self;
        }
        let range = self.byte_index(first)..self.byte_index(last);
        self.text.replace_range(range, "");
        self
    }

    /// Replace the first occurrence of `find`. Returns true if anything changed.
    pub fn replace_first(&mut self, find: &str, with: &str) -> bool {
        if find.is_empty() {
            return false;
        }
        match self.text.find(find) {
            Some(at) => {
                self.text.replace_range(at..at + find.len(), with);
                true
            }
            None => false,
        }
    }

    /// Replace every occurrence of `find`.
    ///
    /// Scanning resumes after each inserted replacement, so a replacement
    /// containing `find` is never rescanned.
    pub fn replace_all(&mut self, find: &str, with: &str) -> bool {
        if find.is_empty() {
            return false;
        }
        let mut from = 0;
        let mut replaced = false;
        while let Some(offset) = self.text[from..].find(find) {
            let at = from + offset;
            self.text.replace_range(at..at + find.len(), with);
            from = at + with.len();
            replaced = true;
        }
        replaced
    }

    /// Byte range strictly between the first `before` and the first `after`
    /// that follows it.
    fn between_range(&self, before: &str, after: &str) -> Option<std::ops::Range<usize>> {
        let start = self.text.find(before)? + before.len();
        let end = start + self.text[start..].find(after)?;
        Some(start..end)
    }

    /// Replace the text between `before` and `after`, keeping both delimiters.
    pub fn replace_between(&mut self, before: &str, after: &str, new_between: &str) -> bool {
        match self.between_range(before, after) {
            Some(range) => {
                self.text.replace_range(range, new_between);
                true
            }
            None => false,
        }
    }

    /// The text between `before` and `after`, or an empty string.
    pub fn between(&self, before: &str, after: &str) -> String {
        self.between_range(before, after)
            .map(|range| self.text[range].to_string())
            .unwrap_or_default()
    }

    /// Columns `start..=end` as a new line.
    ///
    /// `end` is clamped to the line length. An end before the start gives an
    /// empty line.
    pub fn sub_line(&self, start: usize, end: usize) -> Line {
        let start = start.max(1);
        let end = end.min(self.len());
        if end < start {
            return Line::default();
        }
        Line::new(
            self.text
                .chars()
                .skip(start - 1)
                .take(end - start + 1)
                .collect::<String>(),
        )
    }

    /// The char at `column`.
    pub fn char_at(&self, column: usize) -> Option<char> {
        self.text.chars().nth(column.checked_sub(1)?)
    }

    /// Column of the first occurrence of `text`.
    pub fn index_of(&self, text: &str) -> Option<Ordinal> {
        self.index_of_from(text, 1)
    }

    /// Column of the first occurrence of `text` at or after `from`.
    pub fn index_of_from(&self, text: &str, from: usize) -> Option<Ordinal> {
        let idx = from.max(1) - 1;
        if idx > self.len() {
            return None;
        }
        let start = self.byte_index(idx);
        let at = start + self.text[start..].find(text)?;
        Some(Ordinal::from(self.char_index(at) + 1))
    }

    /// Search for `pattern` starting at column `from`.
    ///
    /// The start column is clamped into the line and a hit always starts on
    /// an existing column. If nothing matches and the whole line matches
    /// `end_at`, the search reports [`LineMatch::Aborted`]. Empty lines never
    /// match either pattern.
    pub fn find(&self, pattern: &Pattern, from: Ordinal, end_at: Option<&Pattern>) -> LineMatch {
        if self.text.is_empty() {
            return LineMatch::NotFound;
        }
        let len = self.len();
        let idx = from.to_zero_based().unwrap_or(len).min(len - 1);
        match pattern.find_at(&self.text, self.byte_index(idx)) {
            // An empty match after the last char is not a column of this line.
            Some((start, end)) if start < self.text.len() => LineMatch::Found {
                column: Ordinal::from(self.char_index(start) + 1),
                length: self.text[start..end].chars().count(),
            },
            _ if end_at.is_some_and(|stop| stop.matches(&self.text)) => LineMatch::Aborted,
            _ => LineMatch::NotFound,
        }
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Alias for [`Line::len`].
    pub fn last_column(&self) -> usize {
        self.len()
    }

    /// The last column as an ordinal; 1 for an empty line.
    pub fn last_column_number(&self) -> Ordinal {
        Ordinal::from_length(self.len())
    }

    pub fn column_within_limit(&self, column: usize) -> bool {
        column >= 1 && column <= self.len()
    }

    /// True if the line has no chars at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True if the line is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether the whole line matches `pattern`.
    pub fn matches(&self, pattern: &Pattern) -> bool {
        pattern.matches(&self.text)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Line {
    fn from(s: String) -> Self {
        Self { text: s }
    }
}

impl From<Line> for String {
    fn from(line: Line) -> Self {
        line.text
    }
}
