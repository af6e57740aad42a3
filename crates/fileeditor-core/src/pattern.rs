//! Compiled regular expressions for line searches.

use std::fmt;

use regex::Regex;

use crate::error::{EditorError, Result};

/// A search pattern compiled once and reused across lines.
///
/// Holds both the unanchored form used for in-line searches and an anchored
/// `^(?:...)$` form used for whole-line matches.
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    search: Regex,
    whole: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self> {
        let compile = |src: &str| {
            Regex::new(src).map_err(|e| EditorError::InvalidPattern {
                pattern: source.to_string(),
                source: e,
            })
        };
        Ok(Self {
            source: source.to_string(),
            search: compile(source)?,
            whole: compile(&format!("^(?:{source})$"))?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// First match at or after `byte_start`, as (byte start, byte end).
    pub(crate) fn find_at(&self, text: &str, byte_start: usize) -> Option<(usize, usize)> {
        self.search
            .find_at(text, byte_start)
            .map(|m| (m.start(), m.end()))
    }

    /// Whether the entire text matches.
    pub fn matches(&self, text: &str) -> bool {
        self.whole.is_match(text)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
