//! 1-based bounded positions.
//!
//! An [`Ordinal`] is a line or column number starting at 1, or the open-ended
//! [`Ordinal::LAST`] marker meaning "up to the end, whatever that is".
//! Construction never fails: out-of-range values are clamped and the clamp is
//! recorded so callers can tell whether the value they asked for was honoured.

use std::cmp::Ordering;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Value {
    At(usize),
    Last,
}

/// A 1-based line or column number.
///
/// `LAST` compares greater than every finite ordinal. Two `LAST` values are
/// equal to each other. The adjusted flag is bookkeeping only and takes no
/// part in equality or ordering.
#[derive(Clone, Copy, Debug)]
pub struct Ordinal {
    value: Value,
    adjusted: bool,
}

impl Ordinal {
    /// The first position.
    pub const FIRST: Ordinal = Ordinal::at(1);

    /// The second position.
    pub const SECOND: Ordinal = Ordinal::at(2);

    /// The open end: "the last position, whatever it turns out to be".
    pub const LAST: Ordinal = Ordinal {
        value: Value::Last,
        adjusted: false,
    };

    const fn at(value: usize) -> Self {
        Self {
            value: Value::At(value),
            adjusted: false,
        }
    }

    /// Create an ordinal from a 1-based value. Values below 1 become 1.
    pub fn new(value: i64) -> Self {
        if value < 1 {
            return Self {
                value: Value::At(1),
                adjusted: true,
            };
        }
        Self::at(usize::try_from(value).unwrap_or(usize::MAX))
    }

    /// Create an ordinal from a 0-based index. Values below 0 become 1.
    pub fn from_zero_based(index: i64) -> Self {
        Self::new(index.saturating_add(1))
    }

    /// The ordinal of the last character of a line of `len` chars.
    ///
    /// An empty line still has a first position, so a length of 0 maps to 1.
    pub fn from_length(len: usize) -> Self {
        Self::at(len.max(1))
    }

    /// Whether this is the open-ended [`Ordinal::LAST`].
    pub fn is_last(&self) -> bool {
        self.value == Value::Last
    }

    /// The 1-based value, or `None` for `LAST`.
    pub fn get(&self) -> Option<usize> {
        match self.value {
            Value::At(v) => Some(v),
            Value::Last => None,
        }
    }

    /// The 0-based index, or `None` for `LAST`.
    pub fn to_zero_based(&self) -> Option<usize> {
        self.get().map(|v| v - 1)
    }

    /// The 1-based value with `LAST` resolved to `last`.
    pub fn resolve(&self, last: usize) -> usize {
        self.get().unwrap_or(last)
    }

    /// A new ordinal `delta` positions further on. `LAST` stays `LAST`.
    pub fn increment(&self, delta: usize) -> Self {
        match self.value {
            Value::At(v) => Self::at(v.saturating_add(delta)),
            Value::Last => Self::LAST,
        }
    }

    /// A new ordinal `delta` positions back, clamped at 1. `LAST` stays `LAST`.
    pub fn decrement(&self, delta: usize) -> Self {
        match self.value {
            Value::At(v) if delta >= v => Self {
                value: Value::At(1),
                adjusted: true,
            },
            Value::At(v) => Self::at(v - delta),
            Value::Last => Self::LAST,
        }
    }

    /// Clamp into `[1, max]`, or just floor at 1 when there is no usable max.
    ///
    /// A max of 0 counts as "no max". `LAST` becomes `max` when one is given.
    /// Returns true if the value had to change; the same answer is available
    /// afterwards from [`Ordinal::was_adjusted`].
    pub fn clamp_to_limit(&mut self, max: Option<usize>) -> bool {
        self.adjusted = false;
        let max = max.filter(|m| *m > 0);
        match (self.value, max) {
            (Value::At(v), _) if v < 1 => {
                self.value = Value::At(1);
                self.adjusted = true;
            }
            (Value::At(v), Some(m)) if v > m => {
                self.value = Value::At(m);
                self.adjusted = true;
            }
            (Value::Last, Some(m)) => {
                self.value = Value::At(m);
                self.adjusted = true;
            }
            _ => {}
        }
        self.adjusted
    }

    /// Whether the last construction or clamp had to change the value.
    pub fn was_adjusted(&self) -> bool {
        self.adjusted
    }

    /// Convenience inverse of [`Ordinal::was_adjusted`].
    pub fn was_valid(&self) -> bool {
        !self.adjusted
    }
}

impl Default for Ordinal {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<usize> for Ordinal {
    fn from(value: usize) -> Self {
        Self::new(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl PartialEq for Ordinal {
    fn eq(&self, other: &Self) -> bool {
        // The adjusted flag is not part of the value.
        self.value == other.value
    }
}

impl Eq for Ordinal {}

impl Ord for Ordinal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.value, other.value) {
            (Value::At(a), Value::At(b)) => a.cmp(&b),
            (Value::At(_), Value::Last) => Ordering::Less,
            (Value::Last, Value::At(_)) => Ordering::Greater,
            (Value::Last, Value::Last) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Ordinal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<usize> for Ordinal {
    fn eq(&self, other: &usize) -> bool {
        self.value == Value::At(*other)
    }
}

impl PartialOrd<usize> for Ordinal {
    fn partial_cmp(&self, other: &usize) -> Option<Ordering> {
        match self.value {
            Value::At(v) => Some(v.cmp(other)),
            Value::Last => Some(Ordering::Greater),
        }
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::At(v) => write!(f, "{v}"),
            Value::Last => f.write_str("LAST"),
        }
    }
}
