//! Word boundary scans within a single line.
//!
//! These functions work on a line's chars with 1-based columns, so the
//! editor can run them without re-walking the UTF-8 text for every step.
//! Columns outside `1..=chars.len()` are treated as "ran off the edge".

/// Char at 1-based `column`, if it exists.
fn char_at(chars: &[char], column: usize) -> Option<char> {
    chars.get(column.checked_sub(1)?).copied()
}

/// Step `column` forward while the char under it satisfies `pred`.
///
/// Returns false if the scan walked off the end of the line.
fn skip_forward(chars: &[char], column: &mut usize, pred: impl Fn(char) -> bool) -> bool {
    while let Some(c) = char_at(chars, *column) {
        if !pred(c) {
            return true;
        }
        *column += 1;
    }
    false
}

/// Step `column` backward while the char under it satisfies `pred`.
///
/// Returns false if the scan walked off the start of the line.
fn skip_backward(chars: &[char], column: &mut usize, pred: impl Fn(char) -> bool) -> bool {
    while let Some(c) = char_at(chars, *column) {
        if !pred(c) {
            return true;
        }
        *column -= 1;
    }
    false
}

/// Move right over `words` words.
///
/// Each word is three phases: delimiters, the word itself, then the trailing
/// delimiters, leaving the column on the first char of the following word.
/// Returns the new column and whether every phase stayed inside the line.
/// The column may end one past the line; callers clamp.
pub fn words_right(chars: &[char], column: usize, words: usize, delimiter: char) -> (usize, bool) {
    let mut column = column;
    let mut success = true;
    for _ in 0..words {
        success = success
            && skip_forward(chars, &mut column, |c| c == delimiter)
            && skip_forward(chars, &mut column, |c| c != delimiter)
            && skip_forward(chars, &mut column, |c| c == delimiter);
        if !success {
            break;
        }
    }
    (column, success)
}

/// Move left over `words` words.
///
/// Each word is two phases: delimiters, then the word itself. The scan stops
/// on the delimiter before the word, so the final column is one past that.
/// Returns the new column and whether every phase stayed inside the line.
pub fn words_left(chars: &[char], column: usize, words: usize, delimiter: char) -> (usize, bool) {
    let mut column = column;
    let mut success = true;
    for _ in 0..words {
        success = success
            && skip_backward(chars, &mut column, |c| c == delimiter)
            && skip_backward(chars, &mut column, |c| c != delimiter);
        if !success {
            break;
        }
    }
    (column + 1, success)
}

/// Start column of the word under `column`.
///
/// If `column` is itself on a delimiter the word is taken to start right
/// after it.
pub fn word_start(chars: &[char], column: usize, delimiter: char) -> usize {
    let mut start = column;
    skip_backward(chars, &mut start, |c| c != delimiter);
    start + 1
}

/// Column one past the end of the word starting at `start`.
pub fn word_end(chars: &[char], start: usize, delimiter: char) -> usize {
    let mut end = start;
    skip_forward(chars, &mut end, |c| c != delimiter);
    end
}

/// The word beginning at `start`, up to the next delimiter.
pub fn word_from(chars: &[char], start: usize, delimiter: char) -> String {
    let end = word_end(chars, start, delimiter);
    match start.checked_sub(1) {
        Some(first) if first < chars.len() => chars[first..end - 1].iter().collect(),
        _ => String::new(),
    }
}
