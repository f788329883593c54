//! Quote-aware character scanning.
//!
//! Every splitter in this crate goes through [`Unquoted`], which hides the
//! contents of quoted strings and reports the bracket depth of each remaining
//! character. Openers report the depth they open from and closers the depth
//! they return to, so a matched pair carries the same depth.
//!
//! Double-quoted strings honor backslash escapes; single-quoted strings run to
//! the next `'`.

use std::str::CharIndices;

pub(crate) struct Unquoted<'a> {
    chars: CharIndices<'a>,
    quote: Option<char>,
    escaped: bool,
    depth: usize,
}

impl<'a> Unquoted<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices(),
            quote: None,
            escaped: false,
            depth: 0,
        }
    }
}

impl Iterator for Unquoted<'_> {
    /// `(byte offset, character, depth)`
    type Item = (usize, char, usize);

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, ch) in self.chars.by_ref() {
            if let Some(quote) = self.quote {
                if self.escaped {
                    self.escaped = false;
                } else if quote == '"' && ch == '\\' {
                    self.escaped = true;
                } else if ch == quote {
                    self.quote = None;
                }
                continue;
            }
            match ch {
                '"' | '\'' => self.quote = Some(ch),
                '[' | '{' => {
                    let depth = self.depth;
                    self.depth += 1;
                    return Some((idx, ch, depth));
                }
                ']' | '}' => {
                    self.depth = self.depth.saturating_sub(1);
                    return Some((idx, ch, self.depth));
                }
                _ => return Some((idx, ch, self.depth)),
            }
        }
        None
    }
}

/// Split `text` on `sep` wherever it occurs unquoted at depth zero.
///
/// Pieces are returned untrimmed; the trailing piece is always yielded, even
/// when empty.
pub(crate) struct SplitTopLevel<'a> {
    text: &'a str,
    scan: Unquoted<'a>,
    start: usize,
    sep: char,
    done: bool,
}

pub(crate) fn split_top_level(text: &str, sep: char) -> SplitTopLevel<'_> {
    SplitTopLevel {
        text,
        scan: Unquoted::new(text),
        start: 0,
        sep,
        done: false,
    }
}

impl<'a> Iterator for SplitTopLevel<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }
        for (idx, ch, depth) in self.scan.by_ref() {
            if ch == self.sep && depth == 0 {
                let piece = &self.text[self.start..idx];
                self.start = idx + ch.len_utf8();
                return Some(piece);
            }
        }
        self.done = true;
        Some(&self.text[self.start..])
    }
}

/// Byte offset of the first unquoted, depth-zero occurrence of `needle`.
pub(crate) fn find_top_level(text: &str, needle: &str) -> Option<usize> {
    let first = needle.chars().next()?;
    Unquoted::new(text)
        .find(|&(idx, ch, depth)| ch == first && depth == 0 && text[idx..].starts_with(needle))
        .map(|(idx, _, _)| idx)
}

/// Given `text` starting with `[` or `{`, return the byte offset of the
/// matching closer.
pub(crate) fn matching_close(text: &str) -> Option<usize> {
    let mut scan = Unquoted::new(text);
    match scan.next() {
        Some((0, '[' | '{', 0)) => {}
        _ => return None,
    }
    scan.find(|&(_, ch, depth)| matches!(ch, ']' | '}') && depth == 0)
        .map(|(idx, _, _)| idx)
}
