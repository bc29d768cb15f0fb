// Padded scan buffer and the bounded read window used by the rules
//
// Layout for "SMITH":
//
//   index   0 1 2 3 4 5 6 7 8 9 10 11 12
//   char    - - S M I T H - - -  -  -  -
//               ^start  ^end
//
// Rules read at most 6 positions past the cursor and at most 4 before it
// (the latter only behind a cursor-position guard), so every read a rule
// makes lands inside the buffer. All reads go through `PaddedBuffer::get`.

use crate::word::CanonicalWord;

/// Sentinel stored in the padding. Not a letter and not a vowel.
pub const PAD: char = '-';

/// Sentinel positions before the first letter.
pub const PRE_PAD: usize = 2;

/// Sentinel positions after the last letter.
pub const POST_PAD: usize = 6;

/// The word's letters wrapped in sentinel padding. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedBuffer {
    chars: Vec<char>,
    len: usize,
}

impl PaddedBuffer {
    /// Build the buffer for a canonical word.
    pub fn new(word: &CanonicalWord) -> Self {
        let letters = word.letters();
        let mut chars = Vec::with_capacity(PRE_PAD + letters.len() + POST_PAD);
        chars.extend(std::iter::repeat_n(PAD, PRE_PAD));
        chars.extend_from_slice(letters);
        chars.extend(std::iter::repeat_n(PAD, POST_PAD));
        Self {
            chars,
            len: letters.len(),
        }
    }

    /// Index of the first letter.
    pub fn start_index(&self) -> usize {
        PRE_PAD
    }

    /// Index of the last letter. Less than [`start_index`](Self::start_index)
    /// for an empty word.
    pub fn end_index(&self) -> usize {
        PRE_PAD + self.len - 1
    }

    /// Number of letters (padding excluded).
    pub fn word_len(&self) -> usize {
        self.len
    }

    /// Total length including padding.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: the padding alone is never empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Read one position.
    ///
    /// A read outside the buffer is a rule bug: it trips an assertion in debug
    /// builds and reads as [`PAD`] in release builds.
    pub fn get(&self, index: isize) -> char {
        debug_assert!(
            index >= 0 && (index as usize) < self.chars.len(),
            "read at {index} outside padded buffer of length {}",
            self.chars.len()
        );
        usize::try_from(index)
            .ok()
            .and_then(|i| self.chars.get(i))
            .copied()
            .unwrap_or(PAD)
    }

    /// Check whether `pattern` occurs starting at `index`.
    pub fn region_matches(&self, index: isize, pattern: &str) -> bool {
        pattern
            .chars()
            .enumerate()
            .all(|(i, p)| self.get(index + i as isize) == p)
    }
}

/// A read-only view of the buffer centered on the cursor.
///
/// Offsets are relative to the cursor; `letter` and the `starts_with` /
/// `ends_with` families are anchored to the word instead.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    buffer: &'a PaddedBuffer,
    pos: usize,
    slavo_germanic: bool,
}

impl<'a> Window<'a> {
    pub fn new(buffer: &'a PaddedBuffer, pos: usize, slavo_germanic: bool) -> Self {
        Self {
            buffer,
            pos,
            slavo_germanic,
        }
    }

    /// Cursor position in the buffer.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn start(&self) -> usize {
        self.buffer.start_index()
    }

    pub fn end(&self) -> usize {
        self.buffer.end_index()
    }

    pub fn is_slavo_germanic(&self) -> bool {
        self.slavo_germanic
    }

    /// The cursor sits on the first letter.
    pub fn at_start(&self) -> bool {
        self.pos == self.start()
    }

    /// The cursor sits on the last letter.
    pub fn at_end(&self) -> bool {
        self.pos == self.end()
    }

    /// The cursor is more than `n` letters past the first one.
    pub fn after_start(&self, n: usize) -> bool {
        self.pos > self.start() + n
    }

    /// The character under the cursor.
    pub fn current(&self) -> char {
        self.peek(0)
    }

    /// The character `offset` positions from the cursor.
    pub fn peek(&self, offset: isize) -> char {
        self.buffer.get(self.pos as isize + offset)
    }

    /// The character at `offset` is one of `set`.
    pub fn peek_is(&self, offset: isize, set: &[char]) -> bool {
        set.contains(&self.peek(offset))
    }

    /// The text at `offset` starts with `pattern`.
    pub fn matches(&self, offset: isize, pattern: &str) -> bool {
        self.buffer.region_matches(self.pos as isize + offset, pattern)
    }

    pub fn matches_any(&self, offset: isize, patterns: &[&str]) -> bool {
        patterns.iter().any(|p| self.matches(offset, p))
    }

    /// The `n`th letter of the word (0-based), padding past the end.
    pub fn letter(&self, n: usize) -> char {
        self.buffer.get((self.start() + n) as isize)
    }

    /// The word starts with `pattern`.
    pub fn starts_with(&self, pattern: &str) -> bool {
        self.buffer.region_matches(self.start() as isize, pattern)
    }

    pub fn starts_with_any(&self, patterns: &[&str]) -> bool {
        patterns.iter().any(|p| self.starts_with(p))
    }

    /// The word ends with one of `patterns`.
    pub fn ends_with_any(&self, patterns: &[&str]) -> bool {
        patterns.iter().any(|p| {
            let from = self.end() as isize + 1 - p.chars().count() as isize;
            from >= self.start() as isize && self.buffer.region_matches(from, p)
        })
    }
}
