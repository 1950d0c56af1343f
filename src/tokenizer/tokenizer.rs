use regex::Regex;

use crate::error::{ConcordError, Result};

use super::Segment;

/// Explicit cursor over a text buffer yielding maximal Word/Separator
/// segments.
///
/// At each step the cursor finds the next word-shape match: if it begins at
/// the current offset, the full maximal run is emitted as a Word; otherwise
/// everything up to the start of that match (or end-of-buffer) is emitted
/// as one Separator. The sequence is lazy, finite, and non-restartable.
pub struct Tokenizer<'t> {
    text: &'t str,
    shape: Regex,
    pos: usize,
}

impl<'t> Tokenizer<'t> {
    /// Create a tokenizer over `text` with the given word-shape rule.
    ///
    /// Fails if the pattern does not compile, or if it can match the empty
    /// string (a zero-width word shape cannot partition the buffer into
    /// non-empty segments).
    pub fn new(text: &'t str, word_shape: &str) -> Result<Self> {
        let shape = Regex::new(word_shape)?;
        if shape.is_match("") {
            return Err(ConcordError::ZeroWidthPattern);
        }
        Ok(Self {
            text,
            shape,
            pos: 0,
        })
    }

    /// The buffer this tokenizer was built over
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// True while unconsumed buffer remains
    pub fn has_next(&self) -> bool {
        self.pos < self.text.len()
    }

    /// Next maximal segment, advancing the cursor.
    ///
    /// Calling this with no input left is a programming error in the caller
    /// and fails with [`ConcordError::TokenizerExhausted`].
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Segment> {
        if !self.has_next() {
            return Err(ConcordError::TokenizerExhausted);
        }
        let seg = match self.shape.find_at(self.text, self.pos) {
            Some(m) if m.start() == self.pos => Segment::word(m.start(), m.end()),
            Some(m) => Segment::separator(self.pos, m.start()),
            None => Segment::separator(self.pos, self.text.len()),
        };
        self.pos = seg.end;
        Ok(seg)
    }

    /// True iff the entire string matches the word-shape rule, first
    /// character to last (no partial match, no unmatched leading or
    /// trailing characters).
    pub fn is_word(&self, s: &str) -> bool {
        self.shape
            .find(s)
            .map_or(false, |m| m.start() == 0 && m.end() == s.len())
    }
}
