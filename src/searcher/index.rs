use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;
use crate::tokenizer::{Segment, Tokenizer};

/// Immutable position index over a tokenized document.
///
/// Holds the full ordered segment sequence plus a map from case-folded word
/// text to the ascending segment positions holding that word. Separator
/// segments are retained in the sequence (context reconstruction needs
/// them) but never keyed. Folding is applied through [`Self::positions`] so
/// queries and index keys always normalize identically.
#[derive(Debug)]
pub struct PositionIndex {
    segments: Vec<Segment>,
    postings: HashMap<String, Vec<usize>>,
    case_insensitive: bool,
}

impl PositionIndex {
    /// Drain `tokenizer` and build the index in a single linear pass.
    pub fn build(mut tokenizer: Tokenizer<'_>, case_insensitive: bool) -> Result<Self> {
        let text = tokenizer.text();
        let mut segments = Vec::new();
        let mut postings: HashMap<String, Vec<usize>> = HashMap::new();

        while tokenizer.has_next() {
            let seg = tokenizer.next()?;
            if seg.is_word() {
                let key = fold(seg.slice(text), case_insensitive);
                postings.entry(key).or_default().push(segments.len());
            }
            segments.push(seg);
        }

        debug!(
            segments = segments.len(),
            terms = postings.len(),
            "position index built"
        );

        Ok(Self {
            segments,
            postings,
            case_insensitive,
        })
    }

    /// Ordered segment sequence for the whole document
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Ascending segment positions of `word`, folded the same way the index
    /// keys were. Unknown words yield an empty slice.
    pub fn positions(&self, word: &str) -> &[usize] {
        self.postings
            .get(&fold(word, self.case_insensitive))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct folded terms
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }
}

fn fold(word: &str, case_insensitive: bool) -> String {
    if case_insensitive {
        word.to_lowercase()
    } else {
        word.to_string()
    }
}
