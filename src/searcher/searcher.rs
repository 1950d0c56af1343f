use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::SearcherConfig;
use crate::error::Result;
use crate::tokenizer::Tokenizer;

use super::PositionIndex;

/// Context-window searcher over a single in-memory document.
///
/// The searcher owns the document buffer together with its segment sequence
/// and position index, all built in one pass at construction and never
/// mutated afterwards. One instance serves any number of queries, and
/// because the state is immutable it may be shared across threads for
/// read-only querying without locking.
#[derive(Debug)]
pub struct Searcher {
    text: String,
    index: PositionIndex,
}

impl Searcher {
    /// Build a searcher over `text` with the default configuration.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        Self::with_config(text, &SearcherConfig::default())
    }

    /// Build a searcher over `text` with a custom word-shape rule or
    /// folding behavior.
    pub fn with_config(text: impl Into<String>, config: &SearcherConfig) -> Result<Self> {
        let text = text.into();
        let tokenizer = Tokenizer::new(&text, &config.word_pattern)?;
        let index = PositionIndex::build(tokenizer, config.case_insensitive)?;
        debug!(bytes = text.len(), "searcher built");
        Ok(Self { text, index })
    }

    /// Load a document from `path` and build a searcher over it.
    ///
    /// The file content is taken verbatim, line-terminator sequences
    /// included, so a literal `\r\n` in the document may appear inside a
    /// returned window. I/O failures (including non-UTF-8 content) surface
    /// here and no partial index is ever observable.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::new(text)
    }

    /// The full document buffer
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Every occurrence of `word`, each with up to `context_size` words of
    /// surrounding text on either side, in document order.
    ///
    /// Windows are verbatim slices of the document: original casing,
    /// spacing, and punctuation between the included words are preserved
    /// exactly. A match closer than `context_size` words to a buffer edge
    /// yields a window truncated at that edge, never padded. Distinct
    /// occurrences are never merged, even when their windows coincide.
    /// Unknown words yield an empty vector.
    pub fn search(&self, word: &str, context_size: usize) -> Vec<&str> {
        let segments = self.index.segments();
        self.index
            .positions(word)
            .iter()
            .map(|&at| {
                let first = self.window_start(at, context_size);
                let last = self.window_end(at, context_size);
                &self.text[segments[first].start..segments[last].end]
            })
            .collect()
    }

    /// First included segment: walk backward from `at` until `context`
    /// words are counted or the sequence start is reached. Hitting the
    /// start mid-walk includes segment 0 even when it is a separator.
    fn window_start(&self, at: usize, context: usize) -> usize {
        let segments = self.index.segments();
        let mut idx = at;
        let mut remaining = context;
        while remaining > 0 && idx > 0 {
            idx -= 1;
            if segments[idx].is_word() {
                remaining -= 1;
            }
        }
        idx
    }

    /// Last included segment, symmetric to [`Self::window_start`]. A match
    /// near end-of-buffer keeps the trailing separator.
    fn window_end(&self, at: usize, context: usize) -> usize {
        let segments = self.index.segments();
        let mut idx = at;
        let mut remaining = context;
        while remaining > 0 && idx + 1 < segments.len() {
            idx += 1;
            if segments[idx].is_word() {
                remaining -= 1;
            }
        }
        idx
    }
}
