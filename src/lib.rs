//! In-memory keyword-in-context text search.
//!
//! `concord` indexes a single text buffer and answers context-window
//! queries: given a query word and a context size N, it returns every
//! occurrence of that word together with N surrounding words on each side,
//! in document order, exactly as the original text rendered them (casing,
//! spacing, punctuation, and line terminators preserved verbatim).
//!
//! # Architecture
//!
//! - [`Tokenizer`]: splits the buffer into a lossless, ordered sequence of
//!   Word/Separator segments under a configurable word-shape rule
//! - [`PositionIndex`]: one-pass index from case-folded word text to the
//!   segment positions holding that word
//! - [`Searcher`]: owns the buffer and its index, and reconstructs
//!   boundary-correct context windows as zero-copy slices of the buffer
//!
//! # Example
//!
//! ```
//! use concord::Searcher;
//!
//! let searcher = Searcher::new("the quick brown fox, the lazy dog").unwrap();
//! let windows = searcher.search("the", 1);
//! assert_eq!(windows, vec!["the quick", "fox, the lazy"]);
//! ```

pub mod config;
pub mod error;
pub mod searcher;
pub mod tokenizer;

pub use config::{SearcherConfig, DEFAULT_WORD_PATTERN};
pub use error::{ConcordError, Result};
pub use searcher::{PositionIndex, Searcher};
pub use tokenizer::{Segment, SegmentKind, Tokenizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
