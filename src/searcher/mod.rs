//! Position index and context-window search
//!
//! - [`PositionIndex`]: single-pass index over a tokenized document,
//!   mapping case-folded word text to ascending segment positions while
//!   retaining the full segment sequence for window reconstruction
//! - [`Searcher`]: owns the document buffer and its index; built once,
//!   immutable afterwards, serving any number of queries

mod index;
mod searcher;

pub use index::PositionIndex;
pub use searcher::Searcher;
