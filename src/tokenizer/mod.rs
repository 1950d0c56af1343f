//! Lossless text tokenization
//!
//! Splits a buffer into maximal Word/Separator segments under a
//! configurable word-shape rule. The emitted segments exactly partition the
//! buffer: they are contiguous, non-overlapping, and concatenating them in
//! order reproduces the input byte-for-byte. Adjacent segments never share
//! a kind, so consecutive same-kind characters always land in one segment.

mod segment;
mod tokenizer;

pub use segment::{Segment, SegmentKind};
pub use tokenizer::Tokenizer;
