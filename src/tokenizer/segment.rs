use serde::{Deserialize, Serialize};

/// Classification of a segment under the word-shape rule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    Word,
    Separator,
}

/// A maximal contiguous span of the document buffer.
///
/// Segments carry byte offsets (half-open) into the buffer they were cut
/// from rather than copied substrings, so the buffer stays single-rooted in
/// the searcher that owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start: usize,
    pub end: usize,
}

impl Segment {
    pub fn word(start: usize, end: usize) -> Self {
        Self {
            kind: SegmentKind::Word,
            start,
            end,
        }
    }

    pub fn separator(start: usize, end: usize) -> Self {
        Self {
            kind: SegmentKind::Separator,
            start,
            end,
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind == SegmentKind::Word
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Resolve this segment against the buffer it was cut from
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_resolves_offsets() {
        let text = "123, 789";
        let seg = Segment::word(0, 3);
        assert_eq!(seg.slice(text), "123");
        assert_eq!(seg.len(), 3);
        assert!(seg.is_word());

        let sep = Segment::separator(3, 5);
        assert_eq!(sep.slice(text), ", ");
        assert!(!sep.is_word());
    }
}
