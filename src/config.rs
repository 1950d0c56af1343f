use serde::{Deserialize, Serialize};

/// Word-shape rule used when none is supplied: alphabetic and numeric runs
/// with apostrophe as a word character, so `animal's` and `1844` are single
/// words while `.` `,` `[` `]` and whitespace always break a word.
pub const DEFAULT_WORD_PATTERN: &str = "[A-Za-z0-9']+";

/// Searcher configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearcherConfig {
    /// Regular expression describing one maximal word run
    pub word_pattern: String,
    /// Fold indexed words and queries to lowercase before comparison
    pub case_insensitive: bool,
}

impl Default for SearcherConfig {
    fn default() -> Self {
        Self {
            word_pattern: DEFAULT_WORD_PATTERN.to_string(),
            case_insensitive: true,
        }
    }
}
