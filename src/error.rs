use thiserror::Error;

/// Main error type for concord operations
#[derive(Error, Debug)]
pub enum ConcordError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid word pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("word pattern matches the empty string")]
    ZeroWidthPattern,

    #[error("tokenizer exhausted: no input remains")]
    TokenizerExhausted,
}

/// Result type alias for concord operations
pub type Result<T> = std::result::Result<T, ConcordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConcordError::ZeroWidthPattern;
        assert_eq!(err.to_string(), "word pattern matches the empty string");

        let err = ConcordError::TokenizerExhausted;
        assert_eq!(err.to_string(), "tokenizer exhausted: no input remains");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ConcordError = io.into();
        assert!(matches!(err, ConcordError::Io(_)));
    }

    #[test]
    fn test_pattern_conversion() {
        let err: ConcordError = regex::Regex::new("[").unwrap_err().into();
        assert!(matches!(err, ConcordError::Pattern(_)));
    }
}
