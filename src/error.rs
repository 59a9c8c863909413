use thiserror::Error;

/// Unified error type for version-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(#[from] ParseError),

    #[error("Tag source failed: {0}")]
    TagSource(String),

    #[error("Hook failed: {0}")]
    Hook(String),

    #[error("Version overflow: {0}")]
    Overflow(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a string is rejected as a semantic version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed version core in '{0}' - expected MAJOR.MINOR.PATCH")]
    MalformedCore(String),

    #[error("malformed prerelease in '{0}' - expected PREFIX.NUMBER")]
    MalformedPrerelease(String),
}

/// Convenience type alias for Results in version-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a tag source error with context
    pub fn tag_source(msg: impl Into<String>) -> Self {
        BumpError::TagSource(msg.into())
    }

    /// Create a hook error with context
    pub fn hook(msg: impl Into<String>) -> Self {
        BumpError::Hook(msg.into())
    }

    /// Create an overflow error with context
    pub fn overflow(msg: impl Into<String>) -> Self {
        BumpError::Overflow(msg.into())
    }

    /// Whether this error must abort the pipeline rather than degrade to a default
    pub fn is_fatal(&self) -> bool {
        !matches!(self, BumpError::Version(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BumpError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BumpError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_parse_error() {
        let err: BumpError = ParseError::MalformedCore("1.x.0".to_string()).into();
        assert!(err.to_string().starts_with("Version parsing error"));
        assert!(err.to_string().contains("1.x.0"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (BumpError::config("x"), "Configuration error"),
            (BumpError::tag_source("x"), "Tag source failed"),
            (BumpError::hook("x"), "Hook failed"),
            (BumpError::overflow("x"), "Version overflow"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_parse_error_display() {
        let core = ParseError::MalformedCore("abc".to_string());
        assert!(core.to_string().contains("MAJOR.MINOR.PATCH"));

        let pre = ParseError::MalformedPrerelease("1.0.0-beta.x".to_string());
        assert!(pre.to_string().contains("PREFIX.NUMBER"));
    }

    #[test]
    fn test_fatal_classification() {
        assert!(BumpError::hook("boom").is_fatal());
        assert!(BumpError::tag_source("no repo").is_fatal());
        assert!(BumpError::overflow("major").is_fatal());
        assert!(!BumpError::Version(ParseError::MalformedCore("x".into())).is_fatal());
    }
}
