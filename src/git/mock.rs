use crate::error::{BumpError, Result};
use crate::git::TagSource;

/// Mock tag source for testing without actual git operations
pub struct MockTagSource {
    tags: Vec<String>,
    failure: Option<String>,
}

impl MockTagSource {
    /// Create a new empty mock source
    pub fn new() -> Self {
        MockTagSource {
            tags: Vec::new(),
            failure: None,
        }
    }

    /// Create a mock source holding the given tags
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockTagSource {
            tags: tags.into_iter().map(Into::into).collect(),
            failure: None,
        }
    }

    /// Create a mock source whose retrieval always fails
    pub fn failing(reason: impl Into<String>) -> Self {
        MockTagSource {
            tags: Vec::new(),
            failure: Some(reason.into()),
        }
    }

    /// Add a tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }
}

impl Default for MockTagSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TagSource for MockTagSource {
    fn retrieve_tags(&self) -> Result<Vec<String>> {
        match &self.failure {
            Some(reason) => Err(BumpError::tag_source(reason.clone())),
            None => Ok(self.tags.clone()),
        }
    }
}
