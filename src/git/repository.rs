use crate::error::{BumpError, Result};
use git2::{Repository as Git2Repo, RepositoryOpenFlags};
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;

/// Tag source reading the tags of a local git repository
pub struct Git2TagSource {
    repo: Mutex<Git2Repo>,
    tag_prefix: Option<String>,
}

impl Git2TagSource {
    /// Open or discover a git repository
    ///
    /// Discovery walks up from `path` and honours the git environment
    /// (`GIT_DIR`, `GIT_CEILING_DIRECTORIES`) like the git command line does.
    ///
    /// # Returns
    /// * `Ok(Git2TagSource)` - Repository found at or above `path`
    /// * `Err(BumpError::TagSource)` - Not inside a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::open_ext(
            path,
            RepositoryOpenFlags::FROM_ENV,
            std::iter::empty::<&std::ffi::OsStr>(),
        )
        .map_err(|e| {
            BumpError::tag_source(format!(
                "Not in a git repository ({}): {}",
                path.display(),
                e
            ))
        })?;

        Ok(Git2TagSource::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2TagSource {
            repo: Mutex::new(repo),
            tag_prefix: None,
        }
    }

    /// Only return tags starting with `prefix`
    ///
    /// An empty prefix disables the filter.
    pub fn with_tag_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.tag_prefix = if prefix.is_empty() { None } else { Some(prefix) };
        self
    }
}

impl super::TagSource for Git2TagSource {
    fn retrieve_tags(&self) -> Result<Vec<String>> {
        let repo = self
            .repo
            .lock()
            .map_err(|_| BumpError::tag_source("Repository lock poisoned"))?;

        let tags = repo
            .tag_names(None)
            .map_err(|e| BumpError::tag_source(format!("Cannot list tags: {}", e)))?;

        let tags: Vec<String> = tags
            .iter()
            .flatten()
            .filter(|name| match &self.tag_prefix {
                Some(prefix) => name.starts_with(prefix.as_str()),
                None => true,
            })
            .map(|s| s.to_string())
            .collect();

        debug!(count = tags.len(), "tags received: {}", tags.join(", "));
        Ok(tags)
    }
}
