//! Tag source abstraction layer
//!
//! The version resolver never talks to git directly. It depends on the
//! [TagSource] capability, which hands back the complete set of tag names in
//! one call. Implementations:
//!
//! - [repository::Git2TagSource]: tags of a local repository via the `git2` crate
//! - [mock::MockTagSource]: in-memory tags for testing
//!
//! ```rust
//! # use version_bump::git::{MockTagSource, TagSource};
//! # use version_bump::domain::classify;
//! let source = MockTagSource::with_tags(["v1.0.0", "v1.1.0"]);
//! let tags = source.retrieve_tags().unwrap();
//! let latest = classify(&tags, "v");
//! assert_eq!(latest.latest_release.unwrap().to_string(), "1.1.0");
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockTagSource;
pub use repository::Git2TagSource;

use crate::error::Result;

/// Capability to list previously published version tags
///
/// ## Error Handling
///
/// A failure to retrieve tags must be reported as an error
/// ([crate::error::BumpError::TagSource]), never as an empty list; an empty
/// list means "no history" and triggers the fallback version.
pub trait TagSource: Send + Sync {
    /// Get every tag name known to the source
    ///
    /// Order is not significant; the classifier orders by version precedence.
    fn retrieve_tags(&self) -> Result<Vec<String>>;
}
