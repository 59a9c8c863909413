//! Domain logic - pure version rules independent of git operations

pub mod prerelease;
pub mod tag;
pub mod version;

pub use prerelease::Prerelease;
pub use tag::{classify, strip_tag_prefix, LatestVersions};
pub use version::{ReleaseType, SemanticVersion};
