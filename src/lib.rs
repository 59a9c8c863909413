pub mod boundary;
pub mod bump;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod hooks;
pub mod logging;
pub mod ui;

pub use bump::{BumpRequest, VersionBumper};
pub use cli::{resolve_next_version, Resolution};
pub use domain::{classify, LatestVersions, ReleaseType, SemanticVersion};
pub use error::{BumpError, ParseError, Result};
