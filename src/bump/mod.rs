//! Decision core for deriving the next version

pub mod version_bumper;

pub use version_bumper::{apply_hook, BumpRequest, VersionBumper, DEFAULT_FALLBACK};
