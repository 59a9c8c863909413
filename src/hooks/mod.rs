//! Version override hooks
//!
//! A hook is consulted once, after the next version has been computed, and
//! may replace it. Hooks are registered explicitly:
//! - [`FnHook`]: any closure, for library callers
//! - [`CommandHook`]: an external script resolved from configuration
//!
//! A failing hook aborts the whole bump.

pub mod executor;
pub mod lifecycle;

pub use executor::CommandHook;
pub use lifecycle::HookContext;

use crate::error::Result;

/// Override point invoked with the computed version
pub trait VersionHook: Send + Sync {
    /// Return `Some(version)` to replace the computed version, `None` to keep it
    ///
    /// An empty or whitespace-only replacement is treated like `None`.
    fn pre_version_generation(&self, version: &str) -> Result<Option<String>>;
}

/// Hook backed by a function reference
pub struct FnHook<F>(F);

impl<F> FnHook<F>
where
    F: Fn(&str) -> Result<Option<String>> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        FnHook(f)
    }
}

impl<F> VersionHook for FnHook<F>
where
    F: Fn(&str) -> Result<Option<String>> + Send + Sync,
{
    fn pre_version_generation(&self, version: &str) -> Result<Option<String>> {
        (self.0)(version)
    }
}
