//! Version resolution workflow
//!
//! Wires the tag source, classifier, bumper and hook together. The steps run
//! strictly in order and the first fatal error ends the run.

use crate::bump::{apply_hook, BumpRequest, VersionBumper};
use crate::domain::{classify, SemanticVersion};
use crate::error::Result;
use crate::git::TagSource;
use crate::hooks::VersionHook;

/// Outcome of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Latest release found in the tag history
    pub previous_release: Option<SemanticVersion>,

    /// Latest prerelease found in the tag history
    pub previous_prerelease: Option<SemanticVersion>,

    /// Version computed before the hook ran
    pub computed_version: String,

    /// Final version
    pub version: String,
}

impl Resolution {
    /// Whether the hook replaced the computed version
    pub fn overridden(&self) -> bool {
        self.version != self.computed_version
    }
}

/// Resolve the next version
///
/// 1. Retrieve every tag from `source` (a failure aborts)
/// 2. Classify tags after stripping `tag_prefix`
/// 3. Compute the next version for `request`
/// 4. Let `hook` override it (a failure aborts)
pub fn resolve_next_version(
    source: &dyn TagSource,
    request: &BumpRequest,
    tag_prefix: &str,
    hook: Option<&dyn VersionHook>,
) -> Result<Resolution> {
    let tags = source.retrieve_tags()?;
    let latest = classify(&tags, tag_prefix);

    let computed_version = VersionBumper::bump(
        request,
        latest.latest_release.as_ref(),
        latest.latest_prerelease.as_ref(),
    )?;
    let version = apply_hook(computed_version.clone(), hook)?;

    Ok(Resolution {
        previous_release: latest.latest_release,
        previous_prerelease: latest.latest_prerelease,
        computed_version,
        version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReleaseType;
    use crate::git::MockTagSource;

    #[test]
    fn test_resolve_from_tags() {
        let source = MockTagSource::with_tags(["v1.0.0", "v1.1.0", "v1.2.0-beta.3"]);
        let request = BumpRequest::new(ReleaseType::Minor).with_prerelease_channel("beta");

        let resolution = resolve_next_version(&source, &request, "v", None).unwrap();
        assert_eq!(resolution.version, "1.2.0-beta.4");
        assert_eq!(resolution.previous_release, Some(SemanticVersion::new(1, 1, 0)));
        assert!(!resolution.overridden());
    }

    #[test]
    fn test_resolve_source_failure_is_fatal() {
        let source = MockTagSource::failing("network down");
        let request = BumpRequest::new(ReleaseType::Patch);

        let err = resolve_next_version(&source, &request, "v", None).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_resolve_overflow_is_fatal() {
        let source = MockTagSource::with_tags(["v1.0.0", "v4294967295.0.0"]);
        let request = BumpRequest::new(ReleaseType::Major);

        let err = resolve_next_version(&source, &request, "v", None).unwrap_err();
        assert!(matches!(err, crate::error::BumpError::Overflow(_)));
        assert!(err.is_fatal());
    }
}
