use crate::boundary::BoundaryWarning;
use crate::domain::version::SemanticVersion;
use tracing::debug;

/// Latest version of each lineage found in a tag set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestVersions {
    pub latest_release: Option<SemanticVersion>,
    pub latest_prerelease: Option<SemanticVersion>,
}

/// Strip the configured tag prefix (e.g., "v1.2.3" -> "1.2.3")
///
/// Tags that do not start with the prefix are returned unchanged.
pub fn strip_tag_prefix<'a>(tag: &'a str, tag_prefix: &str) -> &'a str {
    if tag_prefix.is_empty() {
        return tag;
    }
    tag.strip_prefix(tag_prefix).unwrap_or(tag)
}

/// Partition tags into release and prerelease lineages and pick the latest of each
///
/// Tags that fail to parse are skipped. Selection uses numeric precedence
/// (see [`SemanticVersion::precedence_cmp`]), never string order; on equal
/// precedence the tag appearing later in `tags` wins.
///
/// # Example
/// ```
/// # use version_bump::domain::{classify, SemanticVersion};
/// let latest = classify(&["v1.0.0", "v10.0.0", "v2.0.0"], "v");
/// assert_eq!(latest.latest_release, Some(SemanticVersion::new(10, 0, 0)));
/// assert_eq!(latest.latest_prerelease, None);
/// ```
pub fn classify<S: AsRef<str>>(tags: &[S], tag_prefix: &str) -> LatestVersions {
    let mut latest = LatestVersions::default();

    for tag in tags {
        let tag = tag.as_ref();
        let version = match SemanticVersion::parse(strip_tag_prefix(tag, tag_prefix)) {
            Ok(version) => version,
            Err(e) => {
                let warning = BoundaryWarning::UnparsableTag {
                    tag: tag.to_string(),
                    reason: e.to_string(),
                };
                debug!("{}", warning);
                continue;
            }
        };

        let slot = if version.is_prerelease() {
            &mut latest.latest_prerelease
        } else {
            &mut latest.latest_release
        };

        let replace = slot
            .as_ref()
            .map_or(true, |current| version.precedence_cmp(current).is_ge());
        if replace {
            *slot = Some(version);
        }
    }

    latest
}
