use crate::boundary::BoundaryWarning;
use crate::domain::{ReleaseType, SemanticVersion};
use crate::error::{BumpError, Result};
use crate::hooks::VersionHook;
use tracing::{debug, info, warn};

/// Base used when there is no release history and no valid fallback
pub const DEFAULT_FALLBACK: SemanticVersion = SemanticVersion {
    major: 0,
    minor: 1,
    patch: 0,
    prerelease: None,
};

/// Configuration for one bump operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BumpRequest {
    pub release_type: ReleaseType,
    pub prerelease_channel: Option<String>,
    pub fallback_version: Option<String>,
}

impl BumpRequest {
    pub fn new(release_type: ReleaseType) -> Self {
        BumpRequest {
            release_type,
            ..Default::default()
        }
    }

    /// Request a prerelease on `channel`
    ///
    /// An empty or whitespace-only channel means a regular release.
    pub fn with_prerelease_channel(mut self, channel: impl Into<String>) -> Self {
        let channel = channel.into();
        let channel = channel.trim();
        self.prerelease_channel = if channel.is_empty() {
            None
        } else {
            Some(channel.to_string())
        };
        self
    }

    /// Version to start from when no release tag exists
    pub fn with_fallback_version(mut self, fallback: impl Into<String>) -> Self {
        let fallback = fallback.into();
        let fallback = fallback.trim();
        self.fallback_version = if fallback.is_empty() {
            None
        } else {
            Some(fallback.to_string())
        };
        self
    }
}

/// Computes the next version from the latest release and prerelease
pub struct VersionBumper;

impl VersionBumper {
    /// Compute the next version string
    ///
    /// 1. The candidate base is the latest release bumped by the release type,
    ///    or the fallback as-is when there is no release.
    /// 2. Without a channel the base is the result. With a channel the counter
    ///    continues from the latest prerelease when both its base and channel
    ///    match, and restarts at 0 otherwise.
    ///
    /// Fails only with [`BumpError::Overflow`] when a component or counter
    /// is already `u32::MAX`.
    ///
    /// # Example
    /// ```
    /// # use version_bump::bump::{BumpRequest, VersionBumper};
    /// # use version_bump::domain::{ReleaseType, SemanticVersion};
    /// let request = BumpRequest::new(ReleaseType::Minor).with_prerelease_channel("beta");
    /// let release = SemanticVersion::new(1, 1, 0);
    /// let prerelease = SemanticVersion::new(1, 2, 0).with_prerelease("beta", 3);
    /// let next = VersionBumper::bump(&request, Some(&release), Some(&prerelease)).unwrap();
    /// assert_eq!(next, "1.2.0-beta.4");
    /// ```
    pub fn bump(
        request: &BumpRequest,
        latest_release: Option<&SemanticVersion>,
        latest_prerelease: Option<&SemanticVersion>,
    ) -> Result<String> {
        info!(
            "Previous release: {}",
            latest_release.map_or_else(|| "none".to_string(), |v| v.to_string())
        );
        if let Some(pre) = latest_prerelease {
            info!("Previous prerelease: {}", pre);
        }

        let base = match latest_release {
            Some(release) => release.bump(request.release_type)?,
            None => Self::fallback_base(request.fallback_version.as_deref()),
        };

        let new_version = match request.prerelease_channel.as_deref() {
            None => base.to_string(),
            Some(channel) => {
                let counter = Self::next_counter(&base, channel, latest_prerelease)?;
                base.with_prerelease(channel, counter).to_string()
            }
        };

        info!("Unmodified new version: {}", new_version);
        Ok(new_version)
    }

    /// Compute the next version, then let `hook` override it
    ///
    /// A hook error is returned as-is and no version is produced.
    pub fn bump_with_hook(
        request: &BumpRequest,
        latest_release: Option<&SemanticVersion>,
        latest_prerelease: Option<&SemanticVersion>,
        hook: Option<&dyn VersionHook>,
    ) -> Result<String> {
        let computed = Self::bump(request, latest_release, latest_prerelease)?;
        apply_hook(computed, hook)
    }

    fn fallback_base(fallback: Option<&str>) -> SemanticVersion {
        let base = match fallback {
            None => DEFAULT_FALLBACK,
            Some(raw) => parse_fallback(raw).unwrap_or_else(|| {
                warn!(
                    "{}",
                    BoundaryWarning::InvalidFallback {
                        value: raw.to_string(),
                        default: DEFAULT_FALLBACK.to_string(),
                    }
                );
                DEFAULT_FALLBACK
            }),
        };

        info!(
            "{}",
            BoundaryWarning::FallbackUsed {
                version: base.to_string()
            }
        );
        base
    }

    fn next_counter(
        base: &SemanticVersion,
        channel: &str,
        latest_prerelease: Option<&SemanticVersion>,
    ) -> Result<u32> {
        let Some(previous) = latest_prerelease else {
            return Ok(0);
        };
        let Some(pre) = &previous.prerelease else {
            return Ok(0);
        };

        if pre.prefix != channel {
            debug!(
                "{}",
                BoundaryWarning::ChannelChanged {
                    from: pre.prefix.clone(),
                    to: channel.to_string(),
                }
            );
            return Ok(0);
        }

        if !previous.same_core(base) {
            return Ok(0);
        }

        pre.increment()
            .map(|next| next.number)
            .ok_or_else(|| BumpError::overflow(format!("cannot continue prerelease {}", previous)))
    }
}

/// Replace `computed` with the hook's answer, if it gives a non-empty one
pub fn apply_hook(computed: String, hook: Option<&dyn VersionHook>) -> Result<String> {
    let Some(hook) = hook else {
        return Ok(computed);
    };

    match hook.pre_version_generation(&computed)? {
        Some(modified) if !modified.trim().is_empty() => {
            let modified = modified.trim().to_string();
            info!("Using modified version \"{}\"", modified);
            Ok(modified)
        }
        _ => Ok(computed),
    }
}

/// Numeric core of a semver-valid fallback (a leading `v` is accepted)
fn parse_fallback(raw: &str) -> Option<SemanticVersion> {
    let raw = raw.trim();
    let raw = raw.strip_prefix('v').unwrap_or(raw);
    let version = semver::Version::parse(raw).ok()?;

    Some(SemanticVersion::new(
        u32::try_from(version.major).ok()?,
        u32::try_from(version.minor).ok()?,
        u32::try_from(version.patch).ok()?,
    ))
}
