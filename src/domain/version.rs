use crate::domain::prerelease::Prerelease;
use crate::error::{BumpError, ParseError};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version with an optional `channel.number` prerelease
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub prerelease: Option<Prerelease>,
}

impl SemanticVersion {
    /// Create a release version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            prerelease: None,
        }
    }

    /// Attach a prerelease to this version
    pub fn with_prerelease(mut self, prefix: impl Into<String>, number: u32) -> Self {
        self.prerelease = Some(Prerelease::new(prefix, number));
        self
    }

    /// Parse a version string (e.g., "1.2.3" or "1.2.3-beta.4")
    ///
    /// The string is split on the first `-`; the left side must be exactly
    /// three dot-separated unsigned integers, the right side (if any) must be
    /// `prefix.number`.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let (core, suffix) = match raw.split_once('-') {
            Some((core, suffix)) => (core, Some(suffix)),
            None => (raw, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(ParseError::MalformedCore(raw.to_string()));
        }

        let component = |part: &str| -> Result<u32, ParseError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::MalformedCore(raw.to_string()));
            }
            part.parse::<u32>()
                .map_err(|_| ParseError::MalformedCore(raw.to_string()))
        };

        let major = component(parts[0])?;
        let minor = component(parts[1])?;
        let patch = component(parts[2])?;

        let prerelease = suffix.map(|s| Prerelease::parse(s, raw)).transpose()?;

        Ok(SemanticVersion {
            major,
            minor,
            patch,
            prerelease,
        })
    }

    /// Whether the numeric cores of two versions are identical
    pub fn same_core(&self, other: &SemanticVersion) -> bool {
        (self.major, self.minor, self.patch) == (other.major, other.minor, other.patch)
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// Bump the numeric core according to release type
    ///
    /// The prerelease component is always dropped. Incrementing a component
    /// that is already `u32::MAX` is a [`BumpError::Overflow`].
    pub fn bump(&self, release_type: ReleaseType) -> crate::error::Result<Self> {
        let next = |n: u32| {
            n.checked_add(1).ok_or_else(|| {
                BumpError::overflow(format!("cannot apply {} bump to {}", release_type, self))
            })
        };

        Ok(match release_type {
            ReleaseType::Major => SemanticVersion::new(next(self.major)?, 0, 0),
            ReleaseType::Minor => SemanticVersion::new(self.major, next(self.minor)?, 0),
            ReleaseType::Patch => SemanticVersion::new(self.major, self.minor, next(self.patch)?),
        })
    }

    /// Numeric precedence: major, minor, patch, then prerelease number
    ///
    /// Channel names are not compared, so two prereleases that differ only by
    /// channel are equal in precedence.
    pub fn precedence_cmp(&self, other: &SemanticVersion) -> Ordering {
        let number = |v: &SemanticVersion| v.prerelease.as_ref().map(|p| p.number);

        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| number(self).cmp(&number(other)))
    }
}

impl FromStr for SemanticVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemanticVersion::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

/// Requested magnitude of change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleaseType {
    Major,
    Minor,
    #[default]
    Patch,
}

impl ReleaseType {
    /// Interpret a configured release type
    ///
    /// Matching is case-insensitive; anything other than `major` or `minor`
    /// is treated as `patch`.
    pub fn from_input(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "major" => ReleaseType::Major,
            "minor" => ReleaseType::Minor,
            _ => ReleaseType::Patch,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ReleaseType::Major => "major",
            ReleaseType::Minor => "minor",
            ReleaseType::Patch => "patch",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
