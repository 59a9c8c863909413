use std::fmt;

/// Non-fatal conditions met while resolving a version.
/// These are reported through logging and never change the outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag could not be parsed as a semantic version and was skipped
    UnparsableTag { tag: String, reason: String },
    /// No release history; the candidate base comes from a fallback
    FallbackUsed { version: String },
    /// Configured fallback is not a valid semantic version
    InvalidFallback { value: String, default: String },
    /// Requested prerelease channel differs from the previous prerelease
    ChannelChanged { from: String, to: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Skipping tag '{}': {}", tag, reason)
            }
            BoundaryWarning::FallbackUsed { version } => {
                write!(
                    f,
                    "The previous version could not be detected, using fallback '{}'",
                    version
                )
            }
            BoundaryWarning::InvalidFallback { value, default } => {
                write!(
                    f,
                    "Fallback version '{}' is not a valid semantic version, using '{}'",
                    value, default
                )
            }
            BoundaryWarning::ChannelChanged { from, to } => {
                write!(f, "Prerelease channel has changed from '{}' to '{}'", from, to)
            }
        }
    }
}
