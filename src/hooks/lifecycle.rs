use crate::domain::ReleaseType;
use std::collections::HashMap;

/// Context information passed to a version hook
#[derive(Debug, Clone)]
pub struct HookContext {
    /// Requested release type
    pub release_type: ReleaseType,
    /// Prerelease channel, if the bump is a prerelease
    pub prerelease: Option<String>,
    /// Prefix stripped from tags before parsing
    pub tag_prefix: String,
}

impl HookContext {
    /// Convert context to environment variables for the hook script
    ///
    /// Maps context fields to VERSIONBUMP_* environment variables. The
    /// computed version itself is added by the executor.
    pub fn to_env_vars(&self) -> HashMap<String, String> {
        let mut env = HashMap::new();

        env.insert(
            "VERSIONBUMP_RELEASE_TYPE".to_string(),
            self.release_type.to_string(),
        );
        env.insert("VERSIONBUMP_TAG_PREFIX".to_string(), self.tag_prefix.clone());

        if let Some(ref channel) = self.prerelease {
            env.insert("VERSIONBUMP_PRERELEASE".to_string(), channel.clone());
        }

        env
    }
}

impl Default for HookContext {
    fn default() -> Self {
        HookContext {
            release_type: ReleaseType::Patch,
            prerelease: None,
            tag_prefix: String::new(),
        }
    }
}
