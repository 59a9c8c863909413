use crate::error::{BumpError, Result};
use crate::hooks::{HookContext, VersionHook};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Runs an external script that may override the computed version
///
/// The script receives the computed version as its first argument and in
/// `VERSIONBUMP_VERSION`, plus the [`HookContext`] variables. Whatever it
/// prints on stdout (trimmed) replaces the version; printing nothing keeps it.
#[derive(Debug, Clone)]
pub struct CommandHook {
    script_path: PathBuf,
    context: HookContext,
}

impl CommandHook {
    /// Resolve a hook script from configuration
    ///
    /// # Returns
    /// * `Ok(CommandHook)` if the path exists and is a file
    /// * `Err` if the script is missing or the path is not a file
    pub fn new(script_path: impl AsRef<Path>, context: HookContext) -> Result<Self> {
        let path = script_path.as_ref();

        if !path.exists() {
            return Err(BumpError::hook(format!(
                "Hook script not found: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(BumpError::hook(format!(
                "Hook path is not a file: {}",
                path.display()
            )));
        }

        Ok(CommandHook {
            script_path: path.to_path_buf(),
            context,
        })
    }
}

impl VersionHook for CommandHook {
    fn pre_version_generation(&self, version: &str) -> Result<Option<String>> {
        let mut cmd = Command::new(&self.script_path);
        cmd.arg(version);

        for (key, value) in self.context.to_env_vars() {
            cmd.env(key, value);
        }
        cmd.env("VERSIONBUMP_VERSION", version);

        debug!(script = %self.script_path.display(), "running version hook");

        let output = cmd.output().map_err(|e| {
            BumpError::hook(format!(
                "Failed to execute hook {}: {}",
                self.script_path.display(),
                e
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            return Err(BumpError::hook(format!(
                "Hook {} failed with exit code {}\nStdout: {}\nStderr: {}",
                self.script_path.display(),
                output.status.code().unwrap_or(-1),
                stdout,
                stderr
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let replacement = stdout.trim();
        if replacement.is_empty() {
            Ok(None)
        } else {
            Ok(Some(replacement.to_string()))
        }
    }
}
