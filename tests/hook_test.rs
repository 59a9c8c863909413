// tests/hook_test.rs
#![cfg(unix)]

use serial_test::serial;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;
use version_bump::hooks::{CommandHook, HookContext, VersionHook};
use version_bump::{BumpError, ReleaseType};

fn write_script(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("pre-version.sh");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn context() -> HookContext {
    HookContext {
        release_type: ReleaseType::Minor,
        prerelease: Some("beta".to_string()),
        tag_prefix: "v".to_string(),
    }
}

#[test]
#[serial]
fn test_script_override() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "echo 9.9.9");

    let hook = CommandHook::new(&script, context()).unwrap();
    assert_eq!(
        hook.pre_version_generation("1.2.0-beta.4").unwrap(),
        Some("9.9.9".to_string())
    );
}

#[test]
#[serial]
fn test_script_receives_version_and_context() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "echo \"$1-$VERSIONBUMP_VERSION-$VERSIONBUMP_RELEASE_TYPE-$VERSIONBUMP_PRERELEASE\"",
    );

    let hook = CommandHook::new(&script, context()).unwrap();
    assert_eq!(
        hook.pre_version_generation("1.2.0").unwrap(),
        Some("1.2.0-1.2.0-minor-beta".to_string())
    );
}

#[test]
#[serial]
fn test_silent_script_keeps_version() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "exit 0");

    let hook = CommandHook::new(&script, context()).unwrap();
    assert_eq!(hook.pre_version_generation("1.2.0").unwrap(), None);
}

#[test]
#[serial]
fn test_failing_script_is_hook_error() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "echo broken >&2\nexit 3");

    let hook = CommandHook::new(&script, context()).unwrap();
    let err = hook.pre_version_generation("1.2.0").unwrap_err();
    assert!(matches!(err, BumpError::Hook(_)));
    assert!(err.to_string().contains("exit code 3"));
    assert!(err.to_string().contains("broken"));
}
