// tests/cli_test.rs
use git2::Repository;
use std::process::Command;
use tempfile::TempDir;

fn repo_with_tags(tags: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

    let sig = git2::Signature::now("Test User", "test@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let commit_id = repo
        .commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
        .unwrap();
    let object = repo.find_object(commit_id, None).unwrap();
    for tag in tags {
        repo.tag_lightweight(tag, &object, false).unwrap();
    }

    temp_dir
}

fn version_bump(dir: &TempDir, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_version-bump"))
        .arg("--repo")
        .arg(dir.path())
        .args(args)
        .env_remove("VERSIONBUMP_RELEASE_TYPE")
        .env_remove("VERSIONBUMP_PRERELEASE")
        .env_remove("VERSIONBUMP_FALLBACK_VERSION")
        .env_remove("VERSIONBUMP_TAG_PREFIX")
        .env_remove("VERSIONBUMP_HOOK")
        .current_dir(dir.path())
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_version-bump"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Compute the next semantic version"));
}

#[test]
fn test_prints_only_version_on_stdout() {
    let dir = repo_with_tags(&["v1.0.0", "v1.1.0"]);
    let output = version_bump(&dir, &["-t", "minor"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1.2.0\n");
}

#[test]
fn test_prerelease_flag() {
    let dir = repo_with_tags(&["v1.1.0", "v1.2.0-rc.1"]);
    let output = version_bump(&dir, &["-t", "minor", "-p", "rc"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "1.2.0-rc.2");
}

#[test]
fn test_fallback_flag_without_tags() {
    let dir = repo_with_tags(&[]);
    let output = version_bump(&dir, &["--fallback-version", "3.0.0"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "3.0.0");
}

#[test]
fn test_missing_hook_fails() {
    let dir = repo_with_tags(&["v1.0.0"]);
    let output = version_bump(&dir, &["--hook", "does-not-exist.sh"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_outside_repository_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().canonicalize().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_version-bump"))
        .arg("--repo")
        .arg(&path)
        .env("GIT_CEILING_DIRECTORIES", path.parent().unwrap())
        .env_remove("GIT_DIR")
        .current_dir(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Not in a git repository"));
}

#[test]
fn test_version_overflow_exits_with_error() {
    let dir = repo_with_tags(&["v4294967295.0.0"]);
    let output = version_bump(&dir, &["-t", "major"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Version overflow"));
}
