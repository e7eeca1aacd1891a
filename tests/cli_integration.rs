use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Builds a `scout` invocation isolated inside `temp`: home, config, and
/// registry all point below the temp directory.
fn scout(temp: &TempDir) -> Result<Command> {
    let mut cmd = Command::cargo_bin("scout")?;
    cmd.env("HOME", temp.path())
        .env("GITSCOUT_CONFIG_PATH", temp.path().join("config"))
        .env("GITSCOUT_REGISTRY", temp.path().join(".gitscout"))
        .env_remove("GITSCOUT_EMAIL");
    Ok(cmd)
}

#[test]
fn test_scan_adds_discovered_repositories() -> Result<()> {
    let temp = TempDir::new()?;
    let tree = temp.path().join("code");
    fs::create_dir_all(tree.join("proj_a").join(".git"))?;
    fs::create_dir_all(tree.join("proj_b").join(".git"))?;

    scout(&temp)?
        .args(["--add", tree.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("proj_a"))
        .stdout(predicate::str::contains("proj_b"))
        .stdout(predicate::str::contains("Added 2 new repositories"));

    let registry = fs::read_to_string(temp.path().join(".gitscout"))?;
    assert!(registry.contains(&tree.join("proj_a").display().to_string()));
    assert!(registry.contains(&tree.join("proj_b").display().to_string()));

    Ok(())
}

#[test]
fn test_scan_is_idempotent() -> Result<()> {
    let temp = TempDir::new()?;
    let tree = temp.path().join("code");
    fs::create_dir_all(tree.join("proj").join(".git"))?;

    scout(&temp)?
        .args(["--add", tree.to_str().unwrap()])
        .assert()
        .success();

    scout(&temp)?
        .args(["--add", tree.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 0 new repositories"));

    let registry = fs::read_to_string(temp.path().join(".gitscout"))?;
    assert_eq!(registry.lines().count(), 1);

    Ok(())
}

#[test]
fn test_scan_preserves_existing_entries_and_order() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".gitscout"), "/pre/existing_a\n/pre/existing_b")?;

    let tree = temp.path().join("code");
    fs::create_dir_all(tree.join("fresh").join(".git"))?;

    scout(&temp)?
        .args(["--add", tree.to_str().unwrap()])
        .assert()
        .success();

    let registry = fs::read_to_string(temp.path().join(".gitscout"))?;
    let lines: Vec<&str> = registry.lines().collect();
    assert_eq!(lines[0], "/pre/existing_a");
    assert_eq!(lines[1], "/pre/existing_b");
    assert_eq!(lines[2], tree.join("fresh").display().to_string());

    Ok(())
}

#[test]
fn test_scan_skips_vendor_directories() -> Result<()> {
    let temp = TempDir::new()?;
    let tree = temp.path().join("code");
    fs::create_dir_all(tree.join("repo1").join(".git"))?;
    fs::create_dir_all(tree.join("repo1").join("vendor").join(".git"))?;
    fs::create_dir_all(tree.join("repo1").join("node_modules").join("pkg").join(".git"))?;

    scout(&temp)?
        .args(["--add", tree.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 1 new repository"));

    let registry = fs::read_to_string(temp.path().join(".gitscout"))?;
    assert_eq!(registry.lines().count(), 1);
    assert!(!registry.contains("vendor"));
    assert!(!registry.contains("node_modules"));

    Ok(())
}

#[test]
fn test_scan_missing_folder_exits_nonzero() -> Result<()> {
    let temp = TempDir::new()?;

    scout(&temp)?
        .args(["--add", temp.path().join("missing").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    Ok(())
}

#[test]
fn test_scan_never_falls_through_to_stats() -> Result<()> {
    let temp = TempDir::new()?;
    let tree = temp.path().join("code");
    fs::create_dir_all(tree.join("proj").join(".git"))?;

    scout(&temp)?
        .args(["--add", tree.to_str().unwrap(), "--email", "dev@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tracked for").not());

    Ok(())
}

#[test]
fn test_stats_lists_registered_repositories() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".gitscout"), "/code/one\n/code/two")?;

    scout(&temp)?
        .args(["--email", "dev@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dev@example.com"))
        .stdout(predicate::str::contains("/code/one"))
        .stdout(predicate::str::contains("/code/two"));

    Ok(())
}

#[test]
fn test_stats_default_email_comes_from_config() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".gitscout"), "/code/one")?;
    fs::write(
        temp.path().join("config"),
        "[user]\nemail = \"configured@example.com\"\n",
    )?;

    scout(&temp)?
        .assert()
        .success()
        .stdout(predicate::str::contains("configured@example.com"));

    Ok(())
}

#[test]
fn test_stats_falls_back_to_placeholder_email() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".gitscout"), "/code/one")?;

    scout(&temp)?
        .assert()
        .success()
        .stdout(predicate::str::contains("your@email.com"));

    Ok(())
}

#[test]
fn test_stats_on_empty_registry_points_at_scan() -> Result<()> {
    let temp = TempDir::new()?;

    scout(&temp)?
        .assert()
        .success()
        .stdout(predicate::str::contains("No repositories registered"));

    Ok(())
}

#[test]
fn test_first_run_creates_registry_file() -> Result<()> {
    let temp = TempDir::new()?;
    let tree = temp.path().join("empty");
    fs::create_dir_all(&tree)?;

    scout(&temp)?
        .args(["--add", tree.to_str().unwrap()])
        .assert()
        .success();

    assert!(temp.path().join(".gitscout").exists());

    Ok(())
}
