use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

fn encgraph_cmd() -> Command {
    Command::cargo_bin("encgraph").expect("Failed to find encgraph binary")
}

#[test]
fn test_help_lists_title_and_verbose() -> Result<(), Box<dyn Error>> {
    encgraph_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("TITLE"))
        .stdout(contains("--verbose"));
    Ok(())
}

#[test]
fn test_version_flag() -> Result<(), Box<dyn Error>> {
    encgraph_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("encgraph"));
    Ok(())
}

#[test]
fn test_unknown_flag_is_rejected() -> Result<(), Box<dyn Error>> {
    encgraph_cmd().arg("--frobnicate").assert().failure();
    Ok(())
}

#[test]
fn test_empty_working_directory_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    encgraph_cmd()
        .current_dir(dir.path())
        .env_remove("ENCGRAPH_REF_DIR")
        .env_remove("ENCGRAPH_DIS_DIR")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: timing log not found"));
    Ok(())
}

#[test]
fn test_missing_timing_log_is_reported() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    std::fs::create_dir_all(dir.path().join("dis"))?;
    std::fs::create_dir_all(dir.path().join("ref"))?;

    encgraph_cmd()
        .current_dir(dir.path())
        .env("ENCGRAPH_REF_DIR", dir.path().join("ref"))
        .env("ENCGRAPH_DIS_DIR", dir.path().join("dis"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: timing log not found"))
        .stderr(contains("time.csv"));
    Ok(())
}
