//! End-to-end checks of the `gamedash` binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;


/// Command with config and data lookups pointed at `home`.
fn gamedash(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gamedash").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("GAMEDASH_DATA")
        .env_remove("GAMEDASH_LOG");
    cmd
}


#[test]
fn test_tabs_lists_ids_in_order() {
    let home = TempDir::new().unwrap();
    let output = gamedash(home.path()).arg("tabs").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let ids: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().nth(1))
        .collect();
    assert_eq!(ids, ["overview", "period", "comparison", "monetization", "gaming"]);
}


#[test]
fn test_show_overview_sample_data() {
    let home = TempDir::new().unwrap();
    gamedash(home.path())
        .args(["show", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12,547"))
        .stdout(predicate::str::contains("▲ 8.2% this week"))
        .stdout(predicate::str::contains("Day 30"))
        .stdout(predicate::str::contains("\x1b").not());
}


#[test]
fn test_show_monetization_currency() {
    let home = TempDir::new().unwrap();
    gamedash(home.path())
        .args(["show", "--tab", "monetization", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[4 Monetization]"))
        .stdout(predicate::str::contains("$89,420"));
}


#[test]
fn test_show_unknown_tab_fails() {
    let home = TempDir::new().unwrap();
    gamedash(home.path())
        .args(["show", "--tab", "retention"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tab 'retention'"));
}


#[test]
fn test_show_date_without_data_renders_placeholders() {
    let home = TempDir::new().unwrap();
    gamedash(home.path())
        .args(["show", "--date", "2001-01-01", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data for: 01 January 2001"))
        .stdout(predicate::str::contains("No data"));
}


#[test]
fn test_missing_data_file_fails() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("nope.json");
    gamedash(home.path())
        .args(["show", "--data"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read snapshot"));
}


#[test]
fn test_init_then_show_from_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("snapshot.json");

    gamedash(home.path())
        .args(["init", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote sample snapshot"));

    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"periods\""));
    assert!(json.contains("\"retention\""));

    gamedash(home.path())
        .args(["show", "--tab", "comparison", "--no-color", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("11,596"));
}


#[test]
fn test_init_refuses_overwrite() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("snapshot.json");
    std::fs::write(&path, "{}").unwrap();

    gamedash(home.path())
        .args(["init", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");

    gamedash(home.path())
        .args(["init", "--force", "--output"])
        .arg(&path)
        .assert()
        .success();
    assert!(std::fs::read_to_string(&path).unwrap().contains("\"periods\""));
}


#[test]
fn test_export_svg() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("out").join("gaming.svg");

    gamedash(home.path())
        .args(["export", "--tab", "gaming", "--svg", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg") || svg.starts_with("<?xml"));
}


#[test]
fn test_export_png_default_location() {
    let home = TempDir::new().unwrap();
    let output = gamedash(home.path()).arg("export").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let png = stdout
        .lines()
        .find_map(|line| line.strip_prefix("Exported to: "))
        .map(PathBuf::from)
        .unwrap();

    assert!(png.starts_with(home.path()));
    assert!(png.ends_with("gamedash/exports/gamedash-overview.png"));
    let bytes = std::fs::read(png).unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG");
}
