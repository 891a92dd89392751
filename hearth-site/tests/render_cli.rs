use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn sample_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("data")
        .join("listings.json")
}

/// Temp dir holding a config that points at `source`.
fn workspace(source: &Path) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("hearth.toml");
    std::fs::write(
        &config,
        format!("[data]\nsource = '{}'\n", source.display()),
    )
    .expect("write config");
    (dir, config)
}

fn hearth(dir: &TempDir, config: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("hearth-site");
    cmd.current_dir(dir.path())
        .env_remove("HEARTH_CONFIG")
        .env_remove("HEARTH_LISTINGS_SOURCE")
        .env_remove("HEARTH_AUTOPLAY_MS")
        .env_remove("HEARTH_FETCH_TIMEOUT_SECS")
        .env_remove("HEARTH_DETAIL_PAGE")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config);
    cmd
}

#[test]
fn listings_page_applies_filters() {
    let (dir, config) = workspace(&sample_data());
    hearth(&dir, &config)
        .args(["render", "--page", "listings", "--min-price", "400000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 properties found"))
        .stdout(predicate::str::contains("<!DOCTYPE html>"))
        .stdout(predicate::str::contains(r#"data-listing-id="2""#).not());
}

#[test]
fn missing_data_renders_empty_page() {
    let (dir, config) = workspace(Path::new("does/not/exist.json"));
    hearth(&dir, &config)
        .args(["render", "--page", "listings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 properties found"))
        .stdout(predicate::str::contains(
            "No properties found matching your criteria.",
        ));
}

#[test]
fn property_page_is_written_to_file() {
    let (dir, config) = workspace(&sample_data());
    let out = dir.path().join("property.html");
    hearth(&dir, &config)
        .args(["render", "--page", "property", "--id", "1", "--out"])
        .arg(&out)
        .assert()
        .success();

    let html = std::fs::read_to_string(&out).expect("read output");
    assert!(html.contains("1 / 4"));
    assert!(html.contains("gallery-thumbs"));
    assert!(html.contains(r#"id="lightbox""#));
}

#[test]
fn slideshow_prints_one_line_per_frame() {
    let (dir, config) = workspace(&sample_data());
    let output = hearth(&dir, &config)
        .args(["slideshow", "--ticks", "4"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    let counters: Vec<&str> = text
        .lines()
        .filter_map(|line| line.split("  ").next())
        .collect();
    assert_eq!(counters, ["1 / 3", "2 / 3", "3 / 3", "1 / 3", "2 / 3"]);
}

#[test]
fn effective_autoplay_interval_is_logged() {
    let (dir, config) = workspace(&sample_data());
    hearth(&dir, &config)
        .env("HEARTH_AUTOPLAY_MS", "7500")
        .env("NO_COLOR", "1")
        .args(["render", "--page", "home"])
        .assert()
        .success()
        .stderr(predicate::str::contains("configuration in effect"))
        .stderr(predicate::str::contains("7.5s"));
}
