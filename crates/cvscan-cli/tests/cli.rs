use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RESUME: &str = "Curriculum Vitae\n\
Omar Farooq\n\
Backend engineer working with Python and Django.\n\
omar.farooq@example.com | +971 50 123 4567\n\
Address: Dubai, UAE\n";

/// Temp dir holding an empty config file so the user's config is never read.
fn workspace() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, "{}").unwrap();
    (dir, config)
}

fn cvscan(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cvscan").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn extract_prints_json() {
    let (dir, config) = workspace();
    let input = dir.path().join("omar.txt");
    fs::write(&input, RESUME).unwrap();

    let output = cvscan(&config).arg("extract").arg(&input).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "Omar Farooq");
    assert_eq!(json["email"], "omar.farooq@example.com");
    assert_eq!(json["phone"], "+971 50 123 4567");
    assert_eq!(json["location"], "Dubai, UAE");
    assert_eq!(json["skills"], serde_json::json!(["django", "python"]));
}

#[test]
fn extract_applies_edits() {
    let (dir, config) = workspace();
    let input = dir.path().join("omar.txt");
    fs::write(&input, RESUME).unwrap();

    cvscan(&config)
        .args(["extract", "--format", "text"])
        .arg(&input)
        .args(["--set", "name=Omar A. Farooq", "--set", "skills=go,rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name:     Omar A. Farooq"))
        .stdout(predicate::str::contains("Skills: go, rust"));
}

#[test]
fn extract_rejects_unknown_edit_field() {
    let (dir, config) = workspace();
    let input = dir.path().join("omar.txt");
    fs::write(&input, RESUME).unwrap();

    cvscan(&config)
        .arg("extract")
        .arg(&input)
        .args(["--set", "salary=100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field: salary"));
}

#[test]
fn extract_saves_export_file() {
    let (dir, config) = workspace();
    let input = dir.path().join("omar.txt");
    fs::write(&input, RESUME).unwrap();
    let out_dir = dir.path().join("exports");

    cvscan(&config)
        .arg("extract")
        .arg(&input)
        .arg("--save")
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .success();

    let saved = fs::read_to_string(out_dir.join("omar_extracted.json")).unwrap();
    assert!(saved.contains("\"name\": \"Omar Farooq\""));
}

#[test]
fn extract_missing_file_fails() {
    let (dir, config) = workspace();

    cvscan(&config)
        .arg("extract")
        .arg(dir.path().join("nope.pdf"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn extract_broken_pdf_falls_back() {
    let (dir, config) = workspace();
    let input = dir.path().join("broken.pdf");
    fs::write(&input, "%PDF-1.4\nJane Doe\njane@example.com").unwrap();

    cvscan(&config)
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("jane@example.com"))
        .stderr(predicate::str::contains("extracting from raw bytes"));
}

#[test]
fn batch_writes_exports_and_summary() {
    let (dir, config) = workspace();
    fs::write(dir.path().join("a.txt"), RESUME).unwrap();
    fs::write(dir.path().join("b.md"), "Jane Doe\nReact developer").unwrap();
    fs::write(dir.path().join("ignored.png"), "binary").unwrap();
    let out_dir = dir.path().join("out");
    let pattern = format!("{}/*", dir.path().display());

    cvscan(&config)
        .arg("batch")
        .arg(&pattern)
        .arg("--output-dir")
        .arg(&out_dir)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files"));

    assert!(out_dir.join("a_extracted.json").exists());
    assert!(out_dir.join("b_extracted.json").exists());

    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.starts_with("filename,status,name,email,phone,location,summary,skills"));
    assert!(summary.contains("b.md,success,Jane Doe"));
}

#[test]
fn config_set_and_get() {
    let (_dir, config) = workspace();

    cvscan(&config)
        .args(["config", "set", "extraction.name_rule", "lenient"])
        .assert()
        .success();

    cvscan(&config)
        .args(["config", "get", "extraction.name_rule"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"lenient\""));

    cvscan(&config)
        .args(["config", "set", "extraction.name_rule", "sloppy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value"));
}

#[test]
fn config_extend_keyword_table() {
    let (dir, config) = workspace();

    cvscan(&config)
        .args(["config", "extend", "vocabulary.skills", "elixir"])
        .assert()
        .success();

    let input = dir.path().join("cv.txt");
    fs::write(&input, "Jane Doe\nElixir and Phoenix").unwrap();

    cvscan(&config)
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"elixir\""));
}
