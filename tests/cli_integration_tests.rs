#![allow(deprecated)] // cargo_bin deprecation - still works fine

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("compare_headers").expect("binary should exist")
}

struct Fixture {
    root: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("dir1")).unwrap();
        fs::create_dir(root.path().join("dir2")).unwrap();
        Self { root }
    }

    fn dir1(&self) -> std::path::PathBuf {
        self.root.path().join("dir1")
    }

    fn dir2(&self) -> std::path::PathBuf {
        self.root.path().join("dir2")
    }

    fn write(&self, dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn report_rows(&self, report: &Path) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(report)
            .unwrap();
        reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }
}

#[test]
fn writes_report_for_all_outcomes() {
    let fx = Fixture::new();
    fx.write(&fx.dir1(), "a.csv", "id,name\n1,x\n");
    fx.write(&fx.dir2(), "a.csv", "name,id\n");
    fx.write(&fx.dir1(), "b.csv", "id,name,age\n");
    fx.write(&fx.dir2(), "b.csv", "id,name\n");
    fx.write(&fx.dir1(), "c.txt", "id\n");
    fx.write(&fx.dir1(), "skip.json", "{}");
    let report = fx.root.path().join("report.csv");

    cmd()
        .arg(fx.dir1())
        .arg(fx.dir2())
        .arg("-o")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Match:            1"))
        .stdout(predicate::str::contains("Mismatch:         1"))
        .stdout(predicate::str::contains("Missing:          1"));

    let rows = fx.report_rows(&report);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], vec!["filename", "status", "details"]);
    assert_eq!(rows[1], vec!["a.csv", "match", ""]);
    assert_eq!(
        rows[2],
        vec!["b.csv", "mismatch", "Dir1 headers missing in Dir2: 'age'"]
    );
    assert_eq!(rows[3][0], "c.txt");
    assert_eq!(rows[3][1], "missing");
    assert_eq!(
        rows[3][2],
        format!("c.txt not found in {}", fx.dir2().display())
    );
}

#[test]
fn default_output_lands_in_working_directory() {
    let fx = Fixture::new();
    fx.write(&fx.dir1(), "a.csv", "id\n");
    fx.write(&fx.dir2(), "a.csv", "id\n");

    cmd()
        .current_dir(fx.root.path())
        .arg("dir1")
        .arg("dir2")
        .assert()
        .success();

    let report = fx.root.path().join("header_comparison.csv");
    assert_eq!(
        fx.report_rows(&report),
        vec![
            vec!["filename", "status", "details"],
            vec!["a.csv", "match", ""],
        ]
    );
}

#[test]
fn missing_directory_exits_non_zero() {
    let fx = Fixture::new();
    let missing = fx.root.path().join("nowhere");

    cmd()
        .arg(fx.dir1())
        .arg(&missing)
        .arg("-o")
        .arg(fx.root.path().join("report.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory not found"))
        .stderr(predicate::str::contains("nowhere"));

    assert!(!fx.root.path().join("report.csv").exists());
}

#[test]
fn malformed_file_exits_non_zero() {
    let fx = Fixture::new();
    fs::write(fx.dir1().join("bad.csv"), b"id,caf\xE9\n").unwrap();
    fx.write(&fx.dir2(), "bad.csv", "id\n");

    cmd()
        .arg(fx.dir1())
        .arg(fx.dir2())
        .arg("-o")
        .arg(fx.root.path().join("report.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed record"));
}

#[test]
fn lossy_flag_recovers_from_invalid_utf8() {
    let fx = Fixture::new();
    fs::write(fx.dir1().join("bad.csv"), b"id,caf\xE9\n").unwrap();
    fx.write(&fx.dir2(), "bad.csv", "id,café\n");
    let report = fx.root.path().join("report.csv");

    cmd()
        .arg(fx.dir1())
        .arg(fx.dir2())
        .arg("--lossy")
        .arg("-o")
        .arg(&report)
        .assert()
        .success();

    assert_eq!(fx.report_rows(&report)[1], vec!["bad.csv", "match", ""]);
}

#[test]
fn delimiter_applies_to_inputs_only() {
    let fx = Fixture::new();
    fx.write(&fx.dir1(), "a.txt", "id;name\n");
    fx.write(&fx.dir2(), "a.txt", "name;id;age\n");
    let report = fx.root.path().join("report.csv");

    cmd()
        .arg(fx.dir1())
        .arg(fx.dir2())
        .arg("-d")
        .arg(";")
        .arg("-o")
        .arg(&report)
        .assert()
        .success();

    let text = fs::read_to_string(&report).unwrap();
    assert!(text.starts_with("filename,status,details\r\n"));
    assert_eq!(
        fx.report_rows(&report)[1],
        vec!["a.txt", "mismatch", "Dir2 headers missing in Dir1: 'age'"]
    );
}

#[test]
fn dry_run_does_not_write_report() {
    let fx = Fixture::new();
    fx.write(&fx.dir1(), "a.csv", "id\n");
    let report = fx.root.path().join("report.csv");

    cmd()
        .arg(fx.dir1())
        .arg(fx.dir2())
        .arg("--dry-run")
        .arg("-o")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!report.exists());
}

#[test]
fn ignore_patterns_exclude_files() {
    let fx = Fixture::new();
    fx.write(&fx.dir1(), "keep.csv", "id\n");
    fx.write(&fx.dir2(), "keep.csv", "id\n");
    fx.write(&fx.dir1(), "tmp_one.csv", "id\n");
    let report = fx.root.path().join("report.csv");

    cmd()
        .arg(fx.dir1())
        .arg(fx.dir2())
        .arg("--ignore")
        .arg("tmp_*")
        .arg("-o")
        .arg(&report)
        .assert()
        .success();

    let rows = fx.report_rows(&report);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "keep.csv");
}

#[test]
fn repeated_runs_produce_identical_reports() {
    let fx = Fixture::new();
    for name in ["z.csv", "m.txt", "a.csv"] {
        fx.write(&fx.dir1(), name, "id,name\n");
        fx.write(&fx.dir2(), name, "id\n");
    }
    fx.write(&fx.dir2(), "only2.csv", "x\n");
    let first = fx.root.path().join("first.csv");
    let second = fx.root.path().join("second.csv");

    for report in [&first, &second] {
        cmd()
            .arg(fx.dir1())
            .arg(fx.dir2())
            .arg("-o")
            .arg(report)
            .assert()
            .success();
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    let names: Vec<String> = fx
        .report_rows(&first)
        .into_iter()
        .skip(1)
        .map(|row| row[0].clone())
        .collect();
    assert_eq!(names, vec!["a.csv", "m.txt", "only2.csv", "z.csv"]);
}
