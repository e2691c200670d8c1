use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn snakediff_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_snakediff"));
    // Keep a user config file out of the picture
    cmd.env("XDG_CONFIG_HOME", env!("CARGO_TARGET_TMPDIR"));
    cmd
}

fn write_pair(dir: &TempDir, old: &str, new: &str) -> (String, String) {
    let old_path = dir.path().join("old.txt");
    let new_path = dir.path().join("new.txt");
    fs::write(&old_path, old).unwrap();
    fs::write(&new_path, new).unwrap();
    (path_str(&old_path), path_str(&new_path))
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn run(args: &[&str]) -> Output {
    snakediff_cmd()
        .args(args)
        .output()
        .expect("failed to run snakediff")
}

#[test]
fn identical_files_exit_0() {
    let dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&dir, "a\nb\n", "a\nb\n");

    let output = run(&[&old, &new]);

    assert!(
        output.status.success(),
        "identical files should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), " a\n b\n");
}

#[test]
fn different_files_exit_1() {
    let dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&dir, "one\ntwo\nthree\n", "one\n2\nthree\n");

    let output = run(&[&old, &new]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        " one\n-two\n+2\n three\n"
    );
}

#[test]
fn missing_file_exit_2() {
    let dir = TempDir::new().unwrap();
    let (old, _) = write_pair(&dir, "a\n", "a\n");
    let missing = path_str(&dir.path().join("nope.txt"));

    let output = run(&[&old, &missing]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}

#[test]
fn json_output() {
    let dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&dir, "x\n", "y\n");

    let output = run(&["--format", "json", &old, &new]);

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["insertions"], 1);
    assert_eq!(value["deletions"], 1);
    assert_eq!(value["spans"].as_array().map(Vec::len), Some(2));
}

#[test]
fn word_granularity() {
    let dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&dir, "fn foo(a: u8)\n", "fn bar(a: u8)\n");

    let output = run(&["-g", "words", &old, &new]);

    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "fn [-foo-]{+bar+}(a: u8)\n"
    );
}

#[test]
fn strict_limit_fails() {
    let dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&dir, "a\nb\nc\nd\n", "w\nx\ny\nz\n");

    let output = run(&["--max-rounds", "1", "--strict", &old, &new]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("search limit"));
}

#[test]
fn config_file_sets_granularity() {
    let dir = TempDir::new().unwrap();
    let (old, new) = write_pair(&dir, "abc\n", "abd\n");
    let config = dir.path().join("config.toml");
    fs::write(&config, "[output]\ngranularity = \"chars\"\n").unwrap();

    let output = run(&["--config", &path_str(&config), &old, &new]);

    assert_eq!(String::from_utf8_lossy(&output.stdout), "ab[-c-]{+d+}\n");
}
