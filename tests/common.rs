#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pgk() -> Command {
    cargo_bin_cmd!("progchek")
}

/// Create a unique test store path inside the system temp dir and remove
/// any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_progchek.sqlite", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a store and add a project with one task, returning the
/// project's id parsed from the command output
pub fn init_store_with_project(store_path: &str, project_name: &str) -> String {
    pgk()
        .args(["--store", store_path, "--test", "init"])
        .assert()
        .success();

    let output = pgk()
        .args(["--store", store_path, "project", "--add", project_name])
        .output()
        .expect("run project --add");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    // message shape: Created project '<name>' (<id>), now active
    let start = stdout.find("(proj_").expect("project id in output") + 1;
    let end = stdout[start..].find(')').expect("closing paren") + start;
    stdout[start..end].to_string()
}
