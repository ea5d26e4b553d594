//! Shared helpers for E2E CLI tests.
#![allow(dead_code)] // Some helpers reserved for future tests

use std::path::Path;
use std::process::{Command, Output};

/// Path to the adboard binary
pub fn adboard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_adboard")
}

/// Runs the binary with the given arguments.
pub fn run_adboard(args: &[&str]) -> Output {
    Command::new(adboard_bin())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Lists file names in a directory, sorted.
pub fn dir_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read export dir")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
