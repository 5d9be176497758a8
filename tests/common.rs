#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Fixed evaluation date for every scenario.
pub const TODAY: &str = "2026-10-17";

pub fn sc() -> Command {
    cargo_bin_cmd!("sitecrew")
}

/// Unique config path inside the system temp dir, removed if present so the
/// defaults apply.
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sitecrew.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Command preloaded with the test flags, a fresh config and the fixed date.
pub fn sc_with(cfg_path: &str) -> Command {
    let mut cmd = sc();
    cmd.args(["--config", cfg_path, "--test", "--today", TODAY]);
    cmd
}
