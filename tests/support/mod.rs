use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for graphcheck that ignores any user configuration.
/// Config lookups are pointed at `<dir>/config`, which tests may populate.
pub fn graphcheck(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("graphcheck");
    cmd.current_dir(dir)
        .env_remove("GRAPHCHECK_CONFIG")
        .env_remove("GRAPHCHECK_LOG")
        .env_remove("RUST_LOG")
        .env("GRAPHCHECK_CONFIG_DIR", dir.join("config"));
    cmd
}

/// Write a graph description into `dir` and return its path
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Write `<dir>/config/config.toml`
#[allow(dead_code)]
pub fn write_config(dir: &Path, content: &str) {
    let config_dir = dir.join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), content).unwrap();
}

pub const PATH: &str = "3\n1: 2\n2: 1 3\n3: 2\n";
pub const TRIANGLE: &str = "3\n1: 2 3\n2: 1 3\n3: 1 2\n";
pub const SQUARE: &str = "4\n1: 2 4\n2: 1 3\n3: 2 4\n4: 1 3\n";
pub const TWO_EDGES: &str = "4\n1: 2\n2: 1\n3: 4\n4: 3\n";
