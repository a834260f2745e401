use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for digraph
pub fn digraph() -> Command {
    cargo_bin_cmd!("digraph")
}

/// Weighted graph: 1 -> 2 (5), 2 -> 3 (3), 1 -> 3 (20)
#[allow(dead_code)]
pub const WEIGHTED: &str = "3\nA\nB\nC\n1 2 5\n2 3 3\n1 3 20\n0 0 0\n";

/// Unweighted graph: 1 -> 2, 1 -> 3, 2 -> 4
#[allow(dead_code)]
pub const UNWEIGHTED: &str = "4\nw\nx\ny\nz\n1 2\n1 3\n2 4\n0 0\n";

/// Write `contents` to `dir/name` and return the path
pub fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
