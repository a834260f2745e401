//! Configuration file handling for the digraph CLI

mod common;

use common::{digraph, write_input, WEIGHTED};
use tempfile::tempdir;

#[test]
fn test_config_file_limits_node_count() {
    let dir = tempdir().unwrap();
    let file = write_input(dir.path(), "g.txt", WEIGHTED);
    let config = write_input(dir.path(), "digraph.toml", "max_nodes = 2\n");

    digraph()
        .arg("--config")
        .arg(&config)
        .arg("paths")
        .arg(&file)
        .assert()
        .code(3);
}

#[test]
fn test_config_from_env() {
    let dir = tempdir().unwrap();
    let file = write_input(dir.path(), "g.txt", WEIGHTED);
    let config = write_input(dir.path(), "digraph.toml", "max_nodes = 2\n");

    digraph()
        .env("DIGRAPH_CONFIG", &config)
        .arg("paths")
        .arg(&file)
        .assert()
        .code(3);
}

#[test]
fn test_max_nodes_flag_overrides_config() {
    let dir = tempdir().unwrap();
    let file = write_input(dir.path(), "g.txt", WEIGHTED);
    let config = write_input(dir.path(), "digraph.toml", "max_nodes = 2\n");

    digraph()
        .arg("--config")
        .arg(&config)
        .args(["--max-nodes", "3", "paths"])
        .arg(&file)
        .assert()
        .success();
}

#[test]
fn test_empty_config_uses_defaults() {
    let dir = tempdir().unwrap();
    let file = write_input(dir.path(), "g.txt", WEIGHTED);
    let config = write_input(dir.path(), "digraph.toml", "");

    digraph()
        .arg("--config")
        .arg(&config)
        .arg("paths")
        .arg(&file)
        .assert()
        .success();
}

#[test]
fn test_invalid_config_exit_code_1() {
    let dir = tempdir().unwrap();
    let file = write_input(dir.path(), "g.txt", WEIGHTED);
    let config = write_input(dir.path(), "digraph.toml", "max_nodes = \"many\"\n");

    digraph()
        .arg("--config")
        .arg(&config)
        .arg("paths")
        .arg(&file)
        .assert()
        .code(1);
}
