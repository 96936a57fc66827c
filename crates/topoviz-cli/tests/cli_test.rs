use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn fixture(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .join("fixtures")
        .join("topology")
        .join(name)
}

fn topoviz() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("topoviz"));
    cmd.env_remove("TOPOVIZ_LAYOUT")
        .env_remove("TOPOVIZ_SEED")
        .env_remove("TOPOVIZ_LOG");
    cmd
}

fn circle_count(svg: &str) -> usize {
    svg.matches("<circle ").count()
}

#[test]
fn cli_writes_graph_svg_in_working_directory() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let topo = tmp.path().join("topo.graphml");
    fs::copy(fixture("three_nodes.graphml"), &topo).expect("copy fixture");

    topoviz()
        .current_dir(tmp.path())
        .arg("topo.graphml")
        .assert()
        .success();

    let svg = fs::read_to_string(tmp.path().join("graph.svg")).expect("read graph.svg");
    assert_eq!(circle_count(&svg), 3);
}

#[test]
fn cli_reads_default_topology_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    fs::copy(
        fixture("three_nodes.graphml"),
        tmp.path().join("topology.graphml"),
    )
    .expect("copy fixture");

    topoviz().current_dir(tmp.path()).assert().success();

    assert!(tmp.path().join("graph.svg").exists());
}

#[test]
fn cli_uses_explicit_output_path() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("net.svg");

    topoviz()
        .args([
            fixture("testbed.graphml").to_string_lossy().as_ref(),
            out.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let svg = fs::read_to_string(&out).expect("read svg");
    assert_eq!(circle_count(&svg), 8);
}

#[test]
fn cli_renders_png_by_extension() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("graph.png");

    topoviz()
        .args([
            fixture("three_nodes.graphml").to_string_lossy().as_ref(),
            out.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read png");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "output is not a PNG"
    );
}

#[test]
fn cli_honors_layout_environment() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("graph.svg");

    topoviz()
        .env("TOPOVIZ_LAYOUT", "circle")
        .env("TOPOVIZ_SEED", "not-a-number")
        .args([
            fixture("three_nodes.graphml").to_string_lossy().as_ref(),
            out.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();
    assert!(out.exists());

    topoviz()
        .env("TOPOVIZ_LAYOUT", "spiral")
        .args([
            fixture("three_nodes.graphml").to_string_lossy().as_ref(),
            out.to_string_lossy().as_ref(),
        ])
        .assert()
        .code(1);
}

#[test]
fn cli_fails_on_missing_input() {
    let tmp = tempfile::tempdir().expect("tempdir");

    topoviz()
        .current_dir(tmp.path())
        .arg("missing.graphml")
        .assert()
        .code(1);

    assert!(!tmp.path().join("graph.svg").exists());
}

#[test]
fn cli_prints_usage_on_help() {
    let output = topoviz().arg("--help").output().expect("run topoviz");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("USAGE:"));
}

#[cfg(unix)]
#[test]
fn cli_accepts_non_utf8_paths() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = tempfile::tempdir().expect("tempdir");
    let name = OsStr::from_bytes(b"topo-\xff.graphml");
    fs::copy(fixture("three_nodes.graphml"), tmp.path().join(name)).expect("copy fixture");

    topoviz()
        .current_dir(tmp.path())
        .arg(name)
        .assert()
        .success();

    let svg = fs::read_to_string(tmp.path().join("graph.svg")).expect("read graph.svg");
    assert_eq!(circle_count(&svg), 3);
}
