//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("paperchase")
}

fn write_config(dir: &TempDir, conferences: serde_json::Value) -> String {
    let path = dir.path().join("conferences.json");
    std::fs::write(&path, conferences.to_string()).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output-dir"))
        .stdout(predicate::str::contains("--delay"));
}

#[test]
fn test_cli_missing_config() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .args(["--config", "/nonexistent/conferences.json"])
        .args(["--output-dir", tmp.path().join("papers").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load conferences"));
}

#[test]
fn test_cli_malformed_config() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("conferences.json");
    std::fs::write(&path, "[{\"name\": ").unwrap();

    cmd()
        .args(["--config", path.to_str().unwrap()])
        .args(["--output-dir", tmp.path().join("papers").to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn test_cli_unknown_conference_is_skipped() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(
        &tmp,
        serde_json::json!([{"name": "Crypto", "url": "http://127.0.0.1:1/listing", "year": 2017}]),
    );
    let out = tmp.path().join("papers");

    cmd()
        .args(["--config", &config, "--output-dir", out.to_str().unwrap(), "--delay", "0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no parser found for Crypto 2017"));

    assert!(out.exists());
    assert!(!out.join("Crypto").exists());
}

#[test]
fn test_cli_downloads_papers() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/listing")
        .with_body(r#"<html><body><a href="/papers/a.pdf">[PDF]</a> <a href="/papers/b.pdf">[PDF]</a></body></html>"#)
        .create();
    server.mock("GET", "/papers/a.pdf").with_body("a").create();
    server.mock("GET", "/papers/b.pdf").with_body("b").create();

    let tmp = TempDir::new().unwrap();
    let config = write_config(
        &tmp,
        serde_json::json!([{"name": "CCS", "url": format!("{}/listing", server.url()), "year": 2017}]),
    );
    let out = tmp.path().join("papers");

    cmd()
        .args(["--config", &config, "--output-dir", out.to_str().unwrap(), "--timeout", "0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Run Summary"));

    assert!(out.join("CCS/2017/a.pdf").exists());
    assert!(out.join("CCS/2017/b.pdf").exists());
}

#[test]
fn test_cli_unreachable_listing_fails() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(
        &tmp,
        serde_json::json!([{"name": "CCS", "url": "http://127.0.0.1:1/listing", "year": 2017}]),
    );

    cmd()
        .args(["--config", &config, "--output-dir", tmp.path().join("papers").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Run aborted"));
}

#[test]
fn test_cli_verbose() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, serde_json::json!([]));

    cmd()
        .args(["-v", "--config", &config, "--output-dir", tmp.path().join("papers").to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Paperchase"));
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("paperchase"));
}
