//! Integration tests for the `shoplist` CLI binary.
//!
//! Argument parsing, help, completions and config handling run without a
//! service; read and write commands run against a local mock server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `shoplist` binary with env isolation.
///
/// Points the config file at a nonexistent path and clears all
/// `SHOPLIST_*` env vars so tests never touch the user's configuration.
fn shoplist_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("shoplist");
    cmd.env("SHOPLIST_CONFIG", "/tmp/shoplist-cli-test-nonexistent/config.toml")
        .env_remove("SHOPLIST_PROFILE")
        .env_remove("SHOPLIST_BASE_URL")
        .env_remove("SHOPLIST_OUTPUT")
        .env_remove("SHOPLIST_TIMEOUT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// Run the binary off the runtime so the mock server keeps serving.
async fn run(args: Vec<String>) -> std::process::Output {
    tokio::task::spawn_blocking(move || shoplist_cmd().args(args).output().unwrap())
        .await
        .unwrap()
}

fn args(server: &MockServer, rest: &[&str]) -> Vec<String> {
    let mut v = vec!["--base-url".to_owned(), server.uri()];
    v.extend(rest.iter().map(|s| (*s).to_owned()));
    v
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = shoplist_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("Usage"));
}

#[test]
fn test_help_lists_subcommands() {
    shoplist_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("lists")
            .and(predicate::str::contains("show"))
            .and(predicate::str::contains("add")),
    );
}

#[test]
fn test_version_flag() {
    shoplist_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shoplist"));
}

#[test]
fn test_unknown_subcommand_fails() {
    shoplist_cmd().arg("frobnicate").assert().failure().code(2);
}

#[test]
fn test_completions_bash() {
    shoplist_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shoplist"));
}

#[test]
fn test_completions_zsh() {
    shoplist_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef shoplist"));
}

// ── Add validation (no service needed) ──────────────────────────────

#[test]
fn test_add_rejects_blank_title() {
    let output = shoplist_cmd()
        .args(["--base-url", "http://127.0.0.1:9", "add", "1", "--title", "  "])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("title"));
}

#[test]
fn test_add_rejects_negative_price() {
    let output = shoplist_cmd()
        .args([
            "--base-url",
            "http://127.0.0.1:9",
            "add",
            "1",
            "--title",
            "Milk",
            "--price=-2",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("price"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_honours_override() {
    shoplist_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/tmp/shoplist-cli-test-nonexistent/config.toml",
        ));
}

#[test]
fn test_config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.toml");

    shoplist_cmd()
        .env("SHOPLIST_CONFIG", &file)
        .args(["config", "init", "--name", "local", "--url", "http://localhost:3000"])
        .assert()
        .success();
    assert!(file.exists());

    shoplist_cmd()
        .env("SHOPLIST_CONFIG", &file)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("default_profile = \"local\"")
                .and(predicate::str::contains("http://localhost:3000")),
        );

    // A second init without --force refuses to overwrite.
    shoplist_cmd()
        .env("SHOPLIST_CONFIG", &file)
        .args(["config", "init"])
        .assert()
        .failure()
        .code(6);
}

#[test]
fn test_config_init_rejects_bad_url() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.toml");

    shoplist_cmd()
        .env("SHOPLIST_CONFIG", &file)
        .args(["config", "init", "--url", "not a url"])
        .assert()
        .failure()
        .code(2);
    assert!(!file.exists());
}

#[test]
fn test_unknown_profile_is_not_found() {
    shoplist_cmd()
        .args(["--profile", "nope", "lists"])
        .assert()
        .failure()
        .code(4);
}

// ── Service-backed commands ─────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_lists_renders_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Groceries"},
            {"id": 2, "title": "Hardware"}
        ])))
        .mount(&server)
        .await;

    let output = run(args(&server, &["lists"])).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Groceries"));
    assert!(stdout.contains("Hardware"));
    assert!(stdout.contains("Title"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lists_json_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "title": "Groceries"}])),
        )
        .mount(&server)
        .await;

    let output = run(args(&server, &["-o", "json", "lists"])).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, json!([{"id": 1, "title": "Groceries"}]));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_lists_server_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let output = run(args(&server, &["lists"])).await;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("500"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_prints_title_and_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "title": "Groceries"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lists/1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "listId": 1, "title": "Milk", "quantity": 2, "price": 1.5}
        ])))
        .mount(&server)
        .await;

    let output = run(args(&server, &["show", "1"])).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Groceries"));
    assert!(stdout.contains("Milk"));
    assert!(stdout.contains("1.50"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_missing_list_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/lists/99/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let output = run(args(&server, &["show", "99"])).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_items_table_shows_fractional_quantity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 12, "listId": 1, "title": "Cheese", "quantity": 0.5, "price": 9.8}
        ])))
        .mount(&server)
        .await;

    let output = run(args(&server, &["items", "1"])).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Cheese"));
    assert!(stdout.contains("0.5"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_items_plain_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lists/1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "listId": 1, "title": "Milk", "quantity": 2, "price": 1.5},
            {"id": 11, "listId": 1, "title": "Bread", "quantity": 1, "price": 3.0}
        ])))
        .mount(&server)
        .await;

    let output = run(args(&server, &["-o", "plain", "items", "1"])).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "10\n11\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_posts_and_prints_item() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 101})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run(args(
        &server,
        &["-o", "json", "add", "1", "--title", "Milk", "-n", "3", "--price", "2.25"],
    ))
    .await;
    assert!(output.status.success(), "{}", combined_output(&output));

    let item: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(item["title"], "Milk");
    assert_eq!(item["listId"], 1);
    assert_eq!(item["quantity"], json!(3.0));
    // The locally generated id is kept, not the echoed one.
    assert_ne!(item["id"], json!(101));
    assert!(item["id"].is_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_failure_exits_non_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let output = run(args(&server, &["add", "1", "--title", "Milk"])).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("503"));
}
