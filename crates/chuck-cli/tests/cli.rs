//! End-to-end tests driving the `chuck` binary against a mock API.
//!
//! The mock server address is injected through `CHUCK_API_BASE_URL`,
//! the same override a user would set.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chuck(base_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("chuck").expect("binary exists");
    cmd.env("CHUCK_API_BASE_URL", base_url)
        .env("CHUCK_CLI_TIMEOUT", "5");
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn random_prints_the_joke_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jokes/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "value": "a funny joke"
        })))
        .mount(&server)
        .await;

    chuck(&server.uri())
        .arg("random")
        .assert()
        .success()
        .stdout(predicate::str::contains("a funny joke"));
}

#[tokio::test(flavor = "multi_thread")]
async fn random_verbose_includes_the_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jokes/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc123",
            "value": "a funny joke",
            "categories": ["dev"]
        })))
        .mount(&server)
        .await;

    chuck(&server.uri())
        .args(["random", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abc123"))
        .stdout(predicate::str::contains("dev"))
        .stdout(predicate::str::contains("a funny joke"));
}

#[tokio::test(flavor = "multi_thread")]
async fn random_forwards_the_category_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jokes/random"))
        .and(query_param("category", "dev"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "value": "a dev joke"
        })))
        .expect(1)
        .mount(&server)
        .await;

    chuck(&server.uri())
        .args(["random", "--category", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a dev joke"));
}

#[tokio::test(flavor = "multi_thread")]
async fn random_json_emits_the_decoded_body() {
    let server = MockServer::start().await;
    let body = json!({
        "id": "1",
        "value": "a funny joke",
        "categories": []
    });
    Mock::given(method("GET"))
        .and(path("/jokes/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let output = chuck(&server.uri())
        .args(["random", "--json"])
        .output()
        .expect("binary runs");

    assert!(output.status.success());
    let printed: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(printed, body);
}

#[tokio::test(flavor = "multi_thread")]
async fn random_without_value_field_fails_with_exit_2() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jokes/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1"})))
        .mount(&server)
        .await;

    chuck(&server.uri())
        .arg("random")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_api_fails_with_exit_2() {
    // Nothing is listening on port 1
    chuck("http://127.0.0.1:1")
        .arg("random")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to fetch random joke"));
}

#[tokio::test(flavor = "multi_thread")]
async fn categories_prints_one_per_line() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jokes/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["animal", "dev"])))
        .mount(&server)
        .await;

    chuck(&server.uri())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::eq("animal\ndev\n"));
}

#[tokio::test(flavor = "multi_thread")]
async fn categories_json_emits_the_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jokes/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["animal", "dev"])))
        .mount(&server)
        .await;

    let output = chuck(&server.uri())
        .args(["categories", "--json"])
        .output()
        .expect("binary runs");

    assert!(output.status.success());
    let printed: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(printed, json!(["animal", "dev"]));
}

#[tokio::test(flavor = "multi_thread")]
async fn categories_http_error_fails_with_exit_2() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jokes/categories"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    chuck(&server.uri())
        .arg("categories")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to fetch categories"));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_search_query_exits_2_without_a_request() {
    let server = MockServer::start().await;
    // expect(0): verify() fails the test if the binary issued a request
    Mock::given(method("GET"))
        .and(path("/jokes/search"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    chuck(&server.uri())
        .args(["search", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be empty"));

    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn search_limit_trims_the_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jokes/search"))
        .and(query_param("query", "joke"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2,
            "result": [{"value": "x"}, {"value": "y"}]
        })))
        .mount(&server)
        .await;

    chuck(&server.uri())
        .args(["search", "joke", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. x"))
        .stdout(predicate::str::contains("y").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn search_with_no_matches_prints_no_jokes_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jokes/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 0,
            "result": []
        })))
        .mount(&server)
        .await;

    chuck(&server.uri())
        .args(["search", "zxqw"])
        .assert()
        .success()
        .stdout(predicate::eq("No jokes found.\n"));
}

#[tokio::test(flavor = "multi_thread")]
async fn search_with_missing_result_field_is_treated_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jokes/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0})))
        .mount(&server)
        .await;

    chuck(&server.uri())
        .args(["search", "zxqw"])
        .assert()
        .success()
        .stdout(predicate::eq("No jokes found.\n"));
}

#[tokio::test(flavor = "multi_thread")]
async fn search_json_emits_the_trimmed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jokes/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2,
            "result": [{"value": "x"}, {"value": "y"}]
        })))
        .mount(&server)
        .await;

    let output = chuck(&server.uri())
        .args(["search", "joke", "--limit", "1", "--json"])
        .output()
        .expect("binary runs");

    assert!(output.status.success());
    let printed: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(printed, json!({"total": 2, "result": [{"value": "x"}]}));
}

#[test]
fn no_subcommand_exits_1() {
    Command::cargo_bin("chuck")
        .expect("binary exists")
        .assert()
        .code(1);
}

#[test]
fn help_exits_0() {
    Command::cargo_bin("chuck")
        .expect("binary exists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("random"))
        .stdout(predicate::str::contains("categories"))
        .stdout(predicate::str::contains("search"));
}
