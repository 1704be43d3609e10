//
//  graph-client
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `graph` command isolated from the user's config and environment.
fn graph(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("graph").unwrap();
    cmd.env("GRAPH_CONFIG", dir.path().join("config.toml"))
        .env("GRAPH_BASE_URL", "http://127.0.0.1:9/v1.0")
        .env_remove("GRAPH_TOKEN")
        .env_remove("GRAPH_FORMAT")
        .env_remove("GRAPH_DEBUG");
    cmd
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    graph(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("graph version "));
}

#[test]
fn test_endpoints_lists_one_segment() {
    let dir = TempDir::new().unwrap();
    graph(&dir)
        .args(["endpoints", "--segment", "places"])
        .assert()
        .success()
        .stdout(predicate::str::contains("places.list_rooms"))
        .stdout(predicate::str::contains("mail.").not());
}

#[test]
fn test_missing_parameter_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    graph(&dir)
        .args(["call", "places.update_place", "-F", "capacity=3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("place_id"));
}

#[test]
fn test_unknown_endpoint_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    graph(&dir)
        .args(["call", "mail.fly_away"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown endpoint"));
}

#[test]
fn test_config_set_then_get() {
    let dir = TempDir::new().unwrap();
    graph(&dir)
        .args(["config", "set", "default_user", "adele@contoso.com"])
        .assert()
        .success();
    graph(&dir)
        .args(["config", "get", "default_user"])
        .assert()
        .success()
        .stdout("adele@contoso.com\n");
    graph(&dir)
        .args(["config", "set", "timeout_secs", "soon"])
        .assert()
        .failure();
}

#[test]
fn test_call_prints_count() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/users/u1/messages/$count")
        .match_header("authorization", "Bearer secret")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("42")
        .create();

    graph(&dir)
        .env("GRAPH_BASE_URL", server.url())
        .env("GRAPH_TOKEN", "secret")
        .args(["call", "mail.get_message_count", "u1"])
        .assert()
        .success()
        .stdout("42\n");
    mock.assert();
}

#[test]
fn test_not_found_exit_code() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/places/nope/microsoft.graph.room")
        .with_status(404)
        .with_body(r#"{"error":{"code":"ErrorItemNotFound"}}"#)
        .create();

    graph(&dir)
        .env("GRAPH_BASE_URL", server.url())
        .args(["call", "places.get_place_as_room", "nope"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("404"));
}
