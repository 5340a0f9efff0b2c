//
//  tc-goggles
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::path::Path;

use assert_cmd::Command;
use mockito::{Matcher, Mock, Server};
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "TEAMCITY_SERVER",
    "TEAMCITY_ACCESS_TOKEN",
    "TEAMCITY_USERNAME",
    "TEAMCITY_PASSWORD",
    "TCG_DEBUG",
];

/// A `tcg` command isolated from the caller's environment and config file.
fn tcg(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tcg").unwrap();
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("TCG_CONFIG", config_path(config_dir.path()));
    cmd
}

fn config_path(dir: &Path) -> std::path::PathBuf {
    dir.join("config.toml")
}

fn build_type_json(server: &Server, id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("{id} name"),
        "projectId": "Proj",
        "webUrl": format!("{}/viewType.html?buildTypeId={id}", server.url()),
        "href": format!("/app/rest/buildTypes/id:{id}")
    })
}

fn mock_build_types(server: &mut Server, template: bool, ids: &[&str]) -> Mock {
    let build_types: Vec<_> = ids.iter().map(|id| build_type_json(server, id)).collect();
    server
        .mock("GET", "/app/rest/buildTypes")
        .match_query(Matcher::UrlEncoded(
            "locator".into(),
            format!("templateFlag:{template}"),
        ))
        .with_status(200)
        .with_body(json!({ "count": ids.len(), "buildType": build_types }).to_string())
        .create()
}

fn mock_parameters(server: &mut Server, id: &str, properties: serde_json::Value) -> Mock {
    server
        .mock("GET", format!("/app/rest/buildTypes/id:{id}/parameters").as_str())
        .match_header("authorization", "Bearer abc")
        .with_status(200)
        .with_body(json!({ "property": properties }).to_string())
        .create()
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    tcg(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("find"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_find_without_server_fails() {
    let dir = TempDir::new().unwrap();
    tcg(&dir)
        .args(["find", "JDK", "--token", "abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No TeamCity server configured"));
}

#[test]
fn test_find_without_credentials_fails() {
    let dir = TempDir::new().unwrap();
    tcg(&dir)
        .args(["find", "JDK", "--server", "https://ci.example.com"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No credentials"));
}

#[test]
fn test_find_prints_matches() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    mock_build_types(&mut server, false, &["bt1", "bt2"]);
    mock_build_types(&mut server, true, &[]);
    mock_parameters(
        &mut server,
        "bt1",
        json!([
            {"name": "env.JDK", "value": "17", "inherited": false},
            {"name": "env.JDK_HOME", "value": "/opt/jdk", "inherited": true}
        ]),
    );
    mock_parameters(
        &mut server,
        "bt2",
        json!([{"name": "other", "value": "x"}, {"name": "env.JDK", "value": "21"}]),
    );

    let expected = format!(
        "{url}/viewType.html?buildTypeId=bt1  env.JDK  17\n\
         {url}/viewType.html?buildTypeId=bt2  env.JDK  21\n",
        url = server.url()
    );

    tcg(&dir)
        .args(["find", "JDK", "--server", &server.url(), "--token", "abc"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_find_from_environment_with_values_and_delimiter() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    mock_build_types(&mut server, false, &["bt1"]);
    mock_parameters(
        &mut server,
        "bt1",
        json!([
            {"name": "env.JDK", "value": "11"},
            {"name": "env.JDK_NEXT", "value": "21"}
        ]),
    );

    tcg(&dir)
        .env("TEAMCITY_SERVER", server.url())
        .env("TEAMCITY_ACCESS_TOKEN", "abc")
        .args(["find", "JDK", "--values", "17", "21", "--scope", "configurations", "-d", ","])
        .assert()
        .success()
        .stdout(format!(
            "{}/viewType.html?buildTypeId=bt1,env.JDK_NEXT,21\n",
            server.url()
        ));
}

#[test]
fn test_find_limit_stops_requests() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    mock_build_types(&mut server, false, &["bt1", "bt2"]);
    mock_parameters(&mut server, "bt1", json!([{"name": "X", "value": "1"}]));
    let second = server
        .mock("GET", "/app/rest/buildTypes/id:bt2/parameters")
        .expect(0)
        .create();

    tcg(&dir)
        .args(["find", "X", "--limit", "1", "--scope", "configurations"])
        .args(["--server", &server.url(), "--token", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("buildTypeId=bt1  X  1"));

    second.assert();
}

#[test]
fn test_find_json_lines() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    mock_build_types(&mut server, false, &["bt1"]);
    mock_parameters(&mut server, "bt1", json!([{"name": "X", "value": "1", "inherited": false}]));

    let output = tcg(&dir)
        .args(["find", "^X$", "--scope", "configurations", "--json"])
        .args(["--server", &server.url(), "--token", "abc"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let line: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(line["build_type_id"], "bt1");
    assert_eq!(line["name"], "X");
    assert_eq!(line["value"], "1");
    assert_eq!(line["inherited"], false);
}

#[test]
fn test_auth_failure_exit_code() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/app/rest/buildTypes")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("Authentication required")
        .create();

    tcg(&dir)
        .args(["list", "--server", &server.url(), "--token", "wrong"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("401"))
        .stderr(predicate::str::contains("Authentication required"));
}

#[test]
fn test_paged_response_fails() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/app/rest/buildTypes")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({"count": 100, "nextHref": "/app/rest/buildTypes?start=100", "buildType": []})
                .to_string(),
        )
        .create();

    tcg(&dir)
        .args(["list", "--server", &server.url(), "--token", "abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("paged response"));
}

#[test]
fn test_list_json() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    mock_build_types(&mut server, false, &["bt1"]);
    mock_build_types(&mut server, true, &["tpl1"]);

    let output = tcg(&dir)
        .args(["list", "--json", "--server", &server.url(), "--token", "abc"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let ids: Vec<String> = stdout
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["id"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(ids, vec!["bt1", "tpl1"]);
}

#[test]
fn test_config_set_get_and_use() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    mock_build_types(&mut server, false, &["bt1"]);

    tcg(&dir)
        .args(["config", "set", "server", &server.url()])
        .assert()
        .success();

    tcg(&dir)
        .args(["config", "get", "server"])
        .assert()
        .success()
        .stdout(format!("{}\n", server.url()));

    let content = std::fs::read_to_string(config_path(dir.path())).unwrap();
    assert!(content.contains(&server.url()));

    tcg(&dir)
        .args(["list", "--scope", "configurations", "--json", "--token", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\":\"bt1\""));
}

#[test]
fn test_config_rejects_unknown_key_and_bad_server() {
    let dir = TempDir::new().unwrap();

    tcg(&dir)
        .args(["config", "set", "token", "secret"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key 'token'"));

    tcg(&dir)
        .args(["config", "set", "server", "ftp://ci.example.com"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported URL scheme"));

    assert!(!config_path(dir.path()).exists());
}

#[test]
fn test_config_path_respects_override() {
    let dir = TempDir::new().unwrap();
    tcg(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_completion_script() {
    let dir = TempDir::new().unwrap();
    tcg(&dir)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tcg"));
}
