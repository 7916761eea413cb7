//! Integration tests for the regctl invocation and its failures

#![cfg(unix)]
#![allow(deprecated)]

use predicates::prelude::*;

mod common;
use common::{lasttag_cmd, FakeTool};

#[test]
fn test_collaborator_non_zero_exit() {
    let regctl = FakeTool::failing("failed to request manifest: unauthorized", 1);

    lasttag_cmd()
        .arg("--regctl")
        .arg(regctl.command())
        .arg("private/app")
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Could not list tags for repository docker.io/private/app",
        ))
        .stderr(predicate::str::contains("unauthorized"))
        .stderr(predicate::str::contains("regctl registry login"));
}

#[test]
fn test_collaborator_missing() {
    lasttag_cmd()
        .arg("--regctl")
        .arg("/nonexistent/bin/regctl")
        .arg("alpine")
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to launch regctl"))
        .stderr(predicate::str::contains("Install regctl"));
}

#[test]
fn test_container_engine_missing() {
    lasttag_cmd()
        .arg("--runtime")
        .arg("docker")
        .arg("--docker")
        .arg("/nonexistent/bin/docker")
        .arg("alpine")
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to launch container engine"))
        .stderr(predicate::str::contains("docker engine is running"));
}

#[test]
fn test_container_engine_not_running() {
    let docker = FakeTool::failing(
        "Cannot connect to the Docker daemon at unix:///var/run/docker.sock. Is the docker daemon running?",
        125,
    );

    lasttag_cmd()
        .arg("--runtime")
        .arg("docker")
        .arg("--docker")
        .arg(docker.command())
        .arg("alpine")
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("container engine"))
        .stderr(predicate::str::contains("Cannot connect to the Docker daemon"))
        .stderr(predicate::str::contains("docker engine is running"))
        .stderr(predicate::str::contains("regctl registry login").not());
}

#[test]
fn test_docker_runtime_invocation() {
    let docker = FakeTool::tty_listing(&["1.25", "1.27", "1.26"]);

    lasttag_cmd()
        .arg("--runtime")
        .arg("docker")
        .arg("--docker")
        .arg(docker.command())
        .arg("nginx")
        .assert()
        .success()
        .stdout("1.27\n");

    assert_eq!(
        docker.recorded_args().unwrap(),
        vec![
            "run",
            "--rm",
            "-v",
            "regctl-conf:/home/appuser/.regctl/",
            "regclient/regctl:latest",
            "tag",
            "ls",
            "docker.io/library/nginx",
        ]
    );
}

#[test]
fn test_runtime_from_environment() {
    let docker = FakeTool::listing(&["2.0"]);

    lasttag_cmd()
        .env("LASTTAG_RUNTIME", "docker")
        .env("LASTTAG_DOCKER", docker.command())
        .arg("app")
        .assert()
        .success()
        .stdout("2.0\n");

    let args = docker.recorded_args().unwrap();
    assert_eq!(args.first().map(String::as_str), Some("run"));
}

#[test]
fn test_missing_repository_argument() {
    lasttag_cmd()
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("REPOSITORY_URL"));
}

#[test]
fn test_invalid_reference_skips_collaborator() {
    let regctl = FakeTool::listing(&["3.19"]);

    lasttag_cmd()
        .arg("--regctl")
        .arg(regctl.command())
        .arg("alpine:3.19")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("must not include a tag"));

    assert!(regctl.recorded_args().is_none());
}

#[test]
fn test_default_registry_override() {
    let regctl = FakeTool::listing(&["0.9.0"]);

    lasttag_cmd()
        .arg("--regctl")
        .arg(regctl.command())
        .arg("--default-registry")
        .arg("registry.internal:5000")
        .arg("team/service")
        .assert()
        .success()
        .stdout("0.9.0\n");

    assert_eq!(
        regctl.recorded_args().unwrap(),
        vec!["tag", "ls", "registry.internal:5000/team/service"]
    );
}
