//! Mock-based handler tests.
//!
//! These call the command functions directly with mock collaborators,
//! avoiding kubectl, a cluster, and a terminal.

use podq_cli::commands;
use podq_core::test_support::{resolved_target, MockInventory, MockRunner, ScriptedPrompter};
use podq_core::CoreError;
use podq_provider::{ContainerSpec, PortSpec};

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn web_pod_inventory() -> MockInventory {
    MockInventory::new().with_containers(vec![ContainerSpec {
        name: "web".to_string(),
        ports: vec![PortSpec {
            name: Some("http".to_string()),
            container_port: 8080,
        }],
    }])
}

// ---- tests ----

#[tokio::test]
async fn test_custom_absent_args_echoes_without_running() {
    let runner = MockRunner::new();
    let target = resolved_target("web-5fd8c", "staging");

    commands::custom(&runner, &target, None).await.unwrap();

    assert!(runner.runs().is_empty());
}

#[tokio::test]
async fn test_custom_delegates_assembled_vector() {
    let runner = MockRunner::new();
    let target = resolved_target("web-5fd8c", "staging");
    let raw = strings(&["logs", "-f"]);

    commands::custom(&runner, &target, Some(raw.as_slice()))
        .await
        .unwrap();

    assert_eq!(
        runner.runs(),
        vec![strings(&["-n", "staging", "logs", "-f", "web-5fd8c"])]
    );
}

#[tokio::test]
async fn test_custom_empty_args_runs_name_only() {
    let runner = MockRunner::new();
    let target = resolved_target("web-5fd8c", "staging");

    commands::custom(&runner, &target, Some(&[][..]))
        .await
        .unwrap();

    assert_eq!(runner.runs(), vec![strings(&["-n", "staging", "web-5fd8c"])]);
}

#[tokio::test]
async fn test_port_forward_delegates_plan() {
    let inventory = web_pod_inventory();
    let runner = MockRunner::new();
    let prompter = ScriptedPrompter::new().text("8888");
    let target = resolved_target("web-5fd8c", "staging");

    commands::port_forward(&inventory, &runner, &prompter, &target, None)
        .await
        .unwrap();

    assert_eq!(
        runner.runs(),
        vec![strings(&[
            "-n",
            "staging",
            "port-forward",
            "web-5fd8c",
            "8888:8080",
        ])]
    );
}

#[tokio::test]
async fn test_port_forward_appends_forwarded_args() {
    let inventory = web_pod_inventory();
    let runner = MockRunner::new();
    let prompter = ScriptedPrompter::new().text("");
    let target = resolved_target("web-5fd8c", "staging");
    let raw = strings(&["--address", "0.0.0.0"]);

    commands::port_forward(&inventory, &runner, &prompter, &target, Some(raw.as_slice()))
        .await
        .unwrap();

    assert_eq!(
        runner.runs(),
        vec![strings(&[
            "-n",
            "staging",
            "port-forward",
            "web-5fd8c",
            "0:8080",
            "--address",
            "0.0.0.0",
        ])]
    );
}

#[tokio::test]
async fn test_port_forward_invalid_host_port_executes_nothing() {
    let inventory = web_pod_inventory();
    let runner = MockRunner::new();
    let prompter = ScriptedPrompter::new().text("not-a-port");
    let target = resolved_target("web-5fd8c", "staging");

    let err = commands::port_forward(&inventory, &runner, &prompter, &target, None)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CoreError>(),
        Some(CoreError::InvalidPort(_))
    ));
    assert!(runner.runs().is_empty());
}

#[tokio::test]
async fn test_port_forward_cancel_executes_nothing() {
    let inventory = web_pod_inventory();
    let runner = MockRunner::new();
    let prompter = ScriptedPrompter::new().text_cancel();
    let target = resolved_target("web-5fd8c", "staging");

    let err = commands::port_forward(&inventory, &runner, &prompter, &target, None)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CoreError>(),
        Some(CoreError::SelectionCancelled)
    ));
    assert!(runner.runs().is_empty());
}
