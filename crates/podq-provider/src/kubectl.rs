//! kubectl-backed implementation of the provider traits

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::debug;

use crate::config::KubectlConfig;
use crate::error::{ProviderError, Result};
use crate::models::{PodItem, PodListResponse};
use crate::types::{ContainerSpec, NamespaceScope, PodRef};
use crate::{CommandRunner, PodInventory};

/// Talks to the cluster by spawning kubectl and parsing its JSON output.
pub struct KubectlClient {
    config: KubectlConfig,
}

impl KubectlClient {
    pub fn new(config: KubectlConfig) -> Self {
        Self { config }
    }

    /// Build a kubectl command carrying the configured cluster flags.
    fn command(&self) -> Command {
        let mut cmd = Command::new(self.config.binary());
        cmd.args(self.config.base_args());
        cmd
    }

    /// Run a kubectl query to completion and return its stdout.
    async fn query(&self, args: &[&str]) -> Result<String> {
        debug!("querying: kubectl {}", args.join(" "));

        let output = self
            .command()
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(spawn_error)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ProviderError::Unreachable(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// The namespace of the current kubeconfig context, or `default` when
    /// the context does not set one.
    pub async fn current_namespace(&self) -> Result<String> {
        let output = self
            .query(&[
                "config",
                "view",
                "--minify",
                "-o",
                "jsonpath={..namespace}",
            ])
            .await?;

        let namespace = output.trim();
        if namespace.is_empty() {
            Ok("default".to_string())
        } else {
            Ok(namespace.to_string())
        }
    }
}

#[async_trait]
impl PodInventory for KubectlClient {
    async fn list_pods(&self, scope: &NamespaceScope) -> Result<Vec<PodRef>> {
        let mut args = vec!["get".to_string(), "pods".to_string()];
        args.extend(scope.as_args());
        args.push("-o".to_string());
        args.push("json".to_string());

        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let output = self.query(&arg_refs).await?;

        let response: PodListResponse = serde_json::from_str(&output)?;
        let refs = response.into_refs();
        debug!("inventory returned {} pods in {}", refs.len(), scope);
        Ok(refs)
    }

    async fn pod_containers(&self, pod: &PodRef) -> Result<Vec<ContainerSpec>> {
        let output = self
            .query(&[
                "get",
                "pod",
                &pod.name,
                "-n",
                &pod.namespace,
                "-o",
                "json",
            ])
            .await?;

        let item: PodItem = serde_json::from_str(&output)?;
        Ok(item.into_containers())
    }
}

#[async_trait]
impl CommandRunner for KubectlClient {
    async fn run(&self, args: &[String]) -> Result<i32> {
        // Echo the final command so the operator sees what is being run
        println!("kubectl {}", args.join(" "));

        let mut child = self
            .command()
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        // Drain both pipes as lines are produced. Consuming only one stream
        // can deadlock the child once the other pipe's buffer fills.
        let mut stdout_lines = child.stdout.take().map(|s| BufReader::new(s).lines());
        let mut stderr_lines = child.stderr.take().map(|s| BufReader::new(s).lines());

        loop {
            tokio::select! {
                result = async {
                    match stdout_lines.as_mut() {
                        Some(lines) => lines.next_line().await,
                        None => std::future::pending().await,
                    }
                } => {
                    match result {
                        Ok(Some(line)) => println!("{}", line),
                        _ => stdout_lines = None,
                    }
                }
                result = async {
                    match stderr_lines.as_mut() {
                        Some(lines) => lines.next_line().await,
                        None => std::future::pending().await,
                    }
                } => {
                    match result {
                        Ok(Some(line)) => eprintln!("{}", line),
                        _ => stderr_lines = None,
                    }
                }
            }
            if stdout_lines.is_none() && stderr_lines.is_none() {
                break;
            }
        }

        let status = child.wait().await?;
        Ok(status.code().unwrap_or(1))
    }
}

/// Map a failed spawn to the provider taxonomy.
fn spawn_error(e: std::io::Error) -> ProviderError {
    if e.kind() == std::io::ErrorKind::NotFound {
        ProviderError::KubectlNotFound
    } else {
        ProviderError::Io(e)
    }
}
