//! kubectl provider for podq
//!
//! This crate is the seam between podq's resolution logic and the cluster:
//! an inventory trait for listing pods and reading pod manifests, a runner
//! trait for delegating an assembled argument vector to kubectl, and the
//! production implementation of both that spawns the kubectl binary.

mod config;
mod error;
mod kubectl;
pub mod models;
mod types;

pub use config::*;
pub use error::*;
pub use kubectl::KubectlClient;
pub use types::*;

use async_trait::async_trait;

/// Lists pods and reads pod manifests from the cluster.
#[async_trait]
pub trait PodInventory: Send + Sync {
    /// List every pod visible in the given scope, in server order.
    async fn list_pods(&self, scope: &NamespaceScope) -> Result<Vec<PodRef>>;

    /// The containers declared in a pod's manifest, in declaration order.
    async fn pod_containers(&self, pod: &PodRef) -> Result<Vec<ContainerSpec>>;
}

/// Executes an assembled argument vector against the external tool,
/// relaying its output as it is produced.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run to completion and return the exit code.
    async fn run(&self, args: &[String]) -> Result<i32>;
}
