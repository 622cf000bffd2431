//! kubectl invocation configuration

use std::path::PathBuf;

/// Environment variable overriding the kubectl binary.
pub const KUBECTL_ENV: &str = "PODQ_KUBECTL";

/// How to invoke kubectl: which binary, and which cluster flags every
/// spawned command carries.
#[derive(Debug, Clone, Default)]
pub struct KubectlConfig {
    /// Explicit kubectl binary (overrides `PODQ_KUBECTL` and PATH lookup)
    pub kubectl: Option<PathBuf>,
    /// `--context` passed through to every kubectl invocation
    pub context: Option<String>,
    /// `--kubeconfig` passed through to every kubectl invocation
    pub kubeconfig: Option<PathBuf>,
}

impl KubectlConfig {
    /// Resolve the kubectl binary: explicit path, then environment, then
    /// plain `kubectl` from PATH.
    pub fn binary(&self) -> PathBuf {
        if let Some(path) = &self.kubectl {
            return path.clone();
        }
        if let Ok(path) = std::env::var(KUBECTL_ENV) {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }
        PathBuf::from("kubectl")
    }

    /// Cluster-selection arguments prepended to every kubectl invocation.
    pub fn base_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(context) = &self.context {
            args.push("--context".to_string());
            args.push(context.clone());
        }
        if let Some(kubeconfig) = &self.kubeconfig {
            args.push("--kubeconfig".to_string());
            args.push(kubeconfig.display().to_string());
        }
        args
    }
}
