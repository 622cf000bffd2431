//! Error types for the kubectl provider

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("kubectl not found (install it or set --kubectl / PODQ_KUBECTL)")]
    KubectlNotFound,

    #[error("Failed to reach cluster: {0}")]
    Unreachable(String),

    #[error("Failed to parse kubectl output: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProviderError>;
