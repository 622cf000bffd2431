//! Error types for podq-core

use podq_provider::{NamespaceScope, PodRef, ProviderError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid pod pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("No pods found matching '{pattern}' in {scope}")]
    NoMatch {
        pattern: String,
        scope: NamespaceScope,
    },

    #[error("Selection cancelled")]
    SelectionCancelled,

    #[error("No containers found in pod {0}")]
    NoContainers(PodRef),

    #[error("No ports found in container {container}, pod {pod}")]
    NoPorts { container: String, pod: PodRef },

    #[error("Invalid host port '{0}'")]
    InvalidPort(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
