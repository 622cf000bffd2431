//! Common types for the kubectl provider

use serde::{Deserialize, Serialize};

/// A pod reference: name plus the namespace it lives in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PodRef {
    pub name: String,
    pub namespace: String,
}

impl PodRef {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

impl std::fmt::Display for PodRef {
    // Doubles as the disambiguation label shown in selection prompts
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.namespace)
    }
}

/// Namespace scope for inventory queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceScope {
    /// Query every namespace the user can see
    All,
    /// Query a single namespace
    Named(String),
}

impl NamespaceScope {
    /// kubectl arguments selecting this scope
    pub fn as_args(&self) -> Vec<String> {
        match self {
            Self::All => vec!["--all-namespaces".to_string()],
            Self::Named(ns) => vec!["-n".to_string(), ns.clone()],
        }
    }
}

impl std::fmt::Display for NamespaceScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all namespaces"),
            Self::Named(ns) => write!(f, "namespace {}", ns),
        }
    }
}

/// A container declared in a pod manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSpec {
    pub name: String,
    pub ports: Vec<PortSpec>,
}

/// A port declared on a container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSpec {
    pub name: Option<String>,
    pub container_port: u16,
}

impl std::fmt::Display for PortSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} {}", self.container_port, name),
            None => write!(f, "{}", self.container_port),
        }
    }
}
