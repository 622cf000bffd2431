//! kubectl JSON response parsing

use serde::Deserialize;

use crate::types::{ContainerSpec, PodRef, PortSpec};

/// Response structure for `kubectl get pods -o json`.
#[derive(Debug, Deserialize)]
pub struct PodListResponse {
    pub items: Vec<PodItem>,
}

impl PodListResponse {
    /// Converts the kubectl response to pod references, preserving item order.
    pub fn into_refs(self) -> Vec<PodRef> {
        self.items
            .into_iter()
            .map(|item| PodRef::new(item.metadata.name, item.metadata.namespace))
            .collect()
    }
}

/// Response structure for `kubectl get pod <name> -o json`.
#[derive(Debug, Deserialize)]
pub struct PodItem {
    pub metadata: PodMetadata,
    #[serde(default)]
    pub spec: PodSpec,
}

impl PodItem {
    /// Converts the pod manifest to container projections, preserving
    /// declaration order.
    pub fn into_containers(self) -> Vec<ContainerSpec> {
        self.spec
            .containers
            .into_iter()
            .map(|c| ContainerSpec {
                name: c.name,
                ports: c
                    .ports
                    .unwrap_or_default()
                    .into_iter()
                    .map(|p| PortSpec {
                        name: p.name,
                        container_port: p.container_port,
                    })
                    .collect(),
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct PodMetadata {
    pub name: String,
    pub namespace: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PodSpec {
    #[serde(default)]
    pub containers: Vec<ContainerItem>,
}

#[derive(Debug, Deserialize)]
pub struct ContainerItem {
    pub name: String,
    pub ports: Option<Vec<ContainerPortItem>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerPortItem {
    pub name: Option<String>,
    pub container_port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    const POD_LIST: &str = r#"{
        "apiVersion": "v1",
        "kind": "List",
        "items": [
            {
                "metadata": {"name": "api-7d4b9", "namespace": "prod"},
                "spec": {"containers": [{"name": "api", "image": "api:1"}]}
            },
            {
                "metadata": {"name": "worker-x2v8p", "namespace": "batch"},
                "spec": {"containers": []}
            }
        ]
    }"#;

    const POD: &str = r#"{
        "metadata": {"name": "api-7d4b9", "namespace": "prod"},
        "spec": {
            "containers": [
                {
                    "name": "api",
                    "ports": [
                        {"name": "http", "containerPort": 8080, "protocol": "TCP"},
                        {"containerPort": 9090}
                    ]
                },
                {"name": "sidecar"}
            ]
        }
    }"#;

    #[test]
    fn test_pod_list_into_refs_preserves_order() {
        let response: PodListResponse = serde_json::from_str(POD_LIST).unwrap();
        let refs = response.into_refs();
        assert_eq!(
            refs,
            vec![
                PodRef::new("api-7d4b9", "prod"),
                PodRef::new("worker-x2v8p", "batch"),
            ]
        );
    }

    #[test]
    fn test_pod_into_containers() {
        let pod: PodItem = serde_json::from_str(POD).unwrap();
        let containers = pod.into_containers();
        assert_eq!(containers.len(), 2);
        assert_eq!(containers[0].name, "api");
        assert_eq!(
            containers[0].ports,
            vec![
                PortSpec {
                    name: Some("http".to_string()),
                    container_port: 8080,
                },
                PortSpec {
                    name: None,
                    container_port: 9090,
                },
            ]
        );
        // Container without a ports key parses as portless
        assert_eq!(containers[1].name, "sidecar");
        assert!(containers[1].ports.is_empty());
    }

    #[test]
    fn test_pod_without_spec_parses() {
        let pod: PodItem =
            serde_json::from_str(r#"{"metadata": {"name": "p", "namespace": "ns"}}"#).unwrap();
        assert!(pod.into_containers().is_empty());
    }
}
