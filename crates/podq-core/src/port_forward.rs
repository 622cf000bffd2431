//! Port-forward planning
//!
//! Sequential pipeline from a resolved pod to the argument vector for
//! `kubectl port-forward`: pick a container, pick one or more of its
//! declared ports, collect a host port per pick, assemble the final
//! mappings in selection order.

use tracing::debug;

use podq_provider::{PodInventory, PortSpec};

use crate::error::{CoreError, Result};
use crate::multi_select::toggle_select;
use crate::prompt::{Prompter, SelectItem};
use crate::resolver::ResolvedTarget;

/// One host-to-container pairing; `host_port == 0` lets kubectl pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortMapping {
    pub host_port: u16,
    pub container_port: u16,
}

impl std::fmt::Display for PortMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host_port, self.container_port)
    }
}

/// The ordered mappings a port-forward invocation will carry.
///
/// Always holds at least one mapping, in the order ports were selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardPlan {
    mappings: Vec<PortMapping>,
}

impl ForwardPlan {
    pub fn mappings(&self) -> &[PortMapping] {
        &self.mappings
    }
}

/// Build a forward plan for the resolved pod.
pub async fn plan_port_forward(
    inventory: &dyn PodInventory,
    prompter: &dyn Prompter,
    target: &ResolvedTarget,
) -> Result<ForwardPlan> {
    let mut containers = inventory.pod_containers(target.pod()).await?;
    if containers.is_empty() {
        return Err(CoreError::NoContainers(target.pod().clone()));
    }

    let index = if containers.len() == 1 {
        0
    } else {
        let names: Vec<String> = containers.iter().map(|c| c.name.clone()).collect();
        prompter.select("Select container", &names)?
    };
    let container = containers.swap_remove(index);
    debug!("container {} selected", container.name);

    if container.ports.is_empty() {
        return Err(CoreError::NoPorts {
            container: container.name,
            pod: target.pod().clone(),
        });
    }

    let selected: Vec<PortSpec> = if container.ports.len() == 1 {
        container.ports
    } else {
        let items: Vec<SelectItem> = container
            .ports
            .iter()
            .enumerate()
            .map(|(i, p)| SelectItem::new(p.to_string(), i))
            .collect();
        let marked = toggle_select(prompter, "Select ports", items)?;
        if marked.is_empty() {
            // Finishing without marking anything selects nothing to forward
            return Err(CoreError::SelectionCancelled);
        }
        marked
            .into_iter()
            .map(|item| container.ports[item.index].clone())
            .collect()
    };

    let mut mappings = Vec::with_capacity(selected.len());
    for port in &selected {
        let answer = prompter.free_text(&format!(
            "Host port for {} (empty to auto-assign)",
            port.container_port
        ))?;
        let host_port = if answer.is_empty() {
            0
        } else {
            answer
                .parse::<u16>()
                .map_err(|_| CoreError::InvalidPort(answer.clone()))?
        };
        mappings.push(PortMapping {
            host_port,
            container_port: port.container_port,
        });
    }

    Ok(ForwardPlan { mappings })
}

/// Assemble the final argument vector for `kubectl port-forward`.
///
/// Mapping order follows selection order; any raw forwarded arguments go
/// at the end, verbatim.
pub fn forward_args(target: &ResolvedTarget, plan: &ForwardPlan, extra: &[String]) -> Vec<String> {
    let mut args = vec![
        "-n".to_string(),
        target.namespace().to_string(),
        "port-forward".to_string(),
        target.name().to_string(),
    ];
    for mapping in plan.mappings() {
        args.push(mapping.to_string());
    }
    args.extend(extra.iter().cloned());
    args
}
