//! Pod resolution: inventory fetch, regex filter, disambiguation

use regex::Regex;
use tracing::debug;

use podq_provider::{NamespaceScope, PodInventory, PodRef};

use crate::error::{CoreError, Result};
use crate::prompt::Prompter;

/// The single pod a query has narrowed down to.
///
/// Only successful resolution constructs one; zero matches and cancelled
/// prompts are errors, never an empty target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pod: PodRef,
}

impl ResolvedTarget {
    pub(crate) fn new(pod: PodRef) -> Self {
        Self { pod }
    }

    pub fn pod(&self) -> &PodRef {
        &self.pod
    }

    pub fn name(&self) -> &str {
        &self.pod.name
    }

    pub fn namespace(&self) -> &str {
        &self.pod.namespace
    }
}

/// Resolve exactly one pod from a regex query.
///
/// The pattern is unanchored: it matches anywhere in the pod name. When
/// several pods match, the user picks one; options keep inventory order so
/// the chosen index maps straight back to the filtered list.
pub async fn resolve_pod(
    inventory: &dyn PodInventory,
    prompter: &dyn Prompter,
    scope: &NamespaceScope,
    pattern: &str,
) -> Result<ResolvedTarget> {
    let re = Regex::new(pattern)?;

    let pods = inventory.list_pods(scope).await?;
    let mut matches: Vec<PodRef> = pods.into_iter().filter(|p| re.is_match(&p.name)).collect();
    debug!("{} pods match '{}' in {}", matches.len(), pattern, scope);

    if matches.is_empty() {
        return Err(CoreError::NoMatch {
            pattern: pattern.to_string(),
            scope: scope.clone(),
        });
    }

    let index = if matches.len() == 1 {
        0
    } else {
        let labels: Vec<String> = matches.iter().map(ToString::to_string).collect();
        prompter.select("Select pod (name - namespace)", &labels)?
    };

    Ok(ResolvedTarget::new(matches.swap_remove(index)))
}
