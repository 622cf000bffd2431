//! Test support utilities for podq-core
//!
//! A configurable mock inventory and a scripted prompter so resolution and
//! planning can be exercised without a cluster or a terminal.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use podq_provider::{
    CommandRunner, ContainerSpec, NamespaceScope, PodInventory, PodRef, ProviderError,
    Result as ProviderResult,
};

use crate::error::{CoreError, Result};
use crate::prompt::{Prompter, SelectItem};
use crate::resolver::ResolvedTarget;

/// Build a resolved target without going through resolution.
pub fn resolved_target(name: &str, namespace: &str) -> ResolvedTarget {
    ResolvedTarget::new(PodRef::new(name, namespace))
}

/// In-memory inventory with optional failure injection.
pub struct MockInventory {
    pods: Vec<PodRef>,
    containers: Vec<ContainerSpec>,
    list_error: Option<String>,
    listed_scopes: Mutex<Vec<NamespaceScope>>,
    fetched_pods: Mutex<Vec<PodRef>>,
}

impl MockInventory {
    pub fn new() -> Self {
        Self {
            pods: Vec::new(),
            containers: Vec::new(),
            list_error: None,
            listed_scopes: Mutex::new(Vec::new()),
            fetched_pods: Mutex::new(Vec::new()),
        }
    }

    pub fn with_pods(mut self, pods: Vec<PodRef>) -> Self {
        self.pods = pods;
        self
    }

    pub fn with_containers(mut self, containers: Vec<ContainerSpec>) -> Self {
        self.containers = containers;
        self
    }

    /// Make `list_pods` fail with an unreachable-cluster error.
    pub fn with_list_error(mut self, message: &str) -> Self {
        self.list_error = Some(message.to_string());
        self
    }

    pub fn listed_scopes(&self) -> Vec<NamespaceScope> {
        self.listed_scopes.lock().unwrap().clone()
    }

    pub fn fetched_pods(&self) -> Vec<PodRef> {
        self.fetched_pods.lock().unwrap().clone()
    }
}

impl Default for MockInventory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PodInventory for MockInventory {
    async fn list_pods(&self, scope: &NamespaceScope) -> ProviderResult<Vec<PodRef>> {
        self.listed_scopes.lock().unwrap().push(scope.clone());
        match &self.list_error {
            Some(message) => Err(ProviderError::Unreachable(message.clone())),
            None => Ok(self.pods.clone()),
        }
    }

    async fn pod_containers(&self, pod: &PodRef) -> ProviderResult<Vec<ContainerSpec>> {
        self.fetched_pods.lock().unwrap().push(pod.clone());
        Ok(self.containers.clone())
    }
}

/// Command runner recording every argument vector instead of spawning.
pub struct MockRunner {
    exit_code: i32,
    runs: Mutex<Vec<Vec<String>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self {
            exit_code: 0,
            runs: Mutex::new(Vec::new()),
        }
    }

    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }

    pub fn runs(&self) -> Vec<Vec<String>> {
        self.runs.lock().unwrap().clone()
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(&self, args: &[String]) -> ProviderResult<i32> {
        self.runs.lock().unwrap().push(args.to_vec());
        Ok(self.exit_code)
    }
}

/// One recorded single-select invocation.
#[derive(Debug, Clone)]
pub struct SelectCall {
    pub label: String,
    pub options: Vec<String>,
}

/// One recorded multi-select round.
#[derive(Debug, Clone)]
pub struct RoundCall {
    pub label: String,
    pub items: Vec<String>,
    pub marks: Vec<bool>,
    pub cursor: usize,
}

/// Prompter answering from pre-scripted queues; `None` entries cancel.
/// Running out of scripted answers panics, which keeps tests honest about
/// how many prompts they expect.
pub struct ScriptedPrompter {
    selects: Mutex<VecDeque<Option<usize>>>,
    rounds: Mutex<VecDeque<Option<usize>>>,
    texts: Mutex<VecDeque<Option<String>>>,
    seen_selects: Mutex<Vec<SelectCall>>,
    seen_rounds: Mutex<Vec<RoundCall>>,
    seen_texts: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self {
            selects: Mutex::new(VecDeque::new()),
            rounds: Mutex::new(VecDeque::new()),
            texts: Mutex::new(VecDeque::new()),
            seen_selects: Mutex::new(Vec::new()),
            seen_rounds: Mutex::new(Vec::new()),
            seen_texts: Mutex::new(Vec::new()),
        }
    }

    pub fn select(self, index: usize) -> Self {
        self.selects.lock().unwrap().push_back(Some(index));
        self
    }

    pub fn select_cancel(self) -> Self {
        self.selects.lock().unwrap().push_back(None);
        self
    }

    pub fn round(self, index: usize) -> Self {
        self.rounds.lock().unwrap().push_back(Some(index));
        self
    }

    pub fn round_cancel(self) -> Self {
        self.rounds.lock().unwrap().push_back(None);
        self
    }

    pub fn text(self, answer: &str) -> Self {
        self.texts.lock().unwrap().push_back(Some(answer.to_string()));
        self
    }

    pub fn text_cancel(self) -> Self {
        self.texts.lock().unwrap().push_back(None);
        self
    }

    pub fn seen_selects(&self) -> Vec<SelectCall> {
        self.seen_selects.lock().unwrap().clone()
    }

    pub fn seen_rounds(&self) -> Vec<RoundCall> {
        self.seen_rounds.lock().unwrap().clone()
    }

    pub fn seen_texts(&self) -> Vec<String> {
        self.seen_texts.lock().unwrap().clone()
    }
}

impl Default for ScriptedPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, label: &str, options: &[String]) -> Result<usize> {
        self.seen_selects.lock().unwrap().push(SelectCall {
            label: label.to_string(),
            options: options.to_vec(),
        });
        let answer = self
            .selects
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected select prompt: {}", label));
        answer.ok_or(CoreError::SelectionCancelled)
    }

    fn multi_select_round(
        &self,
        label: &str,
        items: &[SelectItem],
        cursor: usize,
    ) -> Result<usize> {
        self.seen_rounds.lock().unwrap().push(RoundCall {
            label: label.to_string(),
            items: items.iter().map(|i| i.id.clone()).collect(),
            marks: items.iter().map(|i| i.selected).collect(),
            cursor,
        });
        let answer = self
            .rounds
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected multi-select round: {}", label));
        answer.ok_or(CoreError::SelectionCancelled)
    }

    fn free_text(&self, label: &str) -> Result<String> {
        self.seen_texts.lock().unwrap().push(label.to_string());
        let answer = self
            .texts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected free-text prompt: {}", label));
        answer.ok_or(CoreError::SelectionCancelled)
    }
}
