//! Choice presenter trait
//!
//! The core drives prompts through this trait; the CLI supplies the
//! terminal-backed implementation, tests supply a scripted one. Every
//! method blocks until the user answers or cancels; cancellation is
//! `CoreError::SelectionCancelled`.

use crate::error::Result;

/// A candidate in a selection list.
///
/// `index` is the position in the original candidate sequence and is used
/// to recover the underlying object after selection. `selected` is the
/// toggle mark used by multi-select rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectItem {
    pub id: String,
    pub index: usize,
    pub selected: bool,
}

impl SelectItem {
    pub fn new(id: impl Into<String>, index: usize) -> Self {
        Self {
            id: id.into(),
            index,
            selected: false,
        }
    }
}

/// Renders selection and free-text prompts.
pub trait Prompter: Send + Sync {
    /// Single-select over labels; returns the chosen index.
    fn select(&self, label: &str, options: &[String]) -> Result<usize>;

    /// One round of a multi-select: present all items with their current
    /// marks, cursor starting at `cursor`, and return the chosen index.
    /// The toggle protocol around the rounds lives in the engine, not here.
    fn multi_select_round(&self, label: &str, items: &[SelectItem], cursor: usize)
        -> Result<usize>;

    /// Free-text entry; an empty answer is allowed.
    fn free_text(&self, label: &str) -> Result<String>;
}
