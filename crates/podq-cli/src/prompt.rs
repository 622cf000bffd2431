//! Terminal prompter backed by dialoguer

use dialoguer::{theme::ColorfulTheme, Input, Select};

use podq_core::{CoreError, Prompter, Result, SelectItem};

/// Renders prompts on the controlling terminal.
///
/// Esc/q and interrupted prompts both surface as `SelectionCancelled`;
/// either way the invocation is over.
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn select(&self, label: &str, options: &[String]) -> Result<usize> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(label)
            .items(options)
            .default(0)
            .interact_opt()
            .map_err(|_| CoreError::SelectionCancelled)?
            .ok_or(CoreError::SelectionCancelled)
    }

    fn multi_select_round(
        &self,
        label: &str,
        items: &[SelectItem],
        cursor: usize,
    ) -> Result<usize> {
        // Marks live on the items; rendering them is all that happens here
        let labels: Vec<String> = items
            .iter()
            .map(|item| {
                if item.selected {
                    format!("✔ {}", item.id)
                } else {
                    format!("  {}", item.id)
                }
            })
            .collect();

        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(label)
            .items(&labels)
            .default(cursor)
            .report(false)
            .interact_opt()
            .map_err(|_| CoreError::SelectionCancelled)?
            .ok_or(CoreError::SelectionCancelled)
    }

    fn free_text(&self, label: &str) -> Result<String> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(|_| CoreError::SelectionCancelled)
    }
}
