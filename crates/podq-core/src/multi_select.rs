//! Toggle-based multi-select engine
//!
//! Repeatedly presents the full candidate list; choosing a candidate
//! toggles its mark and reopens the prompt with the cursor on it, choosing
//! the leading `Done` sentinel finishes. Rounds run in a loop with the
//! cursor carried explicitly between them.

use tracing::debug;

use crate::error::Result;
use crate::prompt::{Prompter, SelectItem};

/// Identifier of the synthetic terminator entry.
pub const DONE_ID: &str = "Done";

/// Run the toggle protocol over `candidates` and return the marked subset
/// in original candidate order.
///
/// Cancelling any round abandons the whole selection; partial toggles are
/// never returned.
pub fn toggle_select(
    prompter: &dyn Prompter,
    label: &str,
    candidates: Vec<SelectItem>,
) -> Result<Vec<SelectItem>> {
    // Prepend the sentinel exactly once; a list already led by it is
    // passed through unchanged.
    let mut items = if candidates.first().is_some_and(|i| i.id == DONE_ID) {
        candidates
    } else {
        let mut items = Vec::with_capacity(candidates.len() + 1);
        items.push(SelectItem::new(DONE_ID, 0));
        items.extend(candidates);
        items
    };

    let mut cursor = 0;
    loop {
        let chosen = prompter.multi_select_round(label, &items, cursor)?;

        // Index 0 is always the sentinel
        if chosen == 0 {
            let selected: Vec<SelectItem> =
                items.into_iter().skip(1).filter(|i| i.selected).collect();
            debug!("multi-select done, {} items marked", selected.len());
            return Ok(selected);
        }

        items[chosen].selected = !items[chosen].selected;
        cursor = chosen;
    }
}
