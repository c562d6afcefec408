//! Pure canvas transition function
//!
//! Given the same state, target and catalog this always yields the same
//! result and performs no I/O. The controller applies the result.

use super::state::{CanvasState, InspectorCatalog, Panel};
use super::target::CanvasTarget;

/// Result of a canvas transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub new_state: CanvasState,
    /// False when the target resolved to the current state
    pub changed: bool,
}

/// Resolve `target` against `state`
///
/// Never fails: ids that cannot be meaningful in the resulting state are
/// dropped and left to the consumer's default selection.
pub fn transition(
    state: &CanvasState,
    target: &CanvasTarget,
    catalog: &InspectorCatalog,
) -> TransitionResult {
    let panel = target.panel.unwrap_or(state.panel());

    let new_state = if panel == Panel::Assistant {
        // Ids from a previous visit do not survive leaving the panel
        let previous_assistant = match state.panel() {
            Panel::Assistant => state.assistant_id(),
            Panel::None | Panel::Conversation => None,
        };
        let previous_selection = match state.panel() {
            Panel::Assistant => state.assistant_state_id(),
            Panel::None | Panel::Conversation => None,
        };

        let assistant_id = target
            .assistant_id
            .as_deref()
            .or(previous_assistant)
            .map(str::to_string);

        let assistant_state_id = match (&assistant_id, &target.assistant_state_id) {
            (None, _) => None,
            (Some(_), Some(explicit)) => Some(explicit.clone()),
            (Some(id), None) if Some(id.as_str()) == previous_assistant => {
                previous_selection.map(str::to_string)
            }
            // Switched assistants: keep the tab only if the new assistant has it
            (Some(id), None) => previous_selection
                .filter(|selection| catalog.contains(id, selection))
                .map(str::to_string),
        };

        CanvasState::new(Panel::Assistant, assistant_id, assistant_state_id)
    } else {
        CanvasState::new(panel, None, None)
    };

    let changed = new_state != *state;
    TransitionResult { new_state, changed }
}
