//! Inspector tab selector
//!
//! Turns an assistant's inspector descriptions and the canvas state into a
//! tab strip, and forwards tab clicks to the canvas controller.

use crate::api::StateDescription;
use crate::canvas::{CanvasController, CanvasState, CanvasTarget};

/// Shown when an assistant exposes no selectable inspectors
pub const EMPTY_STATE_MESSAGE: &str = "No inspectors available for this assistant";

/// Inspectors that may appear as tabs, in received order
pub fn selectable(descriptions: &[StateDescription]) -> impl Iterator<Item = &StateDescription> {
    descriptions.iter().filter(|d| !d.is_config())
}

/// The tab that is shown as active
///
/// The canvas selection wins when it names a selectable inspector;
/// otherwise the first selectable inspector is the default. `None` when
/// nothing is targeted or nothing is selectable.
pub fn resolve_active_tab<'a>(
    state: &CanvasState,
    descriptions: &'a [StateDescription],
) -> Option<&'a str> {
    state.assistant_id()?;

    let selected = state
        .assistant_state_id()
        .and_then(|selected| selectable(descriptions).find(|d| d.id == selected));
    selected
        .or_else(|| selectable(descriptions).next())
        .map(|d| d.id.as_str())
}

/// One rendered tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub selected: bool,
}

/// What the selector renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabStrip {
    /// No assistant is targeted; render nothing
    Hidden,
    /// The assistant has no selectable inspectors
    Empty { message: &'static str },
    Tabs {
        conversation_id: String,
        tabs: Vec<Tab>,
        active: String,
    },
}

/// Tab selector bound to one assistant's inspector list for a conversation
#[derive(Debug, Clone, Copy)]
pub struct InspectorTabs<'a> {
    conversation_id: &'a str,
    assistant_id: &'a str,
    descriptions: &'a [StateDescription],
}

impl<'a> InspectorTabs<'a> {
    pub fn new(
        conversation_id: &'a str,
        assistant_id: &'a str,
        descriptions: &'a [StateDescription],
    ) -> Self {
        Self {
            conversation_id,
            assistant_id,
            descriptions,
        }
    }

    /// Hidden unless the canvas targets the assistant this list belongs to
    pub fn render(&self, state: &CanvasState) -> TabStrip {
        if state.assistant_id() != Some(self.assistant_id) {
            return TabStrip::Hidden;
        }
        let Some(active) = resolve_active_tab(state, self.descriptions) else {
            return TabStrip::Empty {
                message: EMPTY_STATE_MESSAGE,
            };
        };

        let tabs = selectable(self.descriptions)
            .map(|d| Tab {
                id: d.id.clone(),
                label: d.display_name.clone(),
                selected: d.id == active,
            })
            .collect();

        TabStrip::Tabs {
            conversation_id: self.conversation_id.to_string(),
            tabs,
            active: active.to_string(),
        }
    }

    /// Handle a click on tab `state_id`. Returns whether a selection was
    /// forwarded to the controller.
    pub fn select(&self, controller: &mut CanvasController, state_id: &str) -> bool {
        let TabStrip::Tabs { tabs, active, .. } = self.render(&controller.state()) else {
            return false;
        };
        if state_id == active || !tabs.iter().any(|tab| tab.id == state_id) {
            return false;
        }

        tracing::debug!(
            conversation_id = %self.conversation_id,
            assistant_id = %self.assistant_id,
            state_id = %state_id,
            "Inspector tab selected"
        );
        controller.transition_to_state(&CanvasTarget::inspector(state_id))
    }
}
