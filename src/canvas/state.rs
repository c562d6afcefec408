//! Canvas state types

use crate::api::StateDescription;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which side panel is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    #[default]
    None,
    Conversation,
    Assistant,
}

/// Shared canvas state
///
/// Fields are read-only outside this module; every change goes through
/// [`super::transition`] via the controller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CanvasState {
    panel: Panel,
    /// Assistant whose inspectors are shown, only with `Panel::Assistant`
    assistant_id: Option<String>,
    /// Selected inspector tab; `None` means "use the default tab"
    assistant_state_id: Option<String>,
}

impl CanvasState {
    pub(crate) fn new(
        panel: Panel,
        assistant_id: Option<String>,
        assistant_state_id: Option<String>,
    ) -> Self {
        Self {
            panel,
            assistant_id,
            assistant_state_id,
        }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn assistant_id(&self) -> Option<&str> {
        self.assistant_id.as_deref()
    }

    pub fn assistant_state_id(&self) -> Option<&str> {
        self.assistant_state_id.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.panel != Panel::None
    }

    /// A selected inspector requires an assistant target, which in turn
    /// requires the assistant panel
    pub fn is_consistent(&self) -> bool {
        let assistant_ok = self.assistant_id.is_none() || self.panel == Panel::Assistant;
        let selection_ok = self.assistant_state_id.is_none()
            || (self.panel == Panel::Assistant && self.assistant_id.is_some());
        assistant_ok && selection_ok
    }
}

/// Inspector sets known per assistant
///
/// Fed by the data layer as descriptions arrive; consulted when the canvas
/// switches assistants to decide whether a selected tab id carries over.
#[derive(Debug, Clone, Default)]
pub struct InspectorCatalog {
    sets: HashMap<String, Vec<StateDescription>>,
}

impl InspectorCatalog {
    pub fn register(&mut self, assistant_id: &str, descriptions: &[StateDescription]) {
        self.sets
            .insert(assistant_id.to_string(), descriptions.to_vec());
    }

    pub fn get(&self, assistant_id: &str) -> Option<&[StateDescription]> {
        self.sets.get(assistant_id).map(Vec::as_slice)
    }

    /// Whether `state_id` is a known inspector of `assistant_id`.
    /// Unknown assistants contain nothing.
    pub fn contains(&self, assistant_id: &str, state_id: &str) -> bool {
        self.get(assistant_id)
            .is_some_and(|set| set.iter().any(|d| d.id == state_id))
    }
}
