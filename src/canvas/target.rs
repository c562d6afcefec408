//! Partial canvas targets requested by views

use super::state::Panel;

/// A requested canvas change; unset fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanvasTarget {
    pub panel: Option<Panel>,
    pub assistant_id: Option<String>,
    pub assistant_state_id: Option<String>,
}

impl CanvasTarget {
    /// Close the canvas
    pub fn closed() -> Self {
        Self::panel(Panel::None)
    }

    /// Show a panel without touching its targets
    pub fn panel(panel: Panel) -> Self {
        Self {
            panel: Some(panel),
            ..Self::default()
        }
    }

    pub fn conversation() -> Self {
        Self::panel(Panel::Conversation)
    }

    /// Open the assistant panel on `assistant_id`
    pub fn assistant(assistant_id: impl Into<String>) -> Self {
        Self::panel(Panel::Assistant).with_assistant_id(assistant_id)
    }

    /// Select an inspector tab only
    pub fn inspector(assistant_state_id: impl Into<String>) -> Self {
        Self::default().with_assistant_state_id(assistant_state_id)
    }

    #[must_use]
    pub fn with_assistant_id(mut self, assistant_id: impl Into<String>) -> Self {
        self.assistant_id = Some(assistant_id.into());
        self
    }

    #[must_use]
    pub fn with_assistant_state_id(mut self, assistant_state_id: impl Into<String>) -> Self {
        self.assistant_state_id = Some(assistant_state_id.into());
        self
    }
}
