//! Canvas controller: the only writer of canvas state

use super::state::{CanvasState, InspectorCatalog};
use super::target::CanvasTarget;
use super::transition::transition;
use crate::api::StateDescription;
use crate::inspector::resolve_active_tab;
use futures::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Owns the canvas state container and applies transitions to it
///
/// Readers obtain a [`CanvasReader`] through [`CanvasController::subscribe`];
/// they are notified only when a transition actually changes the state.
pub struct CanvasController {
    tx: watch::Sender<CanvasState>,
    catalog: InspectorCatalog,
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasController {
    /// Create a controller with the canvas closed
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(CanvasState::default());
        Self {
            tx,
            catalog: InspectorCatalog::default(),
        }
    }

    /// Apply a partial target. Returns whether the state changed.
    pub fn transition_to_state(&mut self, target: &CanvasTarget) -> bool {
        let catalog = &self.catalog;
        self.tx.send_if_modified(|state| {
            let result = transition(state, target, catalog);
            if result.changed {
                tracing::debug!(
                    from = ?state,
                    to = ?result.new_state,
                    "Canvas transition"
                );
                *state = result.new_state;
            }
            result.changed
        })
    }

    /// Close the canvas; used when the owning view unmounts
    pub fn reset(&mut self) {
        self.transition_to_state(&CanvasTarget::closed());
    }

    /// Record the inspector set of an assistant
    pub fn register_inspectors(&mut self, assistant_id: &str, descriptions: &[StateDescription]) {
        tracing::debug!(
            assistant_id = %assistant_id,
            count = descriptions.len(),
            "Registered inspectors"
        );
        self.catalog.register(assistant_id, descriptions);
    }

    pub fn catalog(&self) -> &InspectorCatalog {
        &self.catalog
    }

    /// Snapshot of the current state
    pub fn state(&self) -> CanvasState {
        self.tx.borrow().clone()
    }

    /// The inspector tab that is effectively shown, if any
    pub fn effective_tab(&self) -> Option<String> {
        let state = self.tx.borrow();
        let descriptions = state
            .assistant_id()
            .and_then(|id| self.catalog.get(id))
            .unwrap_or_default();
        resolve_active_tab(&state, descriptions).map(str::to_string)
    }

    pub fn subscribe(&self) -> CanvasReader {
        CanvasReader {
            rx: self.tx.subscribe(),
        }
    }
}

/// Read-only view of the canvas state
#[derive(Clone)]
pub struct CanvasReader {
    rx: watch::Receiver<CanvasState>,
}

impl CanvasReader {
    pub fn current(&self) -> CanvasState {
        self.rx.borrow().clone()
    }

    /// Wait for the next change; `None` once the controller is gone
    pub async fn changed(&mut self) -> Option<CanvasState> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Stream of states, starting with the current one
    pub fn into_stream(self) -> impl Stream<Item = CanvasState> {
        WatchStream::new(self.rx)
    }
}
