//! Canvas state machine
//!
//! Decides which side panel is visible and which inspector tab is
//! selected. Transitions are pure; the controller owns the state container
//! and is its only writer.

mod controller;
pub mod state;
mod target;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use controller::{CanvasController, CanvasReader};
pub use state::{CanvasState, InspectorCatalog, Panel};
pub use target::CanvasTarget;
pub use transition::{transition, TransitionResult};
