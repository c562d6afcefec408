//! Workbench Canvas - client control core for a multi-assistant workbench
//!
//! Decides which side panel is visible and which assistant inspector is
//! selected, and sequences the side effects of attaching an assistant to a
//! newly created conversation.

pub mod api;
pub mod bootstrap;
pub mod canvas;
pub mod config;
pub mod drawer;
pub mod editor;
pub mod inspector;

pub use api::{HttpWorkbenchClient, LoggingNavigator, Navigator, WorkbenchApi};
pub use bootstrap::{BootstrapError, ConversationBootstrap};
pub use canvas::{CanvasController, CanvasReader, CanvasState, CanvasTarget, Panel};
pub use config::WorkbenchConfig;
pub use editor::{AssistantEditor, EditorError};
pub use inspector::{InspectorTabs, TabStrip};
