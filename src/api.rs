//! Workbench service seam
//!
//! The conversation/assistant service is an external collaborator. This
//! module defines the operations the client core consumes from it, an HTTP
//! implementation, and the navigation primitive.

mod client;
mod error;
mod types;

#[cfg(test)]
pub mod testing;

pub use client::HttpWorkbenchClient;
pub use error::ApiError;
pub use types::*;

use async_trait::async_trait;
use std::sync::Arc;

/// Operations consumed from the workbench service
#[async_trait]
pub trait WorkbenchApi: Send + Sync {
    /// Fetch one assistant, `ApiError::NotFound` if it does not exist
    async fn get_assistant(&self, assistant_id: &str) -> Result<Assistant, ApiError>;

    /// List the conversations an assistant participates in
    async fn get_assistant_conversations(
        &self,
        assistant_id: &str,
    ) -> Result<Vec<Conversation>, ApiError>;

    /// List the inspectors an assistant exposes for a conversation
    async fn get_state_descriptions(
        &self,
        assistant_id: &str,
        conversation_id: &str,
    ) -> Result<Vec<StateDescription>, ApiError>;

    /// Post a message into a conversation
    async fn create_conversation_message(
        &self,
        conversation_id: &str,
        message: &NewMessage,
    ) -> Result<Message, ApiError>;

    /// Attach a participant (user or assistant) to a conversation
    async fn add_conversation_participant(
        &self,
        conversation_id: &str,
        participant_id: &str,
    ) -> Result<Participant, ApiError>;
}

/// Moves the user's view to another route
///
/// Navigation cannot fail from the caller's point of view: if the target
/// view is gone the navigator drops the request.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
}

/// Route of a conversation view
pub fn conversation_path(conversation_id: &str) -> String {
    format!("/conversation/{conversation_id}")
}

// ============================================================================
// Arc implementations for trait objects
// ============================================================================

#[async_trait]
impl<T: WorkbenchApi + ?Sized> WorkbenchApi for Arc<T> {
    async fn get_assistant(&self, assistant_id: &str) -> Result<Assistant, ApiError> {
        (**self).get_assistant(assistant_id).await
    }

    async fn get_assistant_conversations(
        &self,
        assistant_id: &str,
    ) -> Result<Vec<Conversation>, ApiError> {
        (**self).get_assistant_conversations(assistant_id).await
    }

    async fn get_state_descriptions(
        &self,
        assistant_id: &str,
        conversation_id: &str,
    ) -> Result<Vec<StateDescription>, ApiError> {
        (**self)
            .get_state_descriptions(assistant_id, conversation_id)
            .await
    }

    async fn create_conversation_message(
        &self,
        conversation_id: &str,
        message: &NewMessage,
    ) -> Result<Message, ApiError> {
        (**self)
            .create_conversation_message(conversation_id, message)
            .await
    }

    async fn add_conversation_participant(
        &self,
        conversation_id: &str,
        participant_id: &str,
    ) -> Result<Participant, ApiError> {
        (**self)
            .add_conversation_participant(conversation_id, participant_id)
            .await
    }
}

impl<T: Navigator + ?Sized> Navigator for Arc<T> {
    fn navigate_to(&self, path: &str) {
        (**self).navigate_to(path);
    }
}

/// Navigator that only logs the route, for headless use
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate_to(&self, path: &str) {
        tracing::info!(path = %path, "Navigate");
    }
}
