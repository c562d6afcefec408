//! Assistant editor view-model
//!
//! Loads what the assistant editing view needs, opens the assistant's
//! inspectors on the canvas, and runs the conversation bootstrap when the
//! user creates a conversation from it.

use crate::api::{
    ApiError, Assistant, Conversation, LocalUser, Navigator, StateDescription, WorkbenchApi,
};
use crate::bootstrap::{BootstrapError, ConversationBootstrap};
use crate::canvas::{CanvasController, CanvasTarget};
use thiserror::Error;

/// Failures that replace the editor view with an error presentation
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Assistant not found: {assistant_id}")]
    NotFound { assistant_id: String },
    #[error("Failed to load assistant data: {payload}")]
    Load { payload: String },
}

impl EditorError {
    /// Wrap a load failure, carrying the serialized error payload
    fn load(error: &ApiError) -> Self {
        let payload = serde_json::to_string(error).unwrap_or_else(|_| error.to_string());
        Self::Load { payload }
    }
}

pub struct AssistantEditor<A, N>
where
    A: WorkbenchApi + Clone,
    N: Navigator,
{
    api: A,
    assistant: Assistant,
    conversations: Vec<Conversation>,
    bootstrap: ConversationBootstrap<A, N>,
}

impl<A, N> AssistantEditor<A, N>
where
    A: WorkbenchApi + Clone,
    N: Navigator,
{
    /// Load the assistant and its conversations
    pub async fn load(
        api: A,
        navigator: N,
        user: LocalUser,
        assistant_id: &str,
    ) -> Result<Self, EditorError> {
        let (assistant, conversations) = futures::join!(
            api.get_assistant(assistant_id),
            api.get_assistant_conversations(assistant_id)
        );

        let assistant = match assistant {
            Ok(assistant) => assistant,
            Err(e) if e.is_not_found() => {
                tracing::warn!(assistant_id = %assistant_id, "Assistant not found");
                return Err(EditorError::NotFound {
                    assistant_id: assistant_id.to_string(),
                });
            }
            Err(e) => return Err(EditorError::load(&e)),
        };
        let conversations = conversations.map_err(|e| EditorError::load(&e))?;

        tracing::info!(
            assistant_id = %assistant.id,
            conversations = conversations.len(),
            "Assistant loaded"
        );

        let bootstrap = ConversationBootstrap::new(api.clone(), navigator, user, assistant.clone());
        Ok(Self {
            api,
            assistant,
            conversations,
            bootstrap,
        })
    }

    pub fn assistant(&self) -> &Assistant {
        &self.assistant
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Load the assistant's inspectors for `conversation_id` and open them
    /// on the canvas
    pub async fn open_inspectors(
        &self,
        controller: &mut CanvasController,
        conversation_id: &str,
    ) -> Result<Vec<StateDescription>, EditorError> {
        let descriptions = self
            .api
            .get_state_descriptions(&self.assistant.id, conversation_id)
            .await
            .map_err(|e| EditorError::load(&e))?;

        controller.register_inspectors(&self.assistant.id, &descriptions);
        controller.transition_to_state(&CanvasTarget::assistant(self.assistant.id.clone()));
        Ok(descriptions)
    }

    /// Run the bootstrap for a conversation the user just created
    pub async fn on_conversation_create(
        &mut self,
        conversation: Conversation,
    ) -> Result<(), BootstrapError> {
        self.bootstrap.on_conversation_create(&conversation).await?;
        if !self.conversations.iter().any(|c| c.id == conversation.id) {
            self.conversations.push(conversation);
        }
        Ok(())
    }
}
