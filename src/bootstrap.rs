//! Conversation bootstrap sequencer
//!
//! When a conversation is created from the assistant editor, the assistant
//! is attached to it in a fixed order: two narrative notices first, then the
//! participant join, then navigation. The plan is built as data so the
//! order can be inspected and tested independently of execution.

use crate::api::{
    conversation_path, ApiError, Assistant, Conversation, LocalUser, Navigator, NewMessage,
    WorkbenchApi,
};
use std::fmt;
use thiserror::Error;

/// Conceptual step names, used in errors and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CreateNotice,
    AttachNotice,
    ParticipantAdd,
    Navigate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::CreateNotice => "create-notice",
            Stage::AttachNotice => "attach-notice",
            Stage::ParticipantAdd => "participant-add",
            Stage::Navigate => "navigate",
        };
        f.write_str(name)
    }
}

/// One side effect of the bootstrap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapStep {
    PostNotice {
        stage: Stage,
        conversation_id: String,
        content: String,
    },
    AddParticipant {
        conversation_id: String,
        participant_id: String,
    },
    Navigate {
        path: String,
    },
}

impl BootstrapStep {
    pub fn stage(&self) -> Stage {
        match self {
            BootstrapStep::PostNotice { stage, .. } => *stage,
            BootstrapStep::AddParticipant { .. } => Stage::ParticipantAdd,
            BootstrapStep::Navigate { .. } => Stage::Navigate,
        }
    }
}

/// A bootstrap step failed; the steps after it were not run
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Conversation bootstrap failed at {stage}: {source}")]
    StepFailed {
        stage: Stage,
        #[source]
        source: ApiError,
    },
}

impl BootstrapError {
    pub fn stage(&self) -> Stage {
        match self {
            BootstrapError::StepFailed { stage, .. } => *stage,
        }
    }
}

/// Build the ordered steps that attach `assistant` to `conversation`
pub fn plan(
    user: &LocalUser,
    assistant: &Assistant,
    conversation: &Conversation,
) -> Vec<BootstrapStep> {
    vec![
        BootstrapStep::PostNotice {
            stage: Stage::CreateNotice,
            conversation_id: conversation.id.clone(),
            content: format!("{} created conversation", user.name),
        },
        BootstrapStep::PostNotice {
            stage: Stage::AttachNotice,
            conversation_id: conversation.id.clone(),
            content: format!("{} added to conversation", assistant.name),
        },
        BootstrapStep::AddParticipant {
            conversation_id: conversation.id.clone(),
            participant_id: assistant.id.clone(),
        },
        BootstrapStep::Navigate {
            path: conversation_path(&conversation.id),
        },
    ]
}

/// Runs bootstrap plans against the workbench service
pub struct ConversationBootstrap<A, N>
where
    A: WorkbenchApi,
    N: Navigator,
{
    api: A,
    navigator: N,
    user: LocalUser,
    assistant: Assistant,
}

impl<A, N> ConversationBootstrap<A, N>
where
    A: WorkbenchApi,
    N: Navigator,
{
    pub fn new(api: A, navigator: N, user: LocalUser, assistant: Assistant) -> Self {
        Self {
            api,
            navigator,
            user,
            assistant,
        }
    }

    /// Attach the assistant to a freshly created conversation
    ///
    /// Each step completes before the next starts. The first failure stops
    /// the sequence; steps already done are left in place.
    pub async fn on_conversation_create(
        &self,
        conversation: &Conversation,
    ) -> Result<(), BootstrapError> {
        tracing::info!(
            conversation_id = %conversation.id,
            assistant_id = %self.assistant.id,
            "Bootstrapping conversation"
        );

        for step in plan(&self.user, &self.assistant, conversation) {
            let stage = step.stage();
            if let Err(source) = self.execute(step).await {
                tracing::error!(
                    conversation_id = %conversation.id,
                    stage = %stage,
                    error = %source,
                    "Bootstrap step failed"
                );
                return Err(BootstrapError::StepFailed { stage, source });
            }
            tracing::debug!(conversation_id = %conversation.id, stage = %stage, "Bootstrap step done");
        }

        Ok(())
    }

    async fn execute(&self, step: BootstrapStep) -> Result<(), ApiError> {
        match step {
            BootstrapStep::PostNotice {
                conversation_id,
                content,
                ..
            } => {
                self.api
                    .create_conversation_message(&conversation_id, &NewMessage::notice(content))
                    .await?;
            }
            BootstrapStep::AddParticipant {
                conversation_id,
                participant_id,
            } => {
                self.api
                    .add_conversation_participant(&conversation_id, &participant_id)
                    .await?;
            }
            BootstrapStep::Navigate { path } => self.navigator.navigate_to(&path),
        }
        Ok(())
    }
}
