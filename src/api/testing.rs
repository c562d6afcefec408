//! Mock implementations for testing
//!
//! The workbench mock and the navigator share one call log so tests can
//! assert the global order of side effects.

use super::*;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ============================================================================
// Call log
// ============================================================================

/// One observed side effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetAssistant(String),
    GetConversations(String),
    GetStates {
        assistant_id: String,
        conversation_id: String,
    },
    CreateMessage {
        conversation_id: String,
        content: String,
        message_type: MessageType,
    },
    AddParticipant {
        conversation_id: String,
        participant_id: String,
    },
    Navigate(String),
}

/// Shared, ordered record of calls
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }
}

// ============================================================================
// Mock workbench
// ============================================================================

/// In-memory workbench service with injectable failures
#[derive(Default)]
pub struct MockWorkbench {
    log: CallLog,
    assistants: HashMap<String, Assistant>,
    conversations: HashMap<String, Vec<Conversation>>,
    states: HashMap<String, Vec<StateDescription>>,
    /// Failures keyed by the zero-based index of the message post
    message_failures: Mutex<HashMap<usize, ApiError>>,
    message_count: Mutex<usize>,
    participant_failure: Mutex<Option<ApiError>>,
    conversations_failure: Option<ApiError>,
}

impl MockWorkbench {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    pub fn with_assistant(mut self, id: &str, name: &str) -> Self {
        self.assistants.insert(
            id.to_string(),
            Assistant {
                id: id.to_string(),
                name: name.to_string(),
            },
        );
        self
    }

    pub fn with_conversation(mut self, assistant_id: &str, id: &str, title: &str) -> Self {
        self.conversations
            .entry(assistant_id.to_string())
            .or_default()
            .push(Conversation {
                id: id.to_string(),
                title: title.to_string(),
                created_datetime: None,
            });
        self
    }

    pub fn with_states(mut self, assistant_id: &str, states: Vec<StateDescription>) -> Self {
        self.states.insert(assistant_id.to_string(), states);
        self
    }

    pub fn with_conversations_failure(mut self, error: ApiError) -> Self {
        self.conversations_failure = Some(error);
        self
    }

    /// Fail the `index`-th message post (zero-based)
    pub fn fail_message(&self, index: usize, error: ApiError) {
        self.message_failures.lock().unwrap().insert(index, error);
    }

    pub fn fail_participant(&self, error: ApiError) {
        *self.participant_failure.lock().unwrap() = Some(error);
    }

    pub fn log(&self) -> &CallLog {
        &self.log
    }
}

#[async_trait]
impl WorkbenchApi for MockWorkbench {
    async fn get_assistant(&self, assistant_id: &str) -> Result<Assistant, ApiError> {
        self.log.push(Call::GetAssistant(assistant_id.to_string()));
        self.assistants
            .get(assistant_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("assistant {assistant_id}")))
    }

    async fn get_assistant_conversations(
        &self,
        assistant_id: &str,
    ) -> Result<Vec<Conversation>, ApiError> {
        self.log.push(Call::GetConversations(assistant_id.to_string()));
        if let Some(error) = &self.conversations_failure {
            return Err(error.clone());
        }
        Ok(self
            .conversations
            .get(assistant_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_state_descriptions(
        &self,
        assistant_id: &str,
        conversation_id: &str,
    ) -> Result<Vec<StateDescription>, ApiError> {
        self.log.push(Call::GetStates {
            assistant_id: assistant_id.to_string(),
            conversation_id: conversation_id.to_string(),
        });
        Ok(self.states.get(assistant_id).cloned().unwrap_or_default())
    }

    async fn create_conversation_message(
        &self,
        conversation_id: &str,
        message: &NewMessage,
    ) -> Result<Message, ApiError> {
        self.log.push(Call::CreateMessage {
            conversation_id: conversation_id.to_string(),
            content: message.content.clone(),
            message_type: message.message_type,
        });

        let index = {
            let mut count = self.message_count.lock().unwrap();
            let index = *count;
            *count += 1;
            index
        };
        if let Some(error) = self.message_failures.lock().unwrap().remove(&index) {
            return Err(error);
        }

        Ok(Message {
            id: uuid::Uuid::new_v4().to_string(),
            content: message.content.clone(),
            message_type: message.message_type,
            timestamp: Some(chrono::Utc::now()),
        })
    }

    async fn add_conversation_participant(
        &self,
        conversation_id: &str,
        participant_id: &str,
    ) -> Result<Participant, ApiError> {
        self.log.push(Call::AddParticipant {
            conversation_id: conversation_id.to_string(),
            participant_id: participant_id.to_string(),
        });
        if let Some(error) = self.participant_failure.lock().unwrap().take() {
            return Err(error);
        }
        Ok(Participant {
            id: participant_id.to_string(),
            name: self
                .assistants
                .get(participant_id)
                .map(|a| a.name.clone())
                .unwrap_or_default(),
            role: "assistant".to_string(),
        })
    }
}

// ============================================================================
// Recording navigator
// ============================================================================

/// Navigator that records routes into the shared log
#[derive(Debug, Clone)]
pub struct RecordingNavigator {
    log: CallLog,
}

impl RecordingNavigator {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.log.push(Call::Navigate(path.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_workbench_not_found() {
        let mock = MockWorkbench::new(CallLog::default()).with_assistant("a1", "Helper");

        assert_eq!(mock.get_assistant("a1").await.unwrap().name, "Helper");
        let err = mock.get_assistant("missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            mock.log().calls(),
            vec![
                Call::GetAssistant("a1".to_string()),
                Call::GetAssistant("missing".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_mock_workbench_message_failure_is_one_shot() {
        let mock = MockWorkbench::new(CallLog::default());
        mock.fail_message(1, ApiError::network("offline"));

        let notice = NewMessage::notice("hello");
        assert!(mock.create_conversation_message("c1", &notice).await.is_ok());
        assert!(mock.create_conversation_message("c1", &notice).await.is_err());
        assert!(mock.create_conversation_message("c1", &notice).await.is_ok());
    }

    #[test]
    fn test_navigator_shares_log() {
        let log = CallLog::default();
        let nav = RecordingNavigator::new(log.clone());
        nav.navigate_to("/conversation/c1");
        assert_eq!(log.calls(), vec![Call::Navigate("/conversation/c1".to_string())]);
    }
}
