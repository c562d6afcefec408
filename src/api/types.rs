//! Workbench service resource types
//!
//! Only the fields this crate reads are modeled; unknown fields are
//! ignored on decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inspector id reserved for the assistant configuration view
pub const CONFIG_STATE_ID: &str = "config";

/// An assistant as returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assistant {
    pub id: String,
    pub name: String,
}

/// A conversation as returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub created_datetime: Option<DateTime<Utc>>,
}

/// A participant record returned after joining a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
}

/// Description of one inspector an assistant exposes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDescription {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
}

impl StateDescription {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: String::new(),
        }
    }

    /// Whether this is the reserved `config` inspector
    pub fn is_config(&self) -> bool {
        self.id == CONFIG_STATE_ID
    }
}

/// Conversation message kinds understood by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    Chat,
    Notice,
    Note,
    Command,
    CommandResponse,
    Log,
}

/// Request body for posting a conversation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMessage {
    pub content: String,
    pub message_type: MessageType,
}

impl NewMessage {
    pub fn notice(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            message_type: MessageType::Notice,
        }
    }
}

/// A conversation message as acknowledged by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub message_type: MessageType,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// The signed-in user driving this client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalUser {
    pub id: String,
    pub name: String,
}

/// List envelope used by the service for conversation listings
#[derive(Debug, Deserialize)]
pub(crate) struct ConversationList {
    pub conversations: Vec<Conversation>,
}

/// List envelope used by the service for inspector listings
#[derive(Debug, Deserialize)]
pub(crate) struct StateDescriptionList {
    pub states: Vec<StateDescription>,
}
