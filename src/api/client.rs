//! HTTP implementation of the workbench API

use super::types::{ConversationList, StateDescriptionList};
use super::{
    ApiError, Assistant, Conversation, Message, NewMessage, Participant, StateDescription,
    WorkbenchApi,
};
use crate::config::WorkbenchConfig;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Instant;
use uuid::Uuid;

const USER_ID_HEADER: &str = "X-User-Id";
const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Workbench service client over HTTP/JSON
#[derive(Clone)]
pub struct HttpWorkbenchClient {
    client: Client,
    base_url: String,
    user_id: String,
}

impl HttpWorkbenchClient {
    pub fn new(config: &WorkbenchConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_id: config.user.id.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request and decode the JSON body, mapping 404 to `NotFound`
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        resource: &str,
    ) -> Result<T, ApiError> {
        let request_id = Uuid::new_v4();
        let start = Instant::now();
        let result = self
            .send_inner(request.header(REQUEST_ID_HEADER, request_id.to_string()), resource)
            .await;
        let duration = start.elapsed();

        match &result {
            Ok(_) => tracing::info!(
                request_id = %request_id,
                resource = %resource,
                duration_ms = %duration.as_millis(),
                "Workbench request completed"
            ),
            Err(e) => tracing::error!(
                request_id = %request_id,
                resource = %resource,
                duration_ms = %duration.as_millis(),
                error = %e,
                "Workbench request failed"
            ),
        }

        result
    }

    async fn send_inner<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        resource: &str,
    ) -> Result<T, ApiError> {
        let response = request.header(USER_ID_HEADER, &self.user_id).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::not_found(resource));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::status(status.as_u16(), body));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl WorkbenchApi for HttpWorkbenchClient {
    async fn get_assistant(&self, assistant_id: &str) -> Result<Assistant, ApiError> {
        let request = self.client.get(self.url(&format!("/assistants/{assistant_id}")));
        self.send(request, &format!("assistant {assistant_id}")).await
    }

    async fn get_assistant_conversations(
        &self,
        assistant_id: &str,
    ) -> Result<Vec<Conversation>, ApiError> {
        let request = self
            .client
            .get(self.url(&format!("/assistants/{assistant_id}/conversations")));
        let list: ConversationList = self
            .send(request, &format!("conversations of assistant {assistant_id}"))
            .await?;
        Ok(list.conversations)
    }

    async fn get_state_descriptions(
        &self,
        assistant_id: &str,
        conversation_id: &str,
    ) -> Result<Vec<StateDescription>, ApiError> {
        let request = self.client.get(self.url(&format!(
            "/assistants/{assistant_id}/conversations/{conversation_id}/states"
        )));
        let list: StateDescriptionList = self
            .send(request, &format!("inspectors of assistant {assistant_id}"))
            .await?;
        Ok(list.states)
    }

    async fn create_conversation_message(
        &self,
        conversation_id: &str,
        message: &NewMessage,
    ) -> Result<Message, ApiError> {
        let request = self
            .client
            .post(self.url(&format!("/conversations/{conversation_id}/messages")))
            .json(message);
        self.send(request, &format!("conversation {conversation_id}"))
            .await
    }

    async fn add_conversation_participant(
        &self,
        conversation_id: &str,
        participant_id: &str,
    ) -> Result<Participant, ApiError> {
        let request = self
            .client
            .put(self.url(&format!(
                "/conversations/{conversation_id}/participants/{participant_id}"
            )))
            .json(&serde_json::json!({}));
        self.send(request, &format!("conversation {conversation_id}"))
            .await
    }
}
