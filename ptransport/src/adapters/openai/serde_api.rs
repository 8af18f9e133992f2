//! OpenAI HTTP payload serde models and conversion helpers.

use serde::{Deserialize, Serialize};

use crate::{Message, Role, TransportError, TransportRequest, TransportResponse, Usage};

pub(crate) fn build_api_request(request: TransportRequest) -> OpenAiApiRequest {
    OpenAiApiRequest {
        model: request.model,
        messages: request
            .messages
            .into_iter()
            .map(OpenAiApiMessage::from)
            .collect(),
    }
}

pub(crate) fn parse_response(body: &str) -> Result<TransportResponse, TransportError> {
    let parsed = serde_json::from_str::<OpenAiApiResponse>(body).map_err(|err| {
        TransportError::malformed_response(format!("failed to decode response: {err}"))
    })?;

    TransportResponse::try_from(parsed)
}

pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<OpenAiApiErrorEnvelope>(body).ok()?;
    Some(parsed.error.message)
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiErrorEnvelope {
    pub error: OpenAiApiError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiError {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct OpenAiApiRequest {
    pub model: String,
    pub messages: Vec<OpenAiApiMessage>,
}

#[derive(Debug, Serialize)]
pub(crate) struct OpenAiApiMessage {
    pub role: &'static str,
    pub content: String,
}

impl From<Message> for OpenAiApiMessage {
    fn from(value: Message) -> Self {
        Self {
            role: value.role.as_str(),
            content: value.content,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiResponse {
    #[serde(default)]
    pub choices: Vec<OpenAiApiChoice>,
    pub usage: Option<OpenAiApiUsage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiChoice {
    pub message: OpenAiApiReplyMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenAiApiReplyMessage {
    pub role: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OpenAiApiUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

impl TryFrom<OpenAiApiResponse> for TransportResponse {
    type Error = TransportError;

    fn try_from(value: OpenAiApiResponse) -> Result<Self, Self::Error> {
        let choice = value
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| TransportError::empty_response("no choices returned in the response"))?;

        let role = choice
            .message
            .role
            .as_deref()
            .and_then(|role| role.parse::<Role>().ok())
            .unwrap_or(Role::Assistant);
        let usage = value.usage.unwrap_or_default();

        Ok(Self {
            message: Message::new(role, choice.message.content.unwrap_or_default()),
            usage: Usage {
                prompt_tokens: usage.prompt_tokens,
                completion_tokens: usage.completion_tokens,
                total_tokens: usage.total_tokens,
            },
        })
    }
}
