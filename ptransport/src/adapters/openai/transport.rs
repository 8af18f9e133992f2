//! reqwest-based HTTP implementation of the OpenAI chat completions call.

use pcommon::BoxFuture;
use reqwest::{Client, Response};

use crate::{SecretString, Transport, TransportError, TransportRequest, TransportResponse};

use super::serde_api::{build_api_request, extract_error_message, parse_response};

pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Debug, Clone)]
pub struct OpenAiHttpTransport {
    client: Client,
    endpoint: String,
    api_key: SecretString,
}

impl OpenAiHttpTransport {
    pub fn new(client: Client, api_key: impl Into<SecretString>) -> Self {
        Self {
            client,
            endpoint: DEFAULT_OPENAI_ENDPOINT.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Overrides the full chat completions URL, e.g. for a compatible gateway.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn parse_error(response: Response) -> TransportError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body)
            .unwrap_or_else(|| format!("http request error, status {status}"));

        TransportError::from_status(status, message)
    }
}

impl Transport for OpenAiHttpTransport {
    fn request<'a>(
        &'a self,
        request: TransportRequest,
    ) -> BoxFuture<'a, Result<TransportResponse, TransportError>> {
        Box::pin(async move {
            request.validate()?;
            if self.api_key.is_empty() {
                return Err(TransportError::authentication("no OpenAI API key configured"));
            }

            let api_request = build_api_request(request);
            let response = self
                .client
                .post(&self.endpoint)
                .bearer_auth(self.api_key.expose())
                .json(&api_request)
                .send()
                .await
                .map_err(|err| {
                    if err.is_timeout() {
                        TransportError::timeout(format!("http request timed out: {err}"))
                    } else {
                        TransportError::connection(format!("http request failed: {err}"))
                    }
                })?;

            if !response.status().is_success() {
                return Err(Self::parse_error(response).await);
            }

            let body = response.text().await.map_err(|err| {
                TransportError::malformed_response(format!("failed to read response body: {err}"))
            })?;

            parse_response(&body)
        })
    }
}
