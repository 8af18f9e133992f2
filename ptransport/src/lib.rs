//! Remote model transport contracts, shared message types, and HTTP adapters.
//!
//! ```rust
//! use ptransport::{Message, Role, TransportRequest, Usage};
//!
//! let request = TransportRequest::new(
//!     "gpt-4o-mini",
//!     vec![
//!         Message::new(Role::System, "You are a helpful assistant."),
//!         Message::new(Role::User, "What is 2+2?"),
//!     ],
//! );
//! assert!(request.validate().is_ok());
//! assert_eq!(Usage::default().total_tokens, 0);
//! ```

pub mod adapters;

mod credentials;
mod error;
mod model;
mod transport;

pub mod prelude;

pub use credentials::SecretString;
pub use error::{TransportError, TransportErrorKind};
pub use model::{Message, Role, TransportRequest, TransportResponse, UnknownRole, Usage};
pub use pcommon::BoxFuture;
pub use transport::Transport;

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Default)]
    struct EchoTransport {
        requests: Mutex<Vec<TransportRequest>>,
    }

    impl Transport for EchoTransport {
        fn request<'a>(
            &'a self,
            request: TransportRequest,
        ) -> BoxFuture<'a, Result<TransportResponse, TransportError>> {
            Box::pin(async move {
                request.validate()?;
                let last = request
                    .messages
                    .last()
                    .map(|message| message.content.clone())
                    .unwrap_or_default();
                self.requests.lock().expect("requests lock").push(request);

                Ok(TransportResponse::new(
                    Message::assistant(format!("echo: {last}")),
                    Usage::new(3, 2, 5),
                ))
            })
        }
    }

    #[test]
    fn role_spelling_round_trips_through_from_str() {
        for role in [Role::System, Role::User, Role::Assistant] {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
            assert_eq!(role.to_string(), role.as_str());
        }

        let error = "tool".parse::<Role>().expect_err("tool is not a thread role");
        assert_eq!(error, UnknownRole("tool".to_string()));
    }

    #[test]
    fn message_serializes_with_lowercase_role() {
        let message = Message::user("What is 2+2?");
        let json = serde_json::to_string(&message).expect("message should serialize");
        assert_eq!(json, r#"{"role":"user","content":"What is 2+2?"}"#);
    }

    #[test]
    fn request_validate_enforces_contract() {
        let empty_model = TransportRequest::new("  ", vec![Message::user("hi")]);
        let err = empty_model.validate().expect_err("empty model must fail");
        assert_eq!(err.kind, TransportErrorKind::InvalidRequest);

        let empty_messages = TransportRequest::new("gpt-4o-mini", Vec::new());
        let err = empty_messages
            .validate()
            .expect_err("empty messages must fail");
        assert_eq!(err.kind, TransportErrorKind::InvalidRequest);
    }

    #[test]
    fn status_classification_keeps_status_code() {
        let cases = [
            (401, TransportErrorKind::Authentication),
            (403, TransportErrorKind::Authentication),
            (429, TransportErrorKind::RateLimited),
            (408, TransportErrorKind::Timeout),
            (504, TransportErrorKind::Timeout),
            (400, TransportErrorKind::InvalidRequest),
            (422, TransportErrorKind::InvalidRequest),
            (502, TransportErrorKind::Unavailable),
            (503, TransportErrorKind::Unavailable),
            (500, TransportErrorKind::Status),
            (418, TransportErrorKind::Status),
        ];

        for (status, kind) in cases {
            let error = TransportError::from_status(status, "failed");
            assert_eq!(error.kind, kind, "status {status}");
            assert_eq!(error.status, Some(status));
        }

        assert_eq!(
            TransportError::from_status(500, "boom").to_string(),
            "Status (status 500): boom"
        );
        assert_eq!(TransportError::timeout("slow").to_string(), "Timeout: slow");
    }

    #[tokio::test]
    async fn transport_trait_is_object_safe_and_returns_usage() {
        let transport: std::sync::Arc<dyn Transport> =
            std::sync::Arc::new(EchoTransport::default());

        let response = transport
            .request(TransportRequest::new("gpt", vec![Message::user("ping")]))
            .await
            .expect("request should succeed");

        assert_eq!(response.message, Message::assistant("echo: ping"));
        assert_eq!(response.usage, Usage::new(3, 2, 5));

        let err = transport
            .request(TransportRequest::new("gpt", Vec::new()))
            .await
            .expect_err("invalid request should fail");
        assert_eq!(err.kind, TransportErrorKind::InvalidRequest);
    }
}
