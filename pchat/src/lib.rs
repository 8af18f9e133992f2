//! Assistant orchestration over a model transport and a thread store.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use pchat::Assistant;
//! use pcommon::BoxFuture;
//! use pstore::InMemoryThreadStore;
//! use ptransport::{
//!     Message, Transport, TransportError, TransportRequest, TransportResponse, Usage,
//! };
//!
//! struct Echo;
//!
//! impl Transport for Echo {
//!     fn request<'a>(
//!         &'a self,
//!         request: TransportRequest,
//!     ) -> BoxFuture<'a, Result<TransportResponse, TransportError>> {
//!         Box::pin(async move {
//!             let last = request.messages.last().map(|m| m.content.clone()).unwrap_or_default();
//!             Ok(TransportResponse::new(Message::assistant(last), Usage::new(1, 1, 2)))
//!         })
//!     }
//! }
//!
//! # async fn demo() -> Result<(), pchat::AssistantError> {
//! let assistant = Assistant::new(
//!     "gpt-4o-mini",
//!     "You are a helpful assistant.",
//!     Arc::new(Echo),
//!     Arc::new(InMemoryThreadStore::new()),
//! );
//! let outcome = assistant.ask("t1", "ping").await?;
//! assert_eq!(outcome.reply, "ping");
//! assert_eq!(assistant.messages("t1").await?.len(), 3);
//! # Ok(())
//! # }
//! ```

mod assistant;
mod error;
mod hooks;
mod types;

pub mod prelude;

pub use assistant::{Assistant, AssistantBuilder, DEFAULT_SYSTEM_PROMPT};
pub use error::{AssistantBuildError, AssistantBuildErrorKind, AssistantError, AssistantErrorKind};
pub use hooks::{AssistantHooks, NoopAssistantHooks};
pub use types::{AskOutcome, AskPhase};
