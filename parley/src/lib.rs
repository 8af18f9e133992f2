//! Unified facade over the parley workspace crates.
//!
//! This crate is designed to be the single dependency for most applications.
//! It re-exports the assistant, transport, and store crates and adds
//! environment-driven configuration plus runtime builders.
//!
//! ```rust,no_run
//! use parley::{AssistantConfig, build_assistant};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let assistant = build_assistant(AssistantConfig::from_env()?)?;
//! let outcome = assistant.ask("support-42", "What is 2+2?").await?;
//! println!("{} ({} tokens)", outcome.reply, outcome.usage.total_tokens);
//! # Ok(())
//! # }
//! ```

mod config;
mod macros;

pub mod prelude;
pub mod runtime;
pub mod util;

pub use pchat;
pub use pcommon;
pub use pobserve;
pub use pstore;
pub use ptransport;

pub use config::{
    AssistantConfig, ConfigError, ConfigErrorKind, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_TIMEOUT, ENV_API_KEY, ENV_ENDPOINT, ENV_MODEL, ENV_SQLITE_PATH, ENV_STORE,
    ENV_SYSTEM_PROMPT, ENV_TIMEOUT_SECS,
};
pub use pchat::{
    AskOutcome, AskPhase, Assistant, AssistantBuildError, AssistantBuildErrorKind,
    AssistantBuilder, AssistantError, AssistantErrorKind, AssistantHooks, DEFAULT_SYSTEM_PROMPT,
    NoopAssistantHooks,
};
pub use pcommon::{BoxFuture, ThreadId};
pub use pobserve::{
    CompositeAssistantHooks, MetricsAssistantHooks, SafeAssistantHooks, TracingAssistantHooks,
};
pub use pstore::{
    InMemoryThreadStore, SqliteThreadStore, StoreError, StoreErrorKind, ThreadStore,
    ThreadStoreConfig, create_default_thread_store, create_thread_store,
};
pub use ptransport::{
    Message, Role, SecretString, Transport, TransportError, TransportErrorKind, TransportRequest,
    TransportResponse, Usage,
};

#[cfg(feature = "transport-openai")]
pub use ptransport::adapters::openai::OpenAiHttpTransport;

#[cfg(feature = "transport-openai")]
pub use runtime::{build_assistant, build_assistant_with_hooks, build_transport};
pub use runtime::{assistant_with, build_assistant_with_transport, default_hooks, in_memory_store};
pub use util::{assistant_message, parse_thread_store, system_message, thread, user_message};

#[cfg(test)]
mod tests {
    use crate::{Role, parley_messages, parley_msg};

    #[test]
    fn macros_build_messages() {
        let single = parley_msg!(user => "hello");
        assert_eq!(single.role, Role::User);

        let empty = parley_messages![];
        assert!(empty.is_empty());

        let thread = parley_messages![system => "s", user => "u"];
        assert_eq!(thread[1].content, "u");
    }

    #[test]
    fn default_endpoint_matches_openai_adapter() {
        #[cfg(feature = "transport-openai")]
        assert_eq!(
            crate::DEFAULT_ENDPOINT,
            ptransport::adapters::openai::DEFAULT_OPENAI_ENDPOINT
        );
    }
}
