//! Common imports for applications built on parley.

pub use crate::{
    AskOutcome, Assistant, AssistantConfig, AssistantError, AssistantHooks, ConfigError, Message,
    Role, ThreadId, ThreadStore, ThreadStoreConfig, Transport, Usage, assistant_with,
    in_memory_store, parley_messages, parley_msg,
};

#[cfg(feature = "transport-openai")]
pub use crate::{build_assistant, build_transport};
