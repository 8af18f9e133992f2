//! Common `pchat` imports for downstream crates.

pub use crate::{
    AskOutcome, AskPhase, Assistant, AssistantBuilder, AssistantError, AssistantErrorKind,
    AssistantHooks, NoopAssistantHooks,
};
pub use pcommon::ThreadId;
pub use ptransport::{Message, Role, Usage};
