//! Hook contracts for observing assistant turns.
//!
//! ```rust
//! use pchat::{AssistantHooks, NoopAssistantHooks};
//!
//! fn accepts_hooks(_hooks: &dyn AssistantHooks) {}
//!
//! let hooks = NoopAssistantHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use pcommon::ThreadId;
use ptransport::Usage;

use crate::{AskPhase, AssistantError};

pub trait AssistantHooks: Send + Sync {
    fn on_turn_start(&self, _thread_id: &ThreadId) {}

    /// Fires once the store has created the thread, before the system prompt
    /// is seeded, so a thread whose seed later fails is still reported.
    fn on_thread_created(&self, _thread_id: &ThreadId) {}

    fn on_turn_success(&self, _thread_id: &ThreadId, _usage: &Usage, _elapsed: Duration) {}

    fn on_turn_failure(
        &self,
        _thread_id: &ThreadId,
        _phase: AskPhase,
        _error: &AssistantError,
        _elapsed: Duration,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAssistantHooks;

impl AssistantHooks for NoopAssistantHooks {}
