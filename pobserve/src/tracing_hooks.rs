//! Tracing-based observability hooks for assistant turns.
//!
//! ```rust
//! use pchat::AssistantHooks;
//! use pobserve::TracingAssistantHooks;
//!
//! fn accepts_hooks(_hooks: &dyn AssistantHooks) {}
//!
//! let hooks = TracingAssistantHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use pchat::{AskPhase, AssistantError, AssistantHooks};
use pcommon::ThreadId;
use ptransport::Usage;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAssistantHooks;

impl AssistantHooks for TracingAssistantHooks {
    fn on_turn_start(&self, thread_id: &ThreadId) {
        tracing::info!(
            phase = "assistant",
            event = "turn_start",
            thread_id = %thread_id
        );
    }

    fn on_thread_created(&self, thread_id: &ThreadId) {
        tracing::info!(
            phase = "assistant",
            event = "thread_created",
            thread_id = %thread_id
        );
    }

    fn on_turn_success(&self, thread_id: &ThreadId, usage: &Usage, elapsed: Duration) {
        tracing::info!(
            phase = "assistant",
            event = "turn_success",
            thread_id = %thread_id,
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            total_tokens = usage.total_tokens,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_turn_failure(
        &self,
        thread_id: &ThreadId,
        phase: AskPhase,
        error: &AssistantError,
        elapsed: Duration,
    ) {
        tracing::error!(
            phase = "assistant",
            event = "turn_failure",
            thread_id = %thread_id,
            failed_phase = phase.as_str(),
            error_kind = ?error.kind(),
            elapsed_ms = elapsed.as_millis() as u64,
            error = %error
        );
    }
}
