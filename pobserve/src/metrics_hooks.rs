//! Metrics-based observability hooks for assistant turns.
//!
//! ```rust
//! use pchat::AssistantHooks;
//! use pobserve::MetricsAssistantHooks;
//!
//! fn accepts_hooks(_hooks: &dyn AssistantHooks) {}
//!
//! let hooks = MetricsAssistantHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use pchat::{AskPhase, AssistantError, AssistantHooks};
use pcommon::ThreadId;
use ptransport::Usage;

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsAssistantHooks;

impl AssistantHooks for MetricsAssistantHooks {
    fn on_turn_start(&self, _thread_id: &ThreadId) {
        metrics::counter!("parley_assistant_turn_start_total").increment(1);
    }

    fn on_thread_created(&self, _thread_id: &ThreadId) {
        metrics::counter!("parley_assistant_thread_created_total").increment(1);
    }

    fn on_turn_success(&self, _thread_id: &ThreadId, usage: &Usage, elapsed: Duration) {
        metrics::counter!("parley_assistant_turn_success_total").increment(1);
        metrics::histogram!(
            "parley_assistant_turn_duration_seconds",
            "outcome" => "success"
        )
        .record(elapsed.as_secs_f64());
        metrics::histogram!(
            "parley_assistant_turn_tokens",
            "kind" => "prompt"
        )
        .record(f64::from(usage.prompt_tokens));
        metrics::histogram!(
            "parley_assistant_turn_tokens",
            "kind" => "completion"
        )
        .record(f64::from(usage.completion_tokens));
        metrics::histogram!(
            "parley_assistant_turn_tokens",
            "kind" => "total"
        )
        .record(f64::from(usage.total_tokens));
    }

    fn on_turn_failure(
        &self,
        _thread_id: &ThreadId,
        phase: AskPhase,
        error: &AssistantError,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "parley_assistant_turn_failure_total",
            "phase" => phase.as_str(),
            "error_kind" => format!("{:?}", error.kind())
        )
        .increment(1);
        metrics::histogram!(
            "parley_assistant_turn_duration_seconds",
            "outcome" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}
