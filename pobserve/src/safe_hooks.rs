use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::Duration;

use pchat::{AskPhase, AssistantError, AssistantHooks};
use pcommon::ThreadId;
use ptransport::Usage;

/// Wraps hooks so a panicking observer cannot abort an assistant turn.
pub struct SafeAssistantHooks<H> {
    inner: H,
}

impl<H> SafeAssistantHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> AssistantHooks for SafeAssistantHooks<H>
where
    H: AssistantHooks,
{
    fn on_turn_start(&self, thread_id: &ThreadId) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_turn_start(thread_id)));
    }

    fn on_thread_created(&self, thread_id: &ThreadId) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_thread_created(thread_id)
        }));
    }

    fn on_turn_success(&self, thread_id: &ThreadId, usage: &Usage, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_turn_success(thread_id, usage, elapsed)
        }));
    }

    fn on_turn_failure(
        &self,
        thread_id: &ThreadId,
        phase: AskPhase,
        error: &AssistantError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_turn_failure(thread_id, phase, error, elapsed)
        }));
    }
}

/// Fans every callback out to each registered hook, in registration order.
#[derive(Default, Clone)]
pub struct CompositeAssistantHooks {
    hooks: Vec<Arc<dyn AssistantHooks>>,
}

impl CompositeAssistantHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, hooks: Arc<dyn AssistantHooks>) -> Self {
        self.hooks.push(hooks);
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl AssistantHooks for CompositeAssistantHooks {
    fn on_turn_start(&self, thread_id: &ThreadId) {
        for hooks in &self.hooks {
            hooks.on_turn_start(thread_id);
        }
    }

    fn on_thread_created(&self, thread_id: &ThreadId) {
        for hooks in &self.hooks {
            hooks.on_thread_created(thread_id);
        }
    }

    fn on_turn_success(&self, thread_id: &ThreadId, usage: &Usage, elapsed: Duration) {
        for hooks in &self.hooks {
            hooks.on_turn_success(thread_id, usage, elapsed);
        }
    }

    fn on_turn_failure(
        &self,
        thread_id: &ThreadId,
        phase: AskPhase,
        error: &AssistantError,
        elapsed: Duration,
    ) {
        for hooks in &self.hooks {
            hooks.on_turn_failure(thread_id, phase, error, elapsed);
        }
    }
}
