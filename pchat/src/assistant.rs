//! Thread-aware assistant turn orchestration.

use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use pcommon::ThreadId;
use pstore::ThreadStore;
use ptransport::{Message, Transport, TransportRequest, Usage};

use crate::{
    AskOutcome, AskPhase, AssistantBuildError, AssistantError, AssistantHooks, NoopAssistantHooks,
};

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Runs conversation turns against a remote model, keeping each thread's
/// history in a [`ThreadStore`].
///
/// A thread is created and seeded with the system prompt the first time its
/// id is seen. Every turn appends the user message before calling the model
/// and appends the reply afterwards, so the store always reflects what was
/// actually sent.
pub struct Assistant {
    model: String,
    system_prompt: String,
    transport: Arc<dyn Transport>,
    threads: Arc<dyn ThreadStore>,
    hooks: Arc<dyn AssistantHooks>,
    last_usage: Mutex<Usage>,
}

struct TurnFailure {
    phase: AskPhase,
    error: AssistantError,
}

fn failed_at<E>(phase: AskPhase) -> impl FnOnce(E) -> TurnFailure
where
    E: Into<AssistantError>,
{
    move |error| TurnFailure {
        phase,
        error: error.into(),
    }
}

impl Assistant {
    pub fn new(
        model: impl Into<String>,
        system_prompt: impl Into<String>,
        transport: Arc<dyn Transport>,
        threads: Arc<dyn ThreadStore>,
    ) -> Self {
        Self {
            model: model.into(),
            system_prompt: system_prompt.into(),
            transport,
            threads,
            hooks: Arc::new(NoopAssistantHooks),
            last_usage: Mutex::new(Usage::default()),
        }
    }

    pub fn builder(
        transport: Arc<dyn Transport>,
        threads: Arc<dyn ThreadStore>,
    ) -> AssistantBuilder {
        AssistantBuilder::new(transport, threads)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Sends `text` on `thread_id` and stores the reply.
    ///
    /// Errors from the store or transport are returned unchanged. A failed
    /// turn may leave the thread partially advanced; nothing is rolled back.
    pub async fn ask(
        &self,
        thread_id: impl Into<ThreadId>,
        text: impl Into<String>,
    ) -> Result<AskOutcome, AssistantError> {
        let thread_id = thread_id.into();
        let started = Instant::now();
        self.hooks.on_turn_start(&thread_id);

        match self.run_turn(&thread_id, text.into()).await {
            Ok(outcome) => {
                self.hooks
                    .on_turn_success(&thread_id, &outcome.usage, started.elapsed());
                Ok(outcome)
            }
            Err(TurnFailure { phase, error }) => {
                self.hooks
                    .on_turn_failure(&thread_id, phase, &error, started.elapsed());
                Err(error)
            }
        }
    }

    pub async fn messages(
        &self,
        thread_id: impl Into<ThreadId>,
    ) -> Result<Vec<Message>, AssistantError> {
        let thread_id = thread_id.into();
        Ok(self.threads.load_messages(&thread_id).await?)
    }

    /// Usage of the most recent successful transport call, zero before any.
    pub fn usage(&self) -> Usage {
        match self.last_usage.lock() {
            Ok(usage) => *usage,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    async fn run_turn(
        &self,
        thread_id: &ThreadId,
        text: String,
    ) -> Result<AskOutcome, TurnFailure> {
        self.ensure_thread(thread_id).await?;

        self.threads
            .append_message(thread_id, Message::user(text))
            .await
            .map_err(failed_at(AskPhase::AppendUserMessage))?;

        let history = self
            .threads
            .load_messages(thread_id)
            .await
            .map_err(failed_at(AskPhase::LoadHistory))?;

        let response = self
            .transport
            .request(TransportRequest::new(self.model.clone(), history))
            .await
            .map_err(failed_at(AskPhase::Transport))?;

        let usage = response.usage;
        self.record_usage(usage);

        let reply = response.message.content;
        self.threads
            .append_message(thread_id, Message::assistant(reply.clone()))
            .await
            .map_err(failed_at(AskPhase::AppendReply))?;

        Ok(AskOutcome { reply, usage })
    }

    async fn ensure_thread(&self, thread_id: &ThreadId) -> Result<(), TurnFailure> {
        let exists = self
            .threads
            .thread_exists(thread_id)
            .await
            .map_err(failed_at(AskPhase::ExistenceCheck))?;
        if exists {
            return Ok(());
        }

        self.threads
            .create_thread(thread_id)
            .await
            .map_err(failed_at(AskPhase::CreateThread))?;
        self.hooks.on_thread_created(thread_id);

        self.threads
            .append_message(thread_id, Message::system(self.system_prompt.clone()))
            .await
            .map_err(failed_at(AskPhase::SeedSystemPrompt))?;
        Ok(())
    }

    fn record_usage(&self, usage: Usage) {
        match self.last_usage.lock() {
            Ok(mut last) => *last = usage,
            Err(poisoned) => *poisoned.into_inner() = usage,
        }
    }
}

impl Debug for Assistant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("model", &self.model)
            .field("system_prompt", &self.system_prompt)
            .field("usage", &self.usage())
            .finish_non_exhaustive()
    }
}

pub struct AssistantBuilder {
    transport: Arc<dyn Transport>,
    threads: Arc<dyn ThreadStore>,
    hooks: Arc<dyn AssistantHooks>,
    model: String,
    system_prompt: String,
}

impl AssistantBuilder {
    pub fn new(transport: Arc<dyn Transport>, threads: Arc<dyn ThreadStore>) -> Self {
        Self {
            transport,
            threads,
            hooks: Arc::new(NoopAssistantHooks),
            model: String::new(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn hooks(mut self, hooks: Arc<dyn AssistantHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn build(self) -> Result<Assistant, AssistantBuildError> {
        if self.model.trim().is_empty() {
            return Err(AssistantBuildError::missing_model());
        }

        Ok(Assistant {
            model: self.model,
            system_prompt: self.system_prompt,
            transport: self.transport,
            threads: self.threads,
            hooks: self.hooks,
            last_usage: Mutex::new(Usage::default()),
        })
    }
}
