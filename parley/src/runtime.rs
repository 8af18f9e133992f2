//! Runtime wiring helpers for assembling an assistant.

use std::sync::Arc;

use pobserve::{
    CompositeAssistantHooks, MetricsAssistantHooks, SafeAssistantHooks, TracingAssistantHooks,
};

use crate::{
    Assistant, AssistantConfig, AssistantHooks, ConfigError, InMemoryThreadStore, ThreadStore,
    Transport, create_thread_store,
};

pub fn in_memory_store() -> Arc<dyn ThreadStore> {
    Arc::new(InMemoryThreadStore::new())
}

/// Tracing and metrics hooks, each isolated from panics.
pub fn default_hooks() -> Arc<dyn AssistantHooks> {
    Arc::new(
        CompositeAssistantHooks::new()
            .with(Arc::new(SafeAssistantHooks::new(TracingAssistantHooks)))
            .with(Arc::new(SafeAssistantHooks::new(MetricsAssistantHooks))),
    )
}

pub fn assistant_with(
    transport: Arc<dyn Transport>,
    threads: Arc<dyn ThreadStore>,
    model: impl Into<String>,
    system_prompt: impl Into<String>,
) -> Assistant {
    Assistant::new(model, system_prompt, transport, threads)
}

#[cfg(feature = "transport-openai")]
pub fn build_transport(config: &AssistantConfig) -> Result<Arc<dyn Transport>, ConfigError> {
    use ptransport::adapters::openai::OpenAiHttpTransport;
    use reqwest::Client;

    if config.api_key.is_empty() {
        return Err(ConfigError::missing("OpenAI API key must not be empty"));
    }

    let http = Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|err| ConfigError::transport(err.to_string()))?;

    Ok(Arc::new(
        OpenAiHttpTransport::new(http, config.api_key.clone())
            .with_endpoint(config.endpoint.clone()),
    ))
}

#[cfg(feature = "transport-openai")]
pub fn build_assistant(config: AssistantConfig) -> Result<Assistant, ConfigError> {
    build_assistant_with_hooks(config, default_hooks())
}

#[cfg(feature = "transport-openai")]
pub fn build_assistant_with_hooks(
    config: AssistantConfig,
    hooks: Arc<dyn AssistantHooks>,
) -> Result<Assistant, ConfigError> {
    let transport = build_transport(&config)?;
    build_assistant_with_transport(config, transport, hooks)
}

/// Assembles an assistant from `config` around a caller-supplied transport.
/// Only the model, system prompt and store settings of `config` are used.
pub fn build_assistant_with_transport(
    config: AssistantConfig,
    transport: Arc<dyn Transport>,
    hooks: Arc<dyn AssistantHooks>,
) -> Result<Assistant, ConfigError> {
    let threads = create_thread_store(config.store)?;

    Ok(Assistant::builder(transport, threads)
        .model(config.model)
        .system_prompt(config.system_prompt)
        .hooks(hooks)
        .build()?)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        AssistantConfig, BoxFuture, ConfigErrorKind, Message, ThreadStoreConfig, Transport,
        TransportError, TransportRequest, TransportResponse, Usage,
    };

    use super::{assistant_with, build_assistant_with_transport, default_hooks, in_memory_store};

    struct CannedTransport;

    impl Transport for CannedTransport {
        fn request<'a>(
            &'a self,
            _request: TransportRequest,
        ) -> BoxFuture<'a, Result<TransportResponse, TransportError>> {
            Box::pin(async {
                Ok(TransportResponse::new(
                    Message::assistant("canned"),
                    Usage::new(1, 2, 3),
                ))
            })
        }
    }

    #[tokio::test]
    async fn assistant_with_uses_supplied_collaborators() {
        let assistant = assistant_with(
            Arc::new(CannedTransport),
            in_memory_store(),
            "gpt-4o-mini",
            "Be brief.",
        );

        let outcome = assistant.ask("t1", "hi").await.expect("ask should succeed");

        assert_eq!(outcome.reply, "canned");
        assert_eq!(assistant.model(), "gpt-4o-mini");
        assert_eq!(assistant.system_prompt(), "Be brief.");
    }

    #[test]
    fn build_with_transport_rejects_blank_model() {
        let config = AssistantConfig::new("sk-test")
            .with_model("")
            .with_store(ThreadStoreConfig::InMemory);

        let error =
            build_assistant_with_transport(config, Arc::new(CannedTransport), default_hooks())
                .expect_err("blank model should fail");

        assert_eq!(error.kind, ConfigErrorKind::Invalid);
    }

    #[cfg(feature = "transport-openai")]
    #[test]
    fn build_transport_rejects_empty_api_key() {
        let config = AssistantConfig::new(" ").with_store(ThreadStoreConfig::InMemory);

        let error = super::build_transport(&config)
            .err()
            .expect("empty key should fail");

        assert_eq!(error.kind, ConfigErrorKind::Missing);
    }
}
