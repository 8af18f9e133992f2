//! Assistant configuration and environment loading.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

use pchat::AssistantBuildError;
use pstore::{StoreError, ThreadStoreConfig, default_sqlite_path_with};
use ptransport::SecretString;

use crate::util::parse_thread_store;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_MODEL: &str = "PARLEY_MODEL";
pub const ENV_SYSTEM_PROMPT: &str = "PARLEY_SYSTEM_PROMPT";
pub const ENV_ENDPOINT: &str = "PARLEY_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "PARLEY_TIMEOUT_SECS";
pub const ENV_STORE: &str = "PARLEY_STORE";
pub const ENV_SQLITE_PATH: &str = "PARLEY_SQLITE_PATH";

#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub model: String,
    pub system_prompt: String,
    pub api_key: SecretString,
    pub endpoint: String,
    pub timeout: Duration,
    pub store: ThreadStoreConfig,
}

impl AssistantConfig {
    pub fn new(api_key: impl Into<SecretString>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: pchat::DEFAULT_SYSTEM_PROMPT.to_string(),
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            store: ThreadStoreConfig::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_store(mut self, store: ThreadStoreConfig) -> Self {
        self.store = store;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, which resolves environment-style keys.
    ///
    /// ```rust
    /// use parley::{AssistantConfig, ThreadStoreConfig};
    ///
    /// let config = AssistantConfig::from_env_with(|key| match key {
    ///     "OPENAI_API_KEY" => Some("sk-test".to_string()),
    ///     "PARLEY_STORE" => Some("memory".to_string()),
    ///     _ => None,
    /// })
    /// .expect("config should load");
    ///
    /// assert_eq!(config.model, "gpt-4o-mini");
    /// assert_eq!(config.store, ThreadStoreConfig::InMemory);
    /// ```
    pub fn from_env_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = non_empty(ENV_API_KEY)
            .ok_or_else(|| ConfigError::missing(format!("{ENV_API_KEY} is not set")))?;
        let mut config = Self::new(api_key);

        if let Some(model) = non_empty(ENV_MODEL) {
            config.model = model.trim().to_string();
        }

        // An explicitly empty prompt is honored and seeded as-is.
        if let Some(system_prompt) = lookup(ENV_SYSTEM_PROMPT) {
            config.system_prompt = system_prompt;
        }

        if let Some(endpoint) = non_empty(ENV_ENDPOINT) {
            config.endpoint = endpoint.trim().to_string();
        }

        if let Some(raw) = non_empty(ENV_TIMEOUT_SECS) {
            let seconds = raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::invalid(format!(
                    "{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"
                ))
            })?;
            if seconds == 0 {
                return Err(ConfigError::invalid(format!(
                    "{ENV_TIMEOUT_SECS} must be greater than zero"
                )));
            }
            config.timeout = Duration::from_secs(seconds);
        }

        // Only `lookup` is consulted, never the process environment.
        let sqlite_path = default_sqlite_path_with(|key| lookup(key).map(PathBuf::from));
        config.store = match non_empty(ENV_STORE) {
            Some(kind) => parse_thread_store(&kind, Some(sqlite_path)).ok_or_else(|| {
                ConfigError::invalid(format!(
                    "{ENV_STORE} must be 'sqlite' or 'memory', got '{kind}'"
                ))
            })?,
            None => ThreadStoreConfig::Sqlite { path: sqlite_path },
        };

        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    Missing,
    Invalid,
    Transport,
    Store,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub kind: ConfigErrorKind,
    pub message: String,
}

impl ConfigError {
    pub fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Missing, message)
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Invalid, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Transport, message)
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Store, message)
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ConfigError {}

impl From<StoreError> for ConfigError {
    fn from(value: StoreError) -> Self {
        ConfigError::store(value.to_string())
    }
}

impl From<AssistantBuildError> for ConfigError {
    fn from(value: AssistantBuildError) -> Self {
        ConfigError::invalid(value.message)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| values.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_api_key_is_set() {
        let config = AssistantConfig::from_env_with(lookup_from(&[(ENV_API_KEY, "sk-test")]))
            .expect("config should load");

        assert_eq!(config.api_key.expose(), "sk-test");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.system_prompt, "You are a helpful assistant.");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(90));
        assert!(matches!(config.store, ThreadStoreConfig::Sqlite { .. }));
    }

    #[test]
    fn missing_or_blank_api_key_is_rejected() {
        let missing = AssistantConfig::from_env_with(lookup_from(&[]))
            .expect_err("missing key should fail");
        assert_eq!(missing.kind, ConfigErrorKind::Missing);

        let blank = AssistantConfig::from_env_with(lookup_from(&[(ENV_API_KEY, "   ")]))
            .expect_err("blank key should fail");
        assert_eq!(blank.kind, ConfigErrorKind::Missing);
        assert_eq!(blank.to_string(), "Missing: OPENAI_API_KEY is not set");
    }

    #[test]
    fn overrides_are_read_from_lookup() {
        let config = AssistantConfig::from_env_with(lookup_from(&[
            (ENV_API_KEY, "sk-test"),
            (ENV_MODEL, "gpt-4.1"),
            (ENV_SYSTEM_PROMPT, ""),
            (ENV_ENDPOINT, "http://localhost:8080/v1/chat/completions"),
            (ENV_TIMEOUT_SECS, "15"),
            (ENV_STORE, "sqlite"),
            (ENV_SQLITE_PATH, "/tmp/parley/threads.sqlite3"),
        ]))
        .expect("config should load");

        assert_eq!(config.model, "gpt-4.1");
        assert_eq!(config.system_prompt, "");
        assert_eq!(config.endpoint, "http://localhost:8080/v1/chat/completions");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(
            config.store,
            ThreadStoreConfig::Sqlite {
                path: PathBuf::from("/tmp/parley/threads.sqlite3")
            }
        );
    }

    #[test]
    fn sqlite_path_alone_selects_sqlite_store() {
        let config = AssistantConfig::from_env_with(lookup_from(&[
            (ENV_API_KEY, "sk-test"),
            (ENV_SQLITE_PATH, "custom.sqlite3"),
        ]))
        .expect("config should load");

        assert_eq!(
            config.store,
            ThreadStoreConfig::Sqlite {
                path: PathBuf::from("custom.sqlite3")
            }
        );
    }

    #[test]
    fn sqlite_path_comes_from_lookup_not_process_environment() {
        // SAFETY: no other test in this crate reads or writes this variable.
        unsafe {
            std::env::set_var(ENV_SQLITE_PATH, "/tmp/process-env.sqlite3");
        }

        let defaulted = AssistantConfig::from_env_with(lookup_from(&[
            (ENV_API_KEY, "sk-test"),
            ("HOME", "/home/ada"),
        ]))
        .expect("config should load");
        let explicit_sqlite = AssistantConfig::from_env_with(lookup_from(&[
            (ENV_API_KEY, "sk-test"),
            (ENV_STORE, "sqlite"),
        ]))
        .expect("config should load");

        unsafe {
            std::env::remove_var(ENV_SQLITE_PATH);
        }

        assert_eq!(
            defaulted.store,
            ThreadStoreConfig::Sqlite {
                path: PathBuf::from("/home/ada/.parley/threads.sqlite3")
            }
        );
        assert_eq!(
            explicit_sqlite.store,
            ThreadStoreConfig::Sqlite {
                path: PathBuf::from("threads.sqlite3")
            }
        );
    }

    #[test]
    fn invalid_timeout_and_store_are_rejected() {
        for (key, value) in [
            (ENV_TIMEOUT_SECS, "soon"),
            (ENV_TIMEOUT_SECS, "0"),
            (ENV_STORE, "postgres"),
        ] {
            let error = AssistantConfig::from_env_with(lookup_from(&[
                (ENV_API_KEY, "sk-test"),
                (key, value),
            ]))
            .expect_err("invalid value should fail");
            assert_eq!(error.kind, ConfigErrorKind::Invalid, "{key}={value}");
        }
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = AssistantConfig::new("sk-secret");
        assert!(!format!("{config:?}").contains("sk-secret"));
    }
}
