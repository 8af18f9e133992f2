//! Thread store contract, in-memory store, and store construction.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use pcommon::{BoxFuture, ThreadId};
use ptransport::Message;

use crate::backends::sqlite::default_sqlite_path;
use crate::error::StoreError;

pub use crate::backends::sqlite::SqliteThreadStore;

/// Append-only, ordered message storage keyed by thread id.
///
/// Contract for implementations:
/// - `load_messages` returns messages in append order.
/// - `append_message` and `load_messages` on an unknown thread fail with
///   `StoreErrorKind::NotFound`; appending never creates a thread implicitly.
/// - `create_thread` on an existing id fails with `StoreErrorKind::AlreadyExists`
///   in the bundled stores; other stores may document different behavior.
pub trait ThreadStore: Send + Sync {
    fn thread_exists<'a>(
        &'a self,
        thread_id: &'a ThreadId,
    ) -> BoxFuture<'a, Result<bool, StoreError>>;

    fn create_thread<'a>(
        &'a self,
        thread_id: &'a ThreadId,
    ) -> BoxFuture<'a, Result<(), StoreError>>;

    fn append_message<'a>(
        &'a self,
        thread_id: &'a ThreadId,
        message: Message,
    ) -> BoxFuture<'a, Result<(), StoreError>>;

    fn load_messages<'a>(
        &'a self,
        thread_id: &'a ThreadId,
    ) -> BoxFuture<'a, Result<Vec<Message>, StoreError>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadStoreConfig {
    Sqlite { path: PathBuf },
    InMemory,
}

impl Default for ThreadStoreConfig {
    fn default() -> Self {
        Self::Sqlite {
            path: default_sqlite_path(),
        }
    }
}

pub fn create_thread_store(config: ThreadStoreConfig) -> Result<Arc<dyn ThreadStore>, StoreError> {
    match config {
        ThreadStoreConfig::Sqlite { path } => Ok(Arc::new(SqliteThreadStore::new(path)?)),
        ThreadStoreConfig::InMemory => Ok(Arc::new(InMemoryThreadStore::new())),
    }
}

pub fn create_default_thread_store() -> Result<Arc<dyn ThreadStore>, StoreError> {
    create_thread_store(ThreadStoreConfig::default())
}

#[derive(Debug, Default)]
pub struct InMemoryThreadStore {
    threads: Mutex<HashMap<ThreadId, Vec<Message>>>,
}

impl InMemoryThreadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn thread_count(&self) -> Result<usize, StoreError> {
        Ok(self.threads()?.len())
    }

    fn threads(&self) -> Result<MutexGuard<'_, HashMap<ThreadId, Vec<Message>>>, StoreError> {
        self.threads
            .lock()
            .map_err(|_| StoreError::storage("thread store lock poisoned"))
    }
}

impl ThreadStore for InMemoryThreadStore {
    fn thread_exists<'a>(
        &'a self,
        thread_id: &'a ThreadId,
    ) -> BoxFuture<'a, Result<bool, StoreError>> {
        Box::pin(async move { Ok(self.threads()?.contains_key(thread_id)) })
    }

    fn create_thread<'a>(
        &'a self,
        thread_id: &'a ThreadId,
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            let mut threads = self.threads()?;
            if threads.contains_key(thread_id) {
                return Err(StoreError::thread_exists(thread_id));
            }

            threads.insert(thread_id.clone(), Vec::new());
            Ok(())
        })
    }

    fn append_message<'a>(
        &'a self,
        thread_id: &'a ThreadId,
        message: Message,
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            let mut threads = self.threads()?;
            let messages = threads
                .get_mut(thread_id)
                .ok_or_else(|| StoreError::thread_not_found(thread_id))?;

            messages.push(message);
            Ok(())
        })
    }

    fn load_messages<'a>(
        &'a self,
        thread_id: &'a ThreadId,
    ) -> BoxFuture<'a, Result<Vec<Message>, StoreError>> {
        Box::pin(async move {
            self.threads()?
                .get(thread_id)
                .cloned()
                .ok_or_else(|| StoreError::thread_not_found(thread_id))
        })
    }
}
