//! Thread persistence for the parley assistant.
//!
//! A thread is an ordered, append-only list of messages keyed by a
//! [`ThreadId`]. Stores never create threads implicitly; the assistant
//! creates and seeds a thread the first time it sees an id.
//!
//! ```rust
//! use pstore::{InMemoryThreadStore, ThreadStore};
//! use pcommon::ThreadId;
//! use ptransport::Message;
//!
//! # async fn demo() -> Result<(), pstore::StoreError> {
//! let store = InMemoryThreadStore::new();
//! let thread_id = ThreadId::new("support-42");
//! store.create_thread(&thread_id).await?;
//! store.append_message(&thread_id, Message::user("hello")).await?;
//! assert_eq!(store.load_messages(&thread_id).await?.len(), 1);
//! # Ok(())
//! # }
//! ```

mod backends;
mod error;
mod store;

pub use pcommon::ThreadId;

pub use backends::sqlite::{default_sqlite_path, default_sqlite_path_with};
pub use error::{StoreError, StoreErrorKind};
pub use store::{
    InMemoryThreadStore, SqliteThreadStore, ThreadStore, ThreadStoreConfig,
    create_default_thread_store, create_thread_store,
};
