//! Shared primitives for the parley workspace crates.
//!
//! ```rust
//! use pcommon::{BoxFuture, ThreadId};
//!
//! let thread = ThreadId::from("thread-1");
//! assert_eq!(thread.as_str(), "thread-1");
//! assert_eq!(thread.to_string(), "thread-1");
//!
//! fn id_len<'a>(thread: &'a ThreadId) -> BoxFuture<'a, usize> {
//!     Box::pin(async move { thread.as_str().len() })
//! }
//!
//! let _future = id_len(&thread);
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use pcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod thread {
    //! Conversation thread identifiers.
    //!
    //! Thread ids are opaque, caller-supplied strings. The newtype only exists so
    //! that store and orchestrator signatures cannot confuse an id with message text.
    //!
    //! ```rust
    //! use pcommon::ThreadId;
    //!
    //! let a = ThreadId::new("user-123");
    //! let b = ThreadId::from(String::from("user-123"));
    //! assert_eq!(a, b);
    //! ```

    use std::borrow::Borrow;
    use std::fmt::{Display, Formatter};

    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct ThreadId(String);

    impl ThreadId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }

        pub fn into_inner(self) -> String {
            self.0
        }
    }

    impl Display for ThreadId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for ThreadId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for ThreadId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }

    impl From<&ThreadId> for ThreadId {
        fn from(value: &ThreadId) -> Self {
            value.clone()
        }
    }

    impl AsRef<str> for ThreadId {
        fn as_ref(&self) -> &str {
            self.as_str()
        }
    }

    impl Borrow<str> for ThreadId {
        fn borrow(&self) -> &str {
            self.as_str()
        }
    }
}

pub use future::BoxFuture;
pub use thread::ThreadId;

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::ThreadId;

    #[test]
    fn thread_id_round_trips_strings() {
        let from_str = ThreadId::from("t1");
        let from_string = ThreadId::from("t1".to_string());

        assert_eq!(from_str, from_string);
        assert_eq!(from_str.as_str(), "t1");
        assert_eq!(from_str.to_string(), "t1");
        assert_eq!(from_string.into_inner(), "t1");
    }

    #[test]
    fn thread_id_map_keys_can_be_looked_up_by_str() {
        let mut threads = HashMap::new();
        threads.insert(ThreadId::new("t2"), 2_u32);

        assert_eq!(threads.get("t2"), Some(&2));
        assert!(!threads.contains_key("t3"));
    }
}
