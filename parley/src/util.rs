//! Small convenience constructors for common types.

use std::path::PathBuf;

use crate::{Message, Role, ThreadId, ThreadStoreConfig};

pub fn system_message(content: impl Into<String>) -> Message {
    Message::new(Role::System, content)
}

pub fn user_message(content: impl Into<String>) -> Message {
    Message::new(Role::User, content)
}

pub fn assistant_message(content: impl Into<String>) -> Message {
    Message::new(Role::Assistant, content)
}

pub fn thread(id: impl Into<ThreadId>) -> ThreadId {
    id.into()
}

/// Maps a store name to its config. SQLite falls back to the default path
/// when `sqlite_path` is `None`.
pub fn parse_thread_store(value: &str, sqlite_path: Option<PathBuf>) -> Option<ThreadStoreConfig> {
    match value.trim().to_ascii_lowercase().as_str() {
        "sqlite" | "sqlite3" => Some(match sqlite_path {
            Some(path) => ThreadStoreConfig::Sqlite { path },
            None => ThreadStoreConfig::default(),
        }),
        "memory" | "in-memory" | "in_memory" | "inmemory" => Some(ThreadStoreConfig::InMemory),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::{Role, ThreadStoreConfig};

    use super::{parse_thread_store, thread, user_message};

    #[test]
    fn parse_thread_store_supports_aliases() {
        assert_eq!(
            parse_thread_store("Memory", None),
            Some(ThreadStoreConfig::InMemory)
        );
        assert_eq!(
            parse_thread_store("in-memory", Some(PathBuf::from("ignored.sqlite3"))),
            Some(ThreadStoreConfig::InMemory)
        );
        assert_eq!(
            parse_thread_store("sqlite", Some(PathBuf::from("a.sqlite3"))),
            Some(ThreadStoreConfig::Sqlite {
                path: PathBuf::from("a.sqlite3")
            })
        );
        assert_eq!(parse_thread_store("redis", None), None);
    }

    #[test]
    fn message_helpers_set_roles() {
        assert_eq!(user_message("hi").role, Role::User);
        assert_eq!(thread("t1").as_str(), "t1");
    }
}
