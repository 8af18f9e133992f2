use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use pcommon::{BoxFuture, ThreadId};
use ptransport::{Message, Role};
use rusqlite::{Connection, params};

use crate::error::StoreError;
use crate::store::ThreadStore;

#[derive(Debug)]
pub struct SqliteThreadStore {
    connection: Mutex<Connection>,
}

impl SqliteThreadStore {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|error| {
                StoreError::storage(format!("failed to create sqlite parent directory: {error}"))
            })?;
        }

        let connection = Connection::open(path).map_err(|error| {
            StoreError::storage(format!("failed to open sqlite database: {error}"))
        })?;
        Self::from_connection(connection)
    }

    pub fn new_in_memory() -> Result<Self, StoreError> {
        let connection = Connection::open_in_memory().map_err(|error| {
            StoreError::storage(format!("failed to open in-memory sqlite database: {error}"))
        })?;
        Self::from_connection(connection)
    }

    fn from_connection(connection: Connection) -> Result<Self, StoreError> {
        connection
            .busy_timeout(Duration::from_secs(5))
            .map_err(|error| {
                StoreError::storage(format!("failed to configure sqlite busy timeout: {error}"))
            })?;
        let store = Self {
            connection: Mutex::new(connection),
        };
        store.initialize_schema()?;
        Ok(store)
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.connection
            .lock()
            .map_err(|_| StoreError::storage("sqlite thread store lock poisoned"))
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        let conn = self.connection()?;
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;

            CREATE TABLE IF NOT EXISTS threads (
                thread_id TEXT PRIMARY KEY
            );

            CREATE TABLE IF NOT EXISTS thread_messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                thread_id TEXT NOT NULL,
                role TEXT NOT NULL,
                content TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_thread_messages_thread_id
            ON thread_messages(thread_id, id);
            ",
        )
        .map_err(|error| {
            StoreError::storage(format!("failed to initialize sqlite schema: {error}"))
        })
    }
}

fn thread_row_exists(conn: &Connection, thread_id: &ThreadId) -> Result<bool, StoreError> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM threads WHERE thread_id = ?1)",
        params![thread_id.as_str()],
        |row| row.get::<_, bool>(0),
    )
    .map_err(|error| StoreError::storage(format!("failed to query thread: {error}")))
}

impl ThreadStore for SqliteThreadStore {
    fn thread_exists<'a>(
        &'a self,
        thread_id: &'a ThreadId,
    ) -> BoxFuture<'a, Result<bool, StoreError>> {
        Box::pin(async move {
            let conn = self.connection()?;
            thread_row_exists(&conn, thread_id)
        })
    }

    fn create_thread<'a>(
        &'a self,
        thread_id: &'a ThreadId,
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            let conn = self.connection()?;
            let inserted = conn
                .execute(
                    "INSERT OR IGNORE INTO threads (thread_id) VALUES (?1)",
                    params![thread_id.as_str()],
                )
                .map_err(|error| StoreError::storage(format!("failed to create thread: {error}")))?;

            if inserted == 0 {
                return Err(StoreError::thread_exists(thread_id));
            }
            Ok(())
        })
    }

    fn append_message<'a>(
        &'a self,
        thread_id: &'a ThreadId,
        message: Message,
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            let conn = self.connection()?;
            if !thread_row_exists(&conn, thread_id)? {
                return Err(StoreError::thread_not_found(thread_id));
            }

            conn.execute(
                "
                INSERT INTO thread_messages (thread_id, role, content)
                VALUES (?1, ?2, ?3)
                ",
                params![thread_id.as_str(), message.role.as_str(), message.content],
            )
            .map_err(|error| StoreError::storage(format!("failed to append message: {error}")))?;
            Ok(())
        })
    }

    fn load_messages<'a>(
        &'a self,
        thread_id: &'a ThreadId,
    ) -> BoxFuture<'a, Result<Vec<Message>, StoreError>> {
        Box::pin(async move {
            let conn = self.connection()?;
            if !thread_row_exists(&conn, thread_id)? {
                return Err(StoreError::thread_not_found(thread_id));
            }

            let mut stmt = conn
                .prepare(
                    "
                    SELECT role, content
                    FROM thread_messages
                    WHERE thread_id = ?1
                    ORDER BY id ASC
                    ",
                )
                .map_err(|error| {
                    StoreError::storage(format!("failed to prepare message query: {error}"))
                })?;
            let rows = stmt
                .query_map(params![thread_id.as_str()], |row| {
                    Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
                })
                .map_err(|error| {
                    StoreError::storage(format!("failed to query message rows: {error}"))
                })?;

            let mut messages = Vec::new();
            for row in rows {
                let (role, content) = row.map_err(|error| {
                    StoreError::storage(format!("failed to read message row: {error}"))
                })?;
                let role = role
                    .parse::<Role>()
                    .map_err(|error| StoreError::storage(format!("invalid stored role: {error}")))?;
                messages.push(Message::new(role, content));
            }
            Ok(messages)
        })
    }
}

pub fn default_sqlite_path() -> PathBuf {
    default_sqlite_path_with(|key| std::env::var_os(key).map(PathBuf::from))
}

/// Resolves the default database path from `lookup` instead of the process
/// environment: `PARLEY_SQLITE_PATH`, then `HOME`/`USERPROFILE`, then the
/// working directory.
pub fn default_sqlite_path_with<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<PathBuf>,
{
    let non_empty = |key: &str| lookup(key).filter(|value| !value.as_os_str().is_empty());

    if let Some(explicit) = non_empty("PARLEY_SQLITE_PATH") {
        return explicit;
    }

    if let Some(home) = non_empty("HOME").or_else(|| non_empty("USERPROFILE")) {
        return home.join(".parley").join("threads.sqlite3");
    }

    PathBuf::from("threads.sqlite3")
}
