use std::sync::Arc;

use pstore::{InMemoryThreadStore, SqliteThreadStore, StoreErrorKind, ThreadId, ThreadStore};
use ptransport::Message;

fn stores() -> Vec<(&'static str, Arc<dyn ThreadStore>)> {
    vec![
        ("in-memory", Arc::new(InMemoryThreadStore::new())),
        (
            "sqlite",
            Arc::new(SqliteThreadStore::new_in_memory().expect("sqlite store should open")),
        ),
    ]
}

#[tokio::test]
async fn created_thread_exists_and_starts_empty() {
    for (name, store) in stores() {
        let thread_id = ThreadId::new("t1");
        assert!(!store.thread_exists(&thread_id).await.expect("exists"), "{name}");

        store.create_thread(&thread_id).await.expect("create should succeed");

        assert!(store.thread_exists(&thread_id).await.expect("exists"), "{name}");
        let messages = store.load_messages(&thread_id).await.expect("load");
        assert!(messages.is_empty(), "{name}");
    }
}

#[tokio::test]
async fn messages_load_in_append_order() {
    for (name, store) in stores() {
        let thread_id = ThreadId::new("ordered");
        store.create_thread(&thread_id).await.expect("create should succeed");

        let expected = vec![
            Message::system("You are terse."),
            Message::user("one"),
            Message::assistant("two"),
            Message::user("three"),
            Message::assistant(""),
        ];
        for message in expected.clone() {
            store
                .append_message(&thread_id, message)
                .await
                .expect("append should succeed");
        }

        let loaded = store.load_messages(&thread_id).await.expect("load");
        assert_eq!(loaded, expected, "{name}");
    }
}

#[tokio::test]
async fn threads_are_isolated() {
    for (name, store) in stores() {
        let first = ThreadId::new("a");
        let second = ThreadId::new("b");
        store.create_thread(&first).await.expect("create a");
        store.create_thread(&second).await.expect("create b");

        store
            .append_message(&first, Message::user("only in a"))
            .await
            .expect("append");

        assert_eq!(store.load_messages(&first).await.expect("load a").len(), 1, "{name}");
        assert!(store.load_messages(&second).await.expect("load b").is_empty(), "{name}");
    }
}

#[tokio::test]
async fn unknown_thread_operations_fail_with_not_found() {
    for (name, store) in stores() {
        let thread_id = ThreadId::new("missing");

        let append = store
            .append_message(&thread_id, Message::user("hi"))
            .await
            .expect_err("append should fail");
        assert_eq!(append.kind, StoreErrorKind::NotFound, "{name}");

        let load = store
            .load_messages(&thread_id)
            .await
            .expect_err("load should fail");
        assert_eq!(load.kind, StoreErrorKind::NotFound, "{name}");

        assert!(!store.thread_exists(&thread_id).await.expect("exists"), "{name}");
    }
}

#[tokio::test]
async fn duplicate_create_keeps_existing_messages() {
    for (name, store) in stores() {
        let thread_id = ThreadId::new("dup");
        store.create_thread(&thread_id).await.expect("create");
        store
            .append_message(&thread_id, Message::system("seed"))
            .await
            .expect("append");

        let error = store
            .create_thread(&thread_id)
            .await
            .expect_err("duplicate create should fail");
        assert_eq!(error.kind, StoreErrorKind::AlreadyExists, "{name}");

        let loaded = store.load_messages(&thread_id).await.expect("load");
        assert_eq!(loaded, vec![Message::system("seed")], "{name}");
    }
}

#[tokio::test]
async fn empty_thread_id_is_an_ordinary_key() {
    for (name, store) in stores() {
        let thread_id = ThreadId::new("");
        store.create_thread(&thread_id).await.expect("create");
        store
            .append_message(&thread_id, Message::user("blank id"))
            .await
            .expect("append");
        assert_eq!(store.load_messages(&thread_id).await.expect("load").len(), 1, "{name}");
    }
}
