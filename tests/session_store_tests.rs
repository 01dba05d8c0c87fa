use chat_widget::{
    error::StoreError,
    services::session_store::{FileStore, KeyValueStore, SESSION_KEY, get_or_create_session_id},
};

#[test]
fn test_missing_file_is_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("session.json")).unwrap();
    assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    assert!(!store.path().exists(), "opening must not create the file");
}

#[test]
fn test_session_id_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile").join("session.json");

    let first = {
        let store = FileStore::open(&path).unwrap();
        get_or_create_session_id(&store).unwrap()
    };
    assert!(path.exists());

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get(SESSION_KEY).unwrap().as_deref(), Some(first.as_str()));
    assert_eq!(get_or_create_session_id(&store).unwrap(), first);
}

#[test]
fn test_other_keys_are_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

    let store = FileStore::open(&path).unwrap();
    store.set(SESSION_KEY, "abc").unwrap();

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(reopened.get(SESSION_KEY).unwrap().as_deref(), Some("abc"));
}

#[test]
fn test_corrupt_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let err = FileStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Format(_)));
}
