// ABOUTME: Integration tests for file-backed session token persistence
// ABOUTME: Load/store/clear round trips and corrupt-file handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormCoach
#![allow(missing_docs, clippy::unwrap_used)]

use formcoach::core::CoachError;
use formcoach::services::auth::SessionToken;
use formcoach::session::SessionStore;

#[test]
fn missing_file_means_no_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::at_path(dir.path().join("session.json"));
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn token_round_trips_through_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::at_path(dir.path().join("nested/dir/session.json"));

    let token = SessionToken::new("opaque-access-token");
    store.store(&token).unwrap();
    assert_eq!(store.load().unwrap(), Some(token));
}

#[test]
fn storing_replaces_the_previous_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::at_path(dir.path().join("session.json"));

    store.store(&SessionToken::new("first")).unwrap();
    store.store(&SessionToken::new("second")).unwrap();
    assert_eq!(store.load().unwrap(), Some(SessionToken::new("second")));
}

#[test]
fn clear_removes_the_session_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::at_path(dir.path().join("session.json"));

    store.store(&SessionToken::new("token")).unwrap();
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
    // Clearing an already-absent session is not an error
    store.clear().unwrap();
}

#[test]
fn corrupt_file_is_a_serialization_error_not_a_panic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();

    let store = SessionStore::at_path(&path);
    let err = store.load().unwrap_err();
    assert!(matches!(
        err,
        CoachError::Serialization { context: "session file", .. }
    ));
}

#[test]
fn file_uses_the_fixed_storage_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let store = SessionStore::at_path(&path);
    store.store(&SessionToken::new("token")).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        json.get("userToken").and_then(|v| v.as_str()),
        Some("token")
    );
}
