// ABOUTME: Integration tests for user database operations
// ABOUTME: Covers creation, lookup, listing, and the non-empty username constraint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{create_test_database, create_test_user};
use exercise_tracker::models::User;
use uuid::Uuid;

#[tokio::test]
async fn test_create_and_get_user() {
    let database = create_test_database().await.unwrap();

    let user = create_test_user(&database, "alice").await.unwrap();

    let found = database.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.username, "alice");
}

#[tokio::test]
async fn test_get_unknown_user_returns_none() {
    let database = create_test_database().await.unwrap();

    let found = database.get_user(Uuid::new_v4()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_list_users_empty() {
    let database = create_test_database().await.unwrap();

    let users = database.list_users().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_list_users_returns_all() {
    let database = create_test_database().await.unwrap();

    create_test_user(&database, "alice").await.unwrap();
    create_test_user(&database, "bob").await.unwrap();
    create_test_user(&database, "carol").await.unwrap();

    let users = database.list_users().await.unwrap();
    assert_eq!(users.len(), 3);

    let names: Vec<&str> = users.iter().map(|user| user.username.as_str()).collect();
    assert!(names.contains(&"alice"));
    assert!(names.contains(&"bob"));
    assert!(names.contains(&"carol"));
}

#[tokio::test]
async fn test_empty_username_rejected_by_schema() {
    let database = create_test_database().await.unwrap();

    let user = User::new("");
    let result = database.create_user(&user).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_duplicate_usernames_allowed() {
    let database = create_test_database().await.unwrap();

    let first = create_test_user(&database, "runner").await.unwrap();
    let second = create_test_user(&database, "runner").await.unwrap();
    assert_ne!(first.id, second.id);

    let users = database.list_users().await.unwrap();
    assert_eq!(users.len(), 2);
}
