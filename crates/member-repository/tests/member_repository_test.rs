//! Integration tests for `MySqlMemberRepository`.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use common::TestDatabase;
use member_core::{Gender, Member, MemberId};
use member_repository::{DatabasePoolInterface, MemberRepository};

fn new_member(username: &str, age: u32) -> Member {
    Member::create(
        username.to_string(),
        "010-1234-5678".to_string(),
        age,
        Gender::Male,
    )
}

#[tokio::test]
async fn test_save_assigns_id_and_round_trips() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    let saved = repo.save(&new_member("park", 30)).await.unwrap();
    let id = saved.id.expect("saved member should have an id");

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found, saved);
    assert_eq!(found.gender, Gender::Male);
}

#[tokio::test]
async fn test_find_all_orders_by_id() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    assert!(repo.find_all().await.unwrap().is_empty());

    let first = repo.save(&new_member("a", 20)).await.unwrap();
    let second = repo.save(&new_member("b", 21)).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all, vec![first, second]);
}

#[tokio::test]
async fn test_update_persists_changes() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    let mut member = repo.save(&new_member("before", 20)).await.unwrap();
    member.update(
        "after".to_string(),
        "02-000-0000".to_string(),
        21,
        Gender::Female,
    );

    let updated = repo.update(&member).await.unwrap();
    assert_eq!(updated.username, "after");
    assert_eq!(updated.gender, Gender::Female);

    let reloaded = repo.find_by_id(member.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(reloaded, updated);
}

#[tokio::test]
async fn test_delete_by_id() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    let saved = repo.save(&new_member("gone", 50)).await.unwrap();
    let id = saved.id.unwrap();

    assert!(repo.delete_by_id(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(!repo.delete_by_id(id).await.unwrap());
}

#[tokio::test]
async fn test_find_missing_member_returns_none() {
    let db = TestDatabase::new().await;
    let repo = db.repository();

    assert!(repo.find_by_id(MemberId(999)).await.unwrap().is_none());
    assert!(db.pool().health_check().await.is_ok());
}
