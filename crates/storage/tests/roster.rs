//! Roster invariants against a real PostgreSQL instance.
//!
//! Run with `cargo test -- --ignored` and DATABASE_URL pointing at a
//! disposable database; migrations are applied on first connect.

use std::time::Duration;

use storage::Database;
use storage::dto::event::CreateEventRequest;
use storage::dto::run::CreateRunRequest;
use storage::error::StorageError;
use storage::repository::event::EventRepository;
use storage::repository::participant::{ParticipantRepository, RosterParent};
use storage::repository::run::RunRepository;
use uuid::Uuid;

async fn test_db() -> Database {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a test database");
    let db = Database::new(&url).await.expect("failed to connect");
    db.run_migrations().await.expect("failed to migrate");
    db
}

fn event_request(id: &str) -> CreateEventRequest {
    CreateEventRequest {
        id: id.to_string(),
        name: "5K Fun Run".to_string(),
        date: "2025-03-14T18:00:00Z".parse().unwrap(),
        event_type: "RACE".to_string(),
    }
}

fn run_request(id: &str) -> CreateRunRequest {
    CreateRunRequest {
        id: id.to_string(),
        name: "Tuesday Club Run".to_string(),
        schedule: "Tuesdays 18:30".to_string(),
        location: Some("Riverside park gate".to_string()),
    }
}

fn unique_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn create_then_get_returns_event_with_empty_roster() {
    let db = test_db().await;
    let id = unique_id("create-get");

    let repo = EventRepository::new(db.pool());
    let created = repo.create(&event_request(&id)).await.unwrap();
    let fetched = repo.find_by_id(&id).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "5K Fun Run");
    assert_eq!(fetched.event_type, "RACE");
    assert_eq!(fetched.date, created.date);

    let roster = ParticipantRepository::new(db.pool())
        .list_for_parent(RosterParent::Event(&id))
        .await
        .unwrap();
    assert!(roster.is_empty());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn duplicate_event_id_is_a_constraint_violation() {
    let db = test_db().await;
    let id = unique_id("dup-id");

    let repo = EventRepository::new(db.pool());
    repo.create(&event_request(&id)).await.unwrap();

    let result = repo.create(&event_request(&id)).await;
    assert!(matches!(result, Err(StorageError::ConstraintViolation(_))));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn missing_event_lookup_is_not_found() {
    let db = test_db().await;

    let result = EventRepository::new(db.pool())
        .find_by_id(&unique_id("never-created"))
        .await;
    assert!(matches!(result, Err(StorageError::NotFound)));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn duplicate_joins_create_distinct_rows() {
    let db = test_db().await;
    let id = unique_id("dup-join");

    EventRepository::new(db.pool())
        .create(&event_request(&id))
        .await
        .unwrap();

    let repo = ParticipantRepository::new(db.pool());
    let parent = RosterParent::Event(&id);
    let first = repo.insert(parent, "user-1", Some("Alex")).await.unwrap();
    let second = repo.insert(parent, "user-1", Some("Alex")).await.unwrap();
    assert_ne!(first.id, second.id);

    let roster = repo.list_for_parent(parent).await.unwrap();
    assert_eq!(roster.len(), 2);
    assert!(roster.iter().all(|p| p.user_id == "user-1"));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn remove_with_no_matching_rows_is_a_no_op() {
    let db = test_db().await;
    let id = unique_id("rm-noop");

    EventRepository::new(db.pool())
        .create(&event_request(&id))
        .await
        .unwrap();

    let removed = ParticipantRepository::new(db.pool())
        .delete_for_user(RosterParent::Event(&id), "never-joined")
        .await
        .unwrap();
    assert!(removed.is_empty());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn remove_deletes_every_row_for_the_user() {
    let db = test_db().await;
    let id = unique_id("rm-all");

    EventRepository::new(db.pool())
        .create(&event_request(&id))
        .await
        .unwrap();

    let repo = ParticipantRepository::new(db.pool());
    let parent = RosterParent::Event(&id);
    repo.insert(parent, "user-1", Some("Alex")).await.unwrap();
    repo.insert(parent, "user-1", Some("Alex")).await.unwrap();
    repo.insert(parent, "user-2", Some("Sam")).await.unwrap();

    let removed = repo.delete_for_user(parent, "user-1").await.unwrap();
    assert_eq!(removed.len(), 2);

    let roster = repo.list_for_parent(parent).await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].user_id, "user-2");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn roster_is_ordered_most_recent_first() {
    let db = test_db().await;
    let id = unique_id("order");

    EventRepository::new(db.pool())
        .create(&event_request(&id))
        .await
        .unwrap();

    let repo = ParticipantRepository::new(db.pool());
    let parent = RosterParent::Event(&id);
    for user in ["user-1", "user-2", "user-3"] {
        repo.insert(parent, user, None).await.unwrap();
        // Distinct join timestamps regardless of clock resolution.
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let roster = repo.list_for_parent(parent).await.unwrap();
    let order: Vec<&str> = roster.iter().map(|p| p.user_id.as_str()).collect();
    assert_eq!(order, ["user-3", "user-2", "user-1"]);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn join_against_missing_parent_is_not_found() {
    let db = test_db().await;

    let result = ParticipantRepository::new(db.pool())
        .insert(
            RosterParent::Event(&unique_id("never-created")),
            "user-1",
            None,
        )
        .await;
    assert!(matches!(result, Err(StorageError::NotFound)));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn unknown_parent_roster_is_empty_not_an_error() {
    let db = test_db().await;

    let roster = ParticipantRepository::new(db.pool())
        .list_for_parent(RosterParent::Event(&unique_id("never-created")))
        .await
        .unwrap();
    assert!(roster.is_empty());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn deleting_a_parent_cascades_its_roster() {
    let db = test_db().await;
    let id = unique_id("cascade");

    let events = EventRepository::new(db.pool());
    events.create(&event_request(&id)).await.unwrap();

    let repo = ParticipantRepository::new(db.pool());
    let parent = RosterParent::Event(&id);
    repo.insert(parent, "user-1", Some("Alex")).await.unwrap();

    events.delete(&id).await.unwrap();

    let roster = repo.list_for_parent(parent).await.unwrap();
    assert!(roster.is_empty());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn run_rosters_behave_like_event_rosters() {
    let db = test_db().await;
    let id = unique_id("run");

    let runs = RunRepository::new(db.pool());
    runs.create(&run_request(&id)).await.unwrap();

    let repo = ParticipantRepository::new(db.pool());
    let parent = RosterParent::Run(&id);
    repo.insert(parent, "user-1", Some("Alex")).await.unwrap();
    repo.insert(parent, "user-1", None).await.unwrap();

    let roster = repo.list_for_parent(parent).await.unwrap();
    assert_eq!(roster.len(), 2);
    assert!(roster.iter().all(|p| p.run_id.as_deref() == Some(id.as_str())));

    let removed = repo.delete_for_user(parent, "user-1").await.unwrap();
    assert_eq!(removed.len(), 2);

    runs.delete(&id).await.unwrap();
    assert!(matches!(
        runs.find_by_id(&id).await,
        Err(StorageError::NotFound)
    ));
}
