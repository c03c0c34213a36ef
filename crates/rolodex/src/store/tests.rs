use super::*;
use crate::{ClientType, NewClient};
use chrono::DateTime;

fn sample(id: u64, email: &str) -> Client {
    let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    NewClient {
        client_name: format!("client {id}"),
        client_type: ClientType::Individual,
        email: email.to_string(),
    }
    .into_client(ClientId::new(id), now)
}

#[tokio::test]
async fn max_is_none_on_an_empty_store() {
    let store = MemoryStore::new();
    assert_eq!(store.find_max_client_id().await.unwrap(), None);
}

#[tokio::test]
async fn max_tracks_the_highest_inserted_id() {
    let store = MemoryStore::new();
    store.insert_one(sample(3, "c@example.com")).await.unwrap();
    store.insert_one(sample(1, "a@example.com")).await.unwrap();
    assert_eq!(
        store.find_max_client_id().await.unwrap(),
        Some(ClientId::new(3))
    );
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let store = MemoryStore::new();
    store.insert_one(sample(1, "dup@example.com")).await.unwrap();

    let err = store
        .insert_one(sample(2, "dup@example.com"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        Error::DuplicateEmail {
            email: "dup@example.com".into()
        }
    );
}

#[tokio::test]
async fn duplicate_id_is_rejected() {
    let store = MemoryStore::new();
    store.insert_one(sample(1, "a@example.com")).await.unwrap();

    let err = store
        .insert_one(sample(1, "b@example.com"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        Error::DuplicateClientId {
            id: ClientId::new(1)
        }
    );
}

#[tokio::test]
async fn bulk_insert_isolates_per_record_failures() {
    let store = MemoryStore::new();
    store.insert_one(sample(1, "taken@example.com")).await.unwrap();

    let report = store
        .insert_many(vec![
            sample(2, "a@example.com"),
            sample(3, "taken@example.com"),
            sample(4, "b@example.com"),
        ])
        .await
        .unwrap();

    assert_eq!(report.inserted.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].index, 1);
    assert_eq!(report.failed[0].email.as_deref(), Some("taken@example.com"));
    assert!(report.failed[0].error.is_duplicate_key());

    // The rejected record did not block the ones after it.
    let all = store.find_all().await.unwrap();
    let ids: Vec<u64> = all.iter().map(|c| c.client_id.get()).collect();
    assert_eq!(ids, vec![1, 2, 4]);
}

#[tokio::test]
async fn find_all_returns_records_in_id_order() {
    let store = MemoryStore::new();
    for (id, email) in [(5, "e@x.test"), (2, "b@x.test"), (9, "i@x.test")] {
        store.insert_one(sample(id, email)).await.unwrap();
    }
    let ids: Vec<u64> = store
        .find_all()
        .await
        .unwrap()
        .iter()
        .map(|c| c.client_id.get())
        .collect();
    assert_eq!(ids, vec![2, 5, 9]);
}

#[tokio::test]
async fn snapshot_survives_a_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clients.json");

    {
        let store = MemoryStore::open(&path).unwrap();
        store.insert_one(sample(1, "a@example.com")).await.unwrap();
        store.insert_one(sample(2, "b@example.com")).await.unwrap();
    }

    let store = MemoryStore::open(&path).unwrap();
    assert_eq!(
        store.find_max_client_id().await.unwrap(),
        Some(ClientId::new(2))
    );
    let all = store.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], sample(1, "a@example.com"));
}

#[tokio::test]
async fn missing_snapshot_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = MemoryStore::open(dir.path().join("absent.json")).unwrap();
    assert!(store.find_all().await.unwrap().is_empty());
}

#[test]
fn corrupt_snapshot_is_reported_not_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clients.json");
    std::fs::write(&path, b"not json").unwrap();

    let err = MemoryStore::open(&path).unwrap_err();
    assert!(matches!(err, Error::StoreUnavailable { .. }));
}
