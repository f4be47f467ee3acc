//! Repository → document store pipeline tests.
//!
//! Verifies:
//! - Concurrent creates neither lose writes nor collide on IDs
//! - Itineraries persist loose references without checking them
//! - The email lookup used by registration is not atomic with the insert

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{TimeZone, Utc};

use wayfarer_accounts::{EMAIL_FIELD, User, UserDraft};
use wayfarer_content::{Destination, DestinationDraft, Itinerary, ItineraryDraft};
use wayfarer_core::{DestinationId, UserId};

use crate::document_store::{DocumentStore, InMemoryDocumentStore};
use crate::repository::Repository;

fn shared_store() -> Arc<dyn DocumentStore> {
    Arc::new(InMemoryDocumentStore::new())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_destination_creates_are_all_kept_with_distinct_ids() {
    const N: usize = 64;
    let repo = Repository::<Destination>::new(shared_store());

    let mut handles = Vec::with_capacity(N);
    for i in 0..N {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.create(&DestinationDraft {
                name: Some(format!("destination-{i}")),
                ..Default::default()
            })
            .await
            .unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let listed = repo.list().await.unwrap();
    assert_eq!(listed.len(), N);

    let ids: HashSet<_> = listed.iter().map(|d| d.id).collect();
    assert_eq!(ids.len(), N);
    let names: HashSet<_> = listed.iter().map(|d| d.name.clone()).collect();
    assert_eq!(names.len(), N);
}

#[tokio::test]
async fn itinerary_keeps_dangling_references_and_reversed_dates() {
    let repo = Repository::<Itinerary>::new(shared_store());
    let stops = vec![DestinationId::new(), DestinationId::new()];
    let draft = ItineraryDraft {
        user: Some(UserId::new()),
        destinations: stops.clone(),
        start_date: Some(Utc.with_ymd_and_hms(2025, 9, 20, 0, 0, 0).unwrap()),
        end_date: Some(Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap()),
        notes: Some("backwards on purpose".to_string()),
    };

    let created = repo.create(&draft).await.unwrap();
    assert_eq!(created.destinations, stops);
    assert_eq!(repo.get(created.id).await.unwrap(), Some(created));
}

#[tokio::test]
async fn lookup_then_insert_is_not_atomic() {
    let repo = Repository::<User>::new(shared_store());
    let draft = UserDraft {
        name: Some("Twin".to_string()),
        email: Some("twin@example.com".to_string()),
        password: Some("pw".to_string()),
    };

    // Both callers observe "no such email" before either inserts.
    let first_check = repo.find_by_field(EMAIL_FIELD, "twin@example.com").await.unwrap();
    let second_check = repo.find_by_field(EMAIL_FIELD, "twin@example.com").await.unwrap();
    assert!(first_check.is_none() && second_check.is_none());

    repo.create(&draft).await.unwrap();
    repo.create(&draft).await.unwrap();

    let twins = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .filter(|u| u.email == "twin@example.com")
        .count();
    assert_eq!(twins, 2);
}
