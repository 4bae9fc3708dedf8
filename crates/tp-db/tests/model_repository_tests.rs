//! Integration tests for ModelRepository
mod common;

use crate::common::{create_test_pool, sample_identity, sample_model};

use tp_db::{IdentityRepository, ModelRepository};

use uuid::Uuid;

#[tokio::test]
async fn test_create_and_find_by_id() {
    let pool = create_test_pool().await;
    let identities = IdentityRepository::new(pool.clone());
    let models = ModelRepository::new(pool);

    let owner = sample_identity("owner");
    identities.create(&owner).await.unwrap();

    let record = sample_model(owner.id, "upstream-uid-1");
    models.create(&record).await.unwrap();

    let found = models
        .find_by_id(record.id)
        .await
        .unwrap()
        .expect("model should exist");

    assert_eq!(found.upstream_handle, "upstream-uid-1");
    assert_eq!(found.owner_id, owner.id);
    assert_eq!(found.feature_count, 3);
    assert_eq!(found.sample_count, 10);
    assert_eq!(
        found.feature_names,
        Some(vec!["f1".to_string(), "f2".to_string(), "f3".to_string()])
    );
    assert_eq!(found.train_config, Some(serde_json::json!({"device": "cpu"})));
}

#[tokio::test]
async fn test_find_by_id_unknown() {
    let pool = create_test_pool().await;
    let models = ModelRepository::new(pool);

    let found = models.find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_by_owner_filters_other_identities() {
    let pool = create_test_pool().await;
    let identities = IdentityRepository::new(pool.clone());
    let models = ModelRepository::new(pool);

    let alice = sample_identity("alice");
    let bob = sample_identity("bob");
    identities.create(&alice).await.unwrap();
    identities.create(&bob).await.unwrap();

    models.create(&sample_model(alice.id, "uid-a1")).await.unwrap();
    models.create(&sample_model(alice.id, "uid-a2")).await.unwrap();
    models.create(&sample_model(bob.id, "uid-b1")).await.unwrap();

    let alices = models.find_by_owner(alice.id).await.unwrap();
    assert_eq!(alices.len(), 2);
    assert!(alices.iter().all(|m| m.owner_id == alice.id));

    let bobs = models.find_by_owner(bob.id).await.unwrap();
    assert_eq!(bobs.len(), 1);
    assert_eq!(bobs[0].upstream_handle, "uid-b1");
}

#[tokio::test]
async fn test_optional_metadata_roundtrip_none() {
    let pool = create_test_pool().await;
    let identities = IdentityRepository::new(pool.clone());
    let models = ModelRepository::new(pool);

    let owner = sample_identity("bare");
    identities.create(&owner).await.unwrap();

    let mut record = sample_model(owner.id, "uid-bare");
    record.feature_names = None;
    record.train_config = None;
    models.create(&record).await.unwrap();

    let found = models.find_by_id(record.id).await.unwrap().unwrap();
    assert!(found.feature_names.is_none());
    assert!(found.train_config.is_none());
}
