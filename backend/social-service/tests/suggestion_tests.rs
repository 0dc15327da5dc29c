mod common;

use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use common::seed_user;
use social_service::repository::InMemoryStore;
use social_service::{FollowService, ServiceError, SuggestionConfig, SuggestionService};

fn suggestion_service(store: &InMemoryStore) -> SuggestionService {
    SuggestionService::new(Arc::new(store.clone()), SuggestionConfig::default())
}

fn follow_service(store: &InMemoryStore) -> FollowService {
    FollowService::new(Arc::new(store.clone()), Arc::new(store.clone()))
}

#[tokio::test]
async fn never_suggests_the_actor() {
    let store = InMemoryStore::new();
    let me = seed_user(&store, "me").await;
    for i in 0..12 {
        seed_user(&store, &format!("user{i}")).await;
    }
    let service = suggestion_service(&store);

    // The draw is random; a handful of rounds covers different samples.
    for _ in 0..16 {
        let suggestions = service.suggest(me.id).await.unwrap();
        assert!(suggestions.iter().all(|s| s.id != me.id));
    }
}

#[tokio::test]
async fn never_suggests_already_followed_users() {
    let store = InMemoryStore::new();
    let me = seed_user(&store, "me").await;
    let x = seed_user(&store, "x").await;
    let y = seed_user(&store, "y").await;
    let z = seed_user(&store, "z").await;
    let w = seed_user(&store, "w").await;

    let follows = follow_service(&store);
    follows.toggle_follow(me.id, x.id).await.unwrap();
    follows.toggle_follow(me.id, y.id).await.unwrap();

    let service = suggestion_service(&store);

    // Population {me, x, y, z, w}: the default sample size covers everyone
    // but me, so the filtered result is exactly {z, w}.
    for _ in 0..16 {
        let suggestions = service.suggest(me.id).await.unwrap();
        let ids: HashSet<Uuid> = suggestions.iter().map(|s| s.id).collect();
        assert_eq!(ids, HashSet::from([z.id, w.id]));
    }
}

#[tokio::test]
async fn result_length_is_bounded_by_max_results() {
    let store = InMemoryStore::new();
    let me = seed_user(&store, "me").await;
    for i in 0..20 {
        seed_user(&store, &format!("user{i}")).await;
    }
    let service = suggestion_service(&store);

    // Nothing followed, population is large: always a full page.
    let suggestions = service.suggest(me.id).await.unwrap();
    assert_eq!(suggestions.len(), 4);
}

#[tokio::test]
async fn degrades_gracefully_when_most_candidates_are_followed() {
    let store = InMemoryStore::new();
    let me = seed_user(&store, "me").await;
    let follows = follow_service(&store);
    for i in 0..5 {
        let other = seed_user(&store, &format!("user{i}")).await;
        follows.toggle_follow(me.id, other.id).await.unwrap();
    }
    let service = suggestion_service(&store);

    // Everyone in the population is already followed; the post-draw filter
    // empties the page instead of erroring.
    let suggestions = service.suggest(me.id).await.unwrap();
    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn empty_population_yields_empty_page() {
    let store = InMemoryStore::new();
    let me = seed_user(&store, "me").await;
    let service = suggestion_service(&store);

    let suggestions = service.suggest(me.id).await.unwrap();
    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn unknown_actor_is_not_found() {
    let store = InMemoryStore::new();
    let service = suggestion_service(&store);

    let err = service.suggest(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn suggested_profiles_carry_no_secret_material() {
    let store = InMemoryStore::new();
    let me = seed_user(&store, "me").await;
    for i in 0..6 {
        seed_user(&store, &format!("user{i}")).await;
    }
    let service = suggestion_service(&store);

    let suggestions = service.suggest(me.id).await.unwrap();
    assert!(!suggestions.is_empty());

    let json = serde_json::to_string(&suggestions).unwrap();
    assert!(!json.contains("password"));
    assert!(!json.contains("x-placeholder"));
}

#[tokio::test]
async fn honors_custom_tunables() {
    let store = InMemoryStore::new();
    let me = seed_user(&store, "me").await;
    for i in 0..20 {
        seed_user(&store, &format!("user{i}")).await;
    }
    let service = SuggestionService::new(
        Arc::new(store.clone()),
        SuggestionConfig {
            sample_size: 5,
            max_results: 2,
        },
    );

    let suggestions = service.suggest(me.id).await.unwrap();
    assert_eq!(suggestions.len(), 2);
}
