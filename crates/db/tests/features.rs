//! Integration tests for feature and feature type operations.
//!
//! - Patching name/order without renumbering neighbours
//! - Reordering by id sequence (partial, unknown and repeated ids)
//! - Feature type renames
//! - Cascading feature deletes through actor and movie associations

use cinetag_core::taxonomy::builtin_features;
use cinetag_db::models::actor::CreateActor;
use cinetag_db::models::feature::UpdateFeature;
use cinetag_db::models::movie::CreateMovie;
use cinetag_db::repositories::{ActorRepo, FeatureRepo, FeatureTypeRepo, MovieRepo};
use cinetag_db::seed::seed_taxonomy;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seeded(pool: &SqlitePool) -> Vec<i64> {
    seed_taxonomy(pool, &builtin_features()).await.unwrap();
    FeatureRepo::list_with_types(pool)
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.feature.id)
        .collect()
}

async fn order_of(pool: &SqlitePool, id: i64) -> i64 {
    FeatureRepo::find_by_id(pool, id)
        .await
        .unwrap()
        .expect("feature should exist")
        .sort_order
}

// ---------------------------------------------------------------------------
// Test: update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_update_feature_patches_only_supplied_fields(pool: SqlitePool) {
    let ids = seeded(&pool).await;

    let updated = FeatureRepo::update(
        &pool,
        ids[0],
        &UpdateFeature {
            name: Some("Flame".to_string()),
            order: None,
        },
    )
    .await
    .unwrap()
    .expect("feature should exist");

    assert_eq!(updated.feature.name, "Flame");
    assert_eq!(updated.feature.sort_order, 1);
    assert_eq!(updated.feature.color, "#ef4444");
    assert_eq!(updated.types.len(), 3);

    let updated = FeatureRepo::update(
        &pool,
        ids[0],
        &UpdateFeature {
            name: None,
            order: Some(4),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.feature.name, "Flame");
    assert_eq!(updated.feature.sort_order, 4);

    // Neighbours are not renumbered.
    assert_eq!(order_of(&pool, ids[3]).await, 4);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_feature_returns_none(pool: SqlitePool) {
    seeded(&pool).await;
    let result = FeatureRepo::update(&pool, 9999, &UpdateFeature::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Test: reorder
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_partial_reorder_leaves_unlisted_features(pool: SqlitePool) {
    let ids = seeded(&pool).await;

    let updated = FeatureRepo::reorder(&pool, &[ids[2], ids[0]]).await.unwrap();
    assert_eq!(updated, 2);

    assert_eq!(order_of(&pool, ids[2]).await, 1);
    assert_eq!(order_of(&pool, ids[0]).await, 2);
    assert_eq!(order_of(&pool, ids[1]).await, 2);
    assert_eq!(order_of(&pool, ids[3]).await, 4);
    assert_eq!(order_of(&pool, ids[4]).await, 5);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_full_reorder_sets_positions(pool: SqlitePool) {
    let ids = seeded(&pool).await;
    let reversed: Vec<i64> = ids.iter().rev().copied().collect();

    FeatureRepo::reorder(&pool, &reversed).await.unwrap();

    let listed: Vec<i64> = FeatureRepo::list_with_types(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.feature.id)
        .collect();
    assert_eq!(listed, reversed);

    for (position, id) in (1_i64..).zip(&reversed) {
        assert_eq!(order_of(&pool, *id).await, position);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_reorder_skips_unknown_ids(pool: SqlitePool) {
    let ids = seeded(&pool).await;

    let updated = FeatureRepo::reorder(&pool, &[9999, ids[4]]).await.unwrap();
    assert_eq!(updated, 1);

    // The unknown id still occupies position 1.
    assert_eq!(order_of(&pool, ids[4]).await, 2);
    assert_eq!(FeatureRepo::count(&pool).await.unwrap(), 5);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_reorder_is_idempotent(pool: SqlitePool) {
    let ids = seeded(&pool).await;
    let sequence = [ids[1], ids[0], ids[2], ids[4], ids[3]];

    FeatureRepo::reorder(&pool, &sequence).await.unwrap();
    let first = FeatureRepo::list_with_types(&pool).await.unwrap();
    FeatureRepo::reorder(&pool, &sequence).await.unwrap();
    let second = FeatureRepo::list_with_types(&pool).await.unwrap();

    let first: Vec<_> = first.into_iter().map(|f| f.feature).collect();
    let second: Vec<_> = second.into_iter().map(|f| f.feature).collect();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Test: feature types
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_rename_feature_type(pool: SqlitePool) {
    seeded(&pool).await;
    let features = FeatureRepo::list_with_types(&pool).await.unwrap();
    let middle = &features[1].types[1];

    let renamed = FeatureTypeRepo::update_name(&pool, middle.id, "Clay")
        .await
        .unwrap()
        .expect("type should exist");
    assert_eq!(renamed.name, "Clay");
    assert_eq!(renamed.shade, middle.shade);
    assert_eq!(renamed.feature_id, middle.feature_id);

    let found = FeatureTypeRepo::find_by_id(&pool, middle.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "Clay");

    let missing = FeatureTypeRepo::update_name(&pool, 9999, "Nope")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_types_listed_light_middle_dark_regardless_of_insert_order(pool: SqlitePool) {
    let feature_id: i64 = sqlx::query_scalar(
        "INSERT INTO features (name, color, sort_order) VALUES ('Void', '#000', 1) RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    for (name, shade) in [("D", "dark"), ("L", "light"), ("M", "middle")] {
        sqlx::query("INSERT INTO feature_types (feature_id, name, shade) VALUES (?, ?, ?)")
            .bind(feature_id)
            .bind(name)
            .bind(shade)
            .execute(&pool)
            .await
            .unwrap();
    }

    let features = FeatureRepo::list_with_types(&pool).await.unwrap();
    let names: Vec<&str> = features[0].types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["L", "M", "D"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_shade_is_rejected_by_schema(pool: SqlitePool) {
    seeded(&pool).await;
    let result = sqlx::query("INSERT INTO feature_types (feature_id, name, shade) VALUES (1, 'X', 'pale')")
        .execute(&pool)
        .await;
    let err = result.unwrap_err();
    assert!(err
        .as_database_error()
        .is_some_and(|e| e.is_foreign_key_violation()));
}

// ---------------------------------------------------------------------------
// Test: cascade delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_feature_cascades_to_associations(pool: SqlitePool) {
    seeded(&pool).await;
    let features = FeatureRepo::list_with_types(&pool).await.unwrap();
    let fire = &features[0];
    let earth = &features[1];
    let fire_light = fire.types[0].id;
    let earth_dark = earth.types[2].id;

    let actor = ActorRepo::create(
        &pool,
        &CreateActor {
            name: "Ada".to_string(),
            feature_type_ids: vec![fire_light, earth_dark],
            category_ids: vec![],
        },
    )
    .await
    .unwrap();
    let movie = MovieRepo::create(
        &pool,
        &CreateMovie {
            code: "M001".to_string(),
            name: "Heat".to_string(),
            actor_ids: vec![actor.actor.id],
            feature_type_ids: vec![fire_light, earth_dark],
        },
    )
    .await
    .unwrap();

    assert!(FeatureRepo::delete(&pool, fire.feature.id).await.unwrap());

    assert!(FeatureRepo::find_by_id(&pool, fire.feature.id)
        .await
        .unwrap()
        .is_none());
    for feature_type in &fire.types {
        assert!(FeatureTypeRepo::find_by_id(&pool, feature_type.id)
            .await
            .unwrap()
            .is_none());
    }

    let actor = ActorRepo::find_by_id(&pool, actor.actor.id)
        .await
        .unwrap()
        .expect("actor survives");
    let actor_types: Vec<i64> = actor.feature_types.iter().map(|t| t.id).collect();
    assert_eq!(actor_types, [earth_dark]);

    let movie = MovieRepo::find_by_id(&pool, movie.movie.id)
        .await
        .unwrap()
        .expect("movie survives");
    let movie_types: Vec<i64> = movie.feature_types.iter().map(|t| t.id).collect();
    assert_eq!(movie_types, [earth_dark]);
    assert_eq!(movie.actors.len(), 1);

    assert_eq!(FeatureRepo::count(&pool).await.unwrap(), 4);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_missing_feature_returns_false(pool: SqlitePool) {
    seeded(&pool).await;
    assert!(!FeatureRepo::delete(&pool, 9999).await.unwrap());
    assert_eq!(FeatureRepo::count(&pool).await.unwrap(), 5);
}
