//! One-time taxonomy seeding.
//!
//! The feature table is populated exactly once, on the first startup against
//! an empty database. The whole seed is one transaction whose first insert is
//! conditional on the table still being empty, so two processes racing
//! through startup cannot both seed: the loser inserts nothing, rolls back and
//! reports [`SeedOutcome::AlreadySeeded`].

use std::path::Path;

use cinetag_core::taxonomy::{self, FeatureDefinition, TaxonomySource};
use cinetag_core::types::DbId;

use crate::repositories::FeatureRepo;
use crate::DbPool;

/// Result of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The taxonomy was inserted.
    Seeded { features: usize, feature_types: usize },
    /// Features already existed; nothing was written.
    AlreadySeeded,
}

/// Seed `definitions` if the feature table is empty.
///
/// Feature `order` is the 1-based position in `definitions`. Each feature
/// gets a light, middle and dark type named by
/// [`FeatureDefinition::type_name`].
pub async fn seed_taxonomy(
    pool: &DbPool,
    definitions: &[FeatureDefinition],
) -> Result<SeedOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut feature_types = 0;

    for (order, definition) in (1_i64..).zip(definitions) {
        let feature_id = if order == 1 {
            let claimed = sqlx::query_scalar::<_, DbId>(
                "INSERT INTO features (name, color, sort_order) \
                 SELECT ?, ?, ? WHERE NOT EXISTS (SELECT 1 FROM features) \
                 RETURNING id",
            )
            .bind(&definition.name)
            .bind(&definition.color)
            .bind(order)
            .fetch_optional(&mut *tx)
            .await?;

            match claimed {
                Some(id) => id,
                None => return Ok(SeedOutcome::AlreadySeeded),
            }
        } else {
            sqlx::query_scalar::<_, DbId>(
                "INSERT INTO features (name, color, sort_order) VALUES (?, ?, ?) RETURNING id",
            )
            .bind(&definition.name)
            .bind(&definition.color)
            .bind(order)
            .fetch_one(&mut *tx)
            .await?
        };

        for (shade, name) in definition.planned_types() {
            sqlx::query("INSERT INTO feature_types (feature_id, name, shade) VALUES (?, ?, ?)")
                .bind(feature_id)
                .bind(&name)
                .bind(shade.as_str())
                .execute(&mut *tx)
                .await?;
            feature_types += 1;
        }
    }

    tx.commit().await?;

    Ok(SeedOutcome::Seeded {
        features: definitions.len(),
        feature_types,
    })
}

/// Seed from the taxonomy file at `config_path`, falling back to the built-in
/// features when the file cannot be used.
///
/// Does nothing (and does not read the file) when features already exist.
pub async fn seed_from_config(pool: &DbPool, config_path: &Path) -> Result<SeedOutcome, sqlx::Error> {
    let existing = FeatureRepo::count(pool).await?;
    if existing > 0 {
        tracing::debug!(existing, "Taxonomy already seeded, skipping");
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let resolved = taxonomy::resolve(config_path);
    match &resolved.source {
        TaxonomySource::Config(path) => {
            tracing::info!(path = %path.display(), "Loaded taxonomy definitions");
        }
        TaxonomySource::Builtin(reason) => {
            tracing::warn!(
                path = %config_path.display(),
                error = %reason,
                "Taxonomy config unavailable, falling back to built-in features",
            );
        }
    }

    let outcome = seed_taxonomy(pool, &resolved.features).await?;
    match outcome {
        SeedOutcome::Seeded {
            features,
            feature_types,
        } => tracing::info!(features, feature_types, "Taxonomy seeded"),
        SeedOutcome::AlreadySeeded => {
            tracing::info!("Taxonomy was seeded concurrently, nothing written")
        }
    }
    Ok(outcome)
}
