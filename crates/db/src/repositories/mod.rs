//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument and run as one transaction.
//! Helpers that must compose inside a caller's transaction take
//! `&mut SqliteConnection` instead.

pub mod actor_repo;
pub mod category_repo;
pub mod feature_repo;
pub mod feature_type_repo;
pub mod movie_repo;

pub use actor_repo::ActorRepo;
pub use category_repo::CategoryRepo;
pub use feature_repo::FeatureRepo;
pub use feature_type_repo::FeatureTypeRepo;
pub use movie_repo::MovieRepo;
