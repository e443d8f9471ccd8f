//! Seed import
//!
//! JSON seed format v1 for demo data: users, tweets, follows, likes,
//! retweets. Imports run in a single transaction and are idempotent.

pub mod digest;
pub mod format;
pub mod importer;

pub use digest::compute_seed_digest;
pub use format::SeedV1;
pub use importer::import_seed;
