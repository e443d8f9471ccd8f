//! Repository layer
//!
//! One module per entity family. All functions take a `&Connection` (a
//! `&Transaction` coerces) and return hydrated core models. Pagination
//! functions accept a decoded after-key and a raw limit; cursor handling
//! lives in the engine.

pub mod engagement_repo;
pub mod follow_repo;
pub mod tweet_repo;
pub mod user_repo;

pub use engagement_repo::EngagementRepo;
pub use follow_repo::FollowRepo;
pub use tweet_repo::TweetRepo;
pub use user_repo::UserRepo;

/// After-key for recency-ordered pages: (created_at micros, id)
///
/// The id tiebreak keeps the ordering total when two rows share a timestamp.
pub type RecencyKey = (i64, String);
