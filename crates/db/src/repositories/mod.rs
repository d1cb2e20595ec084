//! Repositories, one per table.
//!
//! Every operation pings the pool first (see [`crate::health_check`]) and
//! then issues a single parameterized statement.

pub mod episode_resource_repo;
pub mod last_watched_repo;
pub mod series_list_repo;
pub mod series_repo;
pub mod user_repo;

pub use episode_resource_repo::EpisodeResourceRepo;
pub use last_watched_repo::LastWatchedRepo;
pub use series_list_repo::SeriesListRepo;
pub use series_repo::SeriesRepo;
pub use user_repo::UserRepo;
