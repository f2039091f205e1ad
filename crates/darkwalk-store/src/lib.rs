//! Darkwalk Store — PostgreSQL persistence.
//!
//! Implements the progress and story repository traits over a `PgPool`.
//! Queries are runtime-bound so the workspace builds without a database.

pub mod progress_store;
pub mod schema;
pub mod story_store;

pub use progress_store::PgProgressRepository;
pub use story_store::PgStoryRepository;
