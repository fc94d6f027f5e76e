//! Degrees Loader - builds an entity store from CSV files
//!
//! A data directory holds three relations:
//!
//! | file         | columns                |
//! |--------------|------------------------|
//! | `people.csv` | `id`, `name`, `birth`  |
//! | `movies.csv` | `id`, `title`, `year`  |
//! | `stars.csv`  | `person_id`, `movie_id`|
//!
//! Source data is loosely curated, so rows that cannot be read or that
//! point at unknown ids are skipped and counted rather than failing the load.

mod config;
mod error;
mod loader;
mod rows;

pub use config::LoadConfig;
pub use error::{LoadError, Result};
pub use loader::{load_directory, load_directory_with, load_from_readers, LoadResult};
pub use rows::{GroupRow, MembershipRow, PersonRow};
