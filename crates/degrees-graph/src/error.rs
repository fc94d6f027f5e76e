//! Error types for resolution and search.

use crate::resolve::Candidate;
use degrees_core::PersonId;
use thiserror::Error;

/// Errors from turning a display name into a person id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("No person named \"{0}\"")]
    NameNotFound(String),

    #[error("\"{name}\" matches {count} people", count = .candidates.len())]
    Ambiguous {
        name: String,
        candidates: Vec<Candidate>,
    },

    #[error("{id} is not one of the people named \"{name}\"")]
    NotACandidate { name: String, id: String },
}

/// Errors from the search engine.
///
/// Not finding a path is not an error; see [`crate::SearchReport`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Unknown person id: {0}")]
    UnknownPerson(PersonId),

    /// Popped from an empty frontier. Indicates a bug in the caller.
    #[error("Frontier is empty")]
    EmptyFrontier,

    #[error("Search node refers to a missing entity (index {0})")]
    MissingEntity(usize),
}
