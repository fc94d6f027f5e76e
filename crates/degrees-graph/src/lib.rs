//! Degrees Graph - who is connected to whom, and how
//!
//! This crate holds the membership graph between people and the groups
//! they share, and answers "what is the shortest chain of shared groups
//! between these two people?".
//!
//! # Architecture
//!
//! The store uses petgraph internally, with people and groups as nodes of
//! one undirected graph and memberships as edges. Additional indexes give:
//! - Person and group lookups by id
//! - Case-insensitive lookups by display name
//!
//! Name resolution and search borrow a finished store; neither mutates it.
//!
//! # Example
//!
//! ```
//! use degrees_graph::{EntityStore, NameResolver, SearchEngine};
//!
//! let mut store = EntityStore::new();
//! store.add_person("1", "Alice", None);
//! store.add_person("2", "Bob", None);
//! store.add_group("m", "Movie", Some(2001));
//! store.add_membership("1", "m");
//! store.add_membership("2", "m");
//!
//! let resolver = NameResolver::new(&store);
//! let alice = resolver.resolve_one("alice").unwrap();
//! let bob = resolver.resolve_one("BOB").unwrap();
//!
//! let path = SearchEngine::new(&store)
//!     .shortest_path(alice.as_str(), bob.as_str())
//!     .unwrap()
//!     .expect("connected");
//! assert_eq!(path.degrees(), 1);
//! ```

mod error;
mod frontier;
mod neighbors;
mod path;
mod resolve;
mod search;
mod store;

pub use error::{ResolveError, SearchError};
pub use frontier::Frontier;
pub use neighbors::Neighbor;
pub use path::{Hop, HopDescription, Path};
pub use resolve::{Candidate, NameResolver, Resolution};
pub use search::{SearchEngine, SearchReport};
pub use store::{EntityStore, NodeId, StoreStats};
