//! Degrees Core - records of the membership graph
//!
//! This crate defines the two entity kinds the graph is built from:
//! people, and the groups (movies) they appear in together. Records are
//! plain data; relationships between them live in `degrees-graph`.
//!
//! # Example
//!
//! ```
//! use degrees_core::{Group, Person};
//!
//! let person = Person::new("102", "Kevin Bacon", Some(1958));
//! let group = Group::new("104257", "A Few Good Men", Some(1992));
//!
//! assert_eq!(person.id.as_str(), "102");
//! assert_eq!(group.title, "A Few Good Men");
//! ```

mod record;

pub use record::{parse_year, Entity, Group, GroupId, Person, PersonId};
