//! Display name resolution.
//!
//! Names are not unique keys. A lookup yields nothing, a single person,
//! or a list of candidates the caller has to choose from.

use crate::error::ResolveError;
use crate::store::{name_key, EntityStore};
use degrees_core::{Person, PersonId};
use serde::{Deserialize, Serialize};

/// A person sharing the looked-up name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<u16>,
}

impl From<&Person> for Candidate {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id.clone(),
            name: person.name.clone(),
            birth: person.birth,
        }
    }
}

/// Outcome of resolving a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    NotFound,
    Unique(PersonId),
    /// Two or more people share the name. Sorted by id.
    Ambiguous(Vec<Candidate>),
}

/// Resolves display names against a store.
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    store: &'a EntityStore,
}

impl<'a> NameResolver<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Looks up a name, ignoring case.
    pub fn resolve(&self, name: &str) -> Resolution {
        let mut candidates: Vec<Candidate> = self
            .store
            .people_named(&name_key(name))
            .map(Candidate::from)
            .collect();
        candidates.sort_by(|a, b| a.id.cmp(&b.id));

        match candidates.len() {
            0 => Resolution::NotFound,
            1 => Resolution::Unique(candidates.remove(0).id),
            _ => Resolution::Ambiguous(candidates),
        }
    }

    /// Resolves a name that must match exactly one person.
    pub fn resolve_one(&self, name: &str) -> Result<PersonId, ResolveError> {
        match self.resolve(name) {
            Resolution::NotFound => Err(ResolveError::NameNotFound(name.to_string())),
            Resolution::Unique(id) => Ok(id),
            Resolution::Ambiguous(candidates) => Err(ResolveError::Ambiguous {
                name: name.to_string(),
                candidates,
            }),
        }
    }

    /// Settles a name using an id picked by the caller.
    ///
    /// The id must belong to one of the people carrying that name.
    pub fn choose(&self, name: &str, chosen: &str) -> Result<PersonId, ResolveError> {
        let candidates = match self.resolve(name) {
            Resolution::NotFound => return Err(ResolveError::NameNotFound(name.to_string())),
            Resolution::Unique(id) => vec![id],
            Resolution::Ambiguous(candidates) => candidates.into_iter().map(|c| c.id).collect(),
        };

        candidates
            .into_iter()
            .find(|id| id.as_str() == chosen.trim())
            .ok_or_else(|| ResolveError::NotACandidate {
                name: name.to_string(),
                id: chosen.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> EntityStore {
        let mut store = EntityStore::new();
        store.add_person("129", "Tom Cruise", Some(1962));
        store.add_person("158", "Tom Hanks", Some(1956));
        store.add_person("2001", "Tom Hanks", Some(1980));
        store
    }

    #[test]
    fn test_not_found() {
        let store = store();
        let resolver = NameResolver::new(&store);

        assert_eq!(resolver.resolve("Nobody"), Resolution::NotFound);
        assert_eq!(
            resolver.resolve_one("Nobody"),
            Err(ResolveError::NameNotFound("Nobody".to_string()))
        );
    }

    #[test]
    fn test_unique_ignores_case() {
        let store = store();
        let resolver = NameResolver::new(&store);

        assert_eq!(
            resolver.resolve("tom CRUISE"),
            Resolution::Unique(PersonId::new("129"))
        );
    }

    #[test]
    fn test_ambiguous_lists_every_candidate() {
        let store = store();
        let resolver = NameResolver::new(&store);

        let Resolution::Ambiguous(candidates) = resolver.resolve("Tom Hanks") else {
            panic!("expected an ambiguous resolution");
        };
        let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["158", "2001"]);
        assert_eq!(candidates[0].birth, Some(1956));

        assert!(matches!(
            resolver.resolve_one("Tom Hanks"),
            Err(ResolveError::Ambiguous { .. })
        ));
    }

    #[test]
    fn test_choose_accepts_only_candidates() {
        let store = store();
        let resolver = NameResolver::new(&store);

        assert_eq!(
            resolver.choose("Tom Hanks", "2001"),
            Ok(PersonId::new("2001"))
        );
        assert_eq!(
            resolver.choose("Tom Hanks", "129"),
            Err(ResolveError::NotACandidate {
                name: "Tom Hanks".to_string(),
                id: "129".to_string(),
            })
        );
        assert!(resolver.choose("Nobody", "129").is_err());
    }
}
