//! Search results.

use crate::store::EntityStore;
use degrees_core::{GroupId, PersonId};
use serde::{Deserialize, Serialize};

/// One step of a path: the group linking the previous person to `person`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hop {
    pub link: GroupId,
    pub person: PersonId,
}

impl Hop {
    pub fn new(link: impl Into<GroupId>, person: impl Into<PersonId>) -> Self {
        Self {
            link: link.into(),
            person: person.into(),
        }
    }
}

/// An ordered chain of hops from a source person to a target person.
///
/// The source itself is not part of the path, so a path from a person to
/// themself is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    pub hops: Vec<Hop>,
}

impl Path {
    pub fn new(hops: Vec<Hop>) -> Self {
        Self { hops }
    }

    /// Degrees of separation: the number of hops.
    pub fn degrees(&self) -> usize {
        self.hops.len()
    }

    /// Resolves each hop to display names for presentation.
    ///
    /// Ids missing from the store are shown as-is.
    pub fn describe(&self, store: &EntityStore, source: &str) -> Vec<HopDescription> {
        let name_of = |id: &str| {
            store
                .person(id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| id.to_string())
        };

        let mut previous = name_of(source);
        self.hops
            .iter()
            .enumerate()
            .map(|(i, hop)| {
                let current = name_of(hop.person.as_str());
                let link = store
                    .group(hop.link.as_str())
                    .map(|g| g.title.clone())
                    .unwrap_or_else(|| hop.link.to_string());
                let from = std::mem::replace(&mut previous, current.clone());
                HopDescription {
                    step: i + 1,
                    from,
                    to: current,
                    link,
                }
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Hop;
    type IntoIter = std::slice::Iter<'a, Hop>;

    fn into_iter(self) -> Self::IntoIter {
        self.hops.iter()
    }
}

/// A hop with names and titles filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopDescription {
    pub step: usize,
    pub from: String,
    pub to: String,
    pub link: String,
}

impl std::fmt::Display for HopDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} and {} starred in {}",
            self.step, self.from, self.to, self.link
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_chains_names() {
        let mut store = EntityStore::new();
        store.add_person("1", "Kevin Bacon", Some(1958));
        store.add_person("2", "Tom Hanks", Some(1956));
        store.add_person("3", "Sally Field", Some(1946));
        store.add_group("g", "Apollo 13", Some(1995));
        store.add_group("h", "Forrest Gump", Some(1994));

        let path = Path::new(vec![Hop::new("g", "2"), Hop::new("h", "3")]);
        let lines: Vec<String> = path
            .describe(&store, "1")
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(path.degrees(), 2);
        assert_eq!(
            lines,
            vec![
                "1: Kevin Bacon and Tom Hanks starred in Apollo 13",
                "2: Tom Hanks and Sally Field starred in Forrest Gump",
            ]
        );
    }

    #[test]
    fn test_empty_path() {
        let store = EntityStore::new();
        let path = Path::default();
        assert_eq!(path.degrees(), 0);
        assert!(path.describe(&store, "1").is_empty());
    }

    #[test]
    fn test_path_serializes_as_hop_list() {
        let path = Path::new(vec![Hop::new("g", "2")]);
        assert_eq!(
            serde_json::to_string(&path).unwrap(),
            r#"[{"link":"g","person":"2"}]"#
        );
    }
}
