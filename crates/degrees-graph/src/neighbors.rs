//! Neighbor expansion through shared group membership.

use crate::store::{EntityStore, NodeId};
use degrees_core::{GroupId, PersonId};
use serde::{Deserialize, Serialize};

/// A person reachable in one hop, and the group linking them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Neighbor {
    pub link: GroupId,
    pub person: PersonId,
}

impl EntityStore {
    /// Returns every distinct (group, co-member) pair for a person.
    ///
    /// The person is never listed as their own neighbor. Results are sorted
    /// by group id, then person id. Unknown ids yield an empty list.
    pub fn neighbors_of(&self, person: &str) -> Vec<Neighbor> {
        let Some(index) = self.person_index(person) else {
            return Vec::new();
        };

        self.neighbor_indexes(index)
            .into_iter()
            .filter_map(|(link, member)| {
                Some(Neighbor {
                    link: self.group_at(link)?.id.clone(),
                    person: self.person_at(member)?.id.clone(),
                })
            })
            .collect()
    }

    /// Graph-level expansion used by the search engine.
    pub(crate) fn neighbor_indexes(&self, person: NodeId) -> Vec<(NodeId, NodeId)> {
        let mut pairs: Vec<(NodeId, NodeId)> = self
            .graph
            .neighbors(person)
            .flat_map(move |group| {
                self.graph
                    .neighbors(group)
                    .filter(move |&member| member != person)
                    .map(move |member| (group, member))
            })
            .collect();

        pairs.sort_by(|a, b| self.pair_key(*a).cmp(&self.pair_key(*b)));
        pairs.dedup();
        pairs
    }

    fn pair_key(&self, (link, member): (NodeId, NodeId)) -> (Option<&GroupId>, Option<&PersonId>) {
        (
            self.group_at(link).map(|g| &g.id),
            self.person_at(member).map(|p| &p.id),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbor(link: &str, person: &str) -> Neighbor {
        Neighbor {
            link: GroupId::new(link),
            person: PersonId::new(person),
        }
    }

    #[test]
    fn test_neighbors_across_groups() {
        let mut store = EntityStore::new();
        for (id, name) in [("a", "A"), ("b", "B"), ("c", "C"), ("d", "D")] {
            store.add_person(id, name, None);
        }
        store.add_group("g", "G", None);
        store.add_group("h", "H", None);
        store.add_membership("a", "g");
        store.add_membership("b", "g");
        store.add_membership("a", "h");
        store.add_membership("b", "h");
        store.add_membership("c", "h");

        assert_eq!(
            store.neighbors_of("a"),
            vec![neighbor("g", "b"), neighbor("h", "b"), neighbor("h", "c")]
        );
        assert!(store.neighbors_of("d").is_empty());
    }

    #[test]
    fn test_no_self_neighbor() {
        let mut store = EntityStore::new();
        store.add_person("solo", "Solo", None);
        store.add_group("g", "One Person Show", None);
        store.add_membership("solo", "g");

        assert!(store.neighbors_of("solo").is_empty());
    }

    #[test]
    fn test_unknown_person_has_no_neighbors() {
        let store = EntityStore::new();
        assert!(store.neighbors_of("missing").is_empty());
    }
}
