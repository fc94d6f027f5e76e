//! The entity store.
//!
//! `EntityStore` wraps an undirected petgraph graph whose nodes are people
//! and groups and whose edges are memberships. Because an undirected edge is
//! visible from both endpoints, "groups of a person" and "members of a
//! group" are both adjacency lookups and can never disagree.

use degrees_core::{Entity, Group, GroupId, Person, PersonId};
use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Index of an entity in the underlying graph.
pub type NodeId = NodeIndex;

/// Normalizes a display name for lookup.
pub(crate) fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// In-memory store of people, groups and their memberships.
///
/// Built once by a loader, then shared read-only by resolvers and
/// search engines.
#[derive(Debug, Clone)]
pub struct EntityStore {
    /// People and groups as nodes, memberships as edges.
    pub(crate) graph: UnGraph<Entity, ()>,

    /// Maps person ids to graph nodes.
    people: HashMap<PersonId, NodeId>,

    /// Maps group ids to graph nodes.
    groups: HashMap<GroupId, NodeId>,

    /// Maps lower-cased display names to person nodes.
    name_index: HashMap<String, Vec<NodeId>>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
            people: HashMap::new(),
            groups: HashMap::new(),
            name_index: HashMap::new(),
        }
    }

    /// Inserts a person, or overwrites the record with the same id.
    ///
    /// Overwriting keeps the person's memberships and moves the id to the
    /// new name in the name index.
    pub fn add_person(
        &mut self,
        id: impl Into<PersonId>,
        name: impl Into<String>,
        birth: Option<u16>,
    ) -> NodeId {
        let person = Person::new(id, name, birth);
        let key = name_key(&person.name);

        let index = match self.people.get(&person.id).copied() {
            Some(index) => {
                let old_key = self.person_at(index).map(|old| name_key(&old.name));
                if let Some(old_key) = old_key.filter(|old_key| *old_key != key) {
                    self.unindex_name(&old_key, index);
                }
                self.graph[index] = Entity::Person(person);
                index
            }
            None => {
                let id = person.id.clone();
                let index = self.graph.add_node(Entity::Person(person));
                self.people.insert(id, index);
                index
            }
        };

        let named = self.name_index.entry(key).or_default();
        if !named.contains(&index) {
            named.push(index);
        }

        index
    }

    /// Inserts a group, or overwrites the record with the same id.
    pub fn add_group(
        &mut self,
        id: impl Into<GroupId>,
        title: impl Into<String>,
        year: Option<u16>,
    ) -> NodeId {
        let group = Group::new(id, title, year);

        match self.groups.get(&group.id).copied() {
            Some(index) => {
                self.graph[index] = Entity::Group(group);
                index
            }
            None => {
                let id = group.id.clone();
                let index = self.graph.add_node(Entity::Group(group));
                self.groups.insert(id, index);
                index
            }
        }
    }

    /// Links a person to a group.
    ///
    /// Returns `false` and leaves the store untouched when either id is
    /// unknown. Linking an already linked pair is a no-op that returns `true`.
    pub fn add_membership(&mut self, person: &str, group: &str) -> bool {
        let (Some(&person), Some(&group)) = (self.people.get(person), self.groups.get(group))
        else {
            return false;
        };

        self.graph.update_edge(person, group, ());
        true
    }

    /// Gets a person by id.
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.person_at(*self.people.get(id)?)
    }

    /// Gets a group by id.
    pub fn group(&self, id: &str) -> Option<&Group> {
        self.group_at(*self.groups.get(id)?)
    }

    /// Returns every group the person belongs to.
    pub fn groups_of(&self, person: &str) -> Vec<&Group> {
        let Some(&index) = self.people.get(person) else {
            return Vec::new();
        };

        let mut groups: Vec<&Group> = self
            .graph
            .neighbors(index)
            .filter_map(|idx| self.group_at(idx))
            .collect();
        groups.sort_by(|a, b| a.id.cmp(&b.id));
        groups
    }

    /// Returns every member of the group.
    pub fn members_of(&self, group: &str) -> Vec<&Person> {
        let Some(&index) = self.groups.get(group) else {
            return Vec::new();
        };

        let mut members: Vec<&Person> = self
            .graph
            .neighbors(index)
            .filter_map(|idx| self.person_at(idx))
            .collect();
        members.sort_by(|a, b| a.id.cmp(&b.id));
        members
    }

    /// Iterates over all people.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.graph.node_weights().filter_map(Entity::as_person)
    }

    /// Iterates over all groups.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.graph.node_weights().filter_map(Entity::as_group)
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn membership_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns store statistics.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            people: self.person_count(),
            groups: self.group_count(),
            memberships: self.membership_count(),
        }
    }

    pub(crate) fn person_index(&self, id: &str) -> Option<NodeId> {
        self.people.get(id).copied()
    }

    pub(crate) fn person_at(&self, index: NodeId) -> Option<&Person> {
        self.graph.node_weight(index)?.as_person()
    }

    pub(crate) fn group_at(&self, index: NodeId) -> Option<&Group> {
        self.graph.node_weight(index)?.as_group()
    }

    /// People whose lower-cased name equals `key`.
    pub(crate) fn people_named(&self, key: &str) -> impl Iterator<Item = &Person> {
        self.name_index
            .get(key)
            .into_iter()
            .flatten()
            .filter_map(|idx| self.person_at(*idx))
    }

    fn unindex_name(&mut self, key: &str, index: NodeId) {
        if let Some(named) = self.name_index.get_mut(key) {
            named.retain(|&idx| idx != index);
            if named.is_empty() {
                self.name_index.remove(key);
            }
        }
    }
}

/// Store statistics for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub people: usize,
    pub groups: usize,
    pub memberships: usize,
}
