//! Breadth-first shortest-path search.
//!
//! The engine explores people in order of hop distance from the source,
//! using a FIFO [`Frontier`] and an explored set. Search nodes live in an
//! arena and point at their parent by handle, so the path is recovered by
//! walking handles back to the root once the target is popped.

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::path::{Hop, Path};
use crate::store::{EntityStore, NodeId};
use degrees_core::PersonId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;
use tracing::debug;

/// Handle of a node in the search arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeHandle(usize);

/// A state reached during search. Immutable once allocated.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    /// Group used to reach this person. `None` only for the root.
    link: Option<NodeId>,
    person: NodeId,
    parent: Option<NodeHandle>,
}

/// Append-only storage for the nodes of one search.
#[derive(Debug, Default)]
struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    fn alloc(&mut self, node: SearchNode) -> NodeHandle {
        self.nodes.push(node);
        NodeHandle(self.nodes.len() - 1)
    }

    fn get(&self, handle: NodeHandle) -> Option<SearchNode> {
        self.nodes.get(handle.0).copied()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// Outcome of a single search, with exploration statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Shortest path, or `None` when the two people are not connected.
    pub path: Option<Path>,
    /// Number of distinct people popped from the frontier.
    pub explored: usize,
    /// Number of search nodes created.
    pub nodes_created: usize,
    /// Largest frontier size observed.
    pub frontier_peak: usize,
    /// Time taken in milliseconds.
    pub query_time_ms: u64,
}

impl SearchReport {
    pub fn is_connected(&self) -> bool {
        self.path.is_some()
    }
}

/// Shortest-path search over a loaded store.
///
/// The engine only borrows the store; every search owns its own frontier,
/// arena and explored set, so engines over the same store are independent.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    store: &'a EntityStore,
}

impl<'a> SearchEngine<'a> {
    pub fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Finds a minimum-hop path between two people.
    ///
    /// Returns `Ok(None)` when they are not connected and an empty path when
    /// `source == target`.
    pub fn shortest_path(&self, source: &str, target: &str) -> Result<Option<Path>, SearchError> {
        self.search(source, target).map(|report| report.path)
    }

    /// Runs the search and reports how much of the graph it explored.
    pub fn search(&self, source: &str, target: &str) -> Result<SearchReport, SearchError> {
        let start = Instant::now();

        let source_index = self.lookup(source)?;
        let target_index = self.lookup(target)?;

        let mut arena = NodeArena::default();
        let mut frontier = Frontier::new();
        let mut explored: HashSet<NodeId> = HashSet::new();

        frontier.push(arena.alloc(SearchNode {
            link: None,
            person: source_index,
            parent: None,
        }));
        let mut frontier_peak = frontier.len();

        let path = loop {
            if frontier.is_empty() {
                break None;
            }

            let handle = frontier.pop()?;
            let current = self.node(&arena, handle)?;

            // Duplicates of an explored person can still be queued.
            if !explored.insert(current.person) {
                continue;
            }

            if current.person == target_index {
                break Some(self.reconstruct(&arena, handle)?);
            }

            for (link, neighbor) in self.store.neighbor_indexes(current.person) {
                if !explored.contains(&neighbor) {
                    frontier.push(arena.alloc(SearchNode {
                        link: Some(link),
                        person: neighbor,
                        parent: Some(handle),
                    }));
                }
            }
            frontier_peak = frontier_peak.max(frontier.len());
        };

        let report = SearchReport {
            path,
            explored: explored.len(),
            nodes_created: arena.len(),
            frontier_peak,
            query_time_ms: start.elapsed().as_millis() as u64,
        };

        debug!(
            source,
            target,
            degrees = report.path.as_ref().map(Path::degrees),
            explored = report.explored,
            nodes = report.nodes_created,
            "search finished"
        );

        Ok(report)
    }

    fn lookup(&self, id: &str) -> Result<NodeId, SearchError> {
        self.store
            .person_index(id)
            .ok_or_else(|| SearchError::UnknownPerson(PersonId::new(id)))
    }

    fn node(&self, arena: &NodeArena, handle: NodeHandle) -> Result<SearchNode, SearchError> {
        arena
            .get(handle)
            .ok_or(SearchError::MissingEntity(handle.0))
    }

    /// Walks parent handles back to the root and returns hops in
    /// source-to-target order.
    fn reconstruct(&self, arena: &NodeArena, handle: NodeHandle) -> Result<Path, SearchError> {
        let mut hops = Vec::new();
        let mut cursor = Some(handle);

        while let Some(handle) = cursor {
            let node = self.node(arena, handle)?;
            if let Some(link) = node.link {
                let group = self
                    .store
                    .group_at(link)
                    .ok_or(SearchError::MissingEntity(link.index()))?;
                let person = self
                    .store
                    .person_at(node.person)
                    .ok_or(SearchError::MissingEntity(node.person.index()))?;
                hops.push(Hop::new(group.id.clone(), person.id.clone()));
            }
            cursor = node.parent;
        }

        hops.reverse();
        Ok(Path::new(hops))
    }
}
