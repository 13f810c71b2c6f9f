//! Provides the traversal driver, generic over frontier policy.

use std::collections::{HashMap, HashSet};

use crate::errors::{Result, SearchError};
use crate::frontier::{BreadthFrontier, DepthFrontier, Frontier, PriorityFrontier};
use crate::path::Traversal;
use crate::traits::SearchNode;

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if self.current >= self.maximum {
            Err(SearchError::StepLimitExhausted(self.current))
        } else {
            Ok(())
        }
    }
}

/// Implementation of traversal, using generic components.
///
/// Uses a generic frontier (F) to provide a single driver loop for
/// depth-first, breadth-first, and best-first search. Discovery state
/// lives in side tables owned by the run: each node's parent link is
/// written once, on first discovery, and a node is expanded at most
/// once, which bounds the run on finite graphs even with cycles.
pub struct GraphSearch<N, F>
where
    N: SearchNode,
    F: Frontier<Node = N>,
{
    frontier: F,
    destination: Option<N>,
    visited: HashSet<N>,
    parents: HashMap<N, N>,
    visits: Vec<N>,
    counter: Option<StepLimit>,
}

impl<N, F> GraphSearch<N, F>
where
    N: SearchNode,
    F: Frontier<Node = N>,
{
    pub fn new(origin: N, frontier: F) -> Self {
        let mut search = GraphSearch {
            frontier,
            destination: None,
            visited: HashSet::new(),
            parents: HashMap::new(),
            visits: Vec::new(),
            counter: None,
        };
        search.frontier.push(origin);
        search
    }

    /// Stop the run when this node is popped instead of draining
    /// the frontier.
    pub fn with_destination(mut self, destination: N) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Set a step limit for this search.
    ///
    /// When this many nodes have been expanded, the run will
    /// return an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.counter = Some(StepLimit::new(limit))
    }

    fn is_destination(&self, node: &N) -> bool {
        self.destination.as_ref().map(|d| d == node).unwrap_or(false)
    }

    /// Run the traversal to completion.
    ///
    /// Stops when the destination is popped or the frontier drains,
    /// whichever comes first. The returned [Traversal] holds an
    /// empty path when no destination was reached.
    pub fn run(mut self) -> Result<Traversal<N>> {
        let mut terminal = None;

        while let Some(node) = self.frontier.pop() {
            if self.is_destination(&node) {
                terminal = Some(node);
                break;
            }

            // A node queued more than once is expanded only once.
            if !self.visited.insert(node.clone()) {
                continue;
            }

            self.counter
                .as_mut()
                .map(|c| c.increment())
                .unwrap_or(Ok(()))?;

            tracing::trace!(
                ?node,
                frontier = self.frontier.len(),
                expanded = self.visits.len(),
                "expanding"
            );

            for child in node.children() {
                if self.visited.contains(&child) {
                    continue;
                }

                // First discovery wins; a later path to the same node
                // never rewrites its parent link.
                self.parents
                    .entry(child.clone())
                    .or_insert_with(|| node.clone());
                self.frontier.push(child);
            }

            self.visits.push(node);
        }

        tracing::debug!(
            expanded = self.visits.len(),
            found = terminal.is_some(),
            "traversal finished"
        );

        let path = self.backtrack(terminal);
        Ok(Traversal::new(path, self.visits))
    }

    // Walk the parent chain outward from the terminal node. The
    // origin has no parent entry, so the walk ends there; no terminal
    // node means no chain at all.
    fn backtrack(&self, terminal: Option<N>) -> Vec<N> {
        let mut path = Vec::new();
        let mut node = terminal;

        while let Some(current) = node {
            path.push(current.clone());
            node = self.parents.get(&current).cloned();
        }

        path
    }
}

/// Depth-first search from origin to destination.
///
/// The most recently discovered child is expanded first.
pub fn dfs<N>(origin: N, destination: &N) -> Result<Traversal<N>>
where
    N: SearchNode,
{
    GraphSearch::new(origin, DepthFrontier::new())
        .with_destination(destination.clone())
        .run()
}

/// Breadth-first search from origin to destination.
///
/// Nodes are expanded in discovery order, so the found path has the
/// minimum possible number of edges.
pub fn bfs<N>(origin: N, destination: &N) -> Result<Traversal<N>>
where
    N: SearchNode,
{
    GraphSearch::new(origin, BreadthFrontier::new())
        .with_destination(destination.clone())
        .run()
}

/// Best-first search from origin to destination.
///
/// The next node expanded is always the frontier node the priority
/// function scores greatest; equal scores fall back to push order.
pub fn best_first<N, F>(origin: N, destination: &N, priority: F) -> Result<Traversal<N>>
where
    N: SearchNode,
    F: Fn(&N) -> i64,
{
    GraphSearch::new(origin, PriorityFrontier::with_priority(priority))
        .with_destination(destination.clone())
        .run()
}

/// Visit everything reachable from the origin, breadth-first.
///
/// The result carries no path; [Traversal::visit_order] holds the
/// full exploration order.
pub fn explore<N>(origin: N) -> Result<Traversal<N>>
where
    N: SearchNode,
{
    GraphSearch::new(origin, BreadthFrontier::new()).run()
}
