//! Randomized backtracking search for a single Hamiltonian cycle through a
//! [`CompatibilityGraph`], reported as gift pairings.
//!
//! The start nodes are tried in shuffled order, and at every step the
//! remaining candidates are shuffled before being tried, so repeated calls on
//! the same graph are unlikely to return the same cycle. The search is still
//! exhaustive: if no cycle exists every start node and branch is explored
//! before [`Unsolvable::NoPath`] is reported.
//!
//! # Example
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use secret_santa::graph::{hamiltonian::pairings, CompatibilityGraph};
//!
//! let graph = CompatibilityGraph::from_exclusions(vec![
//!     ("Ross", vec!["Joey"]),
//!     ("Joey", vec!["Chandler"]),
//!     ("Chandler", vec!["Ross"]),
//! ]);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let pairs = pairings(&graph, &mut rng).unwrap();
//!
//! // Only Ross -> Chandler -> Joey -> Ross avoids every exclusion.
//! assert_eq!(pairs.len(), 3);
//! for pair in &pairs {
//!     let expected = match pair.from {
//!         "Ross" => "Chandler",
//!         "Chandler" => "Joey",
//!         _ => "Ross",
//!     };
//!     assert_eq!(pair.to, expected);
//! }
//! ```
use std::fmt;

use log::{debug, trace};

use crate::error::{Result, Unsolvable};
use crate::graph::CompatibilityGraph;
use crate::shuffle::{shuffle_slice, Shuffle};

/// `from` gives a gift to `to`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pairing<P> {
    pub from: P,
    pub to: P,
}

impl<P> Pairing<P> {
    pub fn new(from: P, to: P) -> Self {
        Pairing { from, to }
    }
}

impl<P: fmt::Display> fmt::Display for Pairing<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Finds one Hamiltonian cycle through `graph` and returns it as pairings,
/// ordered along the cycle from its start node.
///
/// # Errors
/// * [`Unsolvable::TooFewNodes`] if the graph has fewer than two nodes.
/// * [`Unsolvable::NoPath`] if no cycle visits every node under the exclusions.
///
/// # Complexity
/// * Time: exponential in the number of nodes in the worst case
/// * Space: O(V) besides the graph
pub fn pairings<P, S>(graph: &CompatibilityGraph<P>, rand: &mut S) -> Result<Vec<Pairing<P>>>
where
    P: Clone,
    S: Shuffle + ?Sized,
{
    let n = graph.len();
    if n < 2 {
        debug!("refusing to search a graph with {} node(s)", n);
        return Err(Unsolvable::TooFewNodes.into());
    }

    debug!("searching for a gift cycle through {} participants", n);
    let mut search = CycleSearch::new(graph, rand);

    let mut starts: Vec<usize> = (0..n).collect();
    shuffle_slice(&mut *search.rand, &mut starts);

    for start in starts {
        trace!("trying start node {}", start);
        if let Some(cycle) = search.run(start) {
            debug!("found gift cycle after {} dead ends", search.dead_ends);
            return Ok(search.to_pairings(&cycle));
        }
    }

    debug!(
        "no gift cycle exists; exhausted {} dead ends",
        search.dead_ends
    );
    Err(Unsolvable::NoPath.into())
}

/// Mutable state for one search. `visited` and `path` follow a strict
/// push/pop discipline so sibling branches never observe each other's marks.
struct CycleSearch<'g, 'r, P, S: ?Sized> {
    graph: &'g CompatibilityGraph<P>,
    rand: &'r mut S,
    visited: Vec<bool>,
    path: Vec<usize>,
    dead_ends: usize,
}

impl<'g, 'r, P, S> CycleSearch<'g, 'r, P, S>
where
    P: Clone,
    S: Shuffle + ?Sized,
{
    fn new(graph: &'g CompatibilityGraph<P>, rand: &'r mut S) -> Self {
        let n = graph.len();
        CycleSearch {
            graph,
            rand,
            visited: vec![false; n],
            path: Vec::with_capacity(n),
            dead_ends: 0,
        }
    }

    /// Searches for a cycle that begins and ends at `start`. On success returns
    /// the visiting order, starting with `start`.
    fn run(&mut self, start: usize) -> Option<Vec<usize>> {
        self.visited.iter_mut().for_each(|v| *v = false);
        self.path.clear();
        self.path.push(start);

        // The start node is current but never marked visited; it stays
        // available as the closing target.
        if self.dfs(start, start, 0) {
            Some(self.path.clone())
        } else {
            None
        }
    }

    fn dfs(&mut self, start: usize, current: usize, visited_count: usize) -> bool {
        let mut next_candidates = self.graph.candidate_indices(current, start, &self.visited);
        shuffle_slice(&mut *self.rand, &mut next_candidates);

        if visited_count == self.graph.len() - 1 {
            if self.graph.has_edge_between(current, start) {
                return true;
            }
            // Everyone has a giver except the start node, but the current
            // node cannot give to it.
            trace!("cannot close cycle from {} back to {}", current, start);
            self.dead_ends += 1;
            return false;
        }

        for next in next_candidates {
            self.visited[next] = true;
            self.path.push(next);

            if self.dfs(start, next, visited_count + 1) {
                return true;
            }

            // backtrack
            self.path.pop();
            self.visited[next] = false;
        }

        self.dead_ends += 1;
        false
    }

    fn to_pairings(&self, cycle: &[usize]) -> Vec<Pairing<P>> {
        let n = cycle.len();
        (0..n)
            .map(|i| {
                Pairing::new(
                    self.graph.node(cycle[i]).clone(),
                    self.graph.node(cycle[(i + 1) % n]).clone(),
                )
            })
            .collect()
    }
}
