use std::collections::{BTreeMap, BTreeSet};

/// A directed "may give a gift to" graph built from per-participant exclusion lists.
///
/// Every participant is connected to every other participant unless the other
/// participant appears in their exclusions. Exclusions are directional: `A`
/// excluding `B` says nothing about whether `B` may give to `A`.
///
/// # Example
/// ```
/// use std::collections::BTreeMap;
/// use secret_santa::graph::CompatibilityGraph;
///
/// let mut exclusions = BTreeMap::new();
/// exclusions.insert("Ross", vec!["Joey"]);
/// exclusions.insert("Joey", vec![]);
/// exclusions.insert("Chandler", vec![]);
///
/// let graph = CompatibilityGraph::from_exclusions(exclusions);
/// assert_eq!(graph.len(), 3);
/// assert!(graph.has_edge(&"Ross", &"Chandler"));
/// assert!(!graph.has_edge(&"Ross", &"Joey"));
/// assert!(graph.has_edge(&"Joey", &"Ross"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompatibilityGraph<P> {
    /// Participants in ascending order; a participant's index is its position here.
    nodes: Vec<P>,
    /// For each node index, the ascending indices it may give to.
    edges: Vec<Vec<usize>>,
}

impl<P: Ord + Clone> CompatibilityGraph<P> {
    /// Builds the graph from a mapping of participant to excluded participants.
    ///
    /// The keys form the participant set. Duplicate or self exclusions have no
    /// effect, and exclusions naming someone who is not a key are ignored. If a
    /// participant is listed more than once their exclusions are merged.
    pub fn from_exclusions<I, E>(nodes_with_exclusions: I) -> Self
    where
        I: IntoIterator<Item = (P, E)>,
        E: IntoIterator<Item = P>,
    {
        let mut merged: BTreeMap<P, BTreeSet<P>> = BTreeMap::new();
        for (node, exclusions) in nodes_with_exclusions {
            merged.entry(node).or_default().extend(exclusions);
        }

        let nodes: Vec<P> = merged.keys().cloned().collect();
        let edges: Vec<Vec<usize>> = merged
            .values()
            .enumerate()
            .map(|(i, excluded)| {
                nodes
                    .iter()
                    .enumerate()
                    .filter(|&(j, other)| j != i && !excluded.contains(other))
                    .map(|(j, _)| j)
                    .collect()
            })
            .collect();

        CompatibilityGraph { nodes, edges }
    }

    /// All participants in ascending order.
    pub fn nodes(&self) -> &[P] {
        &self.nodes
    }

    pub fn contains(&self, node: &P) -> bool {
        self.index_of(node).is_some()
    }

    /// Returns true if `from` may give a gift to `to`.
    pub fn has_edge(&self, from: &P, to: &P) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(u), Some(v)) => self.has_edge_between(u, v),
            _ => false,
        }
    }

    /// Everyone `node` may give a gift to. Empty for unknown participants.
    pub fn neighbors<'a>(&'a self, node: &P) -> impl Iterator<Item = &'a P> + 'a {
        let targets: &'a [usize] = match self.index_of(node) {
            Some(u) => &self.edges[u],
            None => &[],
        };
        targets.iter().map(move |&v| &self.nodes[v])
    }

    /// Participants reachable in one step from `node`, skipping `start` and
    /// anyone in `visited`. The result is in ascending order; callers that
    /// want a random order shuffle it themselves.
    pub fn candidates<'a>(&'a self, node: &P, start: &P, visited: &BTreeSet<P>) -> Vec<&'a P> {
        self.neighbors(node)
            .filter(|&next| next != start && !visited.contains(next))
            .collect()
    }

    pub(crate) fn index_of(&self, node: &P) -> Option<usize> {
        self.nodes.binary_search(node).ok()
    }
}

impl<P> CompatibilityGraph<P> {
    /// Number of participants.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn node(&self, index: usize) -> &P {
        &self.nodes[index]
    }

    pub(crate) fn has_edge_between(&self, from: usize, to: usize) -> bool {
        self.edges[from].binary_search(&to).is_ok()
    }

    /// Index form of [`CompatibilityGraph::candidates`] used by the search.
    pub(crate) fn candidate_indices(
        &self,
        current: usize,
        start: usize,
        visited: &[bool],
    ) -> Vec<usize> {
        self.edges[current]
            .iter()
            .copied()
            .filter(|&next| next != start && !visited[next])
            .collect()
    }
}
