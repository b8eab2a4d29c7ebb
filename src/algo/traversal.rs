/*!
Graph traversal algorithms.

This module provides:
- A generic traversal iterator [`TraversalSearch`] covering BFS and DFS, with and without
  predecessor tracking, parameterized by the visitation marker.
- A high-level [`Traversal`] trait that exposes traversals directly as methods on graphs.

Neighbors are visited in adjacency-list (i.e. construction) order. Half-edges whose target is
unknown never appear in adjacency lists (see [`DanglingHalfEdge`](crate::repr::DanglingHalfEdge))
and are thus never traversed.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Abstraction for items yielded by a traversal iterator.
///
/// Two implementations are provided:
/// - [`Node`]: stores only the node (no predecessor information).
/// - [`PredecessorOfNode`]: stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)`.
///
/// The absence of a predecessor is encoded by setting both entries to the same node. Since a
/// traversal never enters a node twice, a self-loop cannot be confused with a root.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// The traversal frontier. Its pop order determines the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T>: Default {
    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack), a visitation marker `V`, and optionally
/// records predecessor information. Each reachable node is yielded exactly once.
pub struct TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    sequencer: S,
    // all nodes below are known to be visited
    restart_cursor: Node,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator using a custom visitation marker.
pub type BFSWithSet<'a, G, V> = TraversalSearch<'a, G, VecDeque<Node>, Node, V>;

/// A DFS traversal iterator using a custom visitation marker.
pub type DFSWithSet<'a, G, V> = TraversalSearch<'a, G, Vec<Node>, Node, V>;

/// A BFS traversal iterator over the graph.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node, NodeMarker>;

/// A DFS traversal iterator over the graph.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node, NodeMarker>;

/// A BFS traversal iterator that records predecessor information.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode, NodeMarker>;

/// A DFS traversal iterator that records predecessor information.
pub type DFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode, NodeMarker>;

impl<G, S, I, V> Iterator for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        for v in self.graph.neighbors_of(u) {
            if !self.visited.insert(v) {
                self.sequencer.push(I::new_with_predecessor(u, v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.len() + self.sequencer.cardinality()),
        )
    }
}

impl<'a, G, S, I, V> TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(start < graph.number_of_nodes());
        let mut search = Self::new_unstarted(graph);
        search.visited.insert(start);
        search.sequencer.push(I::new_without_predecessor(start));
        search
    }

    /// Creates a traversal iterator with an empty frontier.
    /// It yields nothing until it is (re)started via [`TraversalSearch::try_restart_at_unvisited`].
    /// This also works for graphs without nodes.
    pub fn new_unstarted(graph: &'a G) -> Self {
        let len = graph.len();
        Self {
            graph,
            visited: V::from_total_used_capacity(len, len),
            sequencer: S::default(),
            restart_cursor: 0,
            _item: PhantomData,
        }
    }
}

impl<'a, G, S, I, V> TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    /// Tries to restart the search at the first yet unvisited node (in vertex order) and returns
    /// the new start node if successful. Requires that the search came to a hold earlier,
    /// i.e. self.next() returned None.
    pub fn try_restart_at_unvisited(&mut self) -> Option<Node> {
        debug_assert_eq!(self.sequencer.cardinality(), 0);

        let n = self.graph.number_of_nodes();
        while self.restart_cursor < n && self.visited.contains(&self.restart_cursor) {
            self.restart_cursor += 1;
        }

        (self.restart_cursor < n).then(|| {
            let x = self.restart_cursor;
            self.visited.insert(x);
            self.sequencer.push(I::new_without_predecessor(x));
            x
        })
    }

}

/// Provides convenient traversal methods on every graph
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_named_edges("g", [("a", "b", 1), ("a", "c", 1), ("b", "d", 1)]);
    ///
    /// let order: Vec<_> = g.bfs(0).map(|u| g.name_of(u)).collect();
    /// assert_eq!(order, vec!["a", "b", "c", "d"]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_named_edges("g", [("a", "b", 1), ("a", "c", 1), ("b", "d", 1)]);
    ///
    /// let order: Vec<_> = g.dfs(0).map(|u| g.name_of(u)).collect();
    /// assert_eq!(order, vec!["a", "c", "b", "d"]);
    /// ```
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }

    /// Returns *true* if there exists a path from `u` to `v`
    fn is_reachable(&self, u: Node, v: Node) -> bool {
        self.bfs(u).any(|w| w == v)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use fxhash::FxHashSet;
    use itertools::Itertools;

    //  / b --- \
    // a         e - d
    //  \ c - f /
    fn diamond() -> LabelledGraph {
        LabelledGraph::from_named_edges(
            "diamond",
            [
                ("a", "b", 1),
                ("a", "c", 1),
                ("e", "d", 1),
                ("c", "f", 1),
                ("b", "e", 1),
                ("f", "e", 1),
            ],
        )
    }

    fn names(graph: &LabelledGraph, order: impl Iterator<Item = Node>) -> Vec<&str> {
        order.map(|u| graph.name_of(u)).collect_vec()
    }

    #[test]
    fn bfs_order() {
        let graph = diamond();
        assert_eq!(
            names(&graph, graph.bfs(0)),
            vec!["a", "b", "c", "e", "f", "d"]
        );

        let f = graph.find_vertex("f").unwrap();
        assert_eq!(
            names(&graph, graph.bfs(f)),
            vec!["f", "c", "e", "a", "d", "b"]
        );
    }

    #[test]
    fn dfs_visits_every_reachable_node_once() {
        let graph = diamond();
        let order = graph.dfs(0).collect_vec();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], 0);
        assert!(order.iter().all_unique());
    }

    #[test]
    fn bfs_with_predecessor() {
        let graph = diamond();
        let mut edges = graph
            .bfs_with_predecessor(0)
            .map(|x| {
                (
                    x.predecessor().map(|p| graph.name_of(p)),
                    graph.name_of(x.item()),
                )
            })
            .collect_vec();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                (None, "a"),
                (Some("a"), "b"),
                (Some("a"), "c"),
                (Some("b"), "e"),
                (Some("c"), "f"),
                (Some("e"), "d"),
            ]
        );
    }

    #[test]
    fn restart_covers_all_components() {
        let mut graph = LabelledGraph::from_named_edges("g", [("a", "b", 1), ("c", "d", 1)]);
        graph.add_vertex("e");

        let mut search = DFS::new_unstarted(&graph);
        assert_eq!(search.next(), None);

        let mut roots = Vec::new();
        let mut visited = Vec::new();
        while let Some(root) = search.try_restart_at_unvisited() {
            roots.push(root);
            visited.extend(search.by_ref());
        }

        assert_eq!(roots, vec![0, 2, 4]);
        assert_eq!(visited.into_iter().sorted().collect_vec(), (0..5).collect_vec());
    }

    #[test]
    fn empty_graph_has_nothing_to_traverse() {
        let graph = LabelledGraph::new("empty");
        let mut search = BFS::new_unstarted(&graph);
        assert_eq!(search.next(), None);
        assert_eq!(search.try_restart_at_unvisited(), None);
    }

    #[test]
    fn custom_visitation_marker() {
        let graph = diamond();
        let order = BFSWithSet::<_, FxHashSet<Node>>::new(&graph, 0).collect_vec();
        assert_eq!(order, graph.bfs(0).collect_vec());

        let order = DFSWithSet::<_, FxHashSet<Node>>::new(&graph, 0).collect_vec();
        assert_eq!(order, graph.dfs(0).collect_vec());
    }

    #[test]
    fn parallel_edges_and_loops() {
        let graph =
            LabelledGraph::from_named_edges("g", [("a", "a", 1), ("a", "b", 1), ("b", "a", 2)]);
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1]);
        assert_eq!(graph.dfs_with_predecessor(1).collect_vec(), vec![(1, 1), (1, 0)]);
        assert!(graph.is_reachable(1, 0));
    }
}
