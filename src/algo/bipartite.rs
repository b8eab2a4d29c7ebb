/*!
# Bipartite Graph Algorithms

This module provides traits and algorithms for working with **bipartite graphs**.

Functionality includes:
- Testing whether a graph is bipartite
- Computing a valid bipartition (two-coloring) if one exists
- Verifying a candidate bipartition
*/

use std::collections::VecDeque;

use tracing::debug;

use super::*;

/// The two sides (colors) of a bipartition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the other side
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A two-coloring of all nodes, indexed by node
pub type Bipartition = Vec<Side>;

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest {
    /// Tests whether the given candidate partition is a valid bipartition, i.e. every edge
    /// connects nodes on different sides. Self-loops therefore always violate a bipartition.
    /// ** Panics if `bipartition.len() < n` **
    fn is_bipartition(&self, bipartition: &[Side]) -> bool;

    /// Computes a valid bipartition of the graph, if one exists.
    /// Returns `None` if the graph is not bipartite.
    ///
    /// Each component is two-colored by a BFS starting at its smallest node, which is put on
    /// the [`Side::Left`]. As soon as an edge between two equally colored nodes is found
    /// (i.e. an odd cycle), the computation stops.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_named_edges("path", [("a", "b", 1), ("b", "c", 1)]);
    ///
    /// let sides = g.compute_bipartition().unwrap();
    /// assert_eq!(sides, vec![Side::Left, Side::Right, Side::Left]);
    /// ```
    fn compute_bipartition(&self) -> Option<Bipartition>;

    /// Tests whether the graph is bipartite.
    /// Graphs without edges (including the graph without nodes) are bipartite.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = LabelledGraph::from_named_edges("g", [("a", "b", 1), ("b", "c", 1)]);
    /// assert!(g.is_bipartite());
    ///
    /// g.add_edge_by_names("c", "a", 1);
    /// assert!(!g.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G> BipartiteTest for G
where
    G: AdjacencyList,
{
    fn is_bipartition(&self, bipartition: &[Side]) -> bool {
        self.edges()
            .all(|(Edge(u, v), _)| bipartition[u as usize] != bipartition[v as usize])
    }

    fn compute_bipartition(&self) -> Option<Bipartition> {
        let mut colors: Vec<Option<Side>> = vec![None; self.len()];
        let mut queue = VecDeque::new();

        for start in self.vertices() {
            if colors[start as usize].is_some() {
                continue;
            }

            colors[start as usize] = Some(Side::Left);
            queue.push_back(start);

            while let Some(u) = queue.pop_front() {
                let side = colors[u as usize]?;
                for v in self.neighbors_of(u) {
                    match colors[v as usize] {
                        None => {
                            colors[v as usize] = Some(side.opposite());
                            queue.push_back(v);
                        }
                        Some(other) if other == side => {
                            debug!(
                                odd_cycle_edge = ?Edge(u, v),
                                "graph is not bipartite"
                            );
                            return None;
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        colors.into_iter().collect()
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::GeneratorSubstructures, testing::*};

    #[test]
    fn path() {
        for n in 1..10 {
            let names = (0..n).map(node_name).collect_vec();
            let mut graph = LabelledGraph::new("path");
            graph.add_vertex(&names[0]);
            graph.connect_path(&names, 1);

            let sides = graph.compute_bipartition().unwrap();
            assert!(graph.is_bipartition(&sides));

            let mut graph = graph.clone();
            graph.add_edge(0, n - 1, 1);
            // closes a cycle of length `n`; a single vertex closes a self-loop
            assert_eq!(graph.is_bipartite(), n % 2 == 0 && n > 1);
        }
    }

    #[test]
    fn small_cycles() {
        let mut triangle = LabelledGraph::new("triangle");
        triangle.connect_cycle(["a", "b", "c"], 1);
        assert!(!triangle.is_bipartite());

        let mut square = LabelledGraph::new("square");
        square.connect_cycle(["a", "b", "c", "d"], 1);
        assert!(square.is_bipartite());
    }

    #[test]
    fn empty_and_edgeless_graphs() {
        let mut graph = LabelledGraph::new("g");
        assert!(graph.is_bipartite());
        assert_eq!(graph.compute_bipartition(), Some(vec![]));

        graph.add_vertex("a");
        graph.add_vertex("b");
        assert_eq!(
            graph.compute_bipartition(),
            Some(vec![Side::Left, Side::Left])
        );
    }

    #[test]
    fn odd_cycle_in_later_component() {
        let mut graph = LabelledGraph::new("g");
        graph.connect_path(["a", "b", "c", "d"], 1);
        graph.connect_cycle(["x", "y", "z"], 1);
        assert!(!graph.is_bipartite());
    }

    #[test]
    fn self_loop_and_parallel_edges() {
        let mut graph = LabelledGraph::from_named_edges("g", [("a", "b", 1), ("a", "b", 5)]);
        assert!(graph.is_bipartite());

        graph.add_edge_by_names("b", "b", 1);
        assert!(!graph.is_bipartite());
    }

    #[test]
    fn forests_are_bipartite() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        for n in [1, 2, 10, 100] {
            let tree = random_tree(rng, n, 5);
            let sides = tree.compute_bipartition().unwrap();
            assert!(tree.is_bipartition(&sides));
        }
    }

    #[test]
    fn result_is_valid_or_odd_cycle_exists() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        for n in [4, 10, 30] {
            for m in [n / 2, n, 2 * n] {
                let graph = random_graph(rng, n, m, 1);
                match graph.compute_bipartition() {
                    Some(sides) => assert!(graph.is_bipartition(&sides)),
                    None => {
                        // no two-coloring of any BFS forest satisfies every edge
                        let mut sides = vec![Side::Left; graph.len()];
                        for cc in graph.connected_components() {
                            let depths = bfs_depths(&graph, cc[0]);
                            for u in cc {
                                if depths[u as usize] % 2 == 1 {
                                    sides[u as usize] = Side::Right;
                                }
                            }
                        }
                        assert!(!graph.is_bipartition(&sides));
                    }
                }
            }
        }
    }

    fn bfs_depths(graph: &LabelledGraph, root: Node) -> Vec<NumNodes> {
        let mut depths = vec![0; graph.len()];
        for (p, u) in graph.bfs_with_predecessor(root) {
            if p != u {
                depths[u as usize] = depths[p as usize] + 1;
            }
        }
        depths
    }
}
