/*!
# Single-Source Shortest Paths

Dijkstra's algorithm on non-negative edge weights. As [`Weight`] is unsigned, negative weights
cannot be represented at all and are rejected when a graph is read.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use super::*;

/// Result of a single-source shortest path computation.
/// Unreachable nodes have no distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distances {
    source: Node,
    distances: Vec<Option<Distance>>,
}

impl Distances {
    /// Returns the source node of the computation
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the distance from the source to `u` or `None` if `u` is unreachable
    /// ** Panics if `u >= n` **
    pub fn distance_to(&self, u: Node) -> Option<Distance> {
        self.distances[u as usize]
    }

    /// Returns an iterator over all reachable nodes together with their distance, in node order
    pub fn reachable(&self) -> impl Iterator<Item = (Node, Distance)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(u, d)| d.map(|d| (u as Node, d)))
    }

    /// Returns the reachable node with maximum distance from the source.
    /// Ties are broken in favor of the smallest node.
    pub fn farthest(&self) -> (Node, Distance) {
        self.reachable()
            .reduce(|best, cur| if cur.1 > best.1 { cur } else { best })
            .unwrap_or((self.source, 0))
    }
}

pub trait ShortestPaths: AdjacencyList {
    /// Computes the weighted distance from `source` to every node of the graph.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_named_edges(
    ///     "g",
    ///     [("a", "b", 5), ("a", "c", 1), ("c", "b", 2), ("x", "y", 1)],
    /// );
    ///
    /// let dist = g.shortest_distances_from(0);
    /// assert_eq!(dist.distance_to(1), Some(3));
    /// assert_eq!(dist.distance_to(3), None);
    /// assert_eq!(dist.farthest(), (1, 3));
    /// ```
    fn shortest_distances_from(&self, source: Node) -> Distances;
}

impl<G> ShortestPaths for G
where
    G: AdjacencyList,
{
    fn shortest_distances_from(&self, source: Node) -> Distances {
        let mut distances = vec![None; self.len()];
        let mut finalized = NodeMarker::new(self.number_of_nodes());
        let mut heap = BinaryHeap::new();

        distances[source as usize] = Some(0);
        heap.push(Reverse((0, source)));

        while let Some(Reverse((dist_u, u))) = heap.pop() {
            // stale entry of a node that was already reached on a shorter path
            if finalized.set_bit(u) {
                continue;
            }

            for &HalfEdge { target, weight } in self.half_edges_of(u) {
                let candidate = dist_u + weight as Distance;
                if distances[target as usize].is_none_or(|d| candidate < d) {
                    distances[target as usize] = Some(candidate);
                    heap.push(Reverse((candidate, target)));
                }
            }
        }

        Distances { source, distances }
    }
}
