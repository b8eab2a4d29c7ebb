use itertools::Itertools;
use tracing::debug;

use super::*;

pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Returns an iterator over the connected components of the graph.
    ///
    /// Components are emitted in the order of their smallest node, which is also the first
    /// node of every component. Isolated nodes form components of their own.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = LabelledGraph::from_named_edges("g", [("a", "b", 1), ("c", "d", 1)]);
    /// g.add_vertex("e");
    ///
    /// let ccs: Vec<Vec<Node>> = g.connected_components().collect();
    /// assert_eq!(ccs, vec![vec![0, 1], vec![2, 3], vec![4]]);
    /// ```
    fn connected_components(&self) -> ConnectedComponents<'_, Self>;

    /// Returns the number of connected components; `0` for a graph without nodes
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_named_edges("g", [("a", "b", 1), ("c", "d", 1)]);
    /// assert_eq!(g.number_of_connected_components(), 2);
    /// assert_eq!(LabelledGraph::new("empty").number_of_connected_components(), 0);
    /// ```
    fn number_of_connected_components(&self) -> NumNodes;

    /// Returns *true* if every pair of nodes is connected by a path.
    /// A graph without nodes is not considered connected.
    fn is_connected(&self) -> bool {
        self.number_of_connected_components() == 1
    }
}

impl<G> Connectivity for G
where
    G: AdjacencyList + Sized,
{
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    fn number_of_connected_components(&self) -> NumNodes {
        let mut dfs = DFS::new_unstarted(self);
        let mut count = 0;
        while dfs.try_restart_at_unvisited().is_some() {
            dfs.by_ref().for_each(drop);
            count += 1;
        }

        debug!(
            nodes = self.number_of_nodes(),
            components = count,
            "counted connected components"
        );
        count
    }
}

pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: BFS<'a, G>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: BFS::new_unstarted(graph),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        self.bfs.try_restart_at_unvisited()?;
        Some(self.bfs.by_ref().collect_vec())
    }
}
