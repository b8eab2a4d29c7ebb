use super::*;

pub trait Bridges: AdjacencyList {
    /// Returns the bridges (cut edges) of the graph, normalized and in increasing order.
    ///
    /// An edge is a bridge if removing it increases the number of connected components.
    /// An edge with a parallel copy is never a bridge; neither is a self-loop.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_named_edges(
    ///     "g",
    ///     [("a", "b", 1), ("b", "c", 1), ("c", "a", 1), ("c", "d", 1)],
    /// );
    /// assert_eq!(g.compute_bridges(), vec![Edge(2, 3)]);
    /// ```
    fn compute_bridges(&self) -> Vec<Edge>;
}

impl<G> Bridges for G
where
    G: AdjacencyList,
{
    fn compute_bridges(&self) -> Vec<Edge> {
        let mut visitor = BridgeVisitor::default();
        LowLinkSearch::new(self).run(&mut visitor);
        visitor.into_bridges()
    }
}

/// Collects bridges from a [`LowLinkSearch`]
#[derive(Debug, Default)]
pub struct BridgeVisitor {
    bridges: Vec<Edge>,
}

impl BridgeVisitor {
    /// Returns the normalized bridges in increasing order
    pub fn into_bridges(mut self) -> Vec<Edge> {
        self.bridges.sort_unstable();
        self.bridges
    }
}

impl LowLinkVisitor for BridgeVisitor {
    fn tree_edge_finished(
        &mut self,
        parent: Node,
        parent_info: NodeInfo,
        child: Node,
        child_info: NodeInfo,
    ) {
        if child_info.low > parent_info.discovery {
            self.bridges.push(Edge(parent, child).normalized());
        }
    }

    fn root_finished(&mut self, _root: Node, _tree_children: NumNodes) {}
}
