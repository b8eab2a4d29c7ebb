use super::*;

pub trait ArticulationPoints: AdjacencyList {
    /// Returns the articulation points (cut vertices) of the graph in increasing node order.
    ///
    /// A node is an articulation point if removing it increases the number of connected
    /// components. Self-loops and parallel edges never create articulation points.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// // a - b - c, and b - d
    /// let g = LabelledGraph::from_named_edges("g", [("a", "b", 1), ("b", "c", 1), ("b", "d", 1)]);
    /// assert_eq!(g.compute_articulation_points(), vec![1]);
    /// ```
    fn compute_articulation_points(&self) -> Vec<Node>;
}

impl<G> ArticulationPoints for G
where
    G: AdjacencyList,
{
    fn compute_articulation_points(&self) -> Vec<Node> {
        let mut visitor = ArticulationPointVisitor::new(self.number_of_nodes());
        LowLinkSearch::new(self).run(&mut visitor);
        visitor.into_articulation_points()
    }
}

/// Collects articulation points from a [`LowLinkSearch`]
pub struct ArticulationPointVisitor {
    is_cut: NodeMarker,
}

impl ArticulationPointVisitor {
    pub fn new(n: NumNodes) -> Self {
        Self {
            is_cut: NodeMarker::new(n),
        }
    }

    /// Returns the articulation points in increasing node order
    pub fn into_articulation_points(self) -> Vec<Node> {
        self.is_cut.iter_set_bits().collect()
    }
}

impl LowLinkVisitor for ArticulationPointVisitor {
    fn tree_edge_finished(
        &mut self,
        parent: Node,
        parent_info: NodeInfo,
        _child: Node,
        child_info: NodeInfo,
    ) {
        // roots are decided by their number of tree children instead
        if !parent_info.is_root() && child_info.low >= parent_info.discovery {
            self.is_cut.set_bit(parent);
        }
    }

    fn root_finished(&mut self, root: Node, tree_children: NumNodes) {
        if tree_children > 1 {
            self.is_cut.set_bit(root);
        }
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
    fn articulation_points_in_path() {
        for n in [1, 2, 3, 10] {
            let names = (0..n).map(node_name).collect_vec();
            let mut graph = LabelledGraph::new("path");
            graph.add_vertex(&names[0]);
            graph.connect_path(&names, 1);

            let expected = (1..n.saturating_sub(1)).collect_vec();
            assert_eq!(graph.compute_articulation_points(), expected);
        }
    }

    #[test]
    fn star_and_cycle() {
        let mut star = LabelledGraph::new("star");
        star.connect_star("center", ["x", "y", "z"], 1);
        assert_eq!(star.compute_articulation_points(), vec![0]);

        let mut cycle = LabelledGraph::new("cycle");
        cycle.connect_cycle(["a", "b", "c", "d", "e"], 1);
        assert!(cycle.compute_articulation_points().is_empty());
    }

    #[test]
    fn two_triangles_sharing_a_vertex() {
        let mut graph = LabelledGraph::new("bowtie");
        graph.connect_cycle(["a", "b", "c"], 1);
        graph.connect_cycle(["c", "d", "e"], 1);
        assert_eq!(graph.compute_articulation_points(), vec![2]);
    }

    #[test]
    fn parallel_edges_and_loops_are_irrelevant() {
        let graph = LabelledGraph::from_named_edges(
            "g",
            [("a", "b", 1), ("a", "b", 1), ("a", "a", 1), ("c", "c", 1)],
        );
        assert!(graph.compute_articulation_points().is_empty());
    }

    #[test]
    fn deep_path_does_not_overflow() {
        let n = 100_000;
        let mut graph = LabelledGraph::new("deep");
        graph.connect_path((0..n).map(node_name), 1);
        assert_eq!(graph.compute_articulation_points().len(), n as usize - 2);
    }

    #[test]
    fn agrees_with_removal() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);
        for n in [2, 5, 12, 25] {
            for m in [n / 2, n, 3 * n / 2] {
                let graph = random_graph(rng, n, m, 1);
                assert_eq!(
                    graph.compute_articulation_points(),
                    naive_articulation_points(&graph)
                );
            }
        }
    }
}
