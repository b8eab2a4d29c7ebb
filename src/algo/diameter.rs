/*!
# Diameter Estimation

Per-component diameters via the double sweep: starting at an arbitrary node, find the farthest
node `u`, then report the largest distance from `u`.

The result is exact on trees. On weighted graphs with cycles it is a heuristic that may
underestimate the true diameter; it is kept as is so results stay stable on existing inputs.
*/

use tracing::{debug, trace};

use super::*;

pub trait Diameters: ShortestPaths + Connectivity {
    /// Runs a double sweep from `start` and returns the estimated diameter of its component.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = LabelledGraph::from_named_edges("g", [("a", "b", 2), ("b", "c", 3), ("b", "d", 1)]);
    /// assert_eq!(g.double_sweep(3), 5);
    /// ```
    fn double_sweep(&self, start: Node) -> Distance {
        let (u, first) = self.shortest_distances_from(start).farthest();
        let (v, diameter) = self.shortest_distances_from(u).farthest();
        trace!(start, first, u, v, diameter, "double sweep");
        diameter
    }

    /// Returns one diameter estimate per connected component, sorted ascending.
    /// Each sweep starts at the smallest node of its component; isolated nodes contribute `0`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = LabelledGraph::from_named_edges(
    ///     "g",
    ///     [("a", "b", 4), ("b", "c", 4), ("x", "y", 3)],
    /// );
    /// g.add_vertex("lonely");
    ///
    /// assert_eq!(g.component_diameters(), vec![0, 3, 8]);
    /// ```
    fn component_diameters(&self) -> Vec<Distance> {
        let mut diameters: Vec<Distance> = self
            .connected_components()
            .map(|cc| self.double_sweep(cc[0]))
            .collect();
        diameters.sort_unstable();

        debug!(components = diameters.len(), "computed component diameters");
        diameters
    }
}

impl<G> Diameters for G where G: ShortestPaths + Connectivity {}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::GeneratorSubstructures, testing::*};

    #[test]
    fn empty_graph_has_no_diameters() {
        assert!(LabelledGraph::new("g").component_diameters().is_empty());
    }

    #[test]
    fn unweighted_cycle_and_star() {
        let mut graph = LabelledGraph::new("g");
        graph.connect_cycle(["a", "b", "c", "d", "e", "f"], 1);
        graph.connect_star("center", ["x", "y", "z"], 2);
        assert_eq!(graph.component_diameters(), vec![3, 4]);
    }

    #[test]
    fn self_loops_do_not_count() {
        let mut graph = LabelledGraph::from_named_edges("g", [("a", "a", 100)]);
        assert_eq!(graph.component_diameters(), vec![0]);

        graph.add_edge_by_names("a", "b", 7);
        assert_eq!(graph.component_diameters(), vec![7]);
    }

    #[test]
    fn one_diameter_per_component() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        for n in [1, 10, 40] {
            for m in [0, n / 2, n] {
                let graph = random_graph(rng, n, m, 9);
                assert_eq!(
                    graph.component_diameters().len() as NumNodes,
                    graph.number_of_connected_components()
                );
            }
        }
    }

    #[test]
    fn exact_on_trees() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);
        for n in [1, 2, 5, 20, 50] {
            for max_weight in [1, 10] {
                let tree = random_tree(rng, n, max_weight);
                assert_eq!(tree.component_diameters(), vec![naive_diameter_of(&tree, 0)]);
                for u in tree.vertices() {
                    assert_eq!(tree.double_sweep(u), naive_diameter_of(&tree, 0));
                }
            }
        }
    }

    #[test]
    fn never_overestimates() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);
        for n in [5, 15, 30] {
            let graph = random_graph(rng, n, 2 * n, 10);
            for cc in graph.connected_components() {
                assert!(graph.double_sweep(cc[0]) <= naive_diameter_of(&graph, cc[0]));
            }
        }
    }
}
