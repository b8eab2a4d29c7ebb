/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph:

- **Paths**
- **Cycles**
- **Stars**
- **Cliques**

# Example

```rust
use lgraphs::{prelude::*, gens::*};

let mut g = LabelledGraph::new("motifs");
g.connect_path(["a", "b", "c"], 1);
g.connect_cycle(["c", "d", "e"], 2);
g.connect_clique(["a", "c", "e"], 3);

assert_eq!(g.number_of_nodes(), 5);
assert_eq!(g.number_of_edges(), 8);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** inside an already existing graph.
/// All edges of one call share the same weight.
///
/// Implemented for all graphs that support edge editing.
pub trait GeneratorSubstructures {
    /// Connects the given vertices in order with a **simple path**.
    /// Fewer than two names add nothing, not even the vertex.
    ///
    /// # Example
    /// ```rust
    /// use lgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = LabelledGraph::new("path");
    /// g.connect_path(["a", "b", "c", "d"], 1);
    ///
    /// assert_eq!(g.number_of_edges(), 3);
    /// assert_eq!(g.weight_between(1, 2), Some(1));
    /// ```
    fn connect_path<P, S>(&mut self, names_on_path: P, weight: Weight)
    where
        P: IntoIterator<Item = S>,
        S: AsRef<str> + Clone;

    /// Connects the given vertices with a **cycle**: consecutive vertices are connected and
    /// the last vertex is connected back to the first. A single name yields a self-loop.
    fn connect_cycle<C, S>(&mut self, names_in_cycle: C, weight: Weight)
    where
        C: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// Connects `center` with every leaf.
    fn connect_star<L, S>(&mut self, center: &str, leaves: L, weight: Weight)
    where
        L: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// Connects every pair of distinct given vertices. No self-loops are created.
    fn connect_clique<C, S>(&mut self, names: C, weight: Weight)
    where
        C: IntoIterator<Item = S>,
        S: AsRef<str> + Clone;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P, S>(&mut self, names_on_path: P, weight: Weight)
    where
        P: IntoIterator<Item = S>,
        S: AsRef<str> + Clone,
    {
        for (u, v) in names_on_path.into_iter().tuple_windows() {
            self.add_edge_by_names(u.as_ref(), v.as_ref(), weight);
        }
    }

    fn connect_cycle<C, S>(&mut self, names_in_cycle: C, weight: Weight)
    where
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut iter = names_in_cycle.into_iter();

        // resolve names once so the iterator need not be cloned
        if let Some(first) = iter.next() {
            let first = self.add_vertex(first.as_ref());
            let mut prev = first;
            for cur in iter {
                let cur = self.add_vertex(cur.as_ref());
                self.add_edge(prev, cur, weight);
                prev = cur;
            }

            self.add_edge(prev, first, weight);
        }
    }

    fn connect_star<L, S>(&mut self, center: &str, leaves: L, weight: Weight)
    where
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let center = self.add_vertex(center);
        for leaf in leaves {
            let leaf = self.add_vertex(leaf.as_ref());
            self.add_edge(center, leaf, weight);
        }
    }

    fn connect_clique<C, S>(&mut self, names: C, weight: Weight)
    where
        C: IntoIterator<Item = S>,
        S: AsRef<str> + Clone,
    {
        let nodes = names
            .into_iter()
            .map(|name| self.add_vertex(name.as_ref()))
            .collect_vec();

        for (u, v) in nodes.into_iter().tuple_combinations() {
            self.add_edge(u, v, weight);
        }
    }
}
