/*!
`lgraphs` is a graph data structure & analysis library designed for graphs that are
- **l**abelled : every vertex has a unique name, which is its identity
- weighted : every edge carries a non-negative integer weight (default `1`)
- undirected : every edge is stored as two half-edges

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of vertices in the graph.
Indices are assigned in insertion order and resolved from names through a hash map, so traversals
never compare names. For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; adjacency lists
store [`HalfEdge`](crate::edge::HalfEdge)s with their weight.

Parallel edges and self-loops are kept as given: a self-loop adds two half-edges to its vertex
and counts as one edge.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and the
  [`LabelledGraph`](crate::repr::LabelledGraph) representation,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS (`graph.bfs(start_node)`),
  connected components, bipartiteness, shortest paths, diameters, articulation points and bridges,
- [`gens`] includes generators for deterministic substructures such as paths/cycles/stars/cliques,
- [`io`] includes the text reader/writer and the textual [`Report`](crate::io::Report) of all queries,
- [`handle`] includes [`GraphHandle`](crate::handle::GraphHandle), an owning handle with explicit release.

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use lgraphs::{prelude::*, algo::*};

let g: LabelledGraph = "
    // a triangle with a tail
    example
    a -- b
    b -- c 3
    c -- a
    c -- d
".parse().unwrap();

assert!(!g.is_bipartite());
assert_eq!(g.compute_articulation_points(), vec![2]);
assert_eq!(g.compute_bridges(), vec![Edge(2, 3)]);
assert_eq!(g.component_diameters(), vec![3]);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod handle;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use error::{GraphError, Result};

/// `lgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
