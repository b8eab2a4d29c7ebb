/*!
# Graph Representation

All graphs in this crate are **undirected**, **weighted** and **labelled**: every vertex carries a
unique name and every edge a non-negative integer weight.

We store vertices in an arena indexed by [`Node`] and keep, per vertex, an adjacency list of
[`HalfEdge`]s. An undirected edge `{u, v}` is realized by the two half-edges `u -> v` and `v -> u`
with identical weight. Names are resolved to indices exactly once, when the graph is built, so
algorithms never compare strings.
*/

use crate::{edge::*, node::*, ops::*};

mod labelled;

pub use labelled::*;
