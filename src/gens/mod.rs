/*!
# Graph Generators

Helpers that grow named substructures (paths, cycles, stars, cliques) inside an existing graph.
Vertices are referred to by name and created on first use, so generators can be combined freely
with graphs read from text.
*/

use crate::prelude::*;

mod substructures;

pub use substructures::*;
