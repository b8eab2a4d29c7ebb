/*!
# Graph Algorithms

This module provides the **structural analyses** built on top of [`LabelledGraph`](crate::repr::LabelledGraph).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to traversal, connectivity, bipartiteness, shortest paths, diameters,
articulation points and bridges.
Algorithms are provided as traits implemented on every [`AdjacencyList`](crate::ops::AdjacencyList)
and, where possible, as **iterators**. They keep all scratch state (colors, visitation marks,
discovery times) to themselves, so a graph can be analysed repeatedly and concurrently.
*/

mod articulation_points;
mod bipartite;
mod bridges;
mod connectivity;
mod diameter;
mod low_link;
mod shortest_paths;
mod traversal;

use crate::{prelude::*, utils::*};

pub use articulation_points::*;
pub use bipartite::*;
pub use bridges::*;
pub use connectivity::*;
pub use diameter::*;
pub use low_link::*;
pub use shortest_paths::*;
pub use traversal::*;
