/*!
# Node Representation

Vertices are identified by their *name*, but every algorithm works on dense indices.
We choose `Node = u32` as graphs read from text rarely exceed `2^32` vertices;
the name of a node is resolved once at construction time and stored in the graph.
*/

/// Nodes are indices from `0` to `n - 1`, assigned in insertion order
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Edge weights are non-negative by construction
pub type Weight = u32;

/// Weight assigned to an edge whose declaration omits it
pub const DEFAULT_WEIGHT: Weight = 1;

/// Length of a (weighted) path. Wider than `Weight` so that sums over long paths do not overflow.
pub type Distance = u64;
