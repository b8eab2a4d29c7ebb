/*!
# Low-Link Depth-First Search

A single DFS over all components that maintains discovery times and low-links, the common core
of the articulation point and bridge computations.

The search keeps an explicit stack of frames, so its recursion depth is not limited by the call
stack. Results are reported to a [`LowLinkVisitor`] whenever a tree edge or a root is finished.
*/

use tracing::debug;

use super::*;

/// Discovery time and low-link of a node.
/// Discovery times start at `1`; a value of `0` marks a node the search has not reached yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeInfo {
    pub discovery: Node,
    pub low: Node,
    pub parent: Option<Node>,
}

impl NodeInfo {
    pub fn is_discovered(&self) -> bool {
        self.discovery > 0
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}

/// Receives the results of a [`LowLinkSearch`]
pub trait LowLinkVisitor {
    /// Called once the subtree of `child` is complete.
    /// At this point `child.low` is final and already propagated into `parent.low`.
    fn tree_edge_finished(
        &mut self,
        parent: Node,
        parent_info: NodeInfo,
        child: Node,
        child_info: NodeInfo,
    );

    /// Called once the DFS tree rooted at `root` is complete
    fn root_finished(&mut self, root: Node, tree_children: NumNodes);
}

/// Runs two visitors in the same search
impl<A, B> LowLinkVisitor for (A, B)
where
    A: LowLinkVisitor,
    B: LowLinkVisitor,
{
    fn tree_edge_finished(
        &mut self,
        parent: Node,
        parent_info: NodeInfo,
        child: Node,
        child_info: NodeInfo,
    ) {
        self.0.tree_edge_finished(parent, parent_info, child, child_info);
        self.1.tree_edge_finished(parent, parent_info, child, child_info);
    }

    fn root_finished(&mut self, root: Node, tree_children: NumNodes) {
        self.0.root_finished(root, tree_children);
        self.1.root_finished(root, tree_children);
    }
}

struct Frame {
    node: Node,
    parent: Option<Node>,
    next_edge: usize,
    // only one half-edge back to the parent is the tree edge; further copies are back edges
    parent_edge_skipped: bool,
    tree_children: NumNodes,
}

impl Frame {
    fn new(node: Node, parent: Option<Node>) -> Self {
        Self {
            node,
            parent,
            next_edge: 0,
            parent_edge_skipped: false,
            tree_children: 0,
        }
    }
}

pub struct LowLinkSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    nodes_info: Vec<NodeInfo>,
    time: Node,
}

impl<'a, G> LowLinkSearch<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            nodes_info: vec![NodeInfo::default(); graph.len()],
            time: 0,
        }
    }

    /// Searches every component, starting each tree at its smallest node, and returns the
    /// per-node discovery information.
    pub fn run<V: LowLinkVisitor>(mut self, visitor: &mut V) -> Vec<NodeInfo> {
        let graph = self.graph;
        let mut stack: Vec<Frame> = Vec::new();
        let mut roots = 0;

        for root in graph.vertices() {
            if self.nodes_info[root as usize].is_discovered() {
                continue;
            }

            roots += 1;
            self.discover(root, None);
            stack.push(Frame::new(root, None));

            while let Some(frame) = stack.last_mut() {
                let u = frame.node;

                let Some(&HalfEdge { target: v, .. }) = graph.half_edges_of(u).get(frame.next_edge)
                else {
                    if let Some(finished) = stack.pop() {
                        self.finish(visitor, finished);
                    }
                    continue;
                };
                frame.next_edge += 1;

                if Some(v) == frame.parent && !frame.parent_edge_skipped {
                    frame.parent_edge_skipped = true;
                    continue;
                }

                if self.nodes_info[v as usize].is_discovered() {
                    let v_disc = self.nodes_info[v as usize].discovery;
                    self.nodes_info[u as usize].update_low(v_disc);
                } else {
                    frame.tree_children += 1;
                    self.discover(v, Some(u));
                    stack.push(Frame::new(v, Some(u)));
                }
            }
        }

        debug!(
            nodes = graph.number_of_nodes(),
            dfs_trees = roots,
            "low-link search finished"
        );
        self.nodes_info
    }

    fn discover(&mut self, u: Node, parent: Option<Node>) {
        self.time += 1;
        self.nodes_info[u as usize] = NodeInfo {
            discovery: self.time,
            low: self.time,
            parent,
        };
    }

    fn finish<V: LowLinkVisitor>(&mut self, visitor: &mut V, frame: Frame) {
        let u = frame.node;
        match frame.parent {
            Some(p) => {
                let u_info = self.nodes_info[u as usize];
                self.nodes_info[p as usize].update_low(u_info.low);
                visitor.tree_edge_finished(p, self.nodes_info[p as usize], u, u_info);
            }
            None => visitor.root_finished(u, frame.tree_children),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::GeneratorSubstructures;

    #[derive(Default)]
    struct Recorder {
        tree_edges: Vec<Edge>,
        roots: Vec<(Node, NumNodes)>,
    }

    impl LowLinkVisitor for Recorder {
        fn tree_edge_finished(&mut self, parent: Node, _: NodeInfo, child: Node, _: NodeInfo) {
            self.tree_edges.push(Edge(parent, child));
        }

        fn root_finished(&mut self, root: Node, tree_children: NumNodes) {
            self.roots.push((root, tree_children));
        }
    }

    #[test]
    fn discovery_times_are_global() {
        let mut graph = LabelledGraph::new("g");
        graph.connect_path(["a", "b", "c"], 1);
        graph.connect_path(["x", "y"], 1);
        graph.add_vertex("z");

        let mut rec = Recorder::default();
        let info = LowLinkSearch::new(&graph).run(&mut rec);

        assert_eq!(
            info.iter().map(|i| i.discovery).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
        assert!(info[0].is_root() && info[3].is_root() && info[5].is_root());
        assert_eq!(rec.roots, vec![(0, 1), (3, 1), (5, 0)]);
        assert_eq!(rec.tree_edges, vec![Edge(1, 2), Edge(0, 1), Edge(3, 4)]);
    }

    #[test]
    fn cycle_low_links_reach_the_root() {
        let mut graph = LabelledGraph::new("g");
        graph.connect_cycle(["a", "b", "c", "d"], 1);

        let info = LowLinkSearch::new(&graph).run(&mut Recorder::default());
        assert!(info.iter().all(|i| i.low == 1));
    }

    #[test]
    fn parallel_edge_is_a_back_edge() {
        let graph = LabelledGraph::from_named_edges("g", [("a", "b", 1), ("a", "b", 2)]);
        let info = LowLinkSearch::new(&graph).run(&mut Recorder::default());
        assert_eq!(info[1].low, 1);
    }

    #[test]
    fn self_loop_keeps_low_link() {
        let graph = LabelledGraph::from_named_edges("g", [("a", "b", 1), ("b", "b", 1)]);
        let info = LowLinkSearch::new(&graph).run(&mut Recorder::default());
        assert_eq!(info[1], NodeInfo { discovery: 2, low: 2, parent: Some(0) });
    }

    #[test]
    fn both_visitors_see_the_same_search() {
        let mut graph = LabelledGraph::new("g");
        graph.connect_star("c", ["x", "y"], 1);

        let mut pair = (Recorder::default(), Recorder::default());
        LowLinkSearch::new(&graph).run(&mut pair);
        assert_eq!(pair.0.tree_edges, pair.1.tree_edges);
        assert_eq!(pair.0.roots, vec![(0, 2)]);
    }
}
