//! Fixtures and brute-force reference implementations shared by the unit tests.

use rand::Rng;

use crate::{algo::Connectivity, prelude::*};

/// Name of the `i`-th node in generated graphs
pub fn node_name(i: Node) -> String {
    format!("v{i}")
}

/// Creates a graph with nodes `v0, ..., v{n-1}` (in this index order) and `m` uniformly random
/// edges with weights in `1..=max_weight`. Self-loops and parallel edges may occur.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    n: NumNodes,
    m: NumNodes,
    max_weight: Weight,
) -> LabelledGraph {
    let mut graph = LabelledGraph::new("random");
    for i in 0..n {
        graph.add_vertex(&node_name(i));
    }

    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        graph.add_edge(u, v, rng.random_range(1..=max_weight));
    }

    graph
}

/// Creates a random tree on `n` nodes where node `i > 0` is attached to a random node `< i`
pub fn random_tree<R: Rng>(rng: &mut R, n: NumNodes, max_weight: Weight) -> LabelledGraph {
    let mut graph = LabelledGraph::new("tree");
    for i in 0..n {
        graph.add_vertex(&node_name(i));
        if i > 0 {
            let parent = rng.random_range(0..i);
            graph.add_edge(parent, i, rng.random_range(1..=max_weight));
        }
    }
    graph
}

/// Copies `graph` while omitting the node `skip` and all of its edges
pub fn without_node(graph: &LabelledGraph, skip: Node) -> LabelledGraph {
    let mut copy = LabelledGraph::new(graph.name());
    for u in graph.vertices().filter(|&u| u != skip) {
        copy.add_vertex(graph.name_of(u));
    }
    for (Edge(u, v), w) in graph.edges() {
        if u != skip && v != skip {
            copy.add_edge_by_names(graph.name_of(u), graph.name_of(v), w);
        }
    }
    copy
}

/// Copies `graph` while omitting the `index`-th edge of [`AdjacencyList::edges`]
pub fn without_edge(graph: &LabelledGraph, index: usize) -> LabelledGraph {
    let mut copy = LabelledGraph::new(graph.name());
    for u in graph.vertices() {
        copy.add_vertex(graph.name_of(u));
    }
    for (_, (Edge(u, v), w)) in graph.edges().enumerate().filter(|(i, _)| *i != index) {
        copy.add_edge(u, v, w);
    }
    copy
}

/// Articulation points by definition: nodes whose removal increases the number of components
pub fn naive_articulation_points(graph: &LabelledGraph) -> Vec<Node> {
    let ccs = graph.number_of_connected_components();
    graph
        .vertices()
        .filter(|&u| without_node(graph, u).number_of_connected_components() > ccs)
        .collect()
}

/// Bridges by definition: edges whose removal increases the number of components
pub fn naive_bridges(graph: &LabelledGraph) -> Vec<Edge> {
    let ccs = graph.number_of_connected_components();
    let mut bridges: Vec<Edge> = graph
        .edges()
        .enumerate()
        .filter(|(i, _)| without_edge(graph, *i).number_of_connected_components() > ccs)
        .map(|(_, (e, _))| e)
        .collect();
    bridges.sort();
    bridges
}

/// Exact eccentricity-based diameter of the component containing `u`, computed by running
/// Floyd-Warshall on the whole graph. Only suited for small graphs.
pub fn naive_diameter_of(graph: &LabelledGraph, u: Node) -> Distance {
    let n = graph.len();
    let mut dist = vec![vec![None; n]; n];
    for v in 0..n {
        dist[v][v] = Some(0);
    }
    for (Edge(a, b), w) in graph.edges() {
        let (a, b, w) = (a as usize, b as usize, w as Distance);
        for (x, y) in [(a, b), (b, a)] {
            if dist[x][y].is_none_or(|d| d > w) {
                dist[x][y] = Some(w);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].is_none_or(|d| d > a + b) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }

    let dist = &dist;
    let component: Vec<usize> = (0..n).filter(|&v| dist[u as usize][v].is_some()).collect();
    component
        .iter()
        .flat_map(|&a| component.iter().filter_map(move |&b| dist[a][b]))
        .max()
        .unwrap_or(0)
}
