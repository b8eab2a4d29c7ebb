//! # Report
//!
//! Canonical textual forms of the analysis results. All lists are whitespace-joined without
//! leading or trailing blanks; an empty list is the empty string.

use std::{fmt, str::FromStr};

use itertools::Itertools;

use super::*;
use crate::algo::*;

/// Formats diameters in ascending order
///
/// # Examples
/// ```
/// use lgraphs::io::format_diameters;
///
/// assert_eq!(format_diameters(&[7, 0, 3]), "0 3 7");
/// assert_eq!(format_diameters(&[]), "");
/// ```
pub fn format_diameters(diameters: &[Distance]) -> String {
    diameters.iter().sorted_unstable().join(" ")
}

/// Formats vertex names in byte-lexicographic order
pub fn format_cut_vertices<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().sorted_unstable().join(" ")
}

/// Formats name pairs: every pair is ordered, the pairs are sorted by first and then by second
/// name and finally flattened.
///
/// # Examples
/// ```
/// use lgraphs::io::format_cut_edges;
///
/// let pairs = [("z", "a"), ("x", "b"), ("y", "c")];
/// assert_eq!(format_cut_edges(pairs), "a z b x c y");
/// ```
pub fn format_cut_edges<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(u, v)| if u <= v { (u, v) } else { (v, u) })
        .sorted_unstable()
        .flat_map(|(u, v)| [u, v])
        .join(" ")
}

/// Queries on a [`LabelledGraph`] whose results are reported as text
pub trait TextualQueries {
    /// Per-component diameters, see [`Diameters::component_diameters`]
    fn diameters_text(&self) -> String;

    /// Names of the articulation points, see [`ArticulationPoints::compute_articulation_points`]
    fn cut_vertices_text(&self) -> String;

    /// Name pairs of the bridges, see [`Bridges::compute_bridges`]
    fn cut_edges_text(&self) -> String;
}

impl TextualQueries for LabelledGraph {
    fn diameters_text(&self) -> String {
        format_diameters(&self.component_diameters())
    }

    fn cut_vertices_text(&self) -> String {
        format_cut_vertices(
            self.compute_articulation_points()
                .into_iter()
                .map(|u| self.name_of(u)),
        )
    }

    fn cut_edges_text(&self) -> String {
        format_cut_edges(
            self.compute_bridges()
                .into_iter()
                .map(|Edge(u, v)| (self.name_of(u), self.name_of(v))),
        )
    }
}

/// A single query that can be answered by a [`Report`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    Name,
    Vertices,
    Edges,
    Bipartite,
    Components,
    Diameters,
    CutVertices,
    CutEdges,
}

impl Query {
    /// All queries in report order
    pub const ALL: [Query; 8] = [
        Query::Name,
        Query::Vertices,
        Query::Edges,
        Query::Bipartite,
        Query::Components,
        Query::Diameters,
        Query::CutVertices,
        Query::CutEdges,
    ];

    /// Key used in the textual report
    pub fn key(self) -> &'static str {
        match self {
            Query::Name => "name",
            Query::Vertices => "vertices",
            Query::Edges => "edges",
            Query::Bipartite => "bipartite",
            Query::Components => "components",
            Query::Diameters => "diameters",
            Query::CutVertices => "cut-vertices",
            Query::CutEdges => "cut-edges",
        }
    }
}

impl FromStr for Query {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.to_lowercase().replace('_', "-");
        Query::ALL
            .into_iter()
            .find(|q| q.key() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown query: {s} (expected one of: {})",
                    Query::ALL.iter().map(|q| q.key()).join(", ")
                )
            })
    }
}

/// Results of all queries on one graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub name: String,
    pub vertices: NumNodes,
    pub edges: NumEdges,
    pub bipartite: bool,
    pub components: NumNodes,
    pub diameters: String,
    pub cut_vertices: String,
    pub cut_edges: String,
}

impl Report {
    /// Runs every analysis on `graph`. Articulation points and bridges share one low-link search.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, io::*};
    ///
    /// let g: LabelledGraph = "g\nz -- a\nx -- b\ny -- c".parse().unwrap();
    /// let report = Report::compute(&g);
    ///
    /// assert_eq!(report.components, 3);
    /// assert_eq!(report.diameters, "1 1 1");
    /// assert_eq!(report.cut_vertices, "");
    /// assert_eq!(report.cut_edges, "a z b x c y");
    /// ```
    pub fn compute(graph: &LabelledGraph) -> Self {
        let mut visitors = (
            ArticulationPointVisitor::new(graph.number_of_nodes()),
            BridgeVisitor::default(),
        );
        LowLinkSearch::new(graph).run(&mut visitors);
        let (articulation_points, bridges) = visitors;

        Self {
            name: graph.name().to_string(),
            vertices: graph.number_of_nodes(),
            edges: graph.number_of_edges(),
            bipartite: graph.is_bipartite(),
            components: graph.number_of_connected_components(),
            diameters: graph.diameters_text(),
            cut_vertices: format_cut_vertices(
                articulation_points
                    .into_articulation_points()
                    .into_iter()
                    .map(|u| graph.name_of(u)),
            ),
            cut_edges: format_cut_edges(
                bridges
                    .into_bridges()
                    .into_iter()
                    .map(|Edge(u, v)| (graph.name_of(u), graph.name_of(v))),
            ),
        }
    }

    /// Returns the textual value of a single query
    pub fn value_of(&self, query: Query) -> String {
        match query {
            Query::Name => self.name.clone(),
            Query::Vertices => self.vertices.to_string(),
            Query::Edges => self.edges.to_string(),
            Query::Bipartite => self.bipartite.to_string(),
            Query::Components => self.components.to_string(),
            Query::Diameters => self.diameters.clone(),
            Query::CutVertices => self.cut_vertices.clone(),
            Query::CutEdges => self.cut_edges.clone(),
        }
    }

    /// Writes one `key: value` line per given query
    pub fn write_queries<W: fmt::Write>(&self, out: &mut W, queries: &[Query]) -> fmt::Result {
        for &q in queries {
            writeln!(out, "{}: {}", q.key(), self.value_of(q))?;
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_queries(f, &Query::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::GeneratorSubstructures;

    #[test]
    fn cut_edges_are_normalized_and_sorted() {
        assert_eq!(format_cut_edges(Vec::<(&str, &str)>::new()), "");
        assert_eq!(
            format_cut_edges([("b", "a"), ("a", "c"), ("a", "b")]),
            "a b a b a c"
        );
        // byte order: uppercase before lowercase
        assert_eq!(format_cut_edges([("a", "B")]), "B a");
    }

    #[test]
    fn cut_vertices_sorted_by_name() {
        assert_eq!(format_cut_vertices(["m", "b", "Z", "ba"]), "Z b ba m");
        assert_eq!(format_cut_vertices(Vec::<&str>::new()), "");
    }

    #[test]
    fn textual_queries_use_names() {
        let mut graph = LabelledGraph::new("g");
        graph.connect_path(["zeta", "alpha", "mid", "beta"], 2);
        graph.add_vertex("solo");

        assert_eq!(graph.diameters_text(), "0 6");
        assert_eq!(graph.cut_vertices_text(), "alpha mid");
        assert_eq!(graph.cut_edges_text(), "alpha mid alpha zeta beta mid");
    }

    #[test]
    fn report_matches_single_queries() {
        let mut graph = LabelledGraph::new("mixed");
        graph.connect_cycle(["a", "b", "c"], 1);
        graph.connect_star("hub", ["x", "y", "z"], 4);
        graph.add_edge_by_names("c", "hub", 1);

        let report = Report::compute(&graph);
        assert_eq!(report.cut_vertices, graph.cut_vertices_text());
        assert_eq!(report.cut_edges, graph.cut_edges_text());
        assert_eq!(report.cut_vertices, "c hub");
        assert_eq!(report.cut_edges, "c hub hub x hub y hub z");
        assert!(!report.bipartite);
        assert_eq!(report.components, 1);
        assert_eq!(report.diameters, "8");
    }

    #[test]
    fn display_lists_every_query() {
        let graph: LabelledGraph = "empty".parse().unwrap();
        let text = Report::compute(&graph).to_string();
        assert_eq!(
            text,
            "name: empty\nvertices: 0\nedges: 0\nbipartite: true\ncomponents: 0\n\
             diameters: \ncut-vertices: \ncut-edges: \n"
        );
    }

    #[test]
    fn parse_queries() {
        assert_eq!("cut-edges".parse::<Query>(), Ok(Query::CutEdges));
        assert_eq!("Cut_Vertices".parse::<Query>(), Ok(Query::CutVertices));
        assert!("diameter".parse::<Query>().is_err());
    }
}
