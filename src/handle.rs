/*!
# Graph Handle

An owning handle for callers that query a single graph and release it explicitly.
Every query fails with [`GraphError::Released`] once the graph has been released; releasing twice
is reported instead of being an error.
*/

use std::io::BufRead;

use tracing::debug;

use crate::{
    GraphError, Result,
    algo::{BipartiteTest, Connectivity},
    io::{GraphReader, TextReader, TextualQueries},
    prelude::*,
};

/// Owns a [`LabelledGraph`] until it is released
#[derive(Debug, Clone)]
pub struct GraphHandle {
    graph: Option<LabelledGraph>,
}

impl From<LabelledGraph> for GraphHandle {
    fn from(graph: LabelledGraph) -> Self {
        Self::new(graph)
    }
}

impl GraphHandle {
    /// Creates a handle owning `graph`
    pub fn new(graph: LabelledGraph) -> Self {
        Self { graph: Some(graph) }
    }

    /// Reads a graph in the text format with default settings
    ///
    /// # Examples
    /// ```
    /// use lgraphs::handle::GraphHandle;
    ///
    /// let mut handle = GraphHandle::read("g\nz -- a\nx -- b\ny -- c".as_bytes()).unwrap();
    /// assert_eq!(handle.cut_edges().unwrap(), "a z b x c y");
    ///
    /// assert!(handle.release());
    /// assert!(!handle.release());
    /// assert!(handle.vertex_count().is_err());
    /// ```
    pub fn read<R: BufRead>(reader: R) -> Result<Self> {
        Self::read_with(&TextReader::default(), reader)
    }

    /// Reads a graph in the text format using a configured reader
    pub fn read_with<R: BufRead>(text_reader: &TextReader, reader: R) -> Result<Self> {
        Ok(Self::new(text_reader.try_read_graph(reader)?))
    }

    /// Returns the graph, or [`GraphError::Released`] after release
    pub fn graph(&self) -> Result<&LabelledGraph> {
        self.graph.as_ref().ok_or(GraphError::Released)
    }

    /// Returns *true* if the graph was already released
    pub fn is_released(&self) -> bool {
        self.graph.is_none()
    }

    /// Drops the graph. Returns *true* on the first call and *false* if there was nothing left
    /// to release.
    pub fn release(&mut self) -> bool {
        match self.graph.take() {
            Some(graph) => {
                debug!(graph = graph.name(), "released graph");
                true
            }
            None => false,
        }
    }

    pub fn name(&self) -> Result<&str> {
        Ok(self.graph()?.name())
    }

    pub fn vertex_count(&self) -> Result<NumNodes> {
        Ok(self.graph()?.number_of_nodes())
    }

    /// Number of undirected edges; parallel edges count individually, a self-loop once
    pub fn edge_count(&self) -> Result<NumEdges> {
        Ok(self.graph()?.number_of_edges())
    }

    pub fn is_bipartite(&self) -> Result<bool> {
        Ok(self.graph()?.is_bipartite())
    }

    pub fn component_count(&self) -> Result<NumNodes> {
        Ok(self.graph()?.number_of_connected_components())
    }

    /// Per-component diameters in ascending order, separated by blanks
    pub fn diameters(&self) -> Result<String> {
        Ok(self.graph()?.diameters_text())
    }

    /// Names of the cut vertices in ascending order, separated by blanks
    pub fn cut_vertices(&self) -> Result<String> {
        Ok(self.graph()?.cut_vertices_text())
    }

    /// Cut edges as sorted name pairs, flattened and separated by blanks
    pub fn cut_edges(&self) -> Result<String> {
        Ok(self.graph()?.cut_edges_text())
    }
}
