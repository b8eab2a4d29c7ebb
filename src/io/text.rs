//! # Text
//!
//! The text format consists of the graph name on the first non-comment line, followed by one
//! declaration per line:
//! - `v` declares the vertex `v`,
//! - `u -- v` declares an edge between `u` and `v` with the default weight,
//! - `u -- v w` declares an edge with the non-negative integer weight `w`.
//!
//! Lines are trimmed; blank lines and lines starting with the comment prefix are skipped.
//! Endpoints of an edge are created on first use, and every edge line adds an edge of its own,
//! i.e. repeated lines yield parallel edges.

use std::{
    io::{BufRead, Lines},
    str::FromStr,
};

use tracing::{debug, trace};

use super::*;
use crate::GraphError;

/// A GraphReader for the text format
#[derive(Debug, Clone)]
pub struct TextReader {
    /// Lines starting with `comment_prefix` are skipped when reading
    comment_prefix: String,
    /// Token between the endpoints of an edge declaration
    edge_separator: String,
    /// Weight of edges without explicit weight
    default_weight: Weight,
}

impl Default for TextReader {
    fn default() -> Self {
        Self {
            comment_prefix: "//".to_string(),
            edge_separator: "--".to_string(),
            default_weight: DEFAULT_WEIGHT,
        }
    }
}

impl TextReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment prefix
    pub fn comment_prefix<S: Into<String>>(mut self, prefix: S) -> TextReader {
        self.comment_prefix = prefix.into();
        self
    }

    /// Updates the edge separator
    pub fn edge_separator<S: Into<String>>(mut self, separator: S) -> TextReader {
        self.edge_separator = separator.into();
        self
    }

    /// Updates the weight of edges declared without weight
    pub fn default_weight(mut self, weight: Weight) -> TextReader {
        self.default_weight = weight;
        self
    }

    /// Applies a single declaration to the graph
    fn parse_declaration(
        &self,
        graph: &mut LabelledGraph,
        line_number: usize,
        line: &str,
    ) -> Result<()> {
        let syntax_error = || GraphError::Syntax {
            line: line_number,
            content: line.to_string(),
        };

        let Some((u, rest)) = line.split_once(self.edge_separator.as_str()) else {
            raise_error_unless!(!line.contains(char::is_whitespace), syntax_error());
            trace!(line = line_number, vertex = line, "vertex declaration");
            graph.add_vertex(line);
            return Ok(());
        };

        let u = u.trim();
        let mut parts = rest.split_whitespace();
        let (Some(v), weight, None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(syntax_error());
        };
        raise_error_unless!(
            !u.is_empty() && !u.contains(char::is_whitespace),
            syntax_error()
        );
        // vertex names never contain the separator
        raise_error_unless!(!v.contains(self.edge_separator.as_str()), syntax_error());

        let weight = match weight {
            Some(token) => parse_weight(line_number, token)?,
            None => self.default_weight,
        };

        trace!(line = line_number, u, v, weight, "edge declaration");
        graph.add_edge_by_names(u, v, weight);
        Ok(())
    }
}

/// Parses a weight token, telling malformed and negative weights apart
fn parse_weight(line: usize, token: &str) -> Result<Weight> {
    let invalid = || GraphError::InvalidWeight {
        line,
        token: token.to_string(),
    };

    let weight: i64 = token.parse().map_err(|_| invalid())?;
    raise_error_unless!(weight >= 0, GraphError::NegativeWeight { line, weight });
    Weight::try_from(weight).map_err(|_| invalid())
}

impl GraphReader<LabelledGraph> for TextReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<LabelledGraph> {
        let mut lines = ContentLines::new(reader, &self.comment_prefix);

        let (_, name) = lines.next_content_line()?.ok_or(GraphError::MissingName)?;
        let mut graph = LabelledGraph::new(name);

        while let Some((line_number, line)) = lines.next_content_line()? {
            self.parse_declaration(&mut graph, line_number, &line)?;
        }

        debug!(
            graph = graph.name(),
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "read graph"
        );
        Ok(graph)
    }
}

/// Iterates over trimmed, non-empty, non-comment lines together with their 1-based line number
struct ContentLines<'a, R> {
    lines: Lines<R>,
    line_number: usize,
    comment_prefix: &'a str,
}

impl<'a, R: BufRead> ContentLines<'a, R> {
    fn new(reader: R, comment_prefix: &'a str) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            comment_prefix,
        }
    }

    /// Returns the next content line if it exists or propagates an error
    fn next_content_line(&mut self) -> Result<Option<(usize, String)>> {
        loop {
            let Some(line) = self.lines.next() else {
                return Ok(None);
            };
            let line = line?;
            self.line_number += 1;

            let line = line.trim();
            if line.is_empty()
                || (!self.comment_prefix.is_empty() && line.starts_with(self.comment_prefix))
            {
                continue;
            }

            return Ok(Some((self.line_number, line.to_string())));
        }
    }
}

/// Trait for creating graphs from text.
/// Used as shorthand for default TextReader settings
pub trait TextRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_text<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_text_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_text(BufReader::new(File::open(path)?))
    }
}

impl TextRead for LabelledGraph {
    fn try_read_text<R: BufRead>(reader: R) -> Result<Self> {
        TextReader::default().try_read_graph(reader)
    }
}

impl FromStr for LabelledGraph {
    type Err = GraphError;

    /// Parses a graph in the text format with default settings
    ///
    /// # Examples
    /// ```
    /// use lgraphs::prelude::*;
    ///
    /// let g: LabelledGraph = "triangle\na -- b\nb -- c 2\nc -- a".parse().unwrap();
    /// assert_eq!(g.name(), "triangle");
    /// assert_eq!(g.number_of_edges(), 3);
    /// assert_eq!(g.weight_between(1, 2), Some(2));
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        Self::try_read_text(s.as_bytes())
    }
}

/// A writer for the text format.
///
/// All vertices are declared first in index order, followed by every edge exactly once,
/// so reading the output again yields the same vertex indices. Vertex names must not contain
/// whitespace or the edge separator.
#[derive(Debug, Clone)]
pub struct TextWriter {
    edge_separator: String,
    default_weight: Weight,
}

impl Default for TextWriter {
    fn default() -> Self {
        Self {
            edge_separator: "--".to_string(),
            default_weight: DEFAULT_WEIGHT,
        }
    }
}

impl TextWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the edge separator
    pub fn edge_separator<S: Into<String>>(mut self, separator: S) -> TextWriter {
        self.edge_separator = separator.into();
        self
    }

    /// Weights equal to `weight` are omitted from the output
    pub fn default_weight(mut self, weight: Weight) -> TextWriter {
        self.default_weight = weight;
        self
    }
}

impl GraphWriter<LabelledGraph> for TextWriter {
    fn try_write_graph<W: Write>(&self, graph: &LabelledGraph, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", graph.name())?;

        for name in graph.names() {
            writeln!(writer, "{name}")?;
        }

        for (Edge(u, v), w) in graph.edges() {
            write!(
                writer,
                "{} {} {}",
                graph.name_of(u),
                self.edge_separator,
                graph.name_of(v)
            )?;
            if w != self.default_weight {
                write!(writer, " {w}")?;
            }
            writeln!(writer)?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Trait for writing graphs as text.
/// Used as shorthand for default TextWriter settings
pub trait TextWrite {
    /// Tries to write the graph to a given writer
    fn try_write_text<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a given file
    fn try_write_text_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_text(BufWriter::new(File::create(path)?))
    }
}

impl TextWrite for LabelledGraph {
    fn try_write_text<W: Write>(&self, writer: W) -> Result<()> {
        TextWriter::default().try_write_graph(self, writer)
    }
}
