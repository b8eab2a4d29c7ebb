/*!
# IO

Utilities for reading graphs from text and for rendering analysis results as text.

## Text Format

A graph is described line by line (see [`text`] for the details):
```text
// comments and blank lines are skipped
my-graph
a
a -- b
b -- c 7
```
The first line is the name of the graph, followed by vertex declarations (`v`) and
edge declarations (`u -- v` with an optional non-negative integer weight).

## Results

The [`report`] module turns query results into the canonical textual forms (sorted diameters,
sorted cut vertex names, sorted cut edge pairs) and bundles all of them into a [`Report`].

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by configured readers and writers.
- [`TextRead`] and [`TextWrite`] are shorthands with default settings on the graph itself.
*/

pub mod report;
pub mod text;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{Result, prelude::*};

pub use report::*;
pub use text::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Shorthand for returning a [`GraphError`](crate::GraphError) early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $error : expr) => {
        if !($cond) {
            return Err($error);
        }
    };
}

use raise_error_unless;
