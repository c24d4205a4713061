use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use log::warn;

use crate::graph::{Graph, GraphError, Label, Weight};

/// Upper bound for allocations sized by the header counts.
const MAX_PREALLOCATED: usize = 1 << 16;

#[derive(Debug, thiserror::Error)]
pub enum ReadGraphError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("line {line}: {source}")]
    InvalidReference {
        line: usize,
        #[source]
        source: GraphError,
    },
}

pub fn load_graph(path: impl AsRef<Path>) -> anyhow::Result<Graph> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    read_graph(BufReader::new(f)).with_context(|| format!("cannot read {}", path.display()))
}

/**
Edge list instance format

----------

    N
    M
    from to weight
    ...

Line 1 holds the number of nodes N, line 2 the number of edges M, followed by M lines with
three whitespace separated fields. Nodes are labelled `1..=N`, whether or not they appear in an
edge; `from`/`to` must lie in that range. Blank lines are ignored.
 */
pub fn read_graph<R: BufRead>(reader: R) -> Result<Graph, ReadGraphError> {
    let mut lines = ContentLines::new(reader);

    let num_nodes: Label = lines.header("node count")?;
    let num_edges: usize = lines.header("edge count")?;

    let mut graph = Graph::with_capacity(
        (num_nodes as usize).min(MAX_PREALLOCATED),
        num_edges.min(MAX_PREALLOCATED),
    );
    for label in 1..=num_nodes {
        graph.add_node(label);
    }

    for found in 0..num_edges {
        let (line, content) = lines.next_content()?.ok_or_else(|| ReadGraphError::Parse {
            line: lines.last + 1,
            message: format!("expected {} edges, found {}", num_edges, found),
        })?;

        let fields: Vec<&str> = content.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(ReadGraphError::Parse {
                line,
                message: format!(
                    "expected 3 fields `from to weight`, found {}",
                    fields.len()
                ),
            });
        }
        let from: Label = parse_field(line, fields[0], "node label")?;
        let to: Label = parse_field(line, fields[1], "node label")?;
        let weight: Weight = parse_field(line, fields[2], "weight")?;
        if !weight.is_finite() {
            return Err(ReadGraphError::Parse {
                line,
                message: format!("weight `{}` is not a finite number", fields[2]),
            });
        }

        graph
            .add_edge(from, to, weight)
            .map_err(|source| ReadGraphError::InvalidReference { line, source })?;
    }

    if let Some((line, _)) = lines.next_content()? {
        warn!("ignoring content after the last edge, starting at line {}", line);
    }

    Ok(graph)
}

fn parse_field<T>(line: usize, field: &str, what: &str) -> Result<T, ReadGraphError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    field.parse().map_err(|e| ReadGraphError::Parse {
        line,
        message: format!("invalid {} `{}`: {}", what, field, e),
    })
}

/// Non-blank lines together with their 1-based line number.
struct ContentLines<R> {
    lines: std::io::Lines<R>,
    last: usize,
}

impl<R: BufRead> ContentLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            last: 0,
        }
    }

    fn next_content(&mut self) -> Result<Option<(usize, String)>, ReadGraphError> {
        while let Some(line) = self.lines.next() {
            let line = line?;
            self.last += 1;
            if !line.trim().is_empty() {
                return Ok(Some((self.last, line)));
            }
        }
        Ok(None)
    }

    fn header<T>(&mut self, what: &str) -> Result<T, ReadGraphError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.next_content()? {
            Some((line, content)) => parse_field(line, content.trim(), what),
            None => Err(ReadGraphError::Parse {
                line: self.last + 1,
                message: format!("missing {}", what),
            }),
        }
    }
}
