use std::{collections::HashSet, fs, io, num::ParseIntError, path::Path};

use thiserror::Error;

use crate::Graph;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read graph description: {0}")]
    Io(#[from] io::Error),
    #[error("invalid number in graph description: {0}")]
    BadNumber(#[from] ParseIntError),
    #[error("vertex count must be at least 2, got {0}")]
    TooFewVertices(usize),
    #[error("edge references vertex {id} but the graph has {nodes} vertices")]
    DanglingVertex { id: usize, nodes: usize },
    #[error("edge {from}->{to} has negative capacity {capacity}")]
    NegativeCapacity {
        from: usize,
        to: usize,
        capacity: i64,
    },
    #[error("edge {from}->{to} is declared more than once")]
    DuplicateEdge { from: usize, to: usize },
    #[error("trailing tokens after the last complete edge")]
    TrailingTokens,
}

/// Reads a graph description file: the vertex count followed by one
/// `from to capacity cost` quadruple per edge, whitespace separated.
/// The graph is named after the file stem; vertex 0 is the source and the
/// last vertex the sink.
pub fn load_graph(path: &Path) -> Result<Graph<i64, i64>, LoadError> {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("graph");
    let text = fs::read_to_string(path)?;
    parse_graph(name, &text)
}

/// Parses a graph description from text. Malformed descriptions are
/// rejected here so the solver only ever sees well-formed graphs.
pub fn parse_graph(name: &str, text: &str) -> Result<Graph<i64, i64>, LoadError> {
    let mut tokens = text.split_whitespace();

    let nodes: usize = match tokens.next() {
        Some(token) => token.parse()?,
        None => return Err(LoadError::TooFewVertices(0)),
    };
    if nodes < 2 {
        return Err(LoadError::TooFewVertices(nodes));
    }

    let mut graph = Graph::new(name);
    let ids: Vec<_> = (0..nodes).map(|_| graph.add_node()).collect();

    let rest: Vec<&str> = tokens.collect();
    if rest.len() % 4 != 0 {
        return Err(LoadError::TrailingTokens);
    }

    let mut declared = HashSet::new();
    for quad in rest.chunks(4) {
        let from: usize = quad[0].parse()?;
        let to: usize = quad[1].parse()?;
        let capacity: i64 = quad[2].parse()?;
        let cost: i64 = quad[3].parse()?;

        for id in [from, to] {
            if id >= nodes {
                return Err(LoadError::DanglingVertex { id, nodes });
            }
        }
        if capacity < 0 {
            return Err(LoadError::NegativeCapacity { from, to, capacity });
        }
        // The ledger accounts flow per ordered pair, so a pair declared
        // twice cannot be represented.
        if !declared.insert((from, to)) {
            return Err(LoadError::DuplicateEdge { from, to });
        }

        graph.add_edge(ids[from], ids[to], capacity, cost);
    }

    Ok(graph)
}
