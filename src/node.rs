use std::fmt;

use crate::{Cost, Edge, Flow};

/// Stable index of a vertex, `0..N-1`. Vertex 0 is the source and vertex
/// N-1 the sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: usize,
}

impl NodeId {
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)
    }
}

pub(crate) struct Node<F, C>
where
    F: Flow,
    C: Cost,
{
    pub(crate) outgoing: Vec<Edge<F, C>>,
}
