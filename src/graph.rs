use crate::{node::Node, Cost, Edge, Flow, NodeId};

/// A directed, capacitated, costed graph. Vertices are dense indices; the
/// first vertex added is the source, the last one the sink. Topology is
/// immutable while a solve is running.
pub struct Graph<F, C>
where
    F: Flow,
    C: Cost,
{
    name: String,
    nodes: Vec<Node<F, C>>,
}

impl<F, C> Graph<F, C>
where
    F: Flow,
    C: Cost,
{
    pub fn new(name: impl Into<String>) -> Self {
        Graph {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn source(&self) -> NodeId {
        NodeId { index: 0 }
    }

    /// The last vertex added. Panics on a graph with no vertices.
    pub fn sink(&self) -> NodeId {
        assert!(!self.nodes.is_empty(), "graph has no vertices, so no sink");
        NodeId {
            index: self.nodes.len() - 1,
        }
    }

    pub fn add_node(&mut self) -> NodeId {
        let index = self.nodes.len();
        self.nodes.push(Node {
            outgoing: Vec::new(),
        });
        NodeId { index }
    }

    /// Adds a directed edge. The ledger keys assigned flow by ordered vertex
    /// pair, so at most one edge may be declared per `(from, to)` pair.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, capacity: F, cost: C) {
        debug_assert!(capacity >= F::zero(), "negative capacity on {from}->{to}");
        debug_assert!(
            self.edge(from, to).is_none(),
            "duplicate edge {from}->{to}"
        );

        self.nodes[from.index].outgoing.push(Edge {
            from,
            to,
            capacity,
            cost,
        });
    }

    pub fn outgoing(&self, node: NodeId) -> &[Edge<F, C>] {
        &self.nodes[node.index].outgoing
    }

    pub fn edge(&self, from: NodeId, to: NodeId) -> Option<&Edge<F, C>> {
        self.nodes[from.index]
            .outgoing
            .iter()
            .find(|edge| edge.to == to)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<F, C>> {
        self.nodes.iter().flat_map(|node| node.outgoing.iter())
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(|index| NodeId { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_has_no_nodes() {
        let graph: Graph<i64, i64> = Graph::new("empty");
        assert!(graph.is_empty());
        assert_eq!(graph.name(), "empty");
    }

    #[test]
    fn source_and_sink_are_first_and_last() {
        let mut graph: Graph<i64, i64> = Graph::new("bounds");
        let first = graph.add_node();
        graph.add_node();
        let last = graph.add_node();
        assert_eq!(graph.source(), first);
        assert_eq!(graph.sink(), last);
    }

    #[test]
    #[should_panic(expected = "no sink")]
    fn sink_of_empty_graph_panics() {
        let graph: Graph<i64, i64> = Graph::new("empty");
        graph.sink();
    }

    #[test]
    fn edge_lookup_by_pair() {
        let mut graph: Graph<i64, i64> = Graph::new("lookup");
        let a = graph.add_node();
        let b = graph.add_node();
        graph.add_edge(a, b, 10, 3);

        let edge = graph.edge(a, b).expect("edge should exist");
        assert_eq!(edge.capacity, 10);
        assert_eq!(edge.cost, 3);
        assert!(graph.edge(b, a).is_none());
    }

    #[test]
    fn edges_iterates_every_declared_edge() {
        let mut graph: Graph<i64, i64> = Graph::new("iter");
        let a = graph.add_node();
        let b = graph.add_node();
        let c = graph.add_node();
        graph.add_edge(a, b, 1, 1);
        graph.add_edge(b, c, 2, 1);
        graph.add_edge(a, c, 3, 1);
        assert_eq!(graph.edges().count(), 3);
    }
}
