use std::collections::VecDeque;

use crate::{Cost, Flow, Graph, NodeId, ResidualLedger};

/// Cost labels and predecessor links produced by one shortest-path search.
/// Rebuilt from scratch every search; graph topology itself never carries
/// search state, so concurrent solves on clones of a graph cannot interfere.
pub(crate) struct SearchLabels<C>
where
    C: Cost,
{
    best_cost: Vec<Option<C>>,
    predecessor: Vec<Option<NodeId>>,
}

impl<C> SearchLabels<C>
where
    C: Cost,
{
    fn new(len: usize) -> Self {
        SearchLabels {
            best_cost: vec![None; len],
            predecessor: vec![None; len],
        }
    }

    pub(crate) fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessor[node.index]
    }

    pub(crate) fn cost_to(&self, node: NodeId) -> Option<C> {
        self.best_cost[node.index]
    }
}

/// Finds a minimum total-cost path from source to sink through edges with
/// strictly positive remaining capacity, by label-correcting relaxation over
/// a FIFO worklist. A vertex re-enters the worklist every time its label
/// improves; relaxation runs to a fixed point, so zero and negative edge
/// costs are handled as long as no negative cycle is reachable.
///
/// Returns the labels only when the sink was reached; the path is read by
/// following predecessor links from the sink back to the source.
pub(crate) fn cheapest_path<F, C>(
    graph: &Graph<F, C>,
    ledger: &ResidualLedger<F>,
) -> Option<SearchLabels<C>>
where
    F: Flow,
    C: Cost,
{
    let mut labels = SearchLabels::new(graph.len());
    labels.best_cost[graph.source().index] = Some(C::zero());

    let mut worklist = VecDeque::new();
    worklist.push_back(graph.source());

    while let Some(from) = worklist.pop_front() {
        let from_cost = labels.best_cost[from.index].expect("queued vertex without a cost label");

        for edge in graph.outgoing(from) {
            if ledger.remaining(edge) <= F::zero() {
                continue;
            }

            let candidate = from_cost + edge.cost;
            let improves = match labels.best_cost[edge.to.index] {
                None => true,
                Some(best) => candidate < best,
            };

            if improves {
                labels.best_cost[edge.to.index] = Some(candidate);
                labels.predecessor[edge.to.index] = Some(from);
                worklist.push_back(edge.to);
            }
        }
    }

    if labels.predecessor(graph.sink()).is_some() {
        Some(labels)
    } else {
        None
    }
}
