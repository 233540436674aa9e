use log::debug;
use try_partialord::TryMinMax;

use crate::{search::SearchLabels, Cost, Flow, Graph, NodeId, ResidualLedger};

/// One committed augmenting path: the vertices visited, source first, and
/// the bottleneck amount pushed through every edge on it.
#[derive(Clone, Debug, PartialEq)]
pub struct Augmentation<F>
where
    F: Flow,
{
    pub path: Vec<NodeId>,
    pub amount: F,
}

impl<F> Augmentation<F>
where
    F: Flow,
{
    /// The path rendered as `0->1->3`, for logs and reports.
    pub fn path_display(&self) -> String {
        self.path
            .iter()
            .map(|node| node.to_string())
            .collect::<Vec<_>>()
            .join("->")
    }
}

/// Commits the bottleneck capacity of the path recorded in `labels`. Walks
/// the predecessor chain back from the sink, stopping when the current
/// vertex is the source itself, takes the minimum remaining capacity over
/// the hops, then commits that amount on every hop.
///
/// Requires a completed search that reached the sink; the solver guards the
/// call, so a broken chain here is a programming error and panics.
pub(crate) fn augment<F, C>(
    graph: &Graph<F, C>,
    ledger: &mut ResidualLedger<F>,
    labels: &SearchLabels<C>,
) -> Augmentation<F>
where
    F: Flow,
    C: Cost,
{
    let source = graph.source();
    let sink = graph.sink();

    // Hops in sink-to-source order.
    let mut hops = Vec::new();
    let mut current = sink;
    while current != source {
        let pred = labels
            .predecessor(current)
            .expect("augment called without a path to the sink");
        hops.push((pred, current));
        current = pred;
    }

    let bottleneck = hops
        .iter()
        .map(|&(from, to)| {
            let edge = graph
                .edge(from, to)
                .expect("predecessor hop without a declared edge");
            ledger.remaining(edge)
        })
        .try_min()
        .expect("incomparable residual capacities on path")
        .expect("empty augmenting path");
    debug_assert!(bottleneck > F::zero());

    for &(from, to) in &hops {
        ledger.commit(from, to, bottleneck);
    }

    let mut path: Vec<NodeId> = hops.iter().map(|&(_, to)| to).collect();
    path.push(source);
    path.reverse();

    let augmentation = Augmentation {
        path,
        amount: bottleneck,
    };
    debug!(
        "found flow {:?}: {}",
        augmentation.amount,
        augmentation.path_display()
    );
    augmentation
}
