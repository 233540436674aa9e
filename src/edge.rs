use crate::{Cost, Flow, NodeId};

/// One directed arc. Immutable once the graph is built; assigned flow lives
/// in the [`ResidualLedger`](crate::ResidualLedger), never on the edge.
#[derive(Clone, Debug)]
pub struct Edge<F, C>
where
    F: Flow,
    C: Cost,
{
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: F,
    pub cost: C,
}
