use crate::{Cost, Edge, Flow, NodeId};

/// Net flow assigned on every ordered vertex pair, as a dense |V|x|V|
/// matrix. Antisymmetric at all times: `flow[u][v] == -flow[v][u]`, because
/// every commit updates both entries together. This is what lets a later
/// augmentation cancel flow routed by an earlier one.
pub struct ResidualLedger<F>
where
    F: Flow,
{
    len: usize,
    flow: Vec<F>,
}

impl<F> ResidualLedger<F>
where
    F: Flow,
{
    pub fn new(len: usize) -> Self {
        ResidualLedger {
            len,
            flow: vec![F::zero(); len * len],
        }
    }

    pub fn assigned_on(&self, from: NodeId, to: NodeId) -> F {
        self.flow[self.entry(from, to)]
    }

    /// Remaining capacity of a declared edge: declared capacity minus the
    /// net flow already assigned on its vertex pair.
    pub fn remaining<C>(&self, edge: &Edge<F, C>) -> F
    where
        C: Cost,
    {
        edge.capacity - self.assigned_on(edge.from, edge.to)
    }

    /// Routes `amount` of flow from `from` to `to`. The caller must have
    /// checked `amount` against the remaining capacity; violating that is a
    /// bug in the orchestration, not a recoverable condition.
    pub fn commit(&mut self, from: NodeId, to: NodeId, amount: F) {
        debug_assert!(amount >= F::zero(), "negative commit on {from}->{to}");

        let forward = self.entry(from, to);
        self.flow[forward] = self.flow[forward] + amount;
        let backward = self.entry(to, from);
        self.flow[backward] = self.flow[backward] - amount;
    }

    fn entry(&self, from: NodeId, to: NodeId) -> usize {
        from.index * self.len + to.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(index: usize) -> NodeId {
        NodeId { index }
    }

    #[test]
    fn starts_all_zero() {
        let ledger: ResidualLedger<i64> = ResidualLedger::new(3);
        for u in 0..3 {
            for v in 0..3 {
                assert_eq!(ledger.assigned_on(node(u), node(v)), 0);
            }
        }
    }

    #[test]
    fn commit_is_antisymmetric() {
        let mut ledger: ResidualLedger<i64> = ResidualLedger::new(2);
        ledger.commit(node(0), node(1), 4);
        assert_eq!(ledger.assigned_on(node(0), node(1)), 4);
        assert_eq!(ledger.assigned_on(node(1), node(0)), -4);

        ledger.commit(node(0), node(1), 3);
        assert_eq!(ledger.assigned_on(node(0), node(1)), 7);
        assert_eq!(ledger.assigned_on(node(1), node(0)), -7);
    }

    #[test]
    fn reverse_commit_cancels_assigned_flow() {
        let mut ledger: ResidualLedger<i64> = ResidualLedger::new(2);
        ledger.commit(node(0), node(1), 5);
        ledger.commit(node(1), node(0), 2);
        assert_eq!(ledger.assigned_on(node(0), node(1)), 3);
        assert_eq!(ledger.assigned_on(node(1), node(0)), -3);
    }

    #[test]
    fn remaining_capacity_shrinks_with_commits() {
        let edge = Edge {
            from: node(0),
            to: node(1),
            capacity: 10i64,
            cost: 1i64,
        };
        let mut ledger = ResidualLedger::new(2);
        assert_eq!(ledger.remaining(&edge), 10);

        ledger.commit(edge.from, edge.to, 4);
        assert_eq!(ledger.remaining(&edge), 6);

        ledger.commit(edge.from, edge.to, 6);
        assert_eq!(ledger.remaining(&edge), 0);
    }

    #[test]
    fn reverse_flow_grows_remaining_capacity() {
        // Flow routed on the reverse pair frees up the declared edge.
        let edge = Edge {
            from: node(0),
            to: node(1),
            capacity: 5i64,
            cost: 1i64,
        };
        let mut ledger = ResidualLedger::new(2);
        ledger.commit(node(1), node(0), 3);
        assert_eq!(ledger.remaining(&edge), 8);
    }
}
