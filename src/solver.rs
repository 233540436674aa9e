use log::info;
use thiserror::Error;

use crate::{
    augment::augment, search::cheapest_path, Augmentation, Cost, Flow, Graph, ResidualLedger,
};

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("graph `{name}` has {nodes} vertex(es); a source and a sink are required")]
    TooFewVertices { name: String, nodes: usize },
}

/// Outcome of a solve: the maximum flow deliverable to the sink, the minimum
/// cost of routing it, and every augmenting path in the order it was found.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F, C>
where
    F: Flow,
    C: Cost,
{
    pub total_flow: F,
    pub total_cost: C,
    pub trace: Vec<Augmentation<F>>,
}

/// Min-cost max-flow driver: repeats {search, augment} until no
/// capacity-positive path from source to sink remains. Owns the one
/// [`ResidualLedger`] of the solve; independent solves each get their own
/// solver and ledger, with nothing shared between them.
pub struct Solver<'g, F, C>
where
    F: Flow,
    C: Cost,
{
    graph: &'g Graph<F, C>,
    ledger: ResidualLedger<F>,
    total_flow: F,
    trace: Vec<Augmentation<F>>,
}

impl<'g, F, C> Solver<'g, F, C>
where
    F: Flow + Into<C>,
    C: Cost,
{
    pub fn new(graph: &'g Graph<F, C>) -> Result<Self, SolveError> {
        if graph.len() < 2 {
            return Err(SolveError::TooFewVertices {
                name: graph.name().to_string(),
                nodes: graph.len(),
            });
        }

        Ok(Solver {
            graph,
            ledger: ResidualLedger::new(graph.len()),
            total_flow: F::zero(),
            trace: Vec::new(),
        })
    }

    /// Runs the solve loop to completion. A source that cannot reach the
    /// sink at all is not an error; the result simply reports zero flow.
    /// Running a finished solver again finds no path and leaves the totals
    /// untouched.
    pub fn run(&mut self) -> Solution<F, C> {
        while let Some(labels) = cheapest_path(self.graph, &self.ledger) {
            let augmentation = augment(self.graph, &mut self.ledger, &labels);
            self.total_flow = self.total_flow + augmentation.amount;
            self.trace.push(augmentation);
        }

        let total_cost = self.total_cost();
        info!(
            "{}: flow {:?} at cost {:?} over {} augmenting path(s)",
            self.graph.name(),
            self.total_flow,
            total_cost,
            self.trace.len()
        );

        Solution {
            total_flow: self.total_flow,
            total_cost,
            trace: self.trace.clone(),
        }
    }

    // Cost is attributed per declared edge from the ledger, so an edge whose
    // assignment was partly cancelled by a later augmentation is charged for
    // its net flow only. Zero-capacity edges never carry flow and are
    // skipped.
    fn total_cost(&self) -> C {
        let mut total = C::zero();
        for edge in self.graph.edges() {
            let assigned = self.ledger.assigned_on(edge.from, edge.to);
            if assigned <= edge.capacity && edge.capacity != F::zero() {
                total = total + assigned.abs().into() * edge.cost;
            }
        }
        total
    }

    pub fn graph(&self) -> &Graph<F, C> {
        self.graph
    }

    pub fn ledger(&self) -> &ResidualLedger<F> {
        &self.ledger
    }
}

/// Solves a freshly-built graph in one call.
pub fn solve<F, C>(graph: &Graph<F, C>) -> Result<Solution<F, C>, SolveError>
where
    F: Flow + Into<C>,
    C: Cost,
{
    Ok(Solver::new(graph)?.run())
}
