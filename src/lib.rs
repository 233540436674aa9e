mod augment;
mod cost;
mod edge;
mod flow;
mod graph;
mod ledger;
mod loader;
mod node;
mod search;
mod solver;

pub use augment::Augmentation;
pub use cost::Cost;
pub use edge::Edge;
pub use flow::Flow;
pub use graph::Graph;
pub use ledger::ResidualLedger;
pub use loader::{load_graph, parse_graph, LoadError};
pub use node::NodeId;
pub use solver::{solve, Solution, SolveError, Solver};
