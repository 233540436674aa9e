use std::{env, path::Path, process::ExitCode};

use mincost_flow::{load_graph, Graph, ResidualLedger, Solver};

fn main() -> ExitCode {
    env_logger::init();

    let files: Vec<String> = env::args().skip(1).collect();
    if files.is_empty() {
        report(&demo_graph());
        return ExitCode::SUCCESS;
    }

    let mut failed = false;
    for file in &files {
        match load_graph(Path::new(file)) {
            Ok(graph) => {
                report(&graph);
                println!();
            }
            Err(err) => {
                eprintln!("{file}: {err}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// A small network routed over a cheap and an expensive branch, solved when
/// no graph files are given on the command line.
fn demo_graph() -> Graph<i64, i64> {
    let mut graph = Graph::new("demo");
    let source = graph.add_node();
    let cheap = graph.add_node();
    let dear = graph.add_node();
    let sink = graph.add_node();

    graph.add_edge(source, cheap, 10, 1);
    graph.add_edge(cheap, sink, 5, 1);
    graph.add_edge(source, dear, 5, 2);
    graph.add_edge(dear, sink, 10, 1);

    graph
}

fn report(graph: &Graph<i64, i64>) {
    println!("Flows found for {}", graph.name());

    let mut solver = match Solver::new(graph) {
        Ok(solver) => solver,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let solution = solver.run();

    for augmentation in &solution.trace {
        println!(
            "Found flow {}: {}",
            augmentation.amount,
            augmentation.path_display()
        );
    }

    for line in edge_report(graph, solver.ledger()) {
        println!("{line}");
    }

    println!("{} max flow assigned {}", graph.name(), solution.total_flow);
    println!("Total cost = {}", solution.total_cost);
}

/// One line per edge carrying non-zero flow within its declared capacity.
/// Zero-capacity edges never carry flow themselves; their pair may hold a
/// negative entry from the reverse direction, which is not reported.
fn edge_report(graph: &Graph<i64, i64>, ledger: &ResidualLedger<i64>) -> Vec<String> {
    graph
        .edges()
        .filter_map(|edge| {
            let assigned = ledger.assigned_on(edge.from, edge.to);
            if assigned != 0 && assigned <= edge.capacity && edge.capacity != 0 {
                Some(format!(
                    "Edge {}->{} assigned {} of {} at cost {}",
                    edge.from, edge.to, assigned, edge.capacity, edge.cost
                ))
            } else {
                None
            }
        })
        .collect()
}
