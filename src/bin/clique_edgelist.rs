//! solves a maximum-clique instance given as an edge-list file and prints
//! the `SolveResult` JSON shape to stdout (or `--output`).

use clap::{load_yaml, App};
use tracing::info;

use cliquebound::cli::{init_tracing, parse_edge_list, read_file};
use cliquebound::orchestrator::try_solve_max_clique_all;

pub fn main() {
    init_tracing();

    let yaml = load_yaml!("clique_edgelist.yml");
    let args = App::from_yaml(yaml).get_matches();

    let instance_path = args.value_of("instance").unwrap();
    let time_budget_sec: f64 = args
        .value_of("time")
        .unwrap()
        .parse()
        .unwrap_or_else(|_| panic!("--time must be a number"));
    let enum_cap: Option<usize> = args.value_of("cap").map(|c| c.parse().unwrap_or_else(|_| panic!("--cap must be an integer")));
    let reorder = !args.is_present("no-reorder");

    let contents = read_file(instance_path).unwrap_or_else(|e| panic!("{e}"));
    let (n, edges) = parse_edge_list(&contents).unwrap_or_else(|e| panic!("{e}"));
    info!(n, num_edges = edges.len(), "parsed edge-list instance");

    let result = try_solve_max_clique_all(n as i64, &edges, time_budget_sec, enum_cap, reorder)
        .unwrap_or_else(|e| panic!("{e}"));
    info!(omega = result.omega, complete = result.complete, "solve finished");

    let json = serde_json::to_string_pretty(&result).expect("SolveResult always serializes");
    match args.value_of("output") {
        Some(path) => std::fs::write(path, json).unwrap_or_else(|e| panic!("could not write {path}: {e}")),
        None => println!("{json}"),
    }
}
