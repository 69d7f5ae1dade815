//! solves a maximum-clique instance described by a JSON request, read from
//! stdin or `--input`, and prints the `SolveResult` JSON shape to stdout
//! (or `--output`).

use std::io::Read;

use clap::{load_yaml, App};
use tracing::info;

use cliquebound::cli::{init_tracing, read_file};
use cliquebound::interfaces::SolveRequest;
use cliquebound::orchestrator::try_solve_max_clique_all;

pub fn main() {
    init_tracing();

    let yaml = load_yaml!("clique_json.yml");
    let args = App::from_yaml(yaml).get_matches();

    let raw = match args.value_of("input") {
        Some(path) => read_file(path).unwrap_or_else(|e| panic!("{e}")),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).expect("failed to read stdin");
            buf
        }
    };

    let request: SolveRequest = serde_json::from_str(&raw).unwrap_or_else(|e| panic!("invalid JSON request: {e}"));
    info!(n = request.n, num_edges = request.edges.len(), "parsed JSON solve request");

    let result = try_solve_max_clique_all(
        request.n,
        &request.edges,
        request.time_budget_sec,
        request.enum_cap,
        request.reorder,
    )
    .unwrap_or_else(|e| panic!("{e}"));
    info!(omega = result.omega, complete = result.complete, "solve finished");

    let json = serde_json::to_string_pretty(&result).expect("SolveResult always serializes");
    match args.value_of("output") {
        Some(path) => std::fs::write(path, json).unwrap_or_else(|e| panic!("could not write {path}: {e}")),
        None => println!("{json}"),
    }
}
