//! ties BitGraph, degeneracy reordering, the greedy seed and the two
//! solver phases together behind the single public `solve` entry.

use std::collections::BTreeSet;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::bitgraph::{BitGraph, VertexId, VertexPermutation};
use crate::error::CliqueError;
use crate::greedy::greedy_lower_bound;
use crate::solver::Solver;

/// fraction of the total budget given to the max-size phase.
const PHASE1_FRACTION: f64 = 0.4;
/// floor on the max-size phase's time budget, regardless of the total.
const PHASE1_MIN_SEC: f64 = 0.1;
/// number of greedy seed trials.
const GREEDY_TRIALS: usize = 64;

/// result of a single [`solve`] / [`solve_max_clique_all`] call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolveResult {
    pub omega: usize,
    pub witness: Vec<VertexId>,
    pub max_cliques: Vec<Vec<VertexId>>,
    pub complete: bool,
    pub runtime_sec: f64,
    pub expanded_nodes: u64,
    pub reordered: bool,
}

/// public library entry point: `solve(n, edges, time_budget_sec,
/// enum_cap, reorder) -> SolveResult`, matching the fixed external
/// interface. `n` and `edges` are assumed pre-validated by the caller;
/// see [`try_solve_max_clique_all`] for a `Result`-returning variant that
/// surfaces [`CliqueError`] on malformed input instead of panicking.
pub fn solve(
    n: u32,
    edges: &[(u32, u32)],
    time_budget_sec: f64,
    enum_cap: Option<u32>,
    reorder: bool,
) -> SolveResult {
    let edges: Vec<(usize, usize)> = edges.iter().map(|&(u, v)| (u as usize, v as usize)).collect();
    try_solve_max_clique_all(n as i64, &edges, time_budget_sec, enum_cap.map(|c| c as usize), reorder)
        .expect("solve: caller must pre-validate n/edges; use try_solve_max_clique_all for untrusted input")
}

/// same contract as [`solve`], but surfaces [`CliqueError`] instead of
/// panicking when an edge references a vertex outside `[0, n)`. any
/// non-positive `n` (zero or negative) short-circuits to the trivial
/// result instead of being treated as an error.
pub fn try_solve_max_clique_all(
    n: i64,
    edges: &[(usize, usize)],
    time_budget_sec: f64,
    enum_cap: Option<usize>,
    reorder: bool,
) -> Result<SolveResult, CliqueError> {
    if n <= 0 {
        return Ok(SolveResult {
            omega: 0,
            witness: Vec::new(),
            max_cliques: vec![Vec::new()],
            complete: true,
            runtime_sec: 0.0,
            expanded_nodes: 0,
            reordered: reorder,
        });
    }
    let n = n as usize;

    let t0 = Instant::now();
    let base_graph = match BitGraph::from_edges(n, edges) {
        Ok(g) => g,
        Err(e) => {
            warn!(error = %e, "graph construction failed");
            return Err(e);
        }
    };

    let (graph, perm) = if reorder {
        let (g2, perm) = base_graph.reorder_by_degeneracy();
        (g2, perm)
    } else {
        (base_graph, VertexPermutation::identity(n))
    };

    let phase1_budget = (time_budget_sec * PHASE1_FRACTION).max(PHASE1_MIN_SEC);

    let lb = greedy_lower_bound(&graph, GREEDY_TRIALS);
    info!(lb_size = lb.size, "greedy lower bound computed");

    let mut solver = Solver::new(&graph);
    let max_res = solver.max_size(phase1_budget, lb.size);
    let complete1 = max_res.complete;
    let mut expanded = solver.expanded_nodes();

    let mut witness_rel = max_res.witness;
    if lb.size > 0 && witness_rel.is_empty() {
        let mut fallback: Vec<VertexId> = lb.bits.iter().collect();
        fallback.sort_unstable();
        witness_rel = fallback;
    }

    let witness_abs: Vec<VertexId> = witness_rel.iter().map(|&v| perm.unmap(v)).collect();
    let omega = max_res.best_size;

    let elapsed = t0.elapsed().as_secs_f64();
    let remaining = (time_budget_sec - elapsed).max(0.0);

    let mut cliques_abs: BTreeSet<Vec<VertexId>> = BTreeSet::new();
    let mut complete2 = true;
    if remaining > 0.0 && omega > 0 {
        let enum_res = solver.enumerate_all(omega, remaining, enum_cap);
        complete2 = enum_res.complete;
        expanded += solver.expanded_nodes();
        for clique_rel in enum_res.cliques {
            let mut clique_abs: Vec<VertexId> = clique_rel.iter().map(|&v| perm.unmap(v)).collect();
            clique_abs.sort_unstable();
            cliques_abs.insert(clique_abs);
        }
    }

    let mut witness_sorted = witness_abs;
    witness_sorted.sort_unstable();

    let runtime_sec = t0.elapsed().as_secs_f64();
    Ok(SolveResult {
        omega,
        witness: witness_sorted,
        max_cliques: cliques_abs.into_iter().collect(),
        complete: complete1 && complete2,
        runtime_sec,
        expanded_nodes: expanded,
        reordered: reorder,
    })
}
