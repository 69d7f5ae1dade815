//! branch-and-bound maximum clique search, sharing a single deadline
//! clock across both the max-size phase and the enumeration phase.

use std::time::Instant;

use bit_set::BitSet;
use tracing::debug;

use crate::bitgraph::{BitGraph, VertexId};
use crate::colorsort::color_sort;

/// an ordered vertex list, sorted ascending, representing a clique in the
/// solver's own (possibly reordered) coordinate system.
pub type CliqueVec = Vec<VertexId>;

/// outcome of [`Solver::max_size`].
#[derive(Debug, Clone)]
pub struct MaxSizeResult {
    pub best_size: usize,
    pub witness: CliqueVec,
    pub complete: bool,
}

/// outcome of [`Solver::enumerate_all`].
#[derive(Debug, Clone)]
pub struct EnumerateResult {
    pub cliques: Vec<CliqueVec>,
    pub complete: bool,
}

fn bits_to_sorted_vec(bits: &BitSet) -> CliqueVec {
    let mut v: Vec<VertexId> = bits.iter().collect();
    v.sort_unstable();
    v
}

/// branch-and-bound search over a single [`BitGraph`], bounded by a
/// monotonic deadline shared across calls to [`Solver::max_size`] and
/// [`Solver::enumerate_all`].
#[derive(Debug)]
pub struct Solver<'g> {
    graph: &'g BitGraph,
    best_size: usize,
    best_bits: BitSet,
    deadline: Option<Instant>,
    expanded_nodes: u64,
    aborted: bool,
}

impl<'g> Solver<'g> {
    /// builds a solver bound to `graph`. the solver is reused across both
    /// phases so `expanded_nodes` can be reported per-phase by the caller.
    pub fn new(graph: &'g BitGraph) -> Self {
        Self {
            graph,
            best_size: 0,
            best_bits: BitSet::with_capacity(graph.n()),
            deadline: None,
            expanded_nodes: 0,
            aborted: false,
        }
    }

    /// number of branch-and-bound nodes expanded by the most recent call.
    pub fn expanded_nodes(&self) -> u64 { self.expanded_nodes }

    fn time_ok(&mut self) -> bool {
        match self.deadline {
            None => true,
            Some(dl) => {
                if Instant::now() >= dl {
                    self.aborted = true;
                }
                !self.aborted
            }
        }
    }

    /// finds the clique number (omega) and one witness clique, seeded with
    /// a known lower bound `init_lb`.
    pub fn max_size(&mut self, time_budget_sec: f64, init_lb: usize) -> MaxSizeResult {
        self.best_size = init_lb;
        self.best_bits = BitSet::with_capacity(self.graph.n());
        self.expanded_nodes = 0;
        self.aborted = false;
        self.deadline = Some(Instant::now() + std::time::Duration::from_secs_f64(time_budget_sec.max(0.0)));

        let n = self.graph.n();
        let mut p = BitSet::with_capacity(n);
        for v in 0..n { p.insert(v); }
        let r = BitSet::with_capacity(n);

        self.expand_max(0, r, p);

        MaxSizeResult {
            best_size: self.best_size,
            witness: bits_to_sorted_vec(&self.best_bits),
            complete: !self.aborted,
        }
    }

    fn expand_max(&mut self, size: usize, r: BitSet, mut p: BitSet) {
        if !self.time_ok() { return; }
        if p.is_empty() {
            if size > self.best_size {
                self.best_size = size;
                self.best_bits = r;
            }
            return;
        }
        let coloring = color_sort(&p, self.graph);
        for i in (0..coloring.order.len()).rev() {
            if self.aborted { return; }
            if size + coloring.colors[i] <= self.best_size {
                break;
            }
            let v = coloring.order[i];
            if !p.contains(v) {
                continue;
            }
            self.expanded_nodes += 1;
            let mut r2 = r.clone();
            r2.insert(v);
            let mut p2 = p.clone();
            p2.intersect_with(self.graph.adj(v));

            if p2.is_empty() {
                if size + 1 > self.best_size {
                    self.best_size = size + 1;
                    self.best_bits = r2;
                }
            } else {
                self.expand_max(size + 1, r2, p2);
            }
            p.remove(v);
        }
    }

    /// enumerates all cliques of size exactly `target`, up to an optional
    /// `cap` on the number of cliques returned. reaching `cap` is treated
    /// as a timeout (non-exactness-failure, but `complete=false`).
    pub fn enumerate_all(&mut self, target: usize, time_budget_sec: f64, cap: Option<usize>) -> EnumerateResult {
        self.expanded_nodes = 0;
        self.aborted = false;
        self.deadline = Some(Instant::now() + std::time::Duration::from_secs_f64(time_budget_sec.max(0.0)));

        let n = self.graph.n();
        let mut p = BitSet::with_capacity(n);
        for v in 0..n { p.insert(v); }
        let r = BitSet::with_capacity(n);

        let mut out: Vec<CliqueVec> = Vec::new();
        self.expand_enum(0, r, p, target, &mut out, cap);

        if self.aborted {
            debug!(found = out.len(), "enumeration stopped early (deadline or cap)");
        }

        EnumerateResult { cliques: out, complete: !self.aborted }
    }

    fn expand_enum(
        &mut self,
        size: usize,
        r: BitSet,
        mut p: BitSet,
        target: usize,
        out: &mut Vec<CliqueVec>,
        cap: Option<usize>,
    ) {
        if !self.time_ok() { return; }
        if p.is_empty() {
            if size == target {
                out.push(bits_to_sorted_vec(&r));
            }
            return;
        }
        let coloring = color_sort(&p, self.graph);
        for i in (0..coloring.order.len()).rev() {
            if self.aborted { return; }
            if size + coloring.colors[i] < target {
                break;
            }
            let v = coloring.order[i];
            if !p.contains(v) {
                continue;
            }
            self.expanded_nodes += 1;
            let mut r2 = r.clone();
            r2.insert(v);
            let mut p2 = p.clone();
            p2.intersect_with(self.graph.adj(v));

            if p2.is_empty() {
                if size + 1 == target {
                    out.push(bits_to_sorted_vec(&r2));
                    if let Some(c) = cap {
                        if out.len() >= c {
                            self.aborted = true;
                            p.remove(v);
                            return;
                        }
                    }
                }
            } else {
                self.expand_enum(size + 1, r2, p2, target, out, cap);
            }
            p.remove(v);
            if let Some(c) = cap {
                if out.len() >= c {
                    self.aborted = true;
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_triangle_in_paw_graph() {
        let g = BitGraph::from_edges(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
        let mut solver = Solver::new(&g);
        let res = solver.max_size(5.0, 0);
        assert_eq!(res.best_size, 3);
        assert!(res.complete);
        assert_eq!(res.witness, vec![0, 1, 2]);
    }

    #[test]
    fn enumerates_both_triangles() {
        let g = BitGraph::from_edges(6, &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]).unwrap();
        let mut solver = Solver::new(&g);
        let max_res = solver.max_size(5.0, 0);
        assert_eq!(max_res.best_size, 3);
        let enum_res = solver.enumerate_all(3, 5.0, None);
        assert!(enum_res.complete);
        let mut cliques = enum_res.cliques;
        cliques.sort();
        assert_eq!(cliques, vec![vec![0, 1, 2], vec![3, 4, 5]]);
    }

    #[test]
    fn k4_plus_pendant() {
        let g = BitGraph::from_edges(5, &[
            (0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3), (3, 4),
        ]).unwrap();
        let mut solver = Solver::new(&g);
        let res = solver.max_size(5.0, 0);
        assert_eq!(res.best_size, 4);
        assert_eq!(res.witness, vec![0, 1, 2, 3]);
    }

    #[test]
    fn zero_budget_is_incomplete() {
        let g = BitGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).unwrap();
        let mut solver = Solver::new(&g);
        let res = solver.max_size(0.0, 0);
        assert!(!res.complete);
    }

    #[test]
    fn enumeration_cap_truncates_and_marks_incomplete() {
        let g = BitGraph::from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]).unwrap();
        let mut solver = Solver::new(&g);
        let max_res = solver.max_size(5.0, 0);
        assert_eq!(max_res.best_size, 4);
        let enum_res = solver.enumerate_all(4, 5.0, Some(1));
        assert_eq!(enum_res.cliques.len(), 1);
        assert!(!enum_res.complete);
    }
}
