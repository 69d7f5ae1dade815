//! greedy vertex coloring used as the branch-and-bound pruning bound.

use bit_set::BitSet;

use crate::bitgraph::{BitGraph, VertexId};

/// result of [`color_sort`]: `order[i]` paired with `colors[i]`.
///
/// invariant: `colors[i]` is an upper bound on the size of any clique in
/// `P` that uses only vertices at positions `>= i` in `order`.
#[derive(Debug, Clone)]
pub struct Coloring {
    pub order: Vec<VertexId>,
    pub colors: Vec<usize>,
}

/// greedy first-fit coloring of the candidate set `p`.
///
/// repeatedly takes a color class: extracts vertices from the remaining
/// candidates lowest-id-first, adds each to the current color class, and
/// removes it plus its neighbors from that class's remaining pool (so
/// each color class is an independent set). colors start at 1.
pub fn color_sort(p: &BitSet, graph: &BitGraph) -> Coloring {
    let mut order = Vec::with_capacity(p.len());
    let mut colors = Vec::with_capacity(p.len());
    let mut remaining = p.clone();
    let mut color = 0usize;

    while !remaining.is_empty() {
        color += 1;
        let mut class_candidates = remaining.clone();
        while let Some(v) = class_candidates.iter().next() {
            order.push(v);
            colors.push(color);
            remaining.remove(v);
            class_candidates.remove(v);
            class_candidates.difference_with(graph.adj(v));
        }
    }

    Coloring { order, colors }
}
