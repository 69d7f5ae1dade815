//! greedy lower-bound seeding pass.

use bit_set::BitSet;

use crate::bitgraph::{BitGraph, VertexId};

/// a concrete clique found by [`greedy_lower_bound`], as both its size
/// and its bitmask.
#[derive(Debug, Clone)]
pub struct GreedyClique {
    pub size: usize,
    pub bits: BitSet,
}

/// grows a clique from each of up to `trials` seed vertices (ordered by
/// descending degree), greedily extending by the candidate maximizing
/// `|N(v) ∩ P|`, ties broken by lowest vertex id. returns the largest
/// clique found across all trials.
pub fn greedy_lower_bound(graph: &BitGraph, trials: usize) -> GreedyClique {
    let n = graph.n();
    let mut verts: Vec<VertexId> = (0..n).collect();
    verts.sort_by_key(|&v| (std::cmp::Reverse(graph.degree(v)), v));
    let starts = &verts[..trials.min(n)];

    let mut best = GreedyClique { size: 0, bits: BitSet::with_capacity(n) };

    for &s in starts {
        let mut clique = BitSet::with_capacity(n);
        clique.insert(s);
        let mut candidates = graph.adj(s).clone();

        while !candidates.is_empty() {
            // maximize |N(v) ∩ P|, ties broken by lowest vertex id: since
            // candidates.iter() already yields ids ascending, the first
            // max found is the lowest-id winner.
            let best_v = candidates
                .iter()
                .map(|v| {
                    let mut scored = graph.adj(v).clone();
                    scored.intersect_with(&candidates);
                    (scored.len(), v)
                })
                .fold(None, |acc: Option<(usize, VertexId)>, (score, v)| match acc {
                    Some((best_score, _)) if best_score >= score => acc,
                    _ => Some((score, v)),
                })
                .map(|(_, v)| v)
                .expect("candidates non-empty");
            clique.insert(best_v);
            candidates.intersect_with(graph.adj(best_v));
        }

        if clique.len() > best.size {
            best = GreedyClique { size: clique.len(), bits: clique };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_the_whole_complete_graph() {
        let g = BitGraph::from_edges(5, &[
            (0, 1), (0, 2), (0, 3), (0, 4),
            (1, 2), (1, 3), (1, 4),
            (2, 3), (2, 4),
            (3, 4),
        ]).unwrap();
        let lb = greedy_lower_bound(&g, 64);
        assert_eq!(lb.size, 5);
    }

    #[test]
    fn finds_a_triangle_in_two_disjoint_triangles() {
        let g = BitGraph::from_edges(6, &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]).unwrap();
        let lb = greedy_lower_bound(&g, 64);
        assert_eq!(lb.size, 3);
        for v in lb.bits.iter() {
            for u in lb.bits.iter() {
                if u != v { assert!(g.are_adjacent(u, v)); }
            }
        }
    }

    #[test]
    fn empty_graph_yields_singleton() {
        let g = BitGraph::from_edges(4, &[]).unwrap();
        let lb = greedy_lower_bound(&g, 64);
        assert_eq!(lb.size, 1);
    }
}
