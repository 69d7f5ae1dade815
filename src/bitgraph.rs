//! bitset adjacency representation, and degeneracy reordering.

use bit_set::BitSet;

use crate::error::CliqueError;

/// Vertex id, dense in `[0, n)`.
pub type VertexId = usize;

/// A permutation of `[0, n)` and its inverse, produced by
/// [`BitGraph::reorder_by_degeneracy`].
#[derive(Debug, Clone)]
pub struct VertexPermutation {
    /// `perm[old] = new`
    pub perm: Vec<VertexId>,
    /// `invperm[new] = old`
    pub invperm: Vec<VertexId>,
}

impl VertexPermutation {
    /// the identity permutation over `[0, n)`.
    pub fn identity(n: usize) -> Self {
        Self { perm: (0..n).collect(), invperm: (0..n).collect() }
    }

    /// maps a vertex id from input (old) coordinates to solver (new) ones.
    pub fn map(&self, old: VertexId) -> VertexId { self.perm[old] }

    /// maps a vertex id from solver (new) coordinates back to input (old) ones.
    pub fn unmap(&self, new: VertexId) -> VertexId { self.invperm[new] }
}

/// immutable adjacency representation: one bitmask per vertex.
///
/// `adj[u]` never has bit `u` set; `adj` is symmetric.
#[derive(Debug, Clone)]
pub struct BitGraph {
    n: usize,
    adj: Vec<BitSet>,
}

impl BitGraph {
    /// number of vertices
    pub fn n(&self) -> usize { self.n }

    /// neighbor bitmask of vertex `v`
    pub fn adj(&self, v: VertexId) -> &BitSet { &self.adj[v] }

    /// whether `u` and `v` are adjacent
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool { self.adj[u].contains(v) }

    /// degree of vertex `v`
    pub fn degree(&self, v: VertexId) -> usize { self.adj[v].len() }

    /// degrees of all vertices, indexed by vertex id
    pub fn degrees(&self) -> Vec<usize> { (0..self.n).map(|v| self.degree(v)).collect() }

    /// builds a `BitGraph` from an edge list.
    ///
    /// self-loops (`u == v`) are silently dropped. parallel edges are
    /// idempotent (setting the same bit twice is a no-op). an endpoint
    /// outside `[0, n)` fails with [`CliqueError::EdgeOutOfBounds`].
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, CliqueError> {
        let mut adj = vec![BitSet::with_capacity(n); n];
        for &(u, v) in edges {
            if u == v {
                continue;
            }
            if u >= n || v >= n {
                return Err(CliqueError::EdgeOutOfBounds { u, v, n });
            }
            adj[u].insert(v);
            adj[v].insert(u);
        }
        Ok(Self { n, adj })
    }

    /// produces a new graph whose vertex ordering is a degeneracy order,
    /// plus the forward/inverse permutation mapping old <-> new vertex ids.
    ///
    /// degeneracy order: repeatedly remove a vertex of current-minimum
    /// degree (ties broken by lowest vertex id), decrementing the degree
    /// of its still-remaining neighbors only.
    pub fn reorder_by_degeneracy(&self) -> (BitGraph, VertexPermutation) {
        let n = self.n;
        let mut deg = self.degrees();
        let mut remaining: BitSet = BitSet::with_capacity(n);
        for v in 0..n { remaining.insert(v); }

        let mut invperm = Vec::with_capacity(n);
        while !remaining.is_empty() {
            let v = remaining
                .iter()
                .min_by_key(|&u| (deg[u], u))
                .expect("remaining is non-empty");
            remaining.remove(v);
            invperm.push(v);
            for w in self.adj[v].iter() {
                if remaining.contains(w) {
                    deg[w] -= 1;
                }
            }
        }

        let mut perm = vec![0usize; n];
        for (new_v, &old_v) in invperm.iter().enumerate() {
            perm[old_v] = new_v;
        }

        let mut new_adj = vec![BitSet::with_capacity(n); n];
        for old_u in 0..n {
            let new_u = perm[old_u];
            for old_v in self.adj[old_u].iter() {
                new_adj[new_u].insert(perm[old_v]);
            }
            new_adj[new_u].remove(new_u);
        }

        (BitGraph { n, adj: new_adj }, VertexPermutation { perm, invperm })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_loops_are_dropped() {
        let g = BitGraph::from_edges(3, &[(0, 0), (0, 1)]).unwrap();
        assert!(!g.are_adjacent(0, 0));
        assert!(g.are_adjacent(0, 1));
    }

    #[test]
    fn parallel_edges_are_idempotent() {
        let g = BitGraph::from_edges(3, &[(0, 1), (0, 1), (1, 0)]).unwrap();
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(1), 1);
    }

    #[test]
    fn out_of_bounds_edge_fails() {
        let err = BitGraph::from_edges(2, &[(0, 5)]).unwrap_err();
        assert!(matches!(err, CliqueError::EdgeOutOfBounds { u: 0, v: 5, n: 2 }));
    }

    #[test]
    fn adjacency_is_symmetric() {
        let g = BitGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        for u in 0..4 {
            for v in 0..4 {
                assert_eq!(g.are_adjacent(u, v), g.are_adjacent(v, u));
            }
        }
    }

    #[test]
    fn degeneracy_order_preserves_clique_structure() {
        // triangle {0,1,2} plus a pendant vertex 3 attached to 0
        let g = BitGraph::from_edges(4, &[(0, 1), (1, 2), (0, 2), (0, 3)]).unwrap();
        let (g2, perm) = g.reorder_by_degeneracy();
        assert_eq!(g2.n(), 4);
        // the pendant (degree 1) is removed first, so it lands at new index 0
        assert_eq!(perm.map(3), 0);
        // mapping is a bijection
        let mut seen = vec![false; 4];
        for old in 0..4 {
            let new = perm.map(old);
            assert!(!seen[new]);
            seen[new] = true;
            assert_eq!(perm.unmap(new), old);
        }
        // adjacency is preserved under the permutation
        for u in 0..4 {
            for v in 0..4 {
                assert_eq!(g.are_adjacent(u, v), g2.are_adjacent(perm.map(u), perm.map(v)));
            }
        }
    }

    #[test]
    fn degeneracy_ties_break_on_lowest_id() {
        // two isolated vertices 0,1 (degree 0) and an edge 2-3 (degree 1 each)
        let g = BitGraph::from_edges(4, &[(2, 3)]).unwrap();
        let (_, perm) = g.reorder_by_degeneracy();
        // among the degree-0 vertices, 0 is removed before 1
        assert!(perm.map(0) < perm.map(1));
    }
}
