//! validates miner responses against a reference graph and computes the
//! optimality/diversity reward algebra used to rank them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::bitgraph::VertexId;

/// reference graph used purely for scoring: an adjacency list keyed by
/// vertex, each neighbor list sorted ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LambdaGraph {
    pub uuid: String,
    pub label: String,
    pub number_of_nodes: usize,
    pub adjacency_list: Vec<Vec<VertexId>>,
}

impl LambdaGraph {
    /// O(deg) membership test: `v ∈ N(u)`.
    fn is_neighbor(&self, u: VertexId, v: VertexId) -> bool {
        self.adjacency_list[u].binary_search(&v).is_ok()
    }

    /// `true` iff `nodes` is a non-empty, duplicate-free, in-range clique
    /// that cannot be extended by any vertex outside it (i.e. maximal,
    /// which combined with size ranking across responses selects the
    /// maximum).
    pub fn is_valid_maximum_clique(&self, nodes: &[VertexId]) -> bool {
        if nodes.is_empty() {
            return false;
        }
        let mut seen = std::collections::HashSet::with_capacity(nodes.len());
        for &v in nodes {
            if v >= self.number_of_nodes || !seen.insert(v) {
                return false;
            }
        }
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                if !self.is_neighbor(nodes[i], nodes[j]) {
                    return false;
                }
            }
        }
        let member: std::collections::HashSet<VertexId> = nodes.iter().copied().collect();
        for candidate in 0..self.number_of_nodes {
            if member.contains(&candidate) {
                continue;
            }
            if nodes.iter().all(|&v| self.is_neighbor(candidate, v)) {
                return false; // extensible: not maximum
            }
        }
        true
    }
}

/// per-response reward breakdown returned by [`Scorer::score_all`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreVectors {
    pub relative_size: Vec<f64>,
    pub rank_pressure: Vec<f64>,
    pub optimality_raw: Vec<f64>,
    pub optimality: Vec<f64>,
    pub diversity: Vec<f64>,
    pub rewards: Vec<f64>,
}

impl ScoreVectors {
    fn zeros(k: usize) -> Self {
        Self {
            relative_size: vec![0.0; k],
            rank_pressure: vec![0.0; k],
            optimality_raw: vec![0.0; k],
            optimality: vec![0.0; k],
            diversity: vec![0.0; k],
            rewards: vec![0.0; k],
        }
    }
}

/// scores a batch of candidate responses against a reference graph. pure
/// given its inputs; holds no mutable state across calls.
#[derive(Debug)]
pub struct Scorer<'g> {
    graph: &'g LambdaGraph,
    difficulty: f64,
}

impl<'g> Scorer<'g> {
    pub fn new(graph: &'g LambdaGraph, difficulty: f64) -> Self {
        Self { graph, difficulty }
    }

    /// computes `(relative_size, rank_pressure, optimality_raw,
    /// optimality, diversity, rewards)` for every response in `responses`.
    pub fn score_all(&self, responses: &[Vec<VertexId>]) -> ScoreVectors {
        let k = responses.len();
        if k == 0 {
            return ScoreVectors::zeros(0);
        }

        let valid: Vec<bool> = responses.iter().map(|r| self.graph.is_valid_maximum_clique(r)).collect();
        let size: Vec<usize> = responses
            .iter()
            .zip(&valid)
            .map(|(r, &v)| if v { r.len() } else { 0 })
            .collect();

        let max_size = *size.iter().max().unwrap_or(&0);
        if max_size == 0 {
            return ScoreVectors::zeros(k);
        }

        let relative_size: Vec<f64> = size.iter().map(|&s| s as f64 / max_size as f64).collect();
        let rank_pressure: Vec<f64> = size
            .iter()
            .map(|&s| size.iter().filter(|&&other| other > s).count() as f64 / k as f64)
            .collect();

        let optimality_raw: Vec<f64> = valid
            .iter()
            .zip(&rank_pressure)
            .zip(&relative_size)
            .map(|((&v, &pr), &rel)| if v && rel > 0.0 { (-pr / rel).exp() } else { 0.0 })
            .collect();

        let max_omega = optimality_raw.iter().cloned().fold(0.0_f64, f64::max);
        let optimality: Vec<f64> = if max_omega == 0.0 {
            vec![0.0; k]
        } else {
            optimality_raw.iter().map(|&o| o / max_omega).collect()
        };

        let canonical: Vec<Vec<VertexId>> = responses
            .iter()
            .map(|r| {
                let mut c = r.clone();
                c.sort_unstable();
                c
            })
            .collect();
        let mut counts: HashMap<&Vec<VertexId>, usize> = HashMap::new();
        for c in &canonical {
            *counts.entry(c).or_insert(0) += 1;
        }
        let delta: Vec<f64> = valid
            .iter()
            .zip(&canonical)
            .map(|(&v, c)| if v { 1.0 / counts[c] as f64 } else { 0.0 })
            .collect();
        let max_delta = delta.iter().cloned().fold(0.0_f64, f64::max);
        let diversity: Vec<f64> = if max_delta == 0.0 {
            delta.clone()
        } else {
            delta.iter().map(|&d| d / max_delta).collect()
        };

        let rewards: Vec<f64> = optimality
            .iter()
            .zip(&diversity)
            .map(|(&o, &d)| o * (1.0 + self.difficulty) + d)
            .collect();

        ScoreVectors {
            relative_size,
            rank_pressure,
            optimality_raw,
            optimality,
            diversity,
            rewards,
        }
    }
}
