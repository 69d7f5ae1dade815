//! fixed JSON shapes exchanged with the rest of the (out-of-scope) network
//! stack: graph requests/responses and miner response payloads.
//!
//! these are data-only contracts — no HTTP, signing, or chain code lives
//! here. a caller that owns the transport layer serializes/deserializes
//! these types directly with `serde_json`.

use serde::{Deserialize, Serialize};

use crate::bitgraph::VertexId;

/// payload of a signed request for a graph instance, sent to a remote
/// problem source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphRequestPayload {
    pub timestamp: f64,
    pub hotkey: String,
    pub uuid: String,
    pub netuid: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_nodes_min: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_nodes_max: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_edges_min: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_edges_max: Option<usize>,
}

/// envelope carrying a payload plus its signature; the signature itself
/// is opaque to this crate (verification is the transport layer's job).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedRequest<T> {
    pub payload: T,
    pub signature: String,
}

/// a remote problem source's reply to a [`GraphRequestPayload`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphResponse {
    pub uuid: String,
    pub label: String,
    pub number_of_nodes: usize,
    pub adjacency_list: Vec<Vec<VertexId>>,
}

impl GraphResponse {
    /// flattens `adjacency_list` into a deduplicated undirected edge list
    /// suitable for [`crate::orchestrator::try_solve_max_clique_all`].
    pub fn to_edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for (u, neighbors) in self.adjacency_list.iter().enumerate() {
            for &v in neighbors {
                if u < v {
                    edges.push((u, v));
                }
            }
        }
        edges
    }
}

/// a miner's response to a [`GraphResponse`]: the claimed maximum clique.
///
/// `adjacency_list` may be sent empty by the miner to save bandwidth;
/// scoring never reads it back, only `maximum_clique`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub uuid: String,
    pub label: String,
    pub number_of_nodes: usize,
    #[serde(default)]
    pub adjacency_list: Vec<Vec<VertexId>>,
    pub maximum_clique: Vec<VertexId>,
}

/// the JSON document the `clique_json` binary reads: a self-contained
/// solve request. mirrors the [`crate::orchestrator::solve`] signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    pub n: i64,
    pub edges: Vec<(usize, usize)>,
    #[serde(default = "default_time_budget_sec")]
    pub time_budget_sec: f64,
    #[serde(default)]
    pub enum_cap: Option<usize>,
    #[serde(default = "default_reorder")]
    pub reorder: bool,
}

fn default_time_budget_sec() -> f64 { 30.0 }
fn default_reorder() -> bool { true }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_response_to_edges_dedupes_and_is_undirected() {
        let resp = GraphResponse {
            uuid: "u".into(),
            label: "l".into(),
            number_of_nodes: 3,
            adjacency_list: vec![vec![1, 2], vec![0, 2], vec![0, 1]],
        };
        let mut edges = resp.to_edges();
        edges.sort();
        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn response_payload_roundtrips_through_json() {
        let payload = ResponsePayload {
            uuid: "u".into(),
            label: "l".into(),
            number_of_nodes: 4,
            adjacency_list: Vec::new(),
            maximum_clique: vec![0, 1, 2],
        };
        let json = serde_json::to_string(&payload).unwrap();
        let back: ResponsePayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back.maximum_clique, vec![0, 1, 2]);
    }

    #[test]
    fn solve_request_fills_in_defaults() {
        let req: SolveRequest = serde_json::from_str(r#"{"n": 4, "edges": [[0,1],[1,2]]}"#).unwrap();
        assert_eq!(req.n, 4);
        assert_eq!(req.edges, vec![(0, 1), (1, 2)]);
        assert_eq!(req.time_budget_sec, 30.0);
        assert_eq!(req.enum_cap, None);
        assert!(req.reorder);
    }
}
