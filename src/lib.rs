//! exact maximum-clique solver and response scorer for bounded-time
//! compute requests: a bitset branch-and-bound engine with greedy
//! coloring pruning and degeneracy reordering, plus the reward algebra
//! used to rank competing responses against a reference graph.

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]

/// bitset adjacency representation and degeneracy reordering
pub mod bitgraph;

/// greedy coloring bound used to prune the branch-and-bound search
pub mod colorsort;

/// greedy lower-bound seeding pass
pub mod greedy;

/// branch-and-bound maximum-clique search (max-size and enumeration phases)
pub mod solver;

/// ties the above together behind the public `solve` entry point
pub mod orchestrator;

/// validates and scores candidate responses against a reference graph
pub mod scoring;

/// fixed JSON shapes exchanged with the out-of-scope network stack
pub mod interfaces;

/// crate error taxonomy
pub mod error;

/// shared helpers for the `src/bin` solver tools
pub mod cli;