//! crate error taxonomy.
//!
//! only graph construction can fail hard; everything else (timeouts,
//! enumeration caps, invalid scoring responses) is encoded in the result
//! types themselves, never raised as an error.

use thiserror::Error;

/// errors raised while building a [`crate::bitgraph::BitGraph`], or while
/// the CLI tools read/parse their inputs.
#[derive(Debug, Error, Clone)]
pub enum CliqueError {
    /// an edge referenced a vertex outside `[0, n)`.
    #[error("edge ({u}, {v}) out of bounds for n={n}")]
    EdgeOutOfBounds { u: usize, v: usize, n: usize },

    /// a line of an edge-list file did not parse as a `u v` pair.
    #[error("edge list line {line}: could not parse a \"u v\" pair from {text:?}")]
    EdgeListParse { line: usize, text: String },

    /// the CLI could not read its input file.
    #[error("could not read {path}: {reason}")]
    Io { path: String, reason: String },

    /// the CLI's JSON input did not match the expected request shape.
    #[error("invalid JSON input: {0}")]
    Json(String),
}

impl PartialEq for CliqueError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EdgeOutOfBounds { u: u1, v: v1, n: n1 }, Self::EdgeOutOfBounds { u: u2, v: v2, n: n2 }) => {
                u1 == u2 && v1 == v2 && n1 == n2
            }
            (Self::EdgeListParse { line: l1, text: t1 }, Self::EdgeListParse { line: l2, text: t2 }) => {
                l1 == l2 && t1 == t2
            }
            (Self::Io { path: p1, reason: r1 }, Self::Io { path: p2, reason: r2 }) => p1 == p2 && r1 == r2,
            (Self::Json(m1), Self::Json(m2)) => m1 == m2,
            _ => false,
        }
    }
}
impl Eq for CliqueError {}
