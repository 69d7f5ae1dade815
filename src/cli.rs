//! shared plumbing for the `src/bin` solver tools: edge-list parsing and
//! logging setup. neither binary talks to the network or touches
//! persistent state; both just read an instance, solve it, and print
//! the result.

use crate::error::CliqueError;

/// initializes a `tracing` subscriber from `RUST_LOG` (default `info`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// parses an edge-list instance: one `u v` pair per line, 0-indexed,
/// `#`-prefixed comments, comma- or whitespace-separated. `n` is inferred
/// as `max(u, v) + 1` across all parsed edges.
///
/// blank lines, comment-only lines, and lines yielding fewer than two
/// tokens are skipped; a line with more than two tokens only uses the
/// first two. a line whose first two tokens aren't both integers is
/// reported via [`CliqueError::EdgeListParse`] with its 1-indexed line
/// number.
pub fn parse_edge_list(contents: &str) -> Result<(usize, Vec<(usize, usize)>), CliqueError> {
    let mut edges = Vec::new();
    let mut max_vertex: Option<usize> = None;

    for (idx, raw_line) in contents.lines().enumerate() {
        let line = match raw_line.find('#') {
            Some(pos) => &raw_line[..pos],
            None => raw_line,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = line.split(|c: char| c == ',' || c.is_whitespace()).filter(|t| !t.is_empty()).collect();
        if tokens.len() < 2 {
            continue;
        }
        let u: usize = tokens[0]
            .parse()
            .map_err(|_| CliqueError::EdgeListParse { line: idx + 1, text: raw_line.to_string() })?;
        let v: usize = tokens[1]
            .parse()
            .map_err(|_| CliqueError::EdgeListParse { line: idx + 1, text: raw_line.to_string() })?;
        max_vertex = Some(max_vertex.map_or(u.max(v), |m| m.max(u).max(v)));
        edges.push((u, v));
    }

    let n = max_vertex.map_or(0, |m| m + 1);
    Ok((n, edges))
}

/// reads a file to a string, wrapping any I/O failure as [`CliqueError::Io`].
pub fn read_file(path: &str) -> Result<String, CliqueError> {
    std::fs::read_to_string(path).map_err(|e| CliqueError::Io { path: path.to_string(), reason: e.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whitespace_and_comma_separated_pairs() {
        let input = "0 1\n1,2\n# a comment\n\n2 3 # trailing comment\n";
        let (n, edges) = parse_edge_list(input).unwrap();
        assert_eq!(n, 4);
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn infers_n_from_max_endpoint() {
        let (n, _) = parse_edge_list("0 5\n").unwrap();
        assert_eq!(n, 6);
    }

    #[test]
    fn empty_input_yields_n_zero() {
        let (n, edges) = parse_edge_list("# just comments\n\n").unwrap();
        assert_eq!(n, 0);
        assert!(edges.is_empty());
    }

    #[test]
    fn extra_tokens_on_a_line_are_truncated() {
        let (_, edges) = parse_edge_list("0 1\n2 3 4\n").unwrap();
        assert_eq!(edges, vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn lines_with_fewer_than_two_tokens_are_skipped() {
        let (n, edges) = parse_edge_list("0 1\n5\n2 3\n").unwrap();
        assert_eq!(edges, vec![(0, 1), (2, 3)]);
        assert_eq!(n, 4);
    }

    #[test]
    fn non_numeric_line_is_reported_with_line_number() {
        let err = parse_edge_list("0 1\nfoo bar\n").unwrap_err();
        assert!(matches!(err, CliqueError::EdgeListParse { line: 2, .. }));
    }
}
