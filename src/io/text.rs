//! Textual adjacency format.
//!
//! ```text
//! 1: 2(1) 6(10);2: 3(2) 4(4) 5(5);3: 4(3);...
//! ```
//!
//! Each `;`-terminated record lists a source vertex, a colon, then
//! `target(weight)` pairs. Vertex indices are one-based in text and zero-based
//! in [`Multigraph`]. Whitespace between tokens is free, so `2 (1)` reads the
//! same as `2(1)`. The number of records is the vertex count. A weight `w` is
//! accepted only if `w * n + 1` fits in `u64`, so every path cost stays below
//! the solver's infinity sentinel.

use std::fmt::Write;

use crate::error::ParseError;
use crate::models::{infinity_for, Multigraph, Tour};

/// Parses a graph description.
///
/// # Examples
///
/// ```
/// use u_postman::io::parse_graph;
///
/// let g = parse_graph("1: 2(4) 2 (6); 2: 1(3);").unwrap();
/// assert_eq!(g.size(), 2);
/// assert_eq!(g.weights(0, 1), &[4, 6]);
/// assert_eq!(g.weights(1, 0), &[3]);
/// ```
pub fn parse_graph(input: &str) -> Result<Multigraph, ParseError> {
    let mut pieces: Vec<&str> = input.split(';').collect();
    let tail = pieces.pop().unwrap_or_default().trim();
    if !tail.is_empty() {
        return Err(ParseError::Unterminated {
            text: tail.to_string(),
        });
    }
    let records: Vec<&str> = pieces.into_iter().filter(|r| !r.trim().is_empty()).collect();

    let size = records.len();
    let mut graph = Multigraph::new(size);
    let mut seen = vec![false; size];

    for (pos, record) in records.iter().enumerate() {
        let record_no = pos + 1;
        let (head, body) = record
            .split_once(':')
            .ok_or(ParseError::MissingColon { record: record_no })?;
        let head = head.trim();
        let from = parse_vertex(head, head, record_no, size)?;
        if seen[from] {
            return Err(ParseError::DuplicateRecord { vertex: from + 1 });
        }
        seen[from] = true;

        let mut rest = body.trim_start();
        while !rest.is_empty() {
            let (digits, after) = split_number(rest);
            let to = parse_vertex(digits, after, record_no, size)?;
            let after = expect(after, '(', record_no)?;

            let (digits, after) = split_number(after);
            let weight = parse_number(digits, after, record_no)?;
            if weight == 0 {
                return Err(ParseError::ZeroWeight { record: record_no });
            }
            if infinity_for(weight, size).is_none() {
                return Err(ParseError::WeightTooLarge {
                    record: record_no,
                    weight,
                    size,
                });
            }
            rest = expect(after, ')', record_no)?;

            graph.add_edge(from, to, weight, 1);
        }
    }

    Ok(graph)
}

fn split_number(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn expect(s: &str, token: char, record: usize) -> Result<&str, ParseError> {
    let s = s.trim_start();
    s.strip_prefix(token)
        .map(str::trim_start)
        .ok_or_else(|| ParseError::Unexpected {
            record,
            expected: token,
            found: s.to_string(),
        })
}

fn parse_number(digits: &str, rest: &str, record: usize) -> Result<u64, ParseError> {
    digits.parse().map_err(|_| ParseError::InvalidNumber {
        record,
        text: if digits.is_empty() {
            rest.split_whitespace().next().unwrap_or_default().to_string()
        } else {
            digits.to_string()
        },
    })
}

fn parse_vertex(digits: &str, rest: &str, record: usize, size: usize) -> Result<usize, ParseError> {
    let vertex = usize::try_from(parse_number(digits, rest, record)?).unwrap_or(usize::MAX);
    if vertex == 0 || vertex > size {
        return Err(ParseError::VertexOutOfRange { vertex, size });
    }
    Ok(vertex - 1)
}

/// Writes a graph in the textual format, one-based.
///
/// # Examples
///
/// ```
/// use u_postman::io::format_graph;
/// use u_postman::models::Multigraph;
///
/// let g = Multigraph::from_edges(3, &[(0, 1, 1), (0, 2, 10), (1, 0, 2)]);
/// assert_eq!(format_graph(&g), "1: 2(1) 3(10);2: 1(2);3:;");
/// ```
pub fn format_graph(graph: &Multigraph) -> String {
    let mut out = String::new();
    for from in 0..graph.size() {
        let _ = write!(out, "{}:", from + 1);
        for to in 0..graph.size() {
            for &weight in graph.weights(from, to) {
                let _ = write!(out, " {}({})", to + 1, weight);
            }
        }
        out.push(';');
    }
    out
}

/// Renders a tour as one-based `(vertex, weight)` pairs.
///
/// # Examples
///
/// ```
/// use u_postman::io::format_tour;
/// use u_postman::models::{Tour, TourStep};
///
/// let tour = Tour::from_steps(vec![TourStep::new(4, 0), TourStep::new(0, 5)]);
/// assert_eq!(format_tour(&tour), "[(5, 0), (1, 5)]");
/// ```
pub fn format_tour(tour: &Tour) -> String {
    let parts: Vec<String> = tour
        .steps()
        .iter()
        .map(|s| format!("({}, {})", s.vertex + 1, s.weight))
        .collect();
    format!("[{}]", parts.join(", "))
}
