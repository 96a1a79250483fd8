//! Loader for the DIMACS `.col` edge-list format used by graph coloring benchmarks.
//!
//! ```text
//! c comment
//! p edge 4 4
//! e 1 2
//! e 2 3
//! ```
//!
//! Vertices are numbered from 1. The `p` line is optional: without it, the number of vertices
//! is the largest id mentioned by an edge. Any other line is ignored.

use crate::errors::{ColoringError, Result};
use crate::graph::Graph;
use std::path::Path;

/// Parses a graph in DIMACS `.col` format.
pub fn parse_dimacs(input: &str) -> Result<Graph> {
    let mut declared: Option<usize> = None;
    let mut edges = Vec::new();
    let mut max_id = 0;

    for (i, line) in input.lines().enumerate() {
        let line_no = i + 1;
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("p") => {
                if declared.is_some() {
                    return Err(ColoringError::parse(line_no, "duplicated problem line"));
                }
                let _format = fields.next();
                let n = read_number(fields.next(), line_no, "number of vertices")?;
                declared = Some(n);
            }
            Some("e") => {
                let a = read_vertex(fields.next(), line_no)?;
                let b = read_vertex(fields.next(), line_no)?;
                if let Some(n) = declared {
                    if a > n || b > n {
                        return Err(ColoringError::parse(
                            line_no,
                            format!("vertex {} exceeds the declared {n} vertices", a.max(b)),
                        ));
                    }
                }
                max_id = max_id.max(a).max(b);
                edges.push((a - 1, b - 1));
            }
            _ => {}
        }
    }

    let num_vars = declared.unwrap_or(max_id);
    Graph::from_edges(num_vars, edges)
}

/// Reads a DIMACS `.col` file.
pub fn read_dimacs(path: &Path) -> Result<Graph> {
    let content = std::fs::read_to_string(path).map_err(|e| ColoringError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_dimacs(&content)
}

fn read_number(field: Option<&str>, line: usize, what: &str) -> Result<usize> {
    let field = field.ok_or_else(|| ColoringError::parse(line, format!("missing {what}")))?;
    field
        .parse::<usize>()
        .map_err(|e| ColoringError::parse(line, format!("invalid {what} \"{field}\": {e}")))
}

fn read_vertex(field: Option<&str>, line: usize) -> Result<usize> {
    match read_number(field, line, "vertex")? {
        0 => Err(ColoringError::parse(line, "vertices are numbered from 1")),
        v => Ok(v),
    }
}
