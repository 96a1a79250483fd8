#![allow(dead_code)]

use mapcolor::parse::parse_dimacs;
use mapcolor::Graph;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn australia() -> Graph {
    parse_dimacs(include_str!("../instances/australia.col")).unwrap()
}

pub fn petersen() -> Graph {
    parse_dimacs(include_str!("../instances/petersen.col")).unwrap()
}

pub fn k5() -> Graph {
    parse_dimacs(include_str!("../instances/k5.col")).unwrap()
}

/// Mycielskian of the 5-cycle (Grötzsch graph): triangle-free with chromatic number 4.
pub fn grotzsch() -> Graph {
    let mut edges = Vec::new();
    for i in 0..5 {
        let next = (i + 1) % 5;
        let prev = (i + 4) % 5;
        // outer cycle
        edges.push((i, next));
        // shadow vertex 5 + i is adjacent to the neighbors of i
        edges.push((5 + i, next));
        edges.push((5 + i, prev));
        // hub
        edges.push((10, 5 + i));
    }
    Graph::from_edges(11, edges).unwrap()
}

/// King's graph on a `rows` x `cols` board: 4-chromatic as soon as the board is at least 2x2.
pub fn kings(rows: usize, cols: usize) -> Graph {
    let id = |r: usize, c: usize| r * cols + c;
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                edges.push((id(r, c), id(r, c + 1)));
            }
            if r + 1 < rows {
                edges.push((id(r, c), id(r + 1, c)));
                if c + 1 < cols {
                    edges.push((id(r, c), id(r + 1, c + 1)));
                }
                if c > 0 {
                    edges.push((id(r, c), id(r + 1, c - 1)));
                }
            }
        }
    }
    Graph::from_edges(rows * cols, edges).unwrap()
}

/// Every edge has two different colors.
pub fn assert_proper(graph: &Graph, assignment: &mapcolor::Assignment) {
    for (u, v) in graph.edges() {
        let (cu, cv) = (assignment.get(u), assignment.get(v));
        assert!(cu.is_some() && cv.is_some(), "{u:?} or {v:?} is unassigned");
        assert_ne!(cu, cv, "{u:?} and {v:?} share a color");
    }
}
