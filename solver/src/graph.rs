//! Region adjacency graph.
//!
//! The graph is produced once by an external collaborator (a map segmenter, a file loader, ...)
//! and is read-only afterwards. Every constructor validates its input so that the search engines
//! can rely on the following invariants:
//!  - adjacency is symmetric: `u ∈ neighbors(v) <=> v ∈ neighbors(u)`
//!  - there is no self-loop
//!  - each adjacency list is sorted and free of duplicates

use crate::core::Var;
use crate::errors::{ColoringError, Result};
use itertools::Itertools;
use std::fmt::{Debug, Formatter};

#[derive(Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Var>>,
}

impl Graph {
    /// Builds a graph with `num_vars` vertices from a list of undirected edges.
    /// Each edge may appear several times and in both directions.
    pub fn from_edges(num_vars: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Result<Graph> {
        let mut adjacency = vec![Vec::new(); num_vars];
        for (a, b) in edges {
            if a.max(b) >= num_vars {
                return Err(ColoringError::UnknownRegion {
                    var: Var::from(a.min(b)),
                    neighbor: a.max(b),
                    num_vars,
                });
            }
            if a == b {
                return Err(ColoringError::SelfLoop(Var::from(a)));
            }
            adjacency[a].push(Var::from(b));
            adjacency[b].push(Var::from(a));
        }
        Ok(Graph::normalized(adjacency))
    }

    /// Builds a graph from per-vertex adjacency lists, as handed over by a map segmenter.
    ///
    /// Unlike [`Graph::from_edges`], the input must already be symmetric: a region listing a
    /// neighbor that does not list it back is rejected rather than silently repaired.
    pub fn from_adjacency(lists: Vec<Vec<usize>>) -> Result<Graph> {
        let num_vars = lists.len();
        let mut adjacency = Vec::with_capacity(num_vars);
        for (var, neighbors) in lists.iter().enumerate() {
            let mut adj = Vec::with_capacity(neighbors.len());
            for &neighbor in neighbors {
                if neighbor >= num_vars {
                    return Err(ColoringError::UnknownRegion {
                        var: Var::from(var),
                        neighbor,
                        num_vars,
                    });
                }
                if neighbor == var {
                    return Err(ColoringError::SelfLoop(Var::from(var)));
                }
                adj.push(Var::from(neighbor));
            }
            adjacency.push(adj);
        }
        let graph = Graph::normalized(adjacency);
        for v in graph.vars() {
            if let Some(&t) = graph.neighbors(v).iter().find(|&&t| !graph.are_adjacent(t, v)) {
                return Err(ColoringError::Asymmetric { from: v, to: t });
            }
        }
        Ok(graph)
    }

    fn normalized(adjacency: Vec<Vec<Var>>) -> Graph {
        let adjacency = adjacency
            .into_iter()
            .map(|adj| adj.into_iter().sorted().dedup().collect())
            .collect();
        Graph { adjacency }
    }

    pub fn num_vars(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected edges.
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn vars(&self) -> impl DoubleEndedIterator<Item = Var> + ExactSizeIterator + Clone {
        (0..self.num_vars()).map(Var::from)
    }

    /// Neighbors of `var`, in increasing order.
    pub fn neighbors(&self, var: Var) -> &[Var] {
        &self.adjacency[var]
    }

    pub fn degree(&self, var: Var) -> usize {
        self.adjacency[var].len()
    }

    pub fn are_adjacent(&self, a: Var, b: Var) -> bool {
        self.adjacency[a].binary_search(&b).is_ok()
    }

    /// All undirected edges `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (Var, Var)> + '_ {
        self.vars()
            .flat_map(move |u| self.neighbors(u).iter().filter(move |&&v| u < v).map(move |&v| (u, v)))
    }

    /// Directed arcs `(v, t)` for every edge, in both directions.
    pub fn arcs(&self) -> impl Iterator<Item = (Var, Var)> + '_ {
        self.vars().flat_map(move |v| self.neighbors(v).iter().map(move |&t| (v, t)))
    }
}

impl Debug for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for v in self.vars() {
            writeln!(f, "{v:?}: [{}]", self.neighbors(v).iter().format(", "))?;
        }
        Ok(())
    }
}
