//! Map coloring as a constraint satisfaction problem.
//!
//! Regions of a map are the variables of a CSP whose constraints are implicit: two adjacent
//! regions must not share a color. Colors are taken from a fixed palette of [`NUM_COLORS`]
//! colors by default.
//!
//! Two solving strategies are provided:
//!
//! - a complete [backtracking search](search::backtracking), optionally filtering domains with
//!   [forward checking](propagation::ForwardChecking) or [AC-3](propagation::ArcConsistency), and
//!   optionally ordering variables by minimum remaining values and colors by least constraining
//!   value;
//! - an incomplete [min-conflicts local search](search::local_search) with a step budget.
//!
//! ```
//! use mapcolor::{Filtering, Graph, Solver};
//!
//! // a square: 0 - 1 - 2 - 3 - 0
//! let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
//! let mut solver = Solver::with_palette(graph, 2).unwrap();
//! let result = solver.solve_backtracking(Filtering::ForwardChecking, true, true).unwrap();
//! assert!(mapcolor::check::is_solved(solver.graph(), &result.assignment));
//! ```

pub mod assignment;
pub mod check;
pub mod core;
pub mod domains;
pub mod errors;
pub mod graph;
pub mod observer;
pub mod params;
pub mod parse;
pub mod propagation;
pub mod search;
pub mod solver;
pub mod stats;

pub use crate::assignment::Assignment;
pub use crate::core::{Color, Var, NUM_COLORS};
pub use crate::domains::{Domain, Domains};
pub use crate::errors::{ColoringError, Result};
pub use crate::graph::Graph;
pub use crate::observer::{SearchEvent, SearchObserver};
pub use crate::propagation::Filtering;
pub use crate::search::{BacktrackingResult, LocalSearchResult, SearchConfig};
pub use crate::solver::Solver;
pub use crate::stats::Stats;
