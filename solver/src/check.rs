//! Consistency checks over an assignment.
//!
//! All functions are pure: they never modify the assignment or the domains, and are independent
//! of the search strategy. Constraints are implicit, one `!=` per edge of the graph.

use crate::assignment::Assignment;
use crate::core::{Color, Var};
use crate::graph::Graph;

/// True if no two adjacent assigned variables share a color.
/// Unassigned variables never cause a violation.
pub fn is_consistent(graph: &Graph, assignment: &Assignment) -> bool {
    graph.vars().all(|v| match assignment.get(v) {
        Some(color) => !graph.neighbors(v).iter().any(|&n| assignment.get(n) == Some(color)),
        None => true,
    })
}

/// True if every variable is assigned and the assignment is consistent.
pub fn is_solved(graph: &Graph, assignment: &Assignment) -> bool {
    assignment.is_complete() && is_consistent(graph, assignment)
}

/// Number of neighbors of `var` whose current color is `color`.
pub fn conflicts(graph: &Graph, assignment: &Assignment, var: Var, color: Color) -> usize {
    graph
        .neighbors(var)
        .iter()
        .filter(|&&n| assignment.get(n) == Some(color))
        .count()
}

/// True if `var` is assigned and shares its color with at least one neighbor.
pub fn is_conflicted(graph: &Graph, assignment: &Assignment, var: Var) -> bool {
    match assignment.get(var) {
        Some(color) => conflicts(graph, assignment, var, color) > 0,
        None => false,
    }
}

/// All variables in conflict with at least one neighbor, in index order.
pub fn conflicted_vars(graph: &Graph, assignment: &Assignment) -> Vec<Var> {
    graph.vars().filter(|&v| is_conflicted(graph, assignment, v)).collect()
}

/// Number of edges whose two ends are assigned the same color.
pub fn num_conflicts(graph: &Graph, assignment: &Assignment) -> usize {
    graph
        .edges()
        .filter(|&(u, v)| assignment.get(u).is_some() && assignment.get(u) == assignment.get(v))
        .count()
}
