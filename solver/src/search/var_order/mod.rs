mod lexical;
mod mrv;

use crate::assignment::Assignment;
use crate::core::Var;
use crate::domains::Domains;
use crate::graph::Graph;
pub use crate::search::var_order::lexical::Lexical;
pub use crate::search::var_order::mrv::MinRemainingValues;

pub trait VarOrder {
    /// Return the variable to branch on or None if all variables are assigned.
    fn select(&self, graph: &Graph, assignment: &Assignment, domains: &Domains) -> Option<Var>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VarOrderKind {
    Lexical(Lexical),
    MinRemainingValues(MinRemainingValues),
}

impl VarOrderKind {
    /// Minimum remaining values when `heuristic` is true, index order otherwise.
    pub fn from_flag(heuristic: bool) -> Self {
        if heuristic {
            VarOrderKind::MinRemainingValues(MinRemainingValues)
        } else {
            VarOrderKind::Lexical(Lexical)
        }
    }
}

impl VarOrder for VarOrderKind {
    fn select(&self, graph: &Graph, assignment: &Assignment, domains: &Domains) -> Option<Var> {
        match self {
            VarOrderKind::Lexical(lexical) => lexical.select(graph, assignment, domains),
            VarOrderKind::MinRemainingValues(mrv) => mrv.select(graph, assignment, domains),
        }
    }
}

impl Default for VarOrderKind {
    fn default() -> Self {
        Self::Lexical(Lexical)
    }
}
