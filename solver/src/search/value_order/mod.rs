mod domain_order;
mod lcv;

use crate::core::{Color, Var};
use crate::domains::Domains;
use crate::graph::Graph;
use smallvec::SmallVec;

pub use crate::search::value_order::domain_order::DomainOrder;
pub use crate::search::value_order::lcv::LeastConstrainingValue;

/// Candidate colors of a variable, in the order they should be tried.
pub type ValueSequence = SmallVec<[Color; 4]>;

pub trait ValueOrder {
    /// Return the colors of `var`'s domain in the order they should be tried.
    fn order(&self, var: Var, graph: &Graph, domains: &Domains) -> ValueSequence;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueOrderKind {
    DomainOrder(DomainOrder),
    LeastConstrainingValue(LeastConstrainingValue),
}

impl ValueOrderKind {
    /// Least constraining value when `heuristic` is true, palette order otherwise.
    pub fn from_flag(heuristic: bool) -> Self {
        if heuristic {
            ValueOrderKind::LeastConstrainingValue(LeastConstrainingValue)
        } else {
            ValueOrderKind::DomainOrder(DomainOrder)
        }
    }
}

impl ValueOrder for ValueOrderKind {
    fn order(&self, var: Var, graph: &Graph, domains: &Domains) -> ValueSequence {
        match self {
            ValueOrderKind::DomainOrder(d) => d.order(var, graph, domains),
            ValueOrderKind::LeastConstrainingValue(lcv) => lcv.order(var, graph, domains),
        }
    }
}

impl Default for ValueOrderKind {
    fn default() -> Self {
        Self::DomainOrder(DomainOrder)
    }
}
