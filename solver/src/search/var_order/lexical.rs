use crate::assignment::Assignment;
use crate::core::Var;
use crate::domains::Domains;
use crate::graph::Graph;
use crate::search::var_order::VarOrder;

/// First unassigned variable in index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexical;

impl VarOrder for Lexical {
    fn select(&self, _graph: &Graph, assignment: &Assignment, _domains: &Domains) -> Option<Var> {
        assignment.unassigned_vars().next()
    }
}
