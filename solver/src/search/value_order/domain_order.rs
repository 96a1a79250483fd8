use crate::core::Var;
use crate::domains::Domains;
use crate::graph::Graph;
use crate::search::value_order::{ValueOrder, ValueSequence};

/// Colors in palette order.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct DomainOrder;

impl ValueOrder for DomainOrder {
    fn order(&self, var: Var, _graph: &Graph, domains: &Domains) -> ValueSequence {
        domains.get(var).iter().collect()
    }
}
