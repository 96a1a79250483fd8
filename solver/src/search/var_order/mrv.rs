use crate::assignment::Assignment;
use crate::core::Var;
use crate::domains::Domains;
use crate::graph::Graph;
use crate::search::var_order::VarOrder;

/// Fail-first ordering: the unassigned variable with the fewest remaining colors.
///
/// Ties are broken in favor of the variable with the highest degree, then the lowest index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinRemainingValues;

impl VarOrder for MinRemainingValues {
    fn select(&self, graph: &Graph, assignment: &Assignment, domains: &Domains) -> Option<Var> {
        let mut best: Option<(Var, usize, usize)> = None;
        for var in assignment.unassigned_vars() {
            let size = domains.size(var);
            let degree = graph.degree(var);
            let better = match best {
                None => true,
                Some((_, best_size, best_degree)) => size < best_size || (size == best_size && degree > best_degree),
            };
            if better {
                best = Some((var, size, degree));
            }
        }
        best.map(|(var, _, _)| var)
    }
}
