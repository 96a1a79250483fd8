//! Domain filtering applied by the backtracking search.

mod arc_consistency;
mod forward_checking;

pub use arc_consistency::ArcConsistency;
pub use forward_checking::ForwardChecking;

use crate::core::{Color, Var};
use crate::domains::Domains;
use crate::graph::Graph;
use crate::stats::Stats;

/// A propagation wiped out the domain of `var`: the current branch has no consistent completion.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EmptyDomain {
    pub var: Var,
}

/// Which filtering the backtracking search applies after each tentative assignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Filtering {
    /// Only check the consistency of the assignment.
    #[default]
    None,
    /// Remove the chosen color from the domains of the direct neighbors.
    ForwardChecking,
    /// Run AC-3 over the whole graph until a fixed point is reached.
    ArcConsistency,
}

impl Filtering {
    /// Filtering to apply once `var` has been committed to `color` and its domain restricted to `{color}`.
    pub fn after_assignment(
        self,
        graph: &Graph,
        domains: &mut Domains,
        var: Var,
        color: Color,
        stats: &mut Stats,
    ) -> Result<(), EmptyDomain> {
        let res = match self {
            Filtering::None => return Ok(()),
            Filtering::ForwardChecking => ForwardChecking.propagate(graph, domains, var, color, stats),
            Filtering::ArcConsistency => ArcConsistency.propagate(graph, domains, stats),
        };
        stats.propagations += 1;
        if res.is_err() {
            stats.failed_propagations += 1;
        }
        res
    }

    /// Filtering to apply before choosing a value for the next variable.
    pub fn before_branching(self, graph: &Graph, domains: &mut Domains, stats: &mut Stats) -> Result<(), EmptyDomain> {
        match self {
            Filtering::ArcConsistency => {
                stats.propagations += 1;
                let res = ArcConsistency.propagate(graph, domains, stats);
                if res.is_err() {
                    stats.failed_propagations += 1;
                }
                res
            }
            Filtering::None | Filtering::ForwardChecking => Ok(()),
        }
    }
}

impl std::fmt::Display for Filtering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Filtering::None => "none",
            Filtering::ForwardChecking => "forward-checking",
            Filtering::ArcConsistency => "arc-consistency",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Filtering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "n" => Ok(Filtering::None),
            "forward-checking" | "fc" => Ok(Filtering::ForwardChecking),
            "arc-consistency" | "ac" | "ac3" => Ok(Filtering::ArcConsistency),
            _ => Err(format!("unknown filtering mode \"{s}\" (expected none, fc or ac)")),
        }
    }
}
