use crate::core::{Color, Var};
use crate::domains::Domains;
use crate::graph::Graph;
use crate::propagation::EmptyDomain;
use crate::stats::Stats;

/// One-hop pruning: once `var` takes `color`, no neighbor can take it.
///
/// The propagation is not transitive, the neighbors of the neighbors are left untouched.
#[derive(Copy, Clone, Debug, Default)]
pub struct ForwardChecking;

impl ForwardChecking {
    pub fn propagate(
        &self,
        graph: &Graph,
        domains: &mut Domains,
        var: Var,
        color: Color,
        stats: &mut Stats,
    ) -> Result<(), EmptyDomain> {
        for &n in graph.neighbors(var) {
            if domains.remove(n, color) {
                stats.pruned_values += 1;
                if domains.get(n).is_empty() {
                    tracing::trace!("forward checking: {var:?}={color:?} empties the domain of {n:?}");
                    return Err(EmptyDomain { var: n });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::{cycle, star};

    fn v(i: usize) -> Var {
        Var::from(i)
    }

    #[test]
    fn removes_color_from_neighbors_only() {
        let g = cycle(4);
        let mut doms = Domains::full(4, 3);
        let red = Color::from_u32(0);
        doms.restrict_to(v(0), red);
        let mut stats = Stats::default();
        ForwardChecking.propagate(&g, &mut doms, v(0), red, &mut stats).unwrap();
        assert!(!doms.contains(v(1), red));
        assert!(!doms.contains(v(3), red));
        assert!(doms.contains(v(2), red));
        assert_eq!(doms.get(v(0)).as_singleton(), Some(red));
        assert_eq!(stats.pruned_values, 2);

        // re-applying the same assignment is a no-op
        let before = doms.clone();
        ForwardChecking.propagate(&g, &mut doms, v(0), red, &mut stats).unwrap();
        assert_eq!(doms, before);
        assert_eq!(stats.pruned_values, 2);
    }

    #[test]
    fn fails_on_wiped_out_neighbor() {
        let g = star(2);
        let mut doms = Domains::full(3, 2);
        let (c0, c1) = (Color::from_u32(0), Color::from_u32(1));
        doms.restrict_to(v(2), c1);
        doms.restrict_to(v(0), c1);
        let res = ForwardChecking.propagate(&g, &mut doms, v(0), c1, &mut Stats::default());
        assert_eq!(res, Err(EmptyDomain { var: v(2) }));
        assert!(doms.contains(v(1), c0));
    }
}
