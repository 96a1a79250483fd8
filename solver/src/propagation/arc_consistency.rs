use crate::core::Var;
use crate::domains::Domains;
use crate::graph::Graph;
use crate::propagation::EmptyDomain;
use crate::stats::Stats;

/// AC-3 propagation specialized to `!=` constraints.
///
/// An arc `(v, t)` is revised only when the domain of `v` is a singleton `{c}`: `c` is then
/// removed from the domain of `t`. A source domain with two or more values never prunes its
/// target, which makes this a restricted form of arc consistency.
///
/// The propagation always runs to its fixed point unless a domain becomes empty.
#[derive(Copy, Clone, Debug, Default)]
pub struct ArcConsistency;

impl ArcConsistency {
    pub fn propagate(&self, graph: &Graph, domains: &mut Domains, stats: &mut Stats) -> Result<(), EmptyDomain> {
        let mut worklist: Vec<(Var, Var)> = graph.arcs().collect();

        while let Some((v, t)) = worklist.pop() {
            if !Self::revise(domains, v, t) {
                continue;
            }
            stats.pruned_values += 1;
            if domains.get(t).is_empty() {
                tracing::trace!("AC-3: revising {v:?} -> {t:?} empties the domain of {t:?}");
                return Err(EmptyDomain { var: t });
            }
            worklist.extend(graph.neighbors(t).iter().filter(|&&n| n != v).map(|&n| (t, n)));
        }
        Ok(())
    }

    /// Removes from the domain of `t` the values that have no support in the domain of `v`.
    /// Returns true if the domain of `t` changed.
    fn revise(domains: &mut Domains, v: Var, t: Var) -> bool {
        match domains.get(v).as_singleton() {
            Some(c) => domains.remove(t, c),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use crate::graph::tests::{complete, cycle};
    use crate::graph::Graph;

    fn v(i: usize) -> Var {
        Var::from(i)
    }
    fn c(i: u32) -> Color {
        Color::from_u32(i)
    }

    #[test]
    fn untouched_without_singletons() {
        let g = cycle(6);
        let mut doms = Domains::full(6, 2);
        ArcConsistency.propagate(&g, &mut doms, &mut Stats::default()).unwrap();
        assert_eq!(doms, Domains::full(6, 2));
    }

    #[test]
    fn propagates_along_a_path() {
        // 0 - 1 - 2 - 3 with two colors: fixing 0 fixes everything
        let g = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let mut doms = Domains::full(4, 2);
        doms.restrict_to(v(0), c(0));
        let mut stats = Stats::default();
        ArcConsistency.propagate(&g, &mut doms, &mut stats).unwrap();
        assert_eq!(doms.get(v(1)).as_singleton(), Some(c(1)));
        assert_eq!(doms.get(v(2)).as_singleton(), Some(c(0)));
        assert_eq!(doms.get(v(3)).as_singleton(), Some(c(1)));
        assert_eq!(stats.pruned_values, 3);
    }

    #[test]
    fn bipartite_graphs_never_fail() {
        let g = cycle(8);
        let mut doms = Domains::full(8, 2);
        doms.restrict_to(v(3), c(1));
        ArcConsistency.propagate(&g, &mut doms, &mut Stats::default()).unwrap();
        assert_eq!(doms.first_empty(), None);
        for i in 0..8 {
            let expected = if i % 2 == 1 { c(1) } else { c(0) };
            assert_eq!(doms.get(v(i)).as_singleton(), Some(expected));
        }
    }

    #[test]
    fn detects_odd_cycle() {
        let g = complete(3);
        let mut doms = Domains::full(3, 2);
        doms.restrict_to(v(0), c(0));
        let res = ArcConsistency.propagate(&g, &mut doms, &mut Stats::default());
        assert!(res.is_err());
    }
}
