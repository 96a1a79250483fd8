//! Depth-first search over partial assignments.
//!
//! Each recursive call owns a private copy of the domains, while the assignment is shared by all
//! calls and explicitly rolled back when a call gives up on its variable. Finding a solution
//! stops the whole search immediately, leaving the complete assignment in place.

use crate::assignment::Assignment;
use crate::check::{is_consistent, is_solved};
use crate::domains::Domains;
use crate::graph::Graph;
use crate::observer::{SearchEvent, SearchObserver};
use crate::search::value_order::ValueOrder;
use crate::search::var_order::VarOrder;
use crate::search::SearchConfig;
use crate::stats::Stats;

/// A complete and consistent assignment found by the backtracking search.
#[derive(Clone, Debug)]
pub struct BacktrackingResult {
    pub assignment: Assignment,
    /// Value of the backtrack counter when the solution was found.
    pub backtracks: u64,
    pub stats: Stats,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Outcome {
    Solved,
    Failed,
}

pub struct Backtracking<'a> {
    graph: &'a Graph,
    config: &'a SearchConfig,
    assignment: &'a mut Assignment,
    stats: &'a mut Stats,
    observer: &'a mut dyn SearchObserver,
}

impl<'a> Backtracking<'a> {
    pub fn new(
        graph: &'a Graph,
        config: &'a SearchConfig,
        assignment: &'a mut Assignment,
        stats: &'a mut Stats,
        observer: &'a mut dyn SearchObserver,
    ) -> Self {
        Backtracking {
            graph,
            config,
            assignment,
            stats,
            observer,
        }
    }

    /// Searches for a complete and consistent extension of the current assignment.
    ///
    /// Returns true if one was found, in which case the assignment holds it. Otherwise the
    /// assignment is left as it was before the call.
    pub fn run(mut self, domains: Domains) -> bool {
        self.search(domains, 0) == Outcome::Solved
    }

    fn search(&mut self, mut domains: Domains, depth: usize) -> Outcome {
        if is_solved(self.graph, self.assignment) {
            tracing::debug!(depth, backtracks = self.stats.backtracks, "solution found");
            self.observer.notify(&SearchEvent::Solved {
                assignment: self.assignment,
            });
            return Outcome::Solved;
        }

        let Some(var) = self.config.var_order.select(self.graph, self.assignment, &domains) else {
            // every variable is assigned but the assignment is not a solution
            return Outcome::Failed;
        };

        if let Err(empty) = self.config.filtering.before_branching(self.graph, &mut domains, self.stats) {
            tracing::trace!(depth, "{var:?}: no branching, {:?} has an empty domain", empty.var);
            return Outcome::Failed;
        }

        let values = self.config.value_order.order(var, self.graph, &domains);
        for color in values {
            self.assignment.set(var, color);
            self.stats.decisions += 1;
            tracing::trace!(depth, "decide {var:?} = {color:?}");
            self.observer.notify(&SearchEvent::Assigned {
                var,
                color,
                assignment: self.assignment,
            });

            if !is_consistent(self.graph, self.assignment) {
                self.stats.backtracks += 1;
                continue;
            }

            let mut branch = domains.clone();
            branch.restrict_to(var, color);
            if let Err(empty) = self
                .config
                .filtering
                .after_assignment(self.graph, &mut branch, var, color, self.stats)
            {
                tracing::trace!(depth, "{var:?} = {color:?} wipes out the domain of {:?}", empty.var);
                self.stats.backtracks += 1;
                continue;
            }

            if self.search(branch, depth + 1) == Outcome::Solved {
                return Outcome::Solved;
            }
            self.stats.backtracks += 1;
        }

        self.assignment.unset(var);
        self.observer.notify(&SearchEvent::Unassigned {
            var,
            assignment: self.assignment,
        });
        Outcome::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Var};
    use crate::graph::tests::{complete, cycle, star};
    use crate::observer::NoObserver;
    use crate::propagation::Filtering;
    use itertools::iproduct;

    const FILTERINGS: [Filtering; 3] = [Filtering::None, Filtering::ForwardChecking, Filtering::ArcConsistency];

    fn all_configs() -> Vec<SearchConfig> {
        iproduct!(FILTERINGS, [false, true], [false, true])
            .map(|(f, var, val)| SearchConfig::new(f, var, val))
            .collect()
    }

    fn run(graph: &Graph, num_colors: usize, config: &SearchConfig) -> (Option<Assignment>, Stats) {
        let mut assignment = Assignment::unassigned(graph.num_vars());
        let mut stats = Stats::default();
        let domains = Domains::full(graph.num_vars(), num_colors);
        let solved = Backtracking::new(graph, config, &mut assignment, &mut stats, &mut NoObserver).run(domains);
        if solved {
            (Some(assignment), stats)
        } else {
            assert_eq!(assignment, Assignment::unassigned(graph.num_vars()));
            (None, stats)
        }
    }

    #[test]
    fn four_cycle_two_colors() {
        let g = cycle(4);
        for config in all_configs() {
            let (solution, _) = run(&g, 2, &config);
            let solution = solution.unwrap();
            assert!(is_solved(&g, &solution), "{config:?}");
        }
        let (solution, _) = run(&g, 2, &SearchConfig::default());
        assert_eq!(solution.unwrap().colors().unwrap(), [0, 1, 0, 1].map(Color::from_u32));
    }

    #[test]
    fn four_cycle_one_color_fails() {
        let g = cycle(4);
        for config in all_configs() {
            let (solution, stats) = run(&g, 1, &config);
            assert!(solution.is_none(), "{config:?}");
            match config.filtering {
                // every domain is {c0}: the root pass fails before any value is tried
                Filtering::ArcConsistency => {
                    assert_eq!((stats.backtracks, stats.decisions), (0, 0), "{config:?}");
                    assert_eq!(stats.failed_propagations, 1);
                }
                Filtering::None | Filtering::ForwardChecking => assert!(stats.backtracks > 0, "{config:?}"),
            }
        }
    }

    #[test]
    fn failed_arc_consistency_after_a_decision_is_a_backtrack() {
        // triangle with two colors: no singleton at the root, each value of 0 then wipes out 2
        let g = complete(3);
        let (solution, stats) = run(&g, 2, &SearchConfig::new(Filtering::ArcConsistency, false, false));
        assert!(solution.is_none());
        assert_eq!(stats.decisions, 2);
        assert_eq!(stats.backtracks, 2);
        assert_eq!(stats.propagations, 3);
        assert_eq!(stats.failed_propagations, 2);
    }

    #[test]
    fn k5_is_not_four_colorable() {
        let g = complete(5);
        for config in all_configs() {
            assert!(run(&g, 4, &config).0.is_none(), "{config:?}");
        }
        assert!(run(&g, 5, &SearchConfig::default()).0.is_some());
    }

    #[test]
    fn empty_graph_is_trivially_solved() {
        let g = Graph::from_edges(0, []).unwrap();
        let (solution, stats) = run(&g, 4, &SearchConfig::default());
        assert_eq!(solution.unwrap().num_vars(), 0);
        assert_eq!(stats.decisions, 0);
    }

    #[test]
    fn backtrack_counter_without_filtering() {
        // triangle with three colors: 0=c0, 1 rejects c0 then takes c1, 2 rejects c0 and c1 then takes c2
        let g = complete(3);
        let (solution, stats) = run(&g, 3, &SearchConfig::default());
        assert_eq!(solution.unwrap().colors().unwrap(), [0, 1, 2].map(Color::from_u32));
        assert_eq!(stats.backtracks, 3);
        assert_eq!(stats.decisions, 6);
    }

    #[test]
    fn forward_checking_avoids_inconsistent_decisions() {
        let g = complete(3);
        let (_, stats) = run(&g, 3, &SearchConfig::new(Filtering::ForwardChecking, false, false));
        assert_eq!(stats.decisions, 3);
        assert_eq!(stats.backtracks, 0);
        assert_eq!(stats.propagations, 3);
    }

    #[test]
    fn mrv_starts_with_the_star_center() {
        let g = star(4);
        let config = SearchConfig::new(Filtering::ForwardChecking, true, false);
        let mut first = None;
        let mut observer = |e: &SearchEvent<'_>| {
            if let SearchEvent::Assigned { var, .. } = e {
                first.get_or_insert(*var);
            }
        };
        let mut assignment = Assignment::unassigned(5);
        let mut stats = Stats::default();
        let solved =
            Backtracking::new(&g, &config, &mut assignment, &mut stats, &mut observer).run(Domains::full(5, 2));
        assert!(solved);
        assert_eq!(first, Some(Var::from(0usize)));
    }
}
