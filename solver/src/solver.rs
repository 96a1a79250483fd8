use crate::assignment::Assignment;
use crate::core::NUM_COLORS;
use crate::domains::Domains;
use crate::errors::{ColoringError, Result};
use crate::graph::Graph;
use crate::observer::{NoObserver, SearchObserver};
use crate::params::{MAX_LOCAL_SEARCH_STEPS, RANDOM_SEED};
use crate::propagation::Filtering;
use crate::search::{Backtracking, BacktrackingResult, LocalSearchResult, MinConflicts, SearchConfig};
use crate::stats::Stats;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::num::NonZeroUsize;
use std::time::Instant;

const DEFAULT_PALETTE: NonZeroUsize = match NonZeroUsize::new(NUM_COLORS) {
    Some(n) => n,
    None => panic!("NUM_COLORS must be positive"),
};

/// A coloring session over a fixed graph and palette.
///
/// The session owns the preprocessed graph and the random generator used by the local search.
/// Every solve starts from a fresh assignment and fresh full domains.
pub struct Solver {
    graph: Graph,
    num_colors: NonZeroUsize,
    rng: SmallRng,
}

impl Solver {
    /// A solver using the default palette of [`NUM_COLORS`] colors.
    pub fn new(graph: Graph) -> Solver {
        Solver {
            graph,
            num_colors: DEFAULT_PALETTE,
            rng: SmallRng::seed_from_u64(RANDOM_SEED.get()),
        }
    }

    /// A solver using a palette of `num_colors` colors.
    pub fn with_palette(graph: Graph, num_colors: usize) -> Result<Solver> {
        let num_colors = NonZeroUsize::new(num_colors).ok_or(ColoringError::EmptyPalette)?;
        Ok(Solver {
            num_colors,
            ..Solver::new(graph)
        })
    }

    /// Reseeds the random generator used by the local search.
    pub fn with_seed(mut self, seed: u64) -> Solver {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn num_colors(&self) -> usize {
        self.num_colors.get()
    }

    /// Full domains for every region.
    pub fn initial_domains(&self) -> Domains {
        Domains::full(self.graph.num_vars(), self.num_colors.get())
    }

    /// Complete search for a coloring.
    ///
    /// `use_variable_ordering` enables the minimum-remaining-values heuristic (with degree
    /// tie-break), `use_value_ordering` the least-constraining-value heuristic.
    pub fn solve_backtracking(
        &mut self,
        filtering: Filtering,
        use_variable_ordering: bool,
        use_value_ordering: bool,
    ) -> Result<BacktrackingResult> {
        let config = SearchConfig::new(filtering, use_variable_ordering, use_value_ordering);
        self.backtrack(&config, &mut NoObserver)
    }

    /// Complete search with an explicit configuration, reporting progress to `observer`.
    ///
    /// There is no time or node limit: on hard instances the search may run for a very long time.
    pub fn backtrack(&mut self, config: &SearchConfig, observer: &mut dyn SearchObserver) -> Result<BacktrackingResult> {
        let _span = tracing::span!(tracing::Level::DEBUG, "backtracking").entered();
        tracing::debug!(
            "filtering: {}, variable order: {:?}, value order: {:?}",
            config.filtering,
            config.var_order,
            config.value_order
        );
        let start = Instant::now();
        let mut assignment = Assignment::unassigned(self.graph.num_vars());
        let mut stats = Stats::new();
        let domains = self.initial_domains();

        let solved = Backtracking::new(&self.graph, config, &mut assignment, &mut stats, observer).run(domains);
        stats.solve_time = start.elapsed();
        tracing::debug!("\n{stats}");

        if solved {
            debug_assert!(crate::check::is_solved(&self.graph, &assignment));
            Ok(BacktrackingResult {
                assignment,
                backtracks: stats.backtracks,
                stats,
            })
        } else {
            tracing::debug!("search space exhausted");
            Err(ColoringError::NoSolutionFound {
                backtracks: stats.backtracks,
            })
        }
    }

    /// Min-conflicts local search with a budget of `max_steps` repairs, using the session's
    /// random generator.
    pub fn solve_local_search(&mut self, max_steps: u64) -> LocalSearchResult {
        local_search(&self.graph, self.num_colors, max_steps, &mut self.rng, &mut NoObserver)
    }

    /// Local search with the step budget read from `MAPCOLOR_MAX_STEPS`.
    pub fn solve_local_search_default(&mut self) -> LocalSearchResult {
        self.solve_local_search(MAX_LOCAL_SEARCH_STEPS.get())
    }

    /// Local search drawing its random choices from `rng` and reporting progress to `observer`.
    pub fn local_search_with_rng<R: Rng>(
        &self,
        max_steps: u64,
        rng: &mut R,
        observer: &mut dyn SearchObserver,
    ) -> LocalSearchResult {
        local_search(&self.graph, self.num_colors, max_steps, rng, observer)
    }
}

fn local_search<R: Rng>(
    graph: &Graph,
    num_colors: NonZeroUsize,
    max_steps: u64,
    rng: &mut R,
    observer: &mut dyn SearchObserver,
) -> LocalSearchResult {
    let _span = tracing::span!(tracing::Level::DEBUG, "local-search").entered();
    let start = Instant::now();
    let mut assignment = Assignment::unassigned(graph.num_vars());
    let mut stats = Stats::new();

    let steps = MinConflicts::with_palette(num_colors, max_steps).run(graph, &mut assignment, rng, &mut stats, observer);
    stats.solve_time = start.elapsed();
    let solved = crate::check::is_solved(graph, &assignment);
    if solved {
        tracing::debug!(steps, "solved");
    } else {
        tracing::debug!(steps, "step budget exhausted without a solution");
    }
    LocalSearchResult {
        assignment,
        solved,
        steps,
        stats,
    }
}
