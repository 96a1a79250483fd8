//! Min-conflicts local search.
//!
//! Starting from a uniformly random complete assignment, each step picks a random conflicted
//! variable and moves it to the color with the fewest conflicts among its neighbors. The search
//! never backtracks and is incomplete: it stops after a fixed number of steps whether or not a
//! solution was reached.

use crate::assignment::Assignment;
use crate::check::{conflicted_vars, conflicts, is_solved};
use crate::core::{palette, Color, Var};
use crate::errors::{ColoringError, Result};
use crate::graph::Graph;
use crate::observer::{SearchEvent, SearchObserver};
use crate::stats::Stats;
use rand::Rng;
use std::num::NonZeroUsize;

/// Outcome of a local search run. `solved` is false when the step budget ran out first.
#[derive(Clone, Debug)]
pub struct LocalSearchResult {
    pub assignment: Assignment,
    pub solved: bool,
    pub steps: u64,
    pub stats: Stats,
}

#[derive(Copy, Clone, Debug)]
pub struct MinConflicts {
    num_colors: NonZeroUsize,
    max_steps: u64,
}

impl MinConflicts {
    /// Fails with [`ColoringError::EmptyPalette`] when `num_colors` is zero.
    pub fn new(num_colors: usize, max_steps: u64) -> Result<Self> {
        let num_colors = NonZeroUsize::new(num_colors).ok_or(ColoringError::EmptyPalette)?;
        Ok(MinConflicts::with_palette(num_colors, max_steps))
    }

    pub fn with_palette(num_colors: NonZeroUsize, max_steps: u64) -> Self {
        MinConflicts { num_colors, max_steps }
    }

    /// Runs the search, overwriting `assignment`. Returns the number of steps taken.
    pub fn run<R: Rng>(
        &self,
        graph: &Graph,
        assignment: &mut Assignment,
        rng: &mut R,
        stats: &mut Stats,
        observer: &mut dyn SearchObserver,
    ) -> u64 {
        for var in graph.vars() {
            assignment.set(var, Color::from(rng.random_range(0..self.num_colors.get())));
        }
        observer.notify(&SearchEvent::Initialized { assignment });

        let mut steps = 0;
        while steps < self.max_steps && !is_solved(graph, assignment) {
            let conflicted = conflicted_vars(graph, assignment);
            // a complete assignment that is not a solution always has a conflicted variable
            debug_assert!(!conflicted.is_empty());
            if conflicted.is_empty() {
                break;
            }
            steps += 1;
            let var = conflicted[rng.random_range(0..conflicted.len())];
            let color = self.least_conflicting_color(graph, assignment, var, rng);
            tracing::trace!(step = steps, "repair {var:?}: {:?} -> {color:?}", assignment.get(var));
            assignment.set(var, color);
            observer.notify(&SearchEvent::Repaired {
                step: steps,
                var,
                color,
                assignment,
            });
        }
        stats.local_steps += steps;

        if is_solved(graph, assignment) {
            observer.notify(&SearchEvent::Solved { assignment });
        }
        steps
    }

    /// The color with the fewest conflicts with the current colors of `var`'s neighbors.
    ///
    /// Each color tying with the best so far replaces it with probability 1/2.
    fn least_conflicting_color<R: Rng>(&self, graph: &Graph, assignment: &Assignment, var: Var, rng: &mut R) -> Color {
        let first = Color::from_u32(0);
        let init = (first, conflicts(graph, assignment, var, first));
        let (best, _) = palette(self.num_colors.get()).skip(1).fold(init, |best, color| {
            let count = conflicts(graph, assignment, var, color);
            if count < best.1 || (count == best.1 && rng.random_bool(0.5)) {
                (color, count)
            } else {
                best
            }
        });
        best
    }
}
