//! Search strategies: a complete backtracking search and an incomplete local search.

pub mod backtracking;
pub mod local_search;
pub mod value_order;
pub mod var_order;

use crate::propagation::Filtering;
use crate::search::value_order::ValueOrderKind;
use crate::search::var_order::VarOrderKind;

pub use backtracking::{Backtracking, BacktrackingResult};
pub use local_search::{LocalSearchResult, MinConflicts};

/// Configuration of the backtracking search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub filtering: Filtering,
    pub var_order: VarOrderKind,
    pub value_order: ValueOrderKind,
}

impl SearchConfig {
    /// Builds a configuration from the filtering mode and the two heuristic toggles
    /// (minimum remaining values for variables, least constraining value for colors).
    pub fn new(filtering: Filtering, use_variable_ordering: bool, use_value_ordering: bool) -> Self {
        SearchConfig {
            filtering,
            var_order: VarOrderKind::from_flag(use_variable_ordering),
            value_order: ValueOrderKind::from_flag(use_value_ordering),
        }
    }

    pub fn with_filtering(mut self, filtering: Filtering) -> Self {
        self.filtering = filtering;
        self
    }

    pub fn with_var_order(mut self, var_order: VarOrderKind) -> Self {
        self.var_order = var_order;
        self
    }

    pub fn with_value_order(mut self, value_order: ValueOrderKind) -> Self {
        self.value_order = value_order;
        self
    }
}
