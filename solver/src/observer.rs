//! Optional progress notifications, e.g. to redraw the map after each change.

use crate::assignment::Assignment;
use crate::core::{Color, Var};

#[derive(Debug, Clone, Copy)]
pub enum SearchEvent<'a> {
    /// The backtracking search tentatively gave `color` to `var`.
    Assigned {
        var: Var,
        color: Color,
        assignment: &'a Assignment,
    },
    /// The backtracking search gave up on `var`, which is unassigned again.
    Unassigned { var: Var, assignment: &'a Assignment },
    /// The local search drew its random initial assignment.
    Initialized { assignment: &'a Assignment },
    /// The local search recolored `var` with `color` at the given step.
    Repaired {
        step: u64,
        var: Var,
        color: Color,
        assignment: &'a Assignment,
    },
    /// A complete and consistent assignment was found.
    Solved { assignment: &'a Assignment },
}

impl<'a> SearchEvent<'a> {
    pub fn assignment(&self) -> &'a Assignment {
        match *self {
            SearchEvent::Assigned { assignment, .. }
            | SearchEvent::Unassigned { assignment, .. }
            | SearchEvent::Initialized { assignment }
            | SearchEvent::Repaired { assignment, .. }
            | SearchEvent::Solved { assignment } => assignment,
        }
    }
}

pub trait SearchObserver {
    fn notify(&mut self, event: &SearchEvent<'_>);
}

impl<F: FnMut(&SearchEvent<'_>)> SearchObserver for F {
    fn notify(&mut self, event: &SearchEvent<'_>) {
        self(event)
    }
}

/// Observer that ignores all events.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoObserver;

impl SearchObserver for NoObserver {
    fn notify(&mut self, _event: &SearchEvent<'_>) {}
}
