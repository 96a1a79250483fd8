use std::fmt::{Display, Error, Formatter};
use std::time::Duration;

/// Statistics of a solve. Counters are only diagnostics and never drive the search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Backtrack counter of the backtracking search.
    ///
    /// Incremented on every rejected value and every time a child call returns without a
    /// solution, so it counts visited nodes rather than strict backtracks.
    pub backtracks: u64,
    /// Number of tentative assignments made by the backtracking search.
    pub decisions: u64,
    /// Number of filtering runs (forward checking or AC-3).
    pub propagations: u64,
    /// Filtering runs that ended on an empty domain.
    pub failed_propagations: u64,
    /// Number of values removed from domains by filtering.
    pub pruned_values: u64,
    /// Number of repair steps taken by the local search.
    pub local_steps: u64,
    pub solve_time: Duration,
}

impl Stats {
    pub fn new() -> Stats {
        Default::default()
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        fn label(f: &mut Formatter<'_>, label: &str) -> Result<(), Error> {
            write!(f, "{label:<20}: ")
        }
        fn val_throughput(f: &mut Formatter<'_>, value: u64, time: &Duration) -> Result<(), Error> {
            let secs = time.as_secs_f64();
            if secs > 0.0 {
                writeln!(f, "{:<12} ({:.0} /sec)", value, (value as f64) / secs)
            } else {
                writeln!(f, "{value:<12}")
            }
        }

        label(f, "backtracks")?;
        writeln!(f, "{:<12}", self.backtracks)?;

        label(f, "decisions")?;
        val_throughput(f, self.decisions, &self.solve_time)?;

        label(f, "propagations")?;
        val_throughput(f, self.propagations, &self.solve_time)?;

        label(f, "failed propagations")?;
        writeln!(f, "{:<12}", self.failed_propagations)?;

        label(f, "pruned values")?;
        writeln!(f, "{:<12}", self.pruned_values)?;

        label(f, "local search steps")?;
        writeln!(f, "{:<12}", self.local_steps)?;

        label(f, "Solve time")?;
        writeln!(f, "{:.6} s", self.solve_time.as_secs_f64())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_one_row_per_counter() {
        let stats = Stats {
            backtracks: 3,
            decisions: 10,
            ..Default::default()
        };
        let out = stats.to_string();
        assert_eq!(out.lines().count(), 7);
        assert!(out.starts_with("backtracks          : 3"));
        assert!(out.contains("decisions           : 10"));
    }
}
