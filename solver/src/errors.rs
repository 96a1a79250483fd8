use crate::core::Var;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColoringError>;

/// Errors surfaced to the caller of the solver.
///
/// Dead ends met while searching are never reported here: they are absorbed by backtracking
/// and only show up in the statistics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColoringError {
    #[error("region {0} is declared adjacent to itself")]
    SelfLoop(Var),
    #[error("region {var} lists neighbor {neighbor} but there are only {num_vars} regions")]
    UnknownRegion { var: Var, neighbor: usize, num_vars: usize },
    #[error("asymmetric adjacency: region {from} lists {to} as a neighbor but not the reverse")]
    Asymmetric { from: Var, to: Var },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("cannot read {path}: {message}")]
    Io { path: String, message: String },
    #[error("the palette must contain at least one color")]
    EmptyPalette,
    #[error("no consistent coloring exists ({backtracks} backtracks)")]
    NoSolutionFound { backtracks: u64 },
}

impl ColoringError {
    pub(crate) fn parse(line: usize, message: impl ToString) -> Self {
        ColoringError::Parse {
            line,
            message: message.to_string(),
        }
    }

    /// True if the error stems from an ill-formed input graph.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            ColoringError::SelfLoop(_)
                | ColoringError::UnknownRegion { .. }
                | ColoringError::Asymmetric { .. }
                | ColoringError::Parse { .. }
        )
    }
}
