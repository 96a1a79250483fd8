use crate::core::{palette, Color, Var};
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::{Debug, Formatter};

/// Colors still possible for a single variable, kept in palette order.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Domain {
    values: SmallVec<[Color; 4]>,
}

impl Domain {
    pub fn full(num_colors: usize) -> Self {
        Domain {
            values: palette(num_colors).collect(),
        }
    }

    pub fn singleton(color: Color) -> Self {
        let mut values = SmallVec::new();
        values.push(color);
        Domain { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the only remaining color, if the domain is a singleton.
    pub fn as_singleton(&self) -> Option<Color> {
        match self.values.as_slice() {
            &[c] => Some(c),
            _ => None,
        }
    }

    pub fn contains(&self, color: Color) -> bool {
        self.values.contains(&color)
    }

    /// Removes `color` from the domain. Returns true if it was present.
    pub fn remove(&mut self, color: Color) -> bool {
        match self.values.iter().position(|&c| c == color) {
            Some(i) => {
                self.values.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.values.iter().copied()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.values
    }
}

impl Debug for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.values.iter().map(|c| c.to_u32()).format(", "))
    }
}

/// The domains of all variables.
///
/// The store is branch-local: the backtracking search clones it before committing to a value,
/// so that pruning done in a branch is discarded together with the branch.
#[derive(Clone, PartialEq, Eq)]
pub struct Domains {
    doms: Vec<Domain>,
}

impl Domains {
    /// Every variable can take any color of the palette.
    pub fn full(num_vars: usize, num_colors: usize) -> Self {
        Domains {
            doms: vec![Domain::full(num_colors); num_vars],
        }
    }

    pub fn num_vars(&self) -> usize {
        self.doms.len()
    }

    pub fn get(&self, var: Var) -> &Domain {
        &self.doms[var]
    }

    pub fn size(&self, var: Var) -> usize {
        self.doms[var].len()
    }

    pub fn contains(&self, var: Var, color: Color) -> bool {
        self.doms[var].contains(color)
    }

    /// Removes `color` from the domain of `var`. Returns true if the domain changed.
    pub fn remove(&mut self, var: Var, color: Color) -> bool {
        self.doms[var].remove(color)
    }

    /// Reduces the domain of `var` to `{color}`.
    pub fn restrict_to(&mut self, var: Var, color: Color) {
        self.doms[var] = Domain::singleton(color);
    }

    /// Returns the first variable with an empty domain, if any.
    pub fn first_empty(&self) -> Option<Var> {
        self.doms.iter().position(Domain::is_empty).map(Var::from)
    }
}

impl Debug for Domains {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.doms.iter().enumerate().map(|(i, d)| (Var::from(i), d)))
            .finish()
    }
}
