use crate::core::{Color, Var};
use itertools::Itertools;
use std::fmt::{Debug, Formatter};

/// Current color of each variable, if any.
///
/// Unlike [`Domains`](crate::domains::Domains), a single assignment is shared by the whole
/// search: values are set when entering a branch and explicitly unset when leaving it.
#[derive(Clone, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<Option<Color>>,
}

impl Assignment {
    /// An assignment where every variable is unassigned.
    pub fn unassigned(num_vars: usize) -> Self {
        Assignment {
            values: vec![None; num_vars],
        }
    }

    /// A complete assignment built from one color per variable.
    pub fn from_colors(colors: impl IntoIterator<Item = Color>) -> Self {
        Assignment {
            values: colors.into_iter().map(Some).collect(),
        }
    }

    pub fn num_vars(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, var: Var) -> Option<Color> {
        self.values[var]
    }

    pub fn is_assigned(&self, var: Var) -> bool {
        self.values[var].is_some()
    }

    pub fn set(&mut self, var: Var, color: Color) {
        self.values[var] = Some(color);
    }

    pub fn unset(&mut self, var: Var) {
        self.values[var] = None;
    }

    pub fn num_assigned(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Unassigned variables, in index order.
    pub fn unassigned_vars(&self) -> impl Iterator<Item = Var> + '_ {
        self.values
            .iter()
            .positions(Option::is_none)
            .map(Var::from)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Var, Option<Color>)> + '_ {
        self.values.iter().enumerate().map(|(i, &c)| (Var::from(i), c))
    }

    /// The color of every variable, or `None` if some variable is unassigned.
    pub fn colors(&self) -> Option<Vec<Color>> {
        self.values.iter().copied().collect()
    }
}

impl Debug for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fmt_value = |v: &Option<Color>| v.map_or("_".to_string(), |c| c.to_string());
        write!(f, "[{}]", self.values.iter().map(fmt_value).format(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_unset() {
        let mut a = Assignment::unassigned(3);
        let x = Var::from(1usize);
        assert_eq!(a.unassigned_vars().count(), 3);
        a.set(x, Color::from_u32(2));
        assert_eq!(a.get(x), Some(Color::from_u32(2)));
        assert_eq!(a.num_assigned(), 1);
        assert_eq!(format!("{a:?}"), "[_ 2 _]");
        assert_eq!(a.colors(), None);
        a.unset(x);
        assert!(!a.is_assigned(x));
        assert_eq!(a.num_assigned(), 0);
    }

    #[test]
    fn complete_assignment() {
        let a = Assignment::from_colors([0, 1, 0].map(Color::from_u32));
        assert!(a.is_complete());
        assert_eq!(a.unassigned_vars().next(), None);
        assert_eq!(a.colors().unwrap().len(), 3);
    }
}
