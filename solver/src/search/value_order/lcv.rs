use crate::core::Var;
use crate::domains::Domains;
use crate::graph::Graph;
use crate::search::value_order::{ValueOrder, ValueSequence};

/// Least constraining value: colors that appear in the fewest neighbor domains come first.
///
/// The number of neighbors still allowed to take a color approximates how much choosing it
/// would restrict them. The sort is stable, equally constraining colors keep their palette order.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct LeastConstrainingValue;

impl ValueOrder for LeastConstrainingValue {
    fn order(&self, var: Var, graph: &Graph, domains: &Domains) -> ValueSequence {
        let mut values: ValueSequence = domains.get(var).iter().collect();
        values.sort_by_cached_key(|&color| {
            graph
                .neighbors(var)
                .iter()
                .filter(|&&n| domains.contains(n, color))
                .count()
        });
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use crate::graph::tests::star;

    fn c(i: u32) -> Color {
        Color::from_u32(i)
    }

    #[test]
    fn least_shared_colors_first() {
        // center 0 with three leaves
        let g = star(3);
        let mut doms = Domains::full(4, 3);
        let leaf = |i: usize| Var::from(i);
        // color 0 remains possible for all leaves, color 1 for two of them, color 2 for none
        doms.remove(leaf(1), c(1));
        doms.remove(leaf(1), c(2));
        doms.remove(leaf(2), c(2));
        doms.remove(leaf(3), c(2));
        let order = LeastConstrainingValue.order(Var::from(0usize), &g, &doms);
        assert_eq!(order.as_slice(), &[c(2), c(1), c(0)]);
    }

    #[test]
    fn ties_keep_palette_order() {
        let g = star(2);
        let doms = Domains::full(3, 4);
        let order = LeastConstrainingValue.order(Var::from(0usize), &g, &doms);
        assert_eq!(order.as_slice(), &[c(0), c(1), c(2), c(3)]);
    }
}
