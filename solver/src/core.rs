/// Number of colors in the default palette.
pub const NUM_COLORS: usize = 4;

/// Declares a dense, zero-based index type usable to index a `Vec`.
macro_rules! create_index_type {
    ($(#[$meta:meta])* $type_name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
        pub struct $type_name(u32);

        impl $type_name {
            pub const fn from_u32(u: u32) -> Self {
                $type_name(u)
            }

            pub const fn to_u32(self) -> u32 {
                self.0
            }
        }

        impl From<usize> for $type_name {
            fn from(u: usize) -> Self {
                Self::from_u32(u as u32)
            }
        }
        impl From<$type_name> for usize {
            fn from(v: $type_name) -> Self {
                v.0 as usize
            }
        }

        impl std::fmt::Debug for $type_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        impl std::fmt::Display for $type_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl<V> std::ops::Index<$type_name> for Vec<V> {
            type Output = V;

            fn index(&self, index: $type_name) -> &Self::Output {
                &self[usize::from(index)]
            }
        }

        impl<V> std::ops::IndexMut<$type_name> for Vec<V> {
            fn index_mut(&mut self, index: $type_name) -> &mut Self::Output {
                &mut self[usize::from(index)]
            }
        }
    };
}

create_index_type!(
    /// A region of the map, i.e. a vertex of the adjacency graph.
    Var,
    "v"
);

create_index_type!(
    /// A color of the palette, in `[0, k)`.
    Color,
    "c"
);

/// Iterator over all colors of a palette with `num_colors` colors, in palette order.
pub fn palette(num_colors: usize) -> impl DoubleEndedIterator<Item = Color> + ExactSizeIterator + Clone {
    (0..num_colors).map(Color::from)
}
