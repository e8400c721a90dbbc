//! Strongly-typed index newtypes.
//!
//! These keep mesh point indices and edge indices from being mixed up in the
//! assembly helper.

use std::fmt;

/// Index newtype over `usize`, displayed with a one-letter prefix.
macro_rules! define_index {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            /// Wrap a raw position.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Raw position.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

define_index!(
    /// Index of a mesh point (control-volume center).
    ///
    /// # Example
    ///
    /// ```
    /// use visflux::types::PointIndex;
    ///
    /// let p = PointIndex::new(42);
    /// assert_eq!(p.get(), 42);
    /// assert_eq!(p.to_string(), "P42");
    /// ```
    PointIndex,
    "P"
);

define_index!(
    /// Index of an edge in the edge list handed to the assembly helper.
    EdgeIndex,
    "E"
);

impl EdgeIndex {
    /// Create an iterator over [0, n) edge indices.
    pub fn iter(n: usize) -> impl ExactSizeIterator<Item = EdgeIndex> {
        (0..n).map(EdgeIndex)
    }
}
