//! Spatial dimension of the problem.

use std::fmt;

use crate::error::FluxError;

/// Maximum number of spatial dimensions supported.
pub const MAX_DIM: usize = 3;

/// Maximum number of flow variables (`d + 2`).
pub const MAX_VAR: usize = MAX_DIM + 2;

/// Number of spatial dimensions (2 or 3).
///
/// Selected once at construction time; every loop in the kernel runs over
/// `0..dim.get()` while storage is always sized with [`MAX_DIM`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dim {
    /// Planar problems.
    #[default]
    Two,
    /// Full three-dimensional problems.
    Three,
}

impl Dim {
    /// Number of spatial dimensions as `usize`.
    #[inline(always)]
    pub const fn get(self) -> usize {
        match self {
            Dim::Two => 2,
            Dim::Three => 3,
        }
    }

    /// Number of flow variables: continuity, `d` momentum components, energy.
    #[inline(always)]
    pub const fn n_var(self) -> usize {
        self.get() + 2
    }

    /// Index of the energy (or temperature) variable.
    #[inline(always)]
    pub const fn energy_index(self) -> usize {
        self.get() + 1
    }
}

impl TryFrom<usize> for Dim {
    type Error = FluxError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Dim::Two),
            3 => Ok(Dim::Three),
            other => Err(FluxError::InvalidDimension(other)),
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.get())
    }
}
