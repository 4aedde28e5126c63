//! Errors reported by the checked cell API.

use core::fmt;

/// A cell operation was attempted in the wrong state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellError {
    /// Construction was requested while the cell already holds a value.
    Occupied,
    /// Destruction was requested while the cell holds no value.
    Empty,
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occupied => f.write_str("cell is already occupied"),
            Self::Empty => f.write_str("cell is empty"),
        }
    }
}

impl std::error::Error for CellError {}

/// Failure of [`ObjectCell::try_construct_with`](crate::ObjectCell::try_construct_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TryConstructError<E> {
    /// The cell already held a value; the initializer was not run.
    Occupied,
    /// The initializer ran and failed; the cell is still empty.
    Init(E),
}

impl<E> TryConstructError<E> {
    /// Returns the initializer's error, if that is what failed.
    pub fn into_init(self) -> Option<E> {
        match self {
            Self::Occupied => None,
            Self::Init(e) => Some(e),
        }
    }
}

impl<E: fmt::Display> fmt::Display for TryConstructError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occupied => fmt::Display::fmt(&CellError::Occupied, f),
            Self::Init(e) => write!(f, "initializer failed: {e}"),
        }
    }
}

impl<E> std::error::Error for TryConstructError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Occupied => None,
            Self::Init(e) => Some(e),
        }
    }
}
