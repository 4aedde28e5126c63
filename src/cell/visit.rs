//! Conditional access to a cell's value through either kind of borrow.

use crate::cell::object::ObjectCell;

/// A borrow of a cell that can be queried for its value.
///
/// Implemented for `&ObjectCell<T>` (yielding `&T`) and `&mut ObjectCell<T>`
/// (yielding `&mut T`), so [`visit`] picks the matching accessor from the
/// borrow it is handed.
pub trait CellAccess {
    /// The reference type handed to a visitor.
    type Ref;

    /// Returns the live value, or `None` if the cell is empty.
    fn query(self) -> Option<Self::Ref>;
}

impl<'a, T> CellAccess for &'a ObjectCell<T> {
    type Ref = &'a T;

    #[inline(always)]
    fn query(self) -> Option<&'a T> {
        self.get()
    }
}

impl<'a, T> CellAccess for &'a mut ObjectCell<T> {
    type Ref = &'a mut T;

    #[inline(always)]
    fn query(self) -> Option<&'a mut T> {
        self.get_mut()
    }
}

/// Calls `f` once with the cell's value if it holds one; does nothing otherwise.
///
/// Returns `f`'s result, or `None` when the cell was empty.
///
/// ```rust
/// use cellar::{visit, ObjectCell};
///
/// let mut cell = ObjectCell::with(1);
/// visit(&mut cell, |v| *v += 1);
/// assert_eq!(visit(&cell, |v| *v), Some(2));
///
/// let empty: ObjectCell<i32> = ObjectCell::new();
/// assert_eq!(visit(&empty, |_| unreachable!()), None::<()>);
/// ```
#[inline]
pub fn visit<C, R, F>(cell: C, f: F) -> Option<R>
where
    C: CellAccess,
    F: FnOnce(C::Ref) -> R,
{
    cell.query().map(f)
}
