//! `ObjectCell` — inline storage for one value that is built and destroyed on demand.
//!
//! The cell owns a `MaybeUninit<T>` buffer and an occupancy flag. It moves
//! between two states:
//!
//! ```text
//!   Empty ──construct──▶ Occupied ──destruct / take──▶ Empty ──▶ ...
//! ```
//!
//! All pointer and `MaybeUninit` work is delegated to
//! `cell::raw::access::maybe_uninit`.

use core::{fmt, mem::MaybeUninit};

use crate::cell::error::{CellError, TryConstructError};
use crate::cell::raw::access::maybe_uninit as mu;
use crate::trace;

/// A single inline slot that may or may not hold a live `T`.
///
/// Storage exists for the whole life of the cell; the value's life is a
/// sub-range of it, controlled by [`construct`](Self::construct) and
/// [`destruct`](Self::destruct). A value still present when the cell is
/// dropped is dropped with it.
///
/// # Examples
///
/// ```rust
/// use cellar::ObjectCell;
///
/// let mut cell = ObjectCell::new();
/// cell.construct(vec![1, 2, 3]).unwrap();
/// assert!(cell.construct(vec![4]).is_err()); // already occupied
///
/// cell.destruct().unwrap();
/// cell.construct(vec![4]).unwrap();
/// assert_eq!(cell.get(), Some(&vec![4]));
/// ```
pub struct ObjectCell<T> {
    // Value first so the flag can sit in tail padding.
    value: MaybeUninit<T>,
    occupied: bool,
}

impl<T> ObjectCell<T> {
    /// Creates an empty cell.
    pub const fn new() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            occupied: false,
        }
    }

    /// Creates a cell that is occupied from the start.
    #[inline]
    pub fn with(value: T) -> Self {
        trace::constructed::<T>();
        Self {
            value: MaybeUninit::new(value),
            occupied: true,
        }
    }

    /// Creates a cell occupied by the result of `init`.
    #[inline]
    pub fn with_fn<F>(init: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::with(init())
    }

    /// Returns `true` if the cell holds a live value.
    #[inline(always)]
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Returns `true` if the cell holds no value.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        !self.occupied
    }

    /// Returns a shared reference to the value, or `None` if the cell is empty.
    #[inline(always)]
    pub fn get(&self) -> Option<&T> {
        if self.occupied {
            // SAFETY: the flag is set only while the slot is initialized.
            Some(unsafe { mu::assume_init_ref(&self.value) })
        } else {
            None
        }
    }

    /// Returns an exclusive reference to the value, or `None` if the cell is empty.
    #[inline(always)]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.occupied {
            // SAFETY: the flag is set only while the slot is initialized.
            Some(unsafe { mu::assume_init_mut(&mut self.value) })
        } else {
            None
        }
    }

    /// Returns a shared reference to the value without checking occupancy.
    ///
    /// # Safety
    /// The cell must be occupied.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.occupied, "ObjectCell::get_unchecked on an empty cell");
        // SAFETY: caller asserts occupancy.
        unsafe { mu::assume_init_ref(&self.value) }
    }

    /// Returns an exclusive reference to the value without checking occupancy.
    ///
    /// # Safety
    /// The cell must be occupied.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.occupied, "ObjectCell::get_unchecked_mut on an empty cell");
        // SAFETY: caller asserts occupancy.
        unsafe { mu::assume_init_mut(&mut self.value) }
    }

    /// Stores `value` in an empty cell and returns a reference to it.
    ///
    /// # Errors
    /// If the cell is already occupied, `value` is handed back untouched
    /// and the current value is left in place.
    #[inline]
    pub fn construct(&mut self, value: T) -> Result<&mut T, T> {
        if self.occupied {
            trace::construct_rejected::<T>("occupied");
            return Err(value);
        }
        // SAFETY: just checked the cell is empty.
        Ok(unsafe { self.construct_unchecked(value) })
    }

    /// Builds a value with `init` directly into an empty cell.
    ///
    /// `init` is not called if the cell is occupied. If `init` panics, the
    /// cell stays empty and the panic propagates.
    ///
    /// # Errors
    /// [`CellError::Occupied`] if the cell already holds a value.
    #[inline]
    pub fn construct_with<F>(&mut self, init: F) -> Result<&mut T, CellError>
    where
        F: FnOnce() -> T,
    {
        if self.occupied {
            trace::construct_rejected::<T>("occupied");
            return Err(CellError::Occupied);
        }
        let value = init();
        // SAFETY: checked empty above, and `init` has no access to `self`.
        Ok(unsafe { self.construct_unchecked(value) })
    }

    /// Builds a value with a fallible initializer.
    ///
    /// The cell becomes occupied only if `init` returns `Ok`.
    ///
    /// # Errors
    /// - [`TryConstructError::Occupied`] if the cell already holds a value
    ///   (`init` is not called).
    /// - [`TryConstructError::Init`] carrying the initializer's error; the
    ///   cell is left empty.
    pub fn try_construct_with<E, F>(&mut self, init: F) -> Result<&mut T, TryConstructError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if self.occupied {
            trace::construct_rejected::<T>("occupied");
            return Err(TryConstructError::Occupied);
        }
        match init() {
            // SAFETY: checked empty above.
            Ok(value) => Ok(unsafe { self.construct_unchecked(value) }),
            Err(e) => {
                trace::construct_rejected::<T>("initializer failed");
                Err(TryConstructError::Init(e))
            }
        }
    }

    /// Stores `value` without checking occupancy.
    ///
    /// # Safety
    /// The cell must be empty. Constructing over a live value leaks it and
    /// later drops only the new one.
    #[inline(always)]
    pub unsafe fn construct_unchecked(&mut self, value: T) -> &mut T {
        debug_assert!(!self.occupied, "ObjectCell::construct_unchecked on an occupied cell");
        // SAFETY: caller asserts the slot holds nothing live.
        let slot = unsafe { mu::write(&mut self.value, value) };
        self.occupied = true;
        trace::constructed::<T>();
        slot
    }

    /// Drops the held value, leaving the cell empty.
    ///
    /// # Errors
    /// [`CellError::Empty`] if there is nothing to drop.
    #[inline]
    pub fn destruct(&mut self) -> Result<(), CellError> {
        if !self.occupied {
            return Err(CellError::Empty);
        }
        // SAFETY: just checked the cell is occupied.
        unsafe { self.destruct_unchecked() };
        Ok(())
    }

    /// Drops the held value without checking occupancy.
    ///
    /// The flag is cleared before `T::drop` runs, so a panicking destructor
    /// leaves the cell empty rather than eligible for a second drop.
    ///
    /// # Safety
    /// The cell must be occupied.
    #[inline(always)]
    pub unsafe fn destruct_unchecked(&mut self) {
        debug_assert!(self.occupied, "ObjectCell::destruct_unchecked on an empty cell");
        self.occupied = false;
        trace::destructed::<T>();
        // SAFETY: caller asserts occupancy; the cleared flag prevents reuse.
        unsafe { mu::drop_in_place(&mut self.value) }
    }

    /// Moves the value out, leaving the cell empty.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        if !self.occupied {
            return None;
        }
        self.occupied = false;
        // SAFETY: was occupied; the flag now marks the slot as moved-from.
        Some(unsafe { mu::read(&self.value) })
    }

    /// Stores `value`, returning whatever the cell held before.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        let old = self.take();
        // SAFETY: `take` left the cell empty.
        unsafe { self.construct_unchecked(value) };
        old
    }

    /// Returns the value, building it with `init` first if the cell is empty.
    pub fn get_or_construct_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if !self.occupied {
            let value = init();
            // SAFETY: checked empty above.
            unsafe { self.construct_unchecked(value) };
        }
        // SAFETY: occupied on every path to here.
        unsafe { mu::assume_init_mut(&mut self.value) }
    }

    /// Consumes the cell, returning its value if it had one.
    #[inline]
    pub fn into_inner(mut self) -> Option<T> {
        self.take()
    }

    /// Raw pointer to the storage buffer.
    ///
    /// Always aligned and sized for one `T`; only dereferenceable while the
    /// cell is occupied.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.value.as_ptr()
    }

    /// Mutable raw pointer to the storage buffer.
    ///
    /// Writing through it does not change the occupancy flag.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.value.as_mut_ptr()
    }

    /// Calls `f` with the value if present. See [`visit`](crate::visit).
    #[inline]
    pub fn visit<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.get().map(f)
    }

    /// Calls `f` with the value mutably if present. See [`visit`](crate::visit).
    #[inline]
    pub fn visit_mut<R, F>(&mut self, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.get_mut().map(f)
    }
}

impl<T> Drop for ObjectCell<T> {
    fn drop(&mut self) {
        if self.occupied {
            trace::teardown::<T>();
            // SAFETY: occupied, and this is the last access to the slot.
            unsafe { self.destruct_unchecked() }
        }
    }
}

impl<T> Default for ObjectCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ObjectCell<T> {
    fn clone(&self) -> Self {
        match self.get() {
            Some(value) => Self::with(value.clone()),
            None => Self::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ObjectCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("ObjectCell").field(value).finish(),
            None => f.write_str("ObjectCell(<empty>)"),
        }
    }
}

impl<T> From<T> for ObjectCell<T> {
    fn from(value: T) -> Self {
        Self::with(value)
    }
}

impl<T> From<ObjectCell<T>> for Option<T> {
    fn from(cell: ObjectCell<T>) -> Self {
        cell.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_empty() {
        let cell: ObjectCell<u32> = ObjectCell::new();
        assert!(cell.is_empty());
        assert!(!cell.is_occupied());
        assert_eq!(cell.get(), None);
    }

    #[test]
    fn const_new_in_static_context() {
        static EMPTY: ObjectCell<u64> = ObjectCell::new();
        assert!(EMPTY.get().is_none());
    }

    #[test]
    fn storage_is_aligned_for_value() {
        #[repr(align(64))]
        struct Wide([u8; 64]);

        let mut cell: ObjectCell<Wide> = ObjectCell::new();
        assert_eq!(cell.as_mut_ptr() as usize % 64, 0);
        cell.construct(Wide([7; 64])).ok();
        assert_eq!(cell.get().map(|w| w.0[63]), Some(7));
    }

    #[test]
    fn construct_on_occupied_hands_value_back() {
        let mut cell = ObjectCell::with(String::from("first"));
        let rejected = cell.construct(String::from("second"));
        assert_eq!(rejected, Err(String::from("second")));
        assert_eq!(cell.get().map(String::as_str), Some("first"));
    }

    #[test]
    fn construct_with_skips_initializer_when_occupied() {
        let mut cell = ObjectCell::with(1);
        let mut called = false;
        let res = cell.construct_with(|| {
            called = true;
            2
        });
        assert_eq!(res, Err(CellError::Occupied));
        assert!(!called);
    }

    #[test]
    fn destruct_on_empty_is_rejected() {
        let mut cell: ObjectCell<u8> = ObjectCell::new();
        assert_eq!(cell.destruct(), Err(CellError::Empty));
    }

    #[test]
    fn replace_and_take() {
        let mut cell = ObjectCell::new();
        assert_eq!(cell.replace(3), None);
        assert_eq!(cell.replace(4), Some(3));
        assert_eq!(cell.take(), Some(4));
        assert_eq!(cell.take(), None);
    }

    #[test]
    fn get_or_construct_with_builds_once() {
        let mut cell = ObjectCell::new();
        *cell.get_or_construct_with(|| 10) += 1;
        *cell.get_or_construct_with(|| 100) += 1;
        assert_eq!(cell.get(), Some(&12));
    }

    #[test]
    fn debug_formatting() {
        let mut cell = ObjectCell::with(5u8);
        assert_eq!(format!("{cell:?}"), "ObjectCell(5)");
        cell.destruct().unwrap();
        assert_eq!(format!("{cell:?}"), "ObjectCell(<empty>)");
    }

    #[test]
    fn clone_preserves_occupancy() {
        let full = ObjectCell::with(vec![1, 2]);
        let empty: ObjectCell<Vec<i32>> = ObjectCell::new();
        assert_eq!(full.clone().get(), Some(&vec![1, 2]));
        assert!(empty.clone().is_empty());
    }

    #[test]
    fn option_conversions() {
        let cell: ObjectCell<i32> = 9.into();
        assert_eq!(Option::from(cell), Some(9));
        let cell: ObjectCell<i32> = ObjectCell::new();
        assert_eq!(Option::<i32>::from(cell), None);
    }
}
