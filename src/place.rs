//! Placement operations: build or destroy a value inside memory the caller owns.
//!
//! These are the lowest layer of the crate. [`ObjectCell`](crate::ObjectCell)
//! reaches them through the audited slot accessors in
//! `cell::raw::access::maybe_uninit`; they are public so that other storage
//! (arena slots, hand-rolled unions, FFI buffers) can follow the same rules.
//!
//! ## Contract
//! - `construct_at*` requires memory that is valid for writes of one `T`,
//!   correctly aligned, and *not* holding a live `T` (the old bytes are
//!   overwritten without being dropped).
//! - `destroy_at` requires a live `T`; afterwards the bytes are unspecified.

use core::{mem::MaybeUninit, ptr};

/// Initializes `value` at `ptr` without allocating and returns a reference to it.
///
/// # Safety
/// - `ptr` must be non-null, aligned for `T`, and valid for writes of one `T`.
/// - `ptr` must not currently hold a live `T` that still needs dropping
///   (it would be leaked, not dropped).
/// - The caller picks `'a`; it must not outlive the memory at `ptr` and the
///   returned reference must be the only live reference to it.
#[inline(always)]
pub unsafe fn construct_at<'a, T>(ptr: *mut T, value: T) -> &'a mut T {
    debug_assert!(!ptr.is_null(), "construct_at: null pointer");
    debug_assert!(ptr.is_aligned(), "construct_at: misaligned pointer");
    // SAFETY: caller upholds validity, alignment, and exclusivity.
    unsafe {
        ptr::write(ptr, value);
        &mut *ptr
    }
}

/// Runs `init` and places its result at `ptr`.
///
/// The initializer runs before `ptr` is touched, so if it panics the memory
/// is left exactly as it was.
///
/// # Safety
/// Same contract as [`construct_at`].
#[inline]
pub unsafe fn construct_at_with<'a, T, F>(ptr: *mut T, init: F) -> &'a mut T
where
    F: FnOnce() -> T,
{
    let value = init();
    // SAFETY: forwarded caller contract.
    unsafe { construct_at(ptr, value) }
}

/// Safe placement into a `MaybeUninit` slot.
///
/// Any value previously in the slot is overwritten without being dropped.
/// That can leak, but it cannot cause undefined behaviour.
#[inline(always)]
pub fn construct_in<T>(slot: &mut MaybeUninit<T>, value: T) -> &mut T {
    slot.write(value)
}

/// Runs the destructor of the value living at `ptr`.
///
/// # Safety
/// - `ptr` must point to a live, properly aligned `T`.
/// - The value must not be used or dropped again afterwards.
#[inline(always)]
pub unsafe fn destroy_at<T: ?Sized>(ptr: *mut T) {
    // SAFETY: caller asserts a live value and drop uniqueness.
    unsafe { ptr::drop_in_place(ptr) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counted(Rc<Cell<usize>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn construct_then_destroy_runs_drop_once() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = MaybeUninit::<Counted>::uninit();

        let value = unsafe { construct_at(slot.as_mut_ptr(), Counted(drops.clone())) };
        assert!(Rc::ptr_eq(&value.0, &drops));
        assert_eq!(drops.get(), 0);

        unsafe { destroy_at(slot.as_mut_ptr()) };
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn construct_at_with_returns_placed_value() {
        let mut slot = MaybeUninit::<Vec<u32>>::uninit();
        let v = unsafe { construct_at_with(slot.as_mut_ptr(), || vec![1, 2, 3]) };
        v.push(4);
        assert_eq!(unsafe { slot.assume_init_ref() }, &[1, 2, 3, 4]);
        unsafe { destroy_at(slot.as_mut_ptr()) };
    }

    #[test]
    fn panicking_initializer_leaves_memory_untouched() {
        let mut slot = MaybeUninit::new(7u32);
        let ptr = slot.as_mut_ptr();
        let result = std::panic::catch_unwind(move || unsafe {
            construct_at_with(ptr, || -> u32 { panic!("init failed") });
        });
        assert!(result.is_err());
        assert_eq!(unsafe { slot.assume_init() }, 7);
    }

    #[test]
    fn construct_in_is_safe_placement() {
        let mut slot = MaybeUninit::uninit();
        *construct_in(&mut slot, 10i64) += 5;
        assert_eq!(unsafe { slot.assume_init() }, 15);
    }

    #[test]
    fn destroy_at_works_on_unsized_slices() {
        let drops = Rc::new(Cell::new(0));
        let mut arr = core::mem::ManuallyDrop::new([Counted(drops.clone()), Counted(drops.clone())]);
        let slice: *mut [Counted] = &mut arr[..];
        unsafe { destroy_at(slice) };
        assert_eq!(drops.get(), 2);
    }
}
