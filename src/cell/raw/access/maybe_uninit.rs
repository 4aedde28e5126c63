//! Unsafe, centralized operations on `MaybeUninit<T>` slots.
//!
//! A cell stores its value as `MaybeUninit<T>` next to an occupancy flag.
//! These helpers are the single place to audit:
//! - placement (`construct_at`)
//! - moves out (`ptr::read`)
//! - drops (`destroy_at`)
//! - conversion to references (`assume_init_ref` / `assume_init_mut`)
//!
//! ## Core invariant
//! For every caller in this crate the slot is initialized *exactly when* the
//! owning cell's flag is set. The flag is set only after a placement returns,
//! and cleared before the value is moved out or dropped.

use core::{mem::MaybeUninit, ptr};

use crate::place;

/// Interprets an initialized slot as `&T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is initialized.
    unsafe { slot.assume_init_ref() }
}

/// Interprets an initialized slot as `&mut T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is initialized; `&mut` gives exclusivity.
    unsafe { slot.assume_init_mut() }
}

/// Places a value into an uninitialized slot.
///
/// # Safety
/// - `slot` must not hold a live value (it would be leaked).
#[inline(always)]
pub(crate) unsafe fn write<T>(slot: &mut MaybeUninit<T>, value: T) -> &mut T {
    // SAFETY: `slot.as_mut_ptr()` is valid and aligned for one `T`; the caller
    // guarantees nothing live is overwritten.
    unsafe { place::construct_at(slot.as_mut_ptr(), value) }
}

/// Bitwise-moves an initialized value out of a slot.
///
/// # Safety
/// - `slot` must be initialized.
/// - The slot must be treated as uninitialized afterwards (no drop, no read).
#[inline(always)]
pub(crate) unsafe fn read<T>(slot: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization and forfeits the slot's copy.
    unsafe { ptr::read(slot.as_ptr()) }
}

/// Drops an initialized value in place.
///
/// # Safety
/// - `slot` must be initialized.
/// - Must not be called more than once for the same logical value.
#[inline(always)]
pub(crate) unsafe fn drop_in_place<T>(slot: &mut MaybeUninit<T>) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { place::destroy_at(slot.as_mut_ptr()) }
}
