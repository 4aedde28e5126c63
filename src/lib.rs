//! # `cellar` - Deferred In-Place Storage
//!
//! A small toolkit for values whose storage must exist before the value does.
//! The centrepiece is [`ObjectCell<T>`]: a single inline slot, sized and aligned
//! for one `T`, plus an occupancy flag. The value can be built after the cell,
//! destroyed before it, and rebuilt any number of times, all without touching
//! the heap.
//!
//! ## Safety Guarantees
//!
//! ### Pairing discipline
//! - **Exactly-once drop**: a value placed into a cell is dropped exactly once,
//!   either by [`ObjectCell::destruct`], by moving it out, or when the cell itself
//!   is dropped.
//! - **No phantom drops**: a cell never runs a destructor for a value that was
//!   not successfully constructed.
//! - **Panic transparency**: panics raised by `T`'s initializer or `Drop` are not
//!   caught. The cell only becomes occupied after the initializer returns, so an
//!   unwinding initializer leaves it empty.
//!
//! ### Checked by default
//! The safe API rejects construction into an occupied cell and destruction of
//! an empty one with [`CellError`]. The `*_unchecked` methods keep the
//! zero-overhead contract for callers that track occupancy themselves.
//!
//! ## Layers
//!
//! 1. **Placement** ([`place`]): `construct_at` / `destroy_at` on raw pointers.
//! 2. **Cell** ([`ObjectCell`]): the two-state Empty/Occupied machine.
//! 3. **Visitor** ([`visit`]): conditional access for shared and exclusive borrows.
//! 4. **Numeric helpers** ([`num`]): `lerp`, `clamp`, `pi`, duration conversions.
//!
//! ## Example
//!
//! ```rust
//! use cellar::{visit, ObjectCell};
//!
//! let mut cell: ObjectCell<String> = ObjectCell::new();
//! assert!(cell.is_empty());
//!
//! cell.construct(String::from("hello")).unwrap().push_str(", world");
//! assert_eq!(cell.get().map(String::as_str), Some("hello, world"));
//!
//! let len = visit(&cell, |s| s.len());
//! assert_eq!(len, Some(12));
//!
//! cell.destruct().unwrap();
//! assert!(cell.get().is_none());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cell;
pub mod num;
pub mod place;
#[cfg(any(test, feature = "proptest"))]
pub mod testing;

mod trace;

pub use cell::{visit, CellAccess, CellError, ObjectCell, TryConstructError};
pub use num::{clamp, duration_as_secs, duration_in, lerp, per_second, pi};
pub use place::{construct_at, construct_at_with, construct_in, destroy_at};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // The storage buffer is exactly one `T`, so the cell is never less aligned than `T`.
    assert!(mem::align_of::<ObjectCell<u64>>() == mem::align_of::<u64>());
    assert!(mem::align_of::<ObjectCell<u128>>() == mem::align_of::<u128>());

    // Value first, flag in the tail padding: one `T` plus at most one alignment unit.
    assert!(mem::size_of::<ObjectCell<u64>>() <= mem::size_of::<u64>() * 2);
    assert!(mem::size_of::<ObjectCell<[u8; 3]>>() == 4);

    // Zero-sized payloads cost only the flag.
    assert!(mem::size_of::<ObjectCell<()>>() == 1);
};
