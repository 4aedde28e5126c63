//! Centralized unsafe accessors for cell storage.
//!
//! ## Design rule
//! - `cell::object` must not perform ad-hoc `ptr::*` / `MaybeUninit` operations.
//! - It calls the small surface here, which in turn sits on [`crate::place`].
//!
//! This module does **not** make the operations safe. It makes their safety
//! conditions uniform and auditable in one place.

pub(crate) mod maybe_uninit;
