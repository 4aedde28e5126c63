//! Lifecycle events for cells, emitted through `tracing` when the feature is on.
//!
//! Without the `tracing` feature every hook is an empty inline function.

#[cfg(feature = "tracing")]
use core::any::type_name;

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn constructed<T>() {
    tracing::trace!(target: "cellar::cell", ty = type_name::<T>(), "constructed");
}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn construct_rejected<T>(reason: &'static str) {
    tracing::debug!(target: "cellar::cell", ty = type_name::<T>(), reason, "construct rejected");
}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn destructed<T>() {
    tracing::trace!(target: "cellar::cell", ty = type_name::<T>(), "destructed");
}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn teardown<T>() {
    tracing::trace!(target: "cellar::cell", ty = type_name::<T>(), "dropping live value with cell");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn constructed<T>() {}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn construct_rejected<T>(_reason: &'static str) {}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn destructed<T>() {}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn teardown<T>() {}
