//! `Duration` to floating-point conversions.
//!
//! Conversions go through `f64` seconds and are then narrowed to the target
//! float type with an ordinary `as` cast. Dividing by a zero duration gives
//! the IEEE-754 result (`inf` or `NaN`), not an error.

use core::time::Duration;

use num_traits::{AsPrimitive, Float};

/// Seconds in `d` as a `T`.
///
/// ```rust
/// use std::time::Duration;
/// assert_eq!(cellar::duration_as_secs::<f32>(Duration::from_millis(1500)), 1.5);
/// ```
#[inline]
pub fn duration_as_secs<T>(d: Duration) -> T
where
    T: Float + 'static,
    f64: AsPrimitive<T>,
{
    d.as_secs_f64().as_()
}

/// How many `unit`s fit in `d`, as a `T`.
///
/// `duration_in::<f64>(d, Duration::from_millis(1))` is `d` in milliseconds.
#[inline]
pub fn duration_in<T>(d: Duration, unit: Duration) -> T
where
    T: Float + 'static,
    f64: AsPrimitive<T>,
{
    (d.as_secs_f64() / unit.as_secs_f64()).as_()
}

/// `value` per second over `d`: `value / seconds(d)`.
#[inline]
pub fn per_second<T>(value: T, d: Duration) -> T
where
    T: Float + 'static,
    f64: AsPrimitive<T>,
{
    value / duration_as_secs::<T>(d)
}
