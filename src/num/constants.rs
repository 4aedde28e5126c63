//! Mathematical constants at the precision of the requested float type.

use num_traits::FloatConst;

/// Pi at `f32` precision.
pub const PI_F32: f32 = core::f32::consts::PI;

/// Pi at `f64` precision.
pub const PI_F64: f64 = core::f64::consts::PI;

/// The ratio of a circle's circumference to its diameter, as a `T`.
///
/// ```rust
/// assert_eq!(cellar::pi::<f32>(), std::f32::consts::PI);
/// assert_eq!(cellar::pi::<f64>(), std::f64::consts::PI);
/// ```
#[inline(always)]
pub fn pi<T: FloatConst>() -> T {
    T::PI()
}
