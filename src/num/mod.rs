//! Small numeric helpers: a precision-generic pi, interpolation, clamping,
//! and `Duration` to floating-point conversions.

pub mod constants;
pub mod interp;
pub mod time;

pub use constants::{pi, PI_F32, PI_F64};
pub use interp::{clamp, lerp};
pub use time::{duration_as_secs, duration_in, per_second};
