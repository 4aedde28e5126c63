//! Interpolation and clamping.

use num_traits::Float;

/// Linear interpolation: `a + t * (b - a)`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate past `a` or `b`.
#[inline]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + t * (b - a)
}

/// Restricts `v` to `[lo, hi]`, returning an owned value.
///
/// Evaluates `v < lo`, then `hi < v`. Unlike [`Ord::clamp`] this never
/// panics: with reversed bounds the same comparison chain runs and the
/// result is simply not meaningful.
#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo {
        lo
    } else if hi < v {
        hi
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(2.0_f64, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0_f64, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0_f32, 4.0, 0.5), 3.0);
    }

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(lerp(0.0_f64, 10.0, -1.0), -10.0);
    }

    #[test]
    fn clamp_reversed_bounds_follow_comparison_chain() {
        // lo = 10, hi = 1: 5 < 10 so lo wins.
        assert_eq!(clamp(5, 10, 1), 10);
        // 20 is not < 10, but 1 < 20 so hi wins.
        assert_eq!(clamp(20, 10, 1), 1);
    }

    #[test]
    fn clamp_works_for_non_copy_values() {
        let s = clamp(String::from("m"), String::from("a"), String::from("k"));
        assert_eq!(s, "k");
    }

    #[test]
    fn clamp_nan_passes_through() {
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
    }
}
