//! Saturating conversions
//!
//! In-range values are truncated toward zero. Values below the destination
//! range clamp to its minimum (zero for unsigned kinds), values above clamp to
//! its maximum, and NaN converts to zero. Infinities clamp like any other
//! out-of-range value.

use super::FloatToInteger;
use crate::kind::{Long, LongLong, ULong, ULongLong};

macro_rules! saturating_entry_points {
    ($($name:ident: $float:ty => $int:ty;)+) => {$(
        #[doc = concat!("Convert `", stringify!($float), "` to `", stringify!($int), "`, saturating at the bounds.")]
        #[inline]
        #[must_use]
        pub fn $name(value: $float) -> $int {
            FloatToInteger::<$int>::to_integer_saturating(value)
        }
    )+};
}

saturating_entry_points! {
    convert_f32_i_narrow_saturating: f32 => Long;
    convert_f32_i_wide_saturating: f32 => LongLong;
    convert_f32_u_narrow_saturating: f32 => ULong;
    convert_f32_u_wide_saturating: f32 => ULongLong;
    convert_f64_i_narrow_saturating: f64 => Long;
    convert_f64_i_wide_saturating: f64 => LongLong;
    convert_f64_u_narrow_saturating: f64 => ULong;
    convert_f64_u_wide_saturating: f64 => ULongLong;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(convert_f64_i_wide_saturating(3.9), 3);
        assert_eq!(convert_f64_i_wide_saturating(-3.9), -3);
        assert_eq!(convert_f32_i_narrow_saturating(-0.5), 0);
        assert_eq!(convert_f32_u_narrow_saturating(42.99), 42);
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(convert_f64_u_wide_saturating(-5.0), 0);
        assert_eq!(convert_f64_u_wide_saturating(1e30), u64::MAX);
        assert_eq!(convert_f64_i_wide_saturating(1e30), i64::MAX);
        assert_eq!(convert_f64_i_wide_saturating(-1e30), i64::MIN);
        assert_eq!(convert_f32_u_wide_saturating(-1e30), 0);
        assert_eq!(convert_f32_i_narrow_saturating(f32::MAX), Long::MAX);
        assert_eq!(convert_f64_u_narrow_saturating(f64::MAX), ULong::MAX);
    }

    #[test]
    fn test_nan_is_zero() {
        assert_eq!(convert_f32_i_narrow_saturating(f32::NAN), 0);
        assert_eq!(convert_f32_i_wide_saturating(f32::NAN), 0);
        assert_eq!(convert_f32_u_narrow_saturating(f32::NAN), 0);
        assert_eq!(convert_f32_u_wide_saturating(f32::NAN), 0);
        assert_eq!(convert_f64_i_narrow_saturating(f64::NAN), 0);
        assert_eq!(convert_f64_i_wide_saturating(f64::NAN), 0);
        assert_eq!(convert_f64_u_narrow_saturating(f64::NAN), 0);
        assert_eq!(convert_f64_u_wide_saturating(f64::NAN), 0);
    }

    #[test]
    fn test_nan_payload_is_ignored() {
        let signaling = f64::from_bits(0x7ff0_0000_0000_0001);
        let negative_quiet = f32::from_bits(0xffc0_1234);
        assert!(signaling.is_nan() && negative_quiet.is_nan());
        assert_eq!(convert_f64_i_wide_saturating(signaling), 0);
        assert_eq!(convert_f32_u_wide_saturating(negative_quiet), 0);
    }

    #[test]
    fn test_infinities_clamp() {
        assert_eq!(convert_f32_i_narrow_saturating(f32::INFINITY), Long::MAX);
        assert_eq!(convert_f32_i_narrow_saturating(f32::NEG_INFINITY), Long::MIN);
        assert_eq!(convert_f64_i_wide_saturating(f64::INFINITY), i64::MAX);
        assert_eq!(convert_f64_i_wide_saturating(f64::NEG_INFINITY), i64::MIN);
        assert_eq!(convert_f32_u_wide_saturating(f32::INFINITY), u64::MAX);
        assert_eq!(convert_f64_u_narrow_saturating(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_zeroes_and_subnormals() {
        assert_eq!(convert_f64_i_wide_saturating(-0.0), 0);
        assert_eq!(convert_f64_u_wide_saturating(-0.0), 0);
        assert_eq!(convert_f32_i_wide_saturating(f32::from_bits(1)), 0);
        assert_eq!(convert_f64_u_narrow_saturating(-f64::from_bits(1)), 0);
    }
}
