//! Sentinel conversions
//!
//! In-range values are truncated toward zero. NaN, infinities and every value
//! whose truncation does not fit convert to the destination's sentinel: the
//! minimum for signed kinds, the maximum for unsigned kinds.
//!
//! # Ambiguity
//!
//! The sentinel is also a valid result. A source that truncates exactly to
//! the sentinel (for example `-9223372036854775808.0` into `long long`, or
//! `4294967295.0` into a 32-bit `unsigned long`) yields the same value as a
//! failed conversion, and the two cannot be told apart from the result alone.
//! Callers that must distinguish them should check
//! [`is_representable`](super::is_representable) first or use another policy.

use super::FloatToInteger;
use crate::kind::{Long, LongLong, ULong, ULongLong};

macro_rules! sentinel_entry_points {
    ($($name:ident: $float:ty => $int:ty;)+) => {$(
        #[doc = concat!(
            "Convert `", stringify!($float), "` to `", stringify!($int),
            "`, returning the sentinel for NaN, infinities and out-of-range values."
        )]
        #[inline]
        #[must_use]
        pub fn $name(value: $float) -> $int {
            FloatToInteger::<$int>::to_integer_sentinel(value)
        }
    )+};
}

sentinel_entry_points! {
    convert_f32_i_narrow_sentinel: f32 => Long;
    convert_f32_i_wide_sentinel: f32 => LongLong;
    convert_f32_u_narrow_sentinel: f32 => ULong;
    convert_f32_u_wide_sentinel: f32 => ULongLong;
    convert_f64_i_narrow_sentinel: f64 => Long;
    convert_f64_i_wide_sentinel: f64 => LongLong;
    convert_f64_u_narrow_sentinel: f64 => ULong;
    convert_f64_u_wide_sentinel: f64 => ULongLong;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_truncates() {
        assert_eq!(convert_f64_i_wide_sentinel(3.9), 3);
        assert_eq!(convert_f64_i_wide_sentinel(-3.9), -3);
        assert_eq!(convert_f32_u_wide_sentinel(-0.75), 0);
        assert_eq!(convert_f32_i_narrow_sentinel(-123.5), -123);
    }

    #[test]
    fn test_out_of_range_is_sentinel() {
        assert_eq!(convert_f64_i_wide_sentinel(1e30), i64::MIN);
        assert_eq!(convert_f64_i_wide_sentinel(-1e30), i64::MIN);
        assert_eq!(convert_f64_u_wide_sentinel(-1.0), u64::MAX);
        assert_eq!(convert_f64_u_wide_sentinel(18_446_744_073_709_551_616.0), u64::MAX);
        assert_eq!(convert_f32_i_wide_sentinel(9.223_372e18), i64::MIN);
        assert_eq!(convert_f32_u_narrow_sentinel(-2.0), ULong::MAX);
        assert_eq!(convert_f32_i_narrow_sentinel(f32::MAX), Long::MIN);
    }

    #[test]
    fn test_specials_are_sentinel() {
        assert_eq!(convert_f64_u_wide_sentinel(f64::NAN), u64::MAX);
        assert_eq!(convert_f64_i_narrow_sentinel(f64::NAN), Long::MIN);
        assert_eq!(convert_f32_i_wide_sentinel(f32::INFINITY), i64::MIN);
        assert_eq!(convert_f32_u_narrow_sentinel(f32::NEG_INFINITY), ULong::MAX);
        assert_eq!(convert_f32_u_wide_sentinel(f32::NAN), u64::MAX);
        assert_eq!(convert_f64_u_narrow_sentinel(f64::INFINITY), ULong::MAX);
    }

    #[test]
    fn test_largest_in_range_values() {
        // 2^63 - 1024 is the largest f64 below 2^63
        assert_eq!(convert_f64_i_wide_sentinel(9_223_372_036_854_774_784.0), 9_223_372_036_854_774_784);
        assert_eq!(convert_f64_i_wide_sentinel(9_223_372_036_854_775_808.0), i64::MIN);
        // 2^64 - 2048 is the largest f64 below 2^64
        assert_eq!(convert_f64_u_wide_sentinel(18_446_744_073_709_549_568.0), 18_446_744_073_709_549_568);
    }

    #[test]
    fn test_genuine_sentinel_is_ambiguous() {
        let genuine = convert_f64_i_wide_sentinel(-9_223_372_036_854_775_808.0);
        let failed = convert_f64_i_wide_sentinel(f64::NAN);
        assert_eq!(genuine, i64::MIN);
        assert_eq!(genuine, failed);

        let genuine = convert_f32_i_wide_sentinel(-9.223_372e18);
        assert_eq!(genuine, convert_f32_i_wide_sentinel(f32::INFINITY));
    }
}
