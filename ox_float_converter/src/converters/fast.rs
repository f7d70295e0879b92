//! Unchecked conversions
//!
//! These compile to a bare truncating conversion with no range handling. They
//! are only defined when the input is finite and truncates to a value the
//! destination can hold; check with [`is_representable`](super::is_representable)
//! or convert through a checked policy when that is not already known.
//!
//! Debug builds assert the precondition.

use super::FloatToInteger;
use crate::kind::{Long, LongLong, ULong, ULongLong};

macro_rules! fast_entry_points {
    ($($name:ident: $float:ty => $int:ty;)+) => {$(
        #[doc = concat!("Truncate `", stringify!($float), "` to `", stringify!($int), "` without a range check.")]
        ///
        /// # Safety
        ///
        /// `value` must be finite, and `value` truncated toward zero must be
        /// representable in the destination type.
        #[inline]
        #[must_use]
        pub unsafe fn $name(value: $float) -> $int {
            // SAFETY: forwarded to the caller.
            unsafe { FloatToInteger::<$int>::to_integer_fast(value) }
        }
    )+};
}

fast_entry_points! {
    convert_f32_i_narrow_fast: f32 => Long;
    convert_f32_i_wide_fast: f32 => LongLong;
    convert_f32_u_narrow_fast: f32 => ULong;
    convert_f32_u_wide_fast: f32 => ULongLong;
    convert_f64_i_narrow_fast: f64 => Long;
    convert_f64_i_wide_fast: f64 => LongLong;
    convert_f64_u_narrow_fast: f64 => ULong;
    convert_f64_u_wide_fast: f64 => ULongLong;
}
