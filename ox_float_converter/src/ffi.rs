//! C ABI exports.
//!
//! One `extern "C"` symbol per combination, named after the MSVC `_cvt_*`
//! intrinsics they stand in for: `c_cvt_<src>to<dst>_<policy>` with `<src>`
//! `f` (float) or `d` (double), `<dst>` `i` (long), `ll` (long long), `ui`
//! (unsigned long) or `ull` (unsigned long long), and `<policy>` `fast`,
//! `sat` or `sent`.

use crate::converters::*;
use crate::kind::{Long, LongLong, ULong, ULongLong};

macro_rules! export_checked {
    ($($symbol:ident: $float:ty => $int:ty = $func:ident;)+) => {$(
        #[no_mangle]
        pub extern "C" fn $symbol(value: $float) -> $int {
            $func(value)
        }
    )+};
}

macro_rules! export_fast {
    ($($symbol:ident: $float:ty => $int:ty = $func:ident;)+) => {$(
        /// # Safety
        ///
        /// `value` must be finite and its truncation must fit the return type.
        #[no_mangle]
        pub unsafe extern "C" fn $symbol(value: $float) -> $int {
            // SAFETY: forwarded to the caller.
            unsafe { $func(value) }
        }
    )+};
}

export_fast! {
    c_cvt_ftoi_fast: f32 => Long = convert_f32_i_narrow_fast;
    c_cvt_ftoll_fast: f32 => LongLong = convert_f32_i_wide_fast;
    c_cvt_ftoui_fast: f32 => ULong = convert_f32_u_narrow_fast;
    c_cvt_ftoull_fast: f32 => ULongLong = convert_f32_u_wide_fast;
    c_cvt_dtoi_fast: f64 => Long = convert_f64_i_narrow_fast;
    c_cvt_dtoll_fast: f64 => LongLong = convert_f64_i_wide_fast;
    c_cvt_dtoui_fast: f64 => ULong = convert_f64_u_narrow_fast;
    c_cvt_dtoull_fast: f64 => ULongLong = convert_f64_u_wide_fast;
}

export_checked! {
    c_cvt_ftoi_sat: f32 => Long = convert_f32_i_narrow_saturating;
    c_cvt_ftoll_sat: f32 => LongLong = convert_f32_i_wide_saturating;
    c_cvt_ftoui_sat: f32 => ULong = convert_f32_u_narrow_saturating;
    c_cvt_ftoull_sat: f32 => ULongLong = convert_f32_u_wide_saturating;
    c_cvt_dtoi_sat: f64 => Long = convert_f64_i_narrow_saturating;
    c_cvt_dtoll_sat: f64 => LongLong = convert_f64_i_wide_saturating;
    c_cvt_dtoui_sat: f64 => ULong = convert_f64_u_narrow_saturating;
    c_cvt_dtoull_sat: f64 => ULongLong = convert_f64_u_wide_saturating;
}

export_checked! {
    c_cvt_ftoi_sent: f32 => Long = convert_f32_i_narrow_sentinel;
    c_cvt_ftoll_sent: f32 => LongLong = convert_f32_i_wide_sentinel;
    c_cvt_ftoui_sent: f32 => ULong = convert_f32_u_narrow_sentinel;
    c_cvt_ftoull_sent: f32 => ULongLong = convert_f32_u_wide_sentinel;
    c_cvt_dtoi_sent: f64 => Long = convert_f64_i_narrow_sentinel;
    c_cvt_dtoll_sent: f64 => LongLong = convert_f64_i_wide_sentinel;
    c_cvt_dtoui_sent: f64 => ULong = convert_f64_u_narrow_sentinel;
    c_cvt_dtoull_sent: f64 => ULongLong = convert_f64_u_wide_sentinel;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exports_match_typed_entry_points() {
        assert_eq!(c_cvt_dtoll_sat(1e30), i64::MAX);
        assert_eq!(c_cvt_ftoull_sat(-1.0), 0);
        assert_eq!(c_cvt_dtoull_sent(f64::NAN), u64::MAX);
        assert_eq!(c_cvt_ftoi_sent(f32::NAN), Long::MIN);
        assert_eq!(c_cvt_dtoui_sent(-1.0), ULong::MAX);
        assert_eq!(unsafe { c_cvt_ftoi_fast(-12.7) }, -12);
        assert_eq!(unsafe { c_cvt_dtoull_fast(12.7) }, 12);
    }

    #[test]
    fn test_exports_are_c_function_pointers() {
        let sat: extern "C" fn(f64) -> LongLong = c_cvt_dtoll_sat;
        let fast: unsafe extern "C" fn(f32) -> ULong = c_cvt_ftoui_fast;
        assert_eq!(sat(-2.5), -2);
        assert_eq!(unsafe { fast(2.5) }, 2);
    }
}
