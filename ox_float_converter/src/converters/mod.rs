//! Float-to-integer conversion functions
//!
//! Every combination of source float, destination integer and policy is
//! implemented once through [`FloatToInteger`] and exposed as a named entry
//! point in the policy modules.

pub mod fast;
pub mod saturating;
pub mod sentinel;

pub use fast::*;
pub use saturating::*;
pub use sentinel::*;

/// Range information for a destination integer type.
///
/// The bounds are expressed in `f64`, where they are exact for every
/// supported width. `f32` sources are widened before comparison, which is
/// also exact.
pub trait IntegerBounds: Copy + Eq + std::fmt::Debug {
    /// Smallest truncated value that fits
    const LOWER: f64;
    /// Smallest truncated value that no longer fits
    const UPPER: f64;
    /// Value reserved by the sentinel policy
    const SENTINEL: Self;
}

macro_rules! impl_signed_bounds {
    ($($int:ty),+) => {$(
        impl IntegerBounds for $int {
            const LOWER: f64 = <$int>::MIN as f64;
            const UPPER: f64 = -(<$int>::MIN as f64);
            const SENTINEL: Self = <$int>::MIN;
        }
    )+};
}

macro_rules! impl_unsigned_bounds {
    ($($int:ty),+) => {$(
        impl IntegerBounds for $int {
            const LOWER: f64 = 0.0;
            const UPPER: f64 = (1u64 << (<$int>::BITS - 1)) as f64 * 2.0;
            const SENTINEL: Self = <$int>::MAX;
        }
    )+};
}

impl_signed_bounds!(i32, i64);
impl_unsigned_bounds!(u32, u64);

/// Whether `value` truncated toward zero is representable as `I`.
///
/// This is exactly the precondition of the fast conversions. NaN and
/// infinities are never representable.
#[inline]
pub fn is_representable<I: IntegerBounds>(value: impl Into<f64>) -> bool {
    let truncated = value.into().trunc();
    truncated >= I::LOWER && truncated < I::UPPER
}

/// Conversion of a float into the integer type `I` under each policy
pub trait FloatToInteger<I: IntegerBounds>: Copy {
    /// Truncate without any range check.
    ///
    /// # Safety
    ///
    /// `self` must be finite and its truncation must be representable in `I`
    /// (see [`is_representable`]). Any other input is undefined behavior.
    unsafe fn to_integer_fast(self) -> I;

    /// Truncate, clamping out-of-range values to `I::MIN`/`I::MAX` and NaN to zero
    fn to_integer_saturating(self) -> I;

    /// Truncate, mapping out-of-range values and NaN to `I::SENTINEL`
    fn to_integer_sentinel(self) -> I;
}

macro_rules! impl_float_to_integer {
    ($float:ty => $($int:ty),+) => {$(
        impl FloatToInteger<$int> for $float {
            #[inline]
            unsafe fn to_integer_fast(self) -> $int {
                debug_assert!(
                    is_representable::<$int>(self),
                    "{} does not fit in {}", self, stringify!($int)
                );
                // SAFETY: the caller guarantees the value is finite and fits.
                unsafe { self.to_int_unchecked::<$int>() }
            }

            #[inline]
            fn to_integer_saturating(self) -> $int {
                // `as` truncates toward zero, saturates at the bounds and maps NaN to 0
                self as $int
            }

            #[inline]
            fn to_integer_sentinel(self) -> $int {
                if is_representable::<$int>(self) {
                    self as $int
                } else {
                    <$int as IntegerBounds>::SENTINEL
                }
            }
        }
    )+};
}

impl_float_to_integer!(f32 => i32, i64, u32, u64);
impl_float_to_integer!(f64 => i32, i64, u32, u64);
