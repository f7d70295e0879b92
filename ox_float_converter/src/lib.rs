//! ox_float_converter - float-to-integer conversions with explicit overflow policies
//!
//! Converts `f32` and `f64` into C `long`, `long long`, `unsigned long` and
//! `unsigned long long` under three policies:
//!
//! - **fast**: unchecked truncation, `unsafe`, undefined outside the range
//! - **saturating**: clamps to the destination range, NaN becomes zero
//! - **sentinel**: NaN and out-of-range values become a reserved value
//!
//! Every combination has a typed entry point (`convert_f64_u_wide_sentinel`
//! and so on). The registry and config layers dispatch on combinations known
//! only at run time.

pub mod config;
pub mod converters;
pub mod error;
pub mod ffi;
pub mod kind;
pub mod registry;

pub use config::ConversionSpec;
pub use converters::*;
pub use error::ConversionError;
pub use kind::{ConversionKey, DestKind, IntegerValue, Long, LongLong, Policy, SourceKind, SourceValue, ULong, ULongLong};
pub use registry::{ConversionRegistry, Converter, CONVERSION_REGISTRY};
