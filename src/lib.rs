pub use ox_float_converter::{
    ConversionError, ConversionKey, ConversionRegistry, ConversionSpec, DestKind, IntegerValue, Policy, SourceKind,
    SourceValue, CONVERSION_REGISTRY,
};
pub use ox_float_converter::{fast, saturating, sentinel};
pub use ox_float_converter::{Long, LongLong, ULong, ULongLong};
