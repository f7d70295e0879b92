use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::converters::*;
use crate::error::ConversionError;
use crate::kind::{ConversionKey, DestKind, IntegerValue, Policy, SourceKind, SourceValue};

/// Conversion function for a checked policy. Returns `None` when handed a
/// value of the wrong source kind.
pub type CheckedFn = fn(SourceValue) -> Option<IntegerValue>;

/// Conversion function for the fast policy. Same contract as [`CheckedFn`],
/// plus the precondition of the typed fast entry points.
pub type UncheckedFn = unsafe fn(SourceValue) -> Option<IntegerValue>;

/// A registered conversion
#[derive(Debug, Clone, Copy)]
pub enum Converter {
    Checked(CheckedFn),
    Unchecked(UncheckedFn),
}

/// Registry mapping every (source, destination, policy) combination to its
/// conversion, for callers that only learn the combination at run time
pub struct ConversionRegistry {
    conversions: HashMap<ConversionKey, Converter>,
}

lazy_static! {
    /// The global conversion registry
    pub static ref CONVERSION_REGISTRY: ConversionRegistry = ConversionRegistry::new();
}

macro_rules! checked {
    ($source:ident => $dest:ident, $func:path) => {
        Converter::Checked(|value| match value {
            SourceValue::$source(v) => Some(IntegerValue::$dest($func(v))),
            _ => None,
        })
    };
}

macro_rules! unchecked {
    ($source:ident => $dest:ident, $func:path) => {
        Converter::Unchecked(|value| match value {
            // SAFETY: only reachable through an `unsafe` call of the converter.
            SourceValue::$source(v) => Some(IntegerValue::$dest(unsafe { $func(v) })),
            _ => None,
        })
    };
}

impl ConversionRegistry {
    /// Create a registry holding all built-in conversions
    pub fn new() -> Self {
        let mut registry = Self {
            conversions: HashMap::new(),
        };

        registry.register_builtin_conversions();
        log::debug!("registered {} float-to-integer conversions", registry.conversions.len());

        registry
    }

    fn register(&mut self, source: SourceKind, dest: DestKind, policy: Policy, converter: Converter) {
        self.conversions.insert(ConversionKey::new(source, dest, policy), converter);
    }

    /// Get the converter for a specific combination
    pub fn get_converter(&self, key: &ConversionKey) -> Option<&Converter> {
        self.conversions.get(key)
    }

    /// Check if a conversion is available
    pub fn has_conversion(&self, source: SourceKind, dest: DestKind, policy: Policy) -> bool {
        self.conversions.contains_key(&ConversionKey::new(source, dest, policy))
    }

    /// Get all available combinations, sorted
    pub fn available_conversions(&self) -> Vec<ConversionKey> {
        let mut keys: Vec<ConversionKey> = self.conversions.keys().copied().collect();
        keys.sort();
        keys
    }

    /// Convert `value` into `dest` under a checked policy.
    ///
    /// The fast policy is rejected with [`ConversionError::UncheckedPolicy`];
    /// use [`convert_unchecked`](Self::convert_unchecked) for it.
    pub fn convert(&self, value: SourceValue, dest: DestKind, policy: Policy) -> Result<IntegerValue, ConversionError> {
        let key = ConversionKey::new(value.kind(), dest, policy);
        match self.get_converter(&key) {
            Some(&Converter::Checked(convert)) => convert(value).ok_or(ConversionError::NoConverter(key)),
            Some(&Converter::Unchecked(_)) => {
                log::warn!("refusing to dispatch unchecked conversion {}", key);
                Err(ConversionError::UncheckedPolicy(key))
            },
            None => Err(ConversionError::NoConverter(key)),
        }
    }

    /// Convert `value` into `dest` under any policy, including fast.
    ///
    /// # Safety
    ///
    /// When `policy` is [`Policy::Fast`], `value` must be finite and its
    /// truncation representable in `dest`. Other policies carry no
    /// requirement.
    pub unsafe fn convert_unchecked(
        &self,
        value: SourceValue,
        dest: DestKind,
        policy: Policy,
    ) -> Result<IntegerValue, ConversionError> {
        let key = ConversionKey::new(value.kind(), dest, policy);
        let converted = match self.get_converter(&key) {
            Some(&Converter::Checked(convert)) => convert(value),
            // SAFETY: forwarded to the caller.
            Some(&Converter::Unchecked(convert)) => unsafe { convert(value) },
            None => return Err(ConversionError::NoConverter(key)),
        };
        converted.ok_or(ConversionError::NoConverter(key))
    }

    /// Register all built-in conversion functions
    fn register_builtin_conversions(&mut self) {
        use DestKind::*;
        use Policy::*;
        use SourceKind::*;

        // Fast
        self.register(F32, INarrow, Fast, unchecked!(F32 => Long, convert_f32_i_narrow_fast));
        self.register(F32, IWide, Fast, unchecked!(F32 => LongLong, convert_f32_i_wide_fast));
        self.register(F32, UNarrow, Fast, unchecked!(F32 => ULong, convert_f32_u_narrow_fast));
        self.register(F32, UWide, Fast, unchecked!(F32 => ULongLong, convert_f32_u_wide_fast));
        self.register(F64, INarrow, Fast, unchecked!(F64 => Long, convert_f64_i_narrow_fast));
        self.register(F64, IWide, Fast, unchecked!(F64 => LongLong, convert_f64_i_wide_fast));
        self.register(F64, UNarrow, Fast, unchecked!(F64 => ULong, convert_f64_u_narrow_fast));
        self.register(F64, UWide, Fast, unchecked!(F64 => ULongLong, convert_f64_u_wide_fast));

        // Saturating
        self.register(F32, INarrow, Saturating, checked!(F32 => Long, convert_f32_i_narrow_saturating));
        self.register(F32, IWide, Saturating, checked!(F32 => LongLong, convert_f32_i_wide_saturating));
        self.register(F32, UNarrow, Saturating, checked!(F32 => ULong, convert_f32_u_narrow_saturating));
        self.register(F32, UWide, Saturating, checked!(F32 => ULongLong, convert_f32_u_wide_saturating));
        self.register(F64, INarrow, Saturating, checked!(F64 => Long, convert_f64_i_narrow_saturating));
        self.register(F64, IWide, Saturating, checked!(F64 => LongLong, convert_f64_i_wide_saturating));
        self.register(F64, UNarrow, Saturating, checked!(F64 => ULong, convert_f64_u_narrow_saturating));
        self.register(F64, UWide, Saturating, checked!(F64 => ULongLong, convert_f64_u_wide_saturating));

        // Sentinel
        self.register(F32, INarrow, Sentinel, checked!(F32 => Long, convert_f32_i_narrow_sentinel));
        self.register(F32, IWide, Sentinel, checked!(F32 => LongLong, convert_f32_i_wide_sentinel));
        self.register(F32, UNarrow, Sentinel, checked!(F32 => ULong, convert_f32_u_narrow_sentinel));
        self.register(F32, UWide, Sentinel, checked!(F32 => ULongLong, convert_f32_u_wide_sentinel));
        self.register(F64, INarrow, Sentinel, checked!(F64 => Long, convert_f64_i_narrow_sentinel));
        self.register(F64, IWide, Sentinel, checked!(F64 => LongLong, convert_f64_i_wide_sentinel));
        self.register(F64, UNarrow, Sentinel, checked!(F64 => ULong, convert_f64_u_narrow_sentinel));
        self.register(F64, UWide, Sentinel, checked!(F64 => ULongLong, convert_f64_u_wide_sentinel));
    }
}

impl Default for ConversionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
