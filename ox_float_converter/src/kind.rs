use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// C `long`. 32 bits on Windows and 32-bit targets, 64 bits on LP64 targets.
pub type Long = std::ffi::c_long;
/// C `long long`, always 64 bits.
pub type LongLong = std::ffi::c_longlong;
/// C `unsigned long`, same width as [`Long`].
pub type ULong = std::ffi::c_ulong;
/// C `unsigned long long`, always 64 bits.
pub type ULongLong = std::ffi::c_ulonglong;

/// Floating-point format of a conversion source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// IEEE-754 binary32 (`float`)
    F32,
    /// IEEE-754 binary64 (`double`)
    F64,
}

impl SourceKind {
    pub const ALL: [SourceKind; 2] = [SourceKind::F32, SourceKind::F64];

    /// Get the kind name as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::F32 => "f32",
            SourceKind::F64 => "f64",
        }
    }
}

/// Integer representation a conversion produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestKind {
    /// Signed, register-width `long`
    INarrow,
    /// Signed 64-bit `long long`
    IWide,
    /// Unsigned, register-width `unsigned long`
    UNarrow,
    /// Unsigned 64-bit `unsigned long long`
    UWide,
}

impl DestKind {
    pub const ALL: [DestKind; 4] = [DestKind::INarrow, DestKind::IWide, DestKind::UNarrow, DestKind::UWide];

    /// Get the kind name as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            DestKind::INarrow => "i_narrow",
            DestKind::IWide => "i_wide",
            DestKind::UNarrow => "u_narrow",
            DestKind::UWide => "u_wide",
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, DestKind::INarrow | DestKind::IWide)
    }

    /// Width of the destination in bits for the current target
    pub fn bits(&self) -> u32 {
        match self {
            DestKind::INarrow => Long::BITS,
            DestKind::IWide => LongLong::BITS,
            DestKind::UNarrow => ULong::BITS,
            DestKind::UWide => ULongLong::BITS,
        }
    }

    pub fn min_value(&self) -> IntegerValue {
        match self {
            DestKind::INarrow => IntegerValue::Long(Long::MIN),
            DestKind::IWide => IntegerValue::LongLong(LongLong::MIN),
            DestKind::UNarrow => IntegerValue::ULong(ULong::MIN),
            DestKind::UWide => IntegerValue::ULongLong(ULongLong::MIN),
        }
    }

    pub fn max_value(&self) -> IntegerValue {
        match self {
            DestKind::INarrow => IntegerValue::Long(Long::MAX),
            DestKind::IWide => IntegerValue::LongLong(LongLong::MAX),
            DestKind::UNarrow => IntegerValue::ULong(ULong::MAX),
            DestKind::UWide => IntegerValue::ULongLong(ULongLong::MAX),
        }
    }

    /// The value the sentinel policy reserves to signal an invalid conversion:
    /// the minimum for signed kinds, the maximum for unsigned kinds.
    pub fn sentinel(&self) -> IntegerValue {
        if self.is_signed() {
            self.min_value()
        } else {
            self.max_value()
        }
    }
}

/// Out-of-range behavior of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Unchecked truncation; out-of-range input is undefined behavior
    Fast,
    /// Clamp to the destination range, NaN maps to zero
    #[default]
    Saturating,
    /// Out-of-range input and NaN map to the destination's sentinel
    Sentinel,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::Fast, Policy::Saturating, Policy::Sentinel];

    /// Get the policy name as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Fast => "fast",
            Policy::Saturating => "saturating",
            Policy::Sentinel => "sentinel",
        }
    }

    /// Whether conversions under this policy are defined for every input
    pub fn is_checked(&self) -> bool {
        !matches!(self, Policy::Fast)
    }
}

impl FromStr for SourceKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f32" | "float" | "binary32" => Ok(SourceKind::F32),
            "f64" | "double" | "binary64" => Ok(SourceKind::F64),
            _ => Err(ConversionError::UnknownName { what: "source kind", name: s.to_string() }),
        }
    }
}

impl FromStr for DestKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i_narrow" | "long" => Ok(DestKind::INarrow),
            "i_wide" | "long long" | "long_long" => Ok(DestKind::IWide),
            "u_narrow" | "unsigned long" | "unsigned_long" => Ok(DestKind::UNarrow),
            "u_wide" | "unsigned long long" | "unsigned_long_long" => Ok(DestKind::UWide),
            _ => Err(ConversionError::UnknownName { what: "destination kind", name: s.to_string() }),
        }
    }
}

impl FromStr for Policy {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" => Ok(Policy::Fast),
            "saturating" | "sat" => Ok(Policy::Saturating),
            "sentinel" | "sent" => Ok(Policy::Sentinel),
            _ => Err(ConversionError::UnknownName { what: "policy", name: s.to_string() }),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A floating-point input tagged with its format
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceValue {
    F32(f32),
    F64(f64),
}

impl SourceValue {
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceValue::F32(_) => SourceKind::F32,
            SourceValue::F64(_) => SourceKind::F64,
        }
    }

    /// The value widened to `f64`. Widening is exact for every `f32`.
    pub fn to_f64(&self) -> f64 {
        match *self {
            SourceValue::F32(v) => f64::from(v),
            SourceValue::F64(v) => v,
        }
    }
}

impl From<f32> for SourceValue {
    fn from(value: f32) -> Self {
        SourceValue::F32(value)
    }
}

impl From<f64> for SourceValue {
    fn from(value: f64) -> Self {
        SourceValue::F64(value)
    }
}

impl fmt::Display for SourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceValue::F32(v) => write!(f, "{}f32", v),
            SourceValue::F64(v) => write!(f, "{}f64", v),
        }
    }
}

/// A conversion result tagged with its destination kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerValue {
    Long(Long),
    LongLong(LongLong),
    ULong(ULong),
    ULongLong(ULongLong),
}

impl IntegerValue {
    pub fn kind(&self) -> DestKind {
        match self {
            IntegerValue::Long(_) => DestKind::INarrow,
            IntegerValue::LongLong(_) => DestKind::IWide,
            IntegerValue::ULong(_) => DestKind::UNarrow,
            IntegerValue::ULongLong(_) => DestKind::UWide,
        }
    }

    /// The value as an `i128`, which holds every destination kind losslessly
    pub fn to_i128(&self) -> i128 {
        match *self {
            IntegerValue::Long(v) => i128::from(v),
            IntegerValue::LongLong(v) => i128::from(v),
            IntegerValue::ULong(v) => i128::from(v),
            IntegerValue::ULongLong(v) => i128::from(v),
        }
    }

    /// Whether this value equals its kind's sentinel. A genuine conversion
    /// result can also be equal to the sentinel.
    pub fn is_sentinel(&self) -> bool {
        *self == self.kind().sentinel()
    }
}

impl fmt::Display for IntegerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i128())
    }
}

/// Identifies one (source, destination, policy) combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConversionKey {
    pub source: SourceKind,
    pub dest: DestKind,
    pub policy: Policy,
}

impl ConversionKey {
    pub fn new(source: SourceKind, dest: DestKind, policy: Policy) -> Self {
        Self { source, dest, policy }
    }

    /// Every combination, in sorted order
    pub fn all() -> impl Iterator<Item = ConversionKey> {
        SourceKind::ALL.into_iter().flat_map(|source| {
            DestKind::ALL.into_iter().flat_map(move |dest| {
                Policy::ALL.into_iter().map(move |policy| ConversionKey::new(source, dest, policy))
            })
        })
    }

    /// Name of the typed entry point implementing this combination,
    /// e.g. `convert_f64_u_wide_sentinel`
    pub fn symbol_name(&self) -> String {
        format!("convert_{}_{}_{}", self.source, self.dest, self.policy)
    }
}

impl fmt::Display for ConversionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.dest, self.policy)
    }
}
