use thiserror::Error;

use crate::kind::{ConversionKey, SourceKind};

/// Errors raised by the dynamic dispatch and configuration layers.
///
/// The typed `convert_*` entry points never fail; saturating and sentinel
/// conversions are total, and fast conversions put the burden on the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("{0} is unchecked and can only be dispatched through convert_unchecked")]
    UncheckedPolicy(ConversionKey),

    #[error("no converter registered for {0}")]
    NoConverter(ConversionKey),

    #[error("expected a {expected} source value, got {found}")]
    SourceMismatch { expected: SourceKind, found: SourceKind },

    #[error("unknown {what} '{name}'")]
    UnknownName { what: &'static str, name: String },

    #[error("invalid conversion spec: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for ConversionError {
    fn from(e: serde_yaml::Error) -> Self {
        ConversionError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for ConversionError {
    fn from(e: serde_json::Error) -> Self {
        ConversionError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{DestKind, Policy};

    #[test]
    fn test_error_messages() {
        let key = ConversionKey::new(SourceKind::F32, DestKind::IWide, Policy::Fast);
        assert_eq!(
            ConversionError::UncheckedPolicy(key).to_string(),
            "f32 -> i_wide (fast) is unchecked and can only be dispatched through convert_unchecked"
        );
        assert_eq!(
            ConversionError::SourceMismatch { expected: SourceKind::F64, found: SourceKind::F32 }.to_string(),
            "expected a f64 source value, got f32"
        );
    }
}
