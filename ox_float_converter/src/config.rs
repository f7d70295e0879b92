//! Conversion specs loaded from configuration
//!
//! A spec names one combination by kind names, e.g. in YAML:
//!
//! ```yaml
//! source: f64
//! dest: u_wide
//! policy: sentinel
//! ```
//!
//! `policy` defaults to `saturating` when omitted.

use serde::{Deserialize, Serialize};

use crate::error::ConversionError;
use crate::kind::{ConversionKey, DestKind, IntegerValue, Policy, SourceKind, SourceValue};
use crate::registry::CONVERSION_REGISTRY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionSpec {
    pub source: SourceKind,
    pub dest: DestKind,
    #[serde(default)]
    pub policy: Policy,
}

impl ConversionSpec {
    pub fn new(source: SourceKind, dest: DestKind, policy: Policy) -> Self {
        Self { source, dest, policy }
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConversionError> {
        let spec: ConversionSpec = serde_yaml::from_str(content)?;
        log::debug!("loaded conversion spec {}", spec.key());
        Ok(spec)
    }

    pub fn from_json(content: &str) -> Result<Self, ConversionError> {
        let spec: ConversionSpec = serde_json::from_str(content)?;
        log::debug!("loaded conversion spec {}", spec.key());
        Ok(spec)
    }

    /// Load a list of specs, e.g. one per column of an imported table
    pub fn list_from_yaml(content: &str) -> Result<Vec<Self>, ConversionError> {
        let specs: Vec<ConversionSpec> = serde_yaml::from_str(content)?;
        log::debug!("loaded {} conversion specs", specs.len());
        Ok(specs)
    }

    pub fn to_yaml(&self) -> Result<String, ConversionError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn key(&self) -> ConversionKey {
        ConversionKey::new(self.source, self.dest, self.policy)
    }

    /// Convert `value` as this spec describes, through the global registry.
    ///
    /// Fails with [`ConversionError::SourceMismatch`] if `value` is not of the
    /// spec's source kind, and with [`ConversionError::UncheckedPolicy`] for
    /// the fast policy.
    pub fn apply(&self, value: impl Into<SourceValue>) -> Result<IntegerValue, ConversionError> {
        let value = value.into();
        if value.kind() != self.source {
            log::warn!("{} applied to {} value {}", self.key(), value.kind(), value);
            return Err(ConversionError::SourceMismatch { expected: self.source, found: value.kind() });
        }
        CONVERSION_REGISTRY.convert(value, self.dest, self.policy)
    }
}
