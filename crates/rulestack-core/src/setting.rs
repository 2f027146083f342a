//! Rule entries: a severity plus an optional, opaque options payload
//!
//! The engine never interprets an options payload. It copies, patches, and
//! moves payloads between blocks; whether a payload matches the shape a rule
//! expects is validated by the consuming analysis tool, not here.

use std::borrow::Cow;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::result::Result;

/// Severity levels for a rule entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Disable the rule
    Off,
    /// Report without failing the run
    Warn,
    /// Report and fail the run
    Error,
}

impl Severity {
    /// The serialized token for this severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "off" => Some(Severity::Off),
            "warn" => Some(Severity::Warn),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }
}

/// One rule entry: a severity, optionally followed by an options payload
///
/// Serializes the way lint configs are written: a bare severity is the token
/// `"off" | "warn" | "error"`, a setting with options is the array
/// `[severity, ...options]`. Equality is structural so a derived setting can
/// be compared against the base it was cloned from.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleSetting {
    /// A bare severity with no options
    Bare(Severity),
    /// A severity plus one or more opaque option values
    WithOptions(Severity, Vec<Value>),
}

impl RuleSetting {
    /// A bare `off` entry
    pub fn off() -> Self {
        RuleSetting::Bare(Severity::Off)
    }

    /// A bare `warn` entry
    pub fn warn() -> Self {
        RuleSetting::Bare(Severity::Warn)
    }

    /// A bare `error` entry
    pub fn error() -> Self {
        RuleSetting::Bare(Severity::Error)
    }

    /// A severity plus options; an empty payload collapses to the bare form
    pub fn with_options(severity: Severity, options: impl IntoIterator<Item = Value>) -> Self {
        let options: Vec<Value> = options.into_iter().collect();
        if options.is_empty() {
            RuleSetting::Bare(severity)
        } else {
            RuleSetting::WithOptions(severity, options)
        }
    }

    /// A `warn` entry with options
    pub fn warn_with(options: impl IntoIterator<Item = Value>) -> Self {
        Self::with_options(Severity::Warn, options)
    }

    /// An `error` entry with options
    pub fn error_with(options: impl IntoIterator<Item = Value>) -> Self {
        Self::with_options(Severity::Error, options)
    }

    /// The severity of this entry
    pub fn severity(&self) -> Severity {
        match self {
            RuleSetting::Bare(severity) => *severity,
            RuleSetting::WithOptions(severity, _) => *severity,
        }
    }

    /// The options payload, if any
    pub fn options(&self) -> Option<&[Value]> {
        match self {
            RuleSetting::Bare(_) => None,
            RuleSetting::WithOptions(_, options) => Some(options),
        }
    }

    /// Whether this entry disables its rule
    pub fn is_off(&self) -> bool {
        self.severity() == Severity::Off
    }

    /// Derive a new setting by transforming the options payload
    ///
    /// The severity is preserved; the transform sees the current payload
    /// (empty slice for a bare setting) and returns the replacement payload.
    /// This is the only severity-preserving payload hook the override
    /// builder uses, so replacements cannot accidentally change severity.
    pub fn map_options<F>(&self, transform: F) -> Result<RuleSetting>
    where
        F: FnOnce(&[Value]) -> Result<Vec<Value>>,
    {
        let options = transform(self.options().unwrap_or(&[]))?;
        Ok(Self::with_options(self.severity(), options))
    }

    /// Derive a new setting by appending option values to the payload
    pub fn with_added_options(&self, extras: impl IntoIterator<Item = Value>) -> RuleSetting {
        let mut options: Vec<Value> = self.options().unwrap_or(&[]).to_vec();
        options.extend(extras);
        Self::with_options(self.severity(), options)
    }

    /// Build a setting from its serialized JSON form
    pub fn from_value(value: &Value) -> std::result::Result<Self, String> {
        match value {
            Value::String(token) => Severity::parse(token)
                .map(RuleSetting::Bare)
                .ok_or_else(|| format!("unknown severity token '{token}'")),
            Value::Array(items) => {
                let Some(Value::String(token)) = items.first() else {
                    return Err("rule setting array must start with a severity token".to_string());
                };
                let severity = Severity::parse(token)
                    .ok_or_else(|| format!("unknown severity token '{token}'"))?;
                Ok(Self::with_options(severity, items[1..].iter().cloned()))
            }
            other => Err(format!(
                "rule setting must be a severity token or an array, got {other}"
            )),
        }
    }

    /// The serialized JSON form of this setting
    pub fn to_value(&self) -> Value {
        match self {
            RuleSetting::Bare(severity) => Value::String(severity.as_str().to_string()),
            RuleSetting::WithOptions(severity, options) => {
                let mut items = Vec::with_capacity(1 + options.len());
                items.push(Value::String(severity.as_str().to_string()));
                items.extend(options.iter().cloned());
                Value::Array(items)
            }
        }
    }
}

impl Serialize for RuleSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            RuleSetting::Bare(severity) => severity.serialize(serializer),
            RuleSetting::WithOptions(severity, options) => {
                let mut seq = serializer.serialize_seq(Some(1 + options.len()))?;
                seq.serialize_element(severity)?;
                for option in options {
                    seq.serialize_element(option)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for RuleSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        RuleSetting::from_value(&value).map_err(serde::de::Error::custom)
    }
}

impl JsonSchema for RuleSetting {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("RuleSetting")
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "anyOf": [
                { "type": "string", "enum": ["off", "warn", "error"] },
                { "type": "array", "minItems": 1 }
            ]
        })
    }
}
