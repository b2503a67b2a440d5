//! Tag values and the tag-record wire shape.
//!
//! A tag is a named point with a value, packed quality flags, and a
//! description. When transmitted, each tag becomes a [`TagRecord`] whose
//! field names and nesting are fixed by the remote component; changing them
//! breaks rendering silently, so the serde renames below are load-bearing.

use serde::{Deserialize, Serialize};

/// A tag's current value.
///
/// Untagged on the wire: the JSON value itself carries the kind. `Bool` is
/// listed first so that JSON booleans never fall through to the numeric arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    /// Boolean state (breaker position, alarm contact, ...).
    Bool(bool),
    /// Numeric measurement.
    Float(f64),
    /// Free-form text.
    Text(String),
}

impl TagValue {
    /// The wire `type` discriminator inferred from the value's kind.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Float(_) => ValueKind::Float,
            Self::Bool(_) => ValueKind::Bool,
            Self::Text(_) => ValueKind::String,
        }
    }
}

impl From<f64> for TagValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for TagValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<i32> for TagValue {
    fn from(value: i32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<u32> for TagValue {
    fn from(value: u32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<bool> for TagValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Runtime kind of a tag value, as named on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Numeric value, transmitted as `"float"`.
    Float,
    /// Boolean value, transmitted as `"bool"`.
    Bool,
    /// Text value, transmitted as `"string"`.
    String,
}

/// One tag as it appears inside a `tags` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRecord {
    /// Tag name.
    pub path: String,
    /// Current value.
    pub value: TagValue,
    /// Transmitted quality: `true` when the internal failed bit is clear.
    pub quality: bool,
    /// Value kind discriminator.
    #[serde(rename = "type")]
    pub kind: ValueKind,
    /// Per-tag parameter block.
    pub parameters: TagParameters,
}

/// Parameter block nested under each record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagParameters {
    /// The single `Value` parameter group.
    #[serde(rename = "Value")]
    pub value: TagItem,
}

/// The `Value` parameter group carrying client-side identity and state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagItem {
    /// Session-stable numeric identifier assigned at first reference.
    #[serde(rename = "TagClientItem")]
    pub client_id: u32,
    /// Whether the alarm bit is set.
    #[serde(rename = "Alarmed")]
    pub alarmed: bool,
    /// Human-readable description; defaults to the tag name.
    #[serde(rename = "Desc")]
    pub description: String,
}
