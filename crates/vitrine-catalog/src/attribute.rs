//! Typed attribute values.
//!
//! Attribute values carry their own type metadata because the index token
//! for a value depends on it: date and date-time attributes are analyzed as
//! dates, decimal attributes as decimals, and everything else through its
//! plain string representation. Multi-valued attributes become collection
//! fields.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vitrine_core::LocaleTag;

/// The declared type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    ShortText,
    LongText,
    Integer,
    Decimal,
    Boolean,
    Date,
    DateTime,
}

/// Attribute metadata shared by all of its values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Stable attribute key, embedded into attribute field names.
    pub key: String,
    /// Declared value type, drives index token analysis.
    pub kind: AttributeKind,
    /// Whether values are locale-dependent.
    pub localized: bool,
    /// Whether the attribute holds multiple short-text values.
    pub multi_valued: bool,
}

/// A single attribute payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeData {
    /// Plain string representation (short text, long text, integer, boolean).
    Text(String),
    /// Decimal value.
    Decimal(Decimal),
    /// Date or date-time value.
    Date(DateTime<Utc>),
    /// Multiple short-text values.
    Multi(Vec<String>),
}

/// An attribute together with its (possibly absent) payload.
///
/// A value can legitimately be absent: the attribute is defined for the
/// entity's type but was never filled in. Absent values produce no index
/// field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValue {
    /// The owning attribute's metadata.
    pub attribute: Attribute,
    /// The payload, if one was supplied.
    pub data: Option<AttributeData>,
}

/// An attribute value bound to the locale it was entered for.
///
/// Non-localized attributes bind with `locale == None` and apply to every
/// locale the document is expanded across.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeBinding {
    /// The locale the value belongs to; `None` for locale-independent values.
    pub locale: Option<LocaleTag>,
    /// The value itself.
    pub value: AttributeValue,
}

impl AttributeBinding {
    /// Whether this binding applies when expanding the given locale.
    pub fn applies_to(&self, locale: &LocaleTag) -> bool {
        match &self.locale {
            None => true,
            Some(bound) => bound == locale,
        }
    }
}
