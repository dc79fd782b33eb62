//! The emitted document and its field-write discipline.
//!
//! An [`IndexDocument`] maps field names to one or more string values. The
//! writer methods enforce the engine-wide invariant that a field is never
//! written with an empty value: omission is the optimization, not a
//! sentinel. Callers therefore never pre-check values; they hand whatever
//! they have to the document and let the write silently skip.
//!
//! Fields are kept in an ordered map so that building the same snapshot
//! twice yields field-for-field identical documents, including multi-value
//! ordering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vitrine_core::Result;

/// A search-index document: field name → values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDocument {
    fields: BTreeMap<String, Vec<String>>,
}

impl IndexDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a single-valued field, replacing any prior value.
    ///
    /// Skips the write (returning `false`) when the value is empty.
    pub fn set_field<N, V>(&mut self, name: N, value: V) -> bool
    where
        N: Into<String>,
        V: Into<String>,
    {
        let value = value.into();
        if value.is_empty() {
            return false;
        }
        self.fields.insert(name.into(), vec![value]);
        true
    }

    /// Appends values to a multi-valued field.
    ///
    /// Empty values are dropped; duplicates among the remaining values are
    /// preserved exactly as supplied. Skips the write (returning `false`)
    /// when nothing non-empty remains.
    pub fn add_field_values<N, I, V>(&mut self, name: N, values: I) -> bool
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values: Vec<String> = values
            .into_iter()
            .map(Into::into)
            .filter(|value| !value.is_empty())
            .collect();
        if values.is_empty() {
            return false;
        }
        self.fields.entry(name.into()).or_default().extend(values);
        true
    }

    /// Merges a value into a single-valued sort field.
    ///
    /// If the field already has a value the new value is concatenated in
    /// front of it, keeping the field single-valued. Several sources feeding
    /// the same sort field thus produce one consolidated token, which is
    /// what a cross-locale sort needs. Skips the write when the value is
    /// empty.
    pub fn merge_sort_field<N, V>(&mut self, name: N, value: V) -> bool
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let mut value = value.into();
        if value.is_empty() {
            return false;
        }
        if let Some(existing) = self.fields.get(&name) {
            for prior in existing {
                value.push_str(prior);
            }
        }
        self.fields.insert(name, vec![value]);
        true
    }

    /// Returns the values of a field, if present.
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    /// Returns the first value of a field, if present.
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Whether the document carries the given field.
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterates field names in stable order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields in the document.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders the document as a JSON object for the downstream sink.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.fields)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
