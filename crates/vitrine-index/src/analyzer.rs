//! Value-to-token analysis.
//!
//! The index schema predeclares how dynamic fields are tokenized, so the
//! engine normalizes every typed value into the token form the schema
//! expects before writing it: trimmed strings, UTC second-resolution date
//! tokens, and plain-notation decimals.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;

/// Normalizes typed values into index tokens.
///
/// [`TokenAnalyzer`] is the stock implementation; hosts with custom index
/// schemas can substitute their own.
pub trait ValueAnalyzer: Send + Sync {
    /// Normalizes a string value (trims surrounding whitespace).
    fn analyze_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    /// Normalizes a date value into a `YYYY-MM-DDThh:mm:ssZ` token.
    fn analyze_date(&self, value: DateTime<Utc>) -> String;

    /// Normalizes a decimal into plain (non-scientific) notation,
    /// preserving its scale.
    fn analyze_decimal(&self, value: Decimal) -> String;

    /// Normalizes an integer value.
    fn analyze_integer(&self, value: i64) -> String {
        value.to_string()
    }
}

/// The stock analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenAnalyzer;

impl ValueAnalyzer for TokenAnalyzer {
    fn analyze_date(&self, value: DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    fn analyze_decimal(&self, value: Decimal) -> String {
        value.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
