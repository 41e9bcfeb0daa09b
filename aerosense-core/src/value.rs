//! Functionally Numeric Values
//!
//! ## Overview
//!
//! Sensor payloads arrive from sources that are sloppy about types: a
//! concentration may show up as a float, an integer, a comma-grouped string
//! (`"1,004.5"`), a boolean flag, or a one-element wrapper around any of
//! those. This module defines the closed set of shapes the arithmetic layer
//! accepts and a single total coercion to `f64`.
//!
//! ## Design
//!
//! Coercion never fails loudly. [`Value::coerce`] returns `Option<f64>` and
//! the arithmetic folds in [`crate::arith`] drop `None` entries silently;
//! a malformed value in a sequence must never poison the rest of the fold.
//! That makes "which entries were dropped" directly auditable in tests:
//! a value is used iff `is_numeric` holds.
//!
//! Rejected outright: NaN, infinities, the empty string, and the literal
//! strings `"NaN"`, `"null"`, and `"undefined"` that untyped producers emit
//! for missing data.

use crate::constants::numeric::NUMERIC_TEXT_CAPACITY;

/// A value that may be usable as a number after coercion
///
/// An explicit sum type over everything the ingestion layer treats as
/// "functionally numeric". The `One` variant unwraps a single-element
/// container to its sole element before the other rules apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// A native integer
    Int(i64),
    /// A native float
    Float(f64),
    /// A boolean; coerces to 1 or 0
    Bool(bool),
    /// Numeric text, possibly comma-grouped and whitespace-padded
    Text(&'a str),
    /// A one-element container, unwrapped before coercion
    One(&'a Value<'a>),
}

impl Value<'_> {
    /// Extract the numeric form of this value, if it has one
    ///
    /// Total and silent: invalid inputs yield `None`, never an error.
    pub fn coerce(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => f.is_finite().then_some(*f),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Text(s) => parse_numeric_text(s),
            Value::One(inner) => inner.coerce(),
        }
    }

    /// Check whether this value is usable as a number
    pub fn is_numeric(&self) -> bool {
        self.coerce().is_some()
    }
}

/// Parse numeric text after stripping comma grouping and padding
///
/// Text that does not fit the scratch buffer is treated as non-numeric
/// rather than truncated.
fn parse_numeric_text(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut cleaned: heapless::String<NUMERIC_TEXT_CAPACITY> = heapless::String::new();
    for c in trimmed.chars() {
        if c == ',' {
            continue;
        }
        cleaned.push(c).ok()?;
    }

    // "NaN" and "inf" parse successfully; the finiteness check drops them
    // along with everything that fails to parse ("null", "undefined", ...).
    let parsed: f64 = cleaned.parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<i64> for Value<'_> {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value<'_> {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u32> for Value<'_> {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::Text(v)
    }
}
