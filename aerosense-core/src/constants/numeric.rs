//! Numeric Kernel Limits
//!
//! Thresholds and scratch-buffer sizes used by the decimal-safe arithmetic
//! kernel ([`crate::decimal`] and [`crate::value`]).

/// Magnitude below which decimal alignment is skipped.
///
/// Below this magnitude the shortest decimal rendering of an `f64` would
/// need a scientific-notation exponent, so there is no bounded fractional
/// digit string to align on. Operands under the limit pass through the
/// kernel uncorrected (exponent 1). Pollutant concentrations are bounded
/// well above this, so the punt is never hit by validated readings.
pub const DECIMAL_ALIGNMENT_LIMIT: f64 = 1e-6;

/// Capacity of the scratch buffer used to render an `f64` in its shortest
/// round-trip decimal form.
///
/// Only non-integral values at or above [`DECIMAL_ALIGNMENT_LIMIT`] are
/// rendered; those never exceed ~25 characters (sign, leading zeros for a
/// 1e-6 magnitude, and 17 significant digits).
pub const DECIMAL_RENDER_CAPACITY: usize = 48;

/// Capacity of the scratch buffer for normalizing numeric text.
///
/// Comma-grouped decimal strings longer than this are treated as
/// non-numeric rather than truncated.
pub const NUMERIC_TEXT_CAPACITY: usize = 48;
