//! Decimal Alignment for Binary Floats
//!
//! ## Overview
//!
//! Binary floating point cannot represent most decimal fractions exactly, so
//! naive arithmetic leaks representation error into results users can see:
//! `0.1 + 0.2` is `0.30000000000000004`, `0.1 * 0.1` is
//! `0.010000000000000002`. For the values this crate handles — decimal
//! literals with a bounded number of fractional digits — the error is
//! avoidable: scale both operands to integers sharing one power-of-ten
//! exponent, combine them with exact integer arithmetic, and rescale.
//!
//! ## Algorithm
//!
//! [`expand`] aligns two operands:
//!
//! 1. If either operand is nonzero with magnitude below
//!    [`DECIMAL_ALIGNMENT_LIMIT`], there is no bounded fractional digit
//!    string to align on; both operands pass through with exponent 1 and the
//!    caller gets ordinary float arithmetic. Validated pollutant readings
//!    never reach this path.
//! 2. Otherwise the shared exponent is `10^c` where `c` is the longer of the
//!    two fractional parts in the operands' shortest round-trip decimal
//!    renderings (`1.23` and `1.234` give `c = 3`, exponent `1000`).
//! 3. Each operand is multiplied by the exponent and truncated toward zero,
//!    which drops the scaling residue binary multiplication leaves behind
//!    (`0.14 * 100` is `14.000000000000002`; truncation recovers `14`).
//!    A scaled product that is no longer finite is passed through
//!    untruncated instead.
//!
//! Callers divide the combined integers back down by the exponent — once for
//! addition and subtraction, twice for multiplication, not at all for
//! division (see [`crate::arith`]).

use core::fmt::Write as _;

use crate::constants::numeric::{DECIMAL_ALIGNMENT_LIMIT, DECIMAL_RENDER_CAPACITY};

/// Two operands scaled to integers sharing one power-of-ten exponent
///
/// For operands with at most 15 significant fractional digits and magnitude
/// at or above [`DECIMAL_ALIGNMENT_LIMIT`], `left / exponent` and
/// `right / exponent` recover the originals exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expanded {
    /// First operand, scaled
    pub left: f64,
    /// Second operand, scaled
    pub right: f64,
    /// Power-of-ten scale factor applied to both operands
    pub exponent: f64,
}

/// Align two operands on a shared decimal exponent
pub fn expand(x: f64, y: f64) -> Expanded {
    if below_alignment_limit(x) || below_alignment_limit(y) {
        // Deliberate precision punt for sub-micro magnitudes.
        return Expanded { left: x, right: y, exponent: 1.0 };
    }

    let digits = fraction_digits(x).max(fraction_digits(y));
    let exponent = libm::pow(10.0, digits as f64);

    Expanded {
        left: scale(x, exponent),
        right: scale(y, exponent),
        exponent,
    }
}

/// Check whether a value is too small in magnitude to align
fn below_alignment_limit(value: f64) -> bool {
    value != 0.0 && libm::fabs(value) < DECIMAL_ALIGNMENT_LIMIT
}

/// Count fractional digits in the shortest round-trip decimal rendering
///
/// Integral and non-finite values have no fractional part. Values reaching
/// the renderer are non-integral with magnitude at or above
/// [`DECIMAL_ALIGNMENT_LIMIT`], so their rendering is bounded and never
/// needs scientific notation.
fn fraction_digits(value: f64) -> u32 {
    if !value.is_finite() || libm::trunc(value) == value {
        return 0;
    }

    let mut rendered: heapless::String<DECIMAL_RENDER_CAPACITY> = heapless::String::new();
    if write!(rendered, "{}", value).is_err() {
        return 0;
    }

    match rendered.find('.') {
        Some(dot) => (rendered.len() - dot - 1) as u32,
        None => 0,
    }
}

/// Scale a value by the shared exponent, truncating toward zero
///
/// Truncation is an explicit checked step: a scaled product that overflowed
/// to infinity (or was NaN to begin with) is returned as-is instead.
fn scale(value: f64, exponent: f64) -> f64 {
    let scaled = value * exponent;
    let truncated = libm::trunc(scaled);

    if truncated.is_finite() {
        truncated
    } else {
        scaled
    }
}
