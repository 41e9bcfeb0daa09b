//! Decimal-Safe Arithmetic
//!
//! ## Overview
//!
//! The four operations, each built on [`crate::decimal::expand`]. Pairwise
//! kernels (`add_pair` and friends) take already-coerced floats and are what
//! the aggregation engine folds with; the sequence forms (`add` and friends)
//! take an ordered slice of [`Value`]s, drop entries that fail coercion, and
//! fold the survivors in order.
//!
//! ## Rescaling
//!
//! Each operation descale differently because the operands were both
//! multiplied by the shared exponent:
//!
//! - addition and subtraction rescale once: `(left ± right) / exponent`
//! - multiplication rescales twice: `(left * right) / exponent²`
//! - division needs no rescale at all — numerator and denominator carry the
//!   same factor, which cancels
//!
//! ## Empty folds
//!
//! `add` of nothing is 0 and `mul` of nothing is 1 (the fold identities).
//! `sub` and `div` have no identity: their first surviving value seeds the
//! accumulator, so a sequence with no numeric entries yields `None` and the
//! caller decides what that means.
//!
//! ## Examples
//!
//! ```
//! use aerosense_core::arith;
//! use aerosense_core::Value;
//!
//! assert_eq!(arith::add_pair(0.1, 0.2), 0.3);
//! assert_eq!(arith::mul_pair(0.1, 0.1), 0.01);
//!
//! // Non-numeric entries are dropped, never an error.
//! let total = arith::add(&[
//!     Value::Float(0.1),
//!     Value::Text("NaN"),
//!     Value::Text("0.2"),
//! ]);
//! assert_eq!(total, 0.3);
//! ```

use crate::decimal::{expand, Expanded};
use crate::value::Value;

/// Add two numbers without binary rounding artifacts
pub fn add_pair(x: f64, y: f64) -> f64 {
    let Expanded { left, right, exponent } = expand(x, y);
    (left + right) / exponent
}

/// Subtract `y` from `x` without binary rounding artifacts
pub fn sub_pair(x: f64, y: f64) -> f64 {
    let Expanded { left, right, exponent } = expand(x, y);
    (left - right) / exponent
}

/// Multiply two numbers without binary rounding artifacts
pub fn mul_pair(x: f64, y: f64) -> f64 {
    let Expanded { left, right, exponent } = expand(x, y);
    (left * right) / (exponent * exponent)
}

/// Divide `x` by `y`
///
/// The shared exponent cancels between numerator and denominator, so
/// division is alignment-invariant by construction.
pub fn div_pair(x: f64, y: f64) -> f64 {
    let Expanded { left, right, .. } = expand(x, y);
    left / right
}

/// Sum a sequence, ignoring non-numeric entries
pub fn add(values: &[Value<'_>]) -> f64 {
    numeric(values).fold(0.0, add_pair)
}

/// Subtract remaining entries from the first numeric one, in order
///
/// `None` when no entry survives coercion.
pub fn sub(values: &[Value<'_>]) -> Option<f64> {
    let mut numbers = numeric(values);
    let first = numbers.next()?;
    Some(numbers.fold(first, sub_pair))
}

/// Multiply a sequence, ignoring non-numeric entries
pub fn mul(values: &[Value<'_>]) -> f64 {
    numeric(values).fold(1.0, mul_pair)
}

/// Divide the first numeric entry by the remaining ones, in order
///
/// `None` when no entry survives coercion.
pub fn div(values: &[Value<'_>]) -> Option<f64> {
    let mut numbers = numeric(values);
    let first = numbers.next()?;
    Some(numbers.fold(first, div_pair))
}

/// Coerced view of a sequence with non-numeric entries dropped
fn numeric<'a>(values: &'a [Value<'_>]) -> impl Iterator<Item = f64> + 'a {
    values.iter().filter_map(Value::coerce)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn addition_avoids_binary_artifacts() {
        assert_eq!(add_pair(0.1, 0.2), 0.3);
        assert_eq!(add(&[0.1.into(), 0.2.into()]), 0.3);
        assert_eq!(add(&[1.1.into(), 2.2.into(), 3.3.into()]), 6.6);
    }

    #[test]
    fn multiplication_avoids_binary_artifacts() {
        assert_eq!(mul_pair(0.1, 0.1), 0.01);
        assert_eq!(mul(&[0.1.into(), 0.1.into()]), 0.01);
        assert_eq!(mul_pair(0.14, 100.0), 14.0);
    }

    #[test]
    fn subtraction_folds_from_first_value() {
        assert_eq!(sub(&[1.0.into(), 0.9.into()]), Some(0.1));
        assert_eq!(sub(&[10.0.into(), 0.1.into(), 0.2.into()]), Some(9.7));
    }

    #[test]
    fn division_folds_from_first_value() {
        assert_eq!(div(&[0.3.into(), 3i64.into()]), Some(0.1));
        assert_eq!(div(&[100.0.into(), 10.0.into(), 5.0.into()]), Some(2.0));
    }

    #[test]
    fn non_numeric_entries_are_dropped() {
        let values = [
            Value::Text("NaN"),
            Value::Float(0.1),
            Value::Text(""),
            Value::Text("null"),
            Value::Float(f64::NAN),
            Value::Float(0.2),
            Value::Text("undefined"),
        ];
        assert_eq!(add(&values), 0.3);
        assert_eq!(mul(&values), 0.02);
    }

    #[test]
    fn mixed_shapes_participate() {
        let four = Value::Text("4");
        let values = [
            Value::Text("1,000"),
            Value::Bool(true),
            Value::One(&four),
        ];
        assert_eq!(add(&values), 1005.0);
    }

    #[test]
    fn empty_folds_use_identities() {
        assert_eq!(add(&[]), 0.0);
        assert_eq!(mul(&[]), 1.0);
        assert_eq!(sub(&[]), None);
        assert_eq!(div(&[]), None);

        let junk = [Value::Text("NaN"), Value::Text("")];
        assert_eq!(add(&junk), 0.0);
        assert_eq!(sub(&junk), None);
        assert_eq!(div(&junk), None);
    }

    #[test]
    fn single_value_seeds_sub_and_div() {
        assert_eq!(sub(&[2.5.into()]), Some(2.5));
        assert_eq!(div(&[2.5.into()]), Some(2.5));
    }

    /// Decimals with one fractional digit.
    ///
    /// Scaling by ten is lossless in binary64 (10 = 2^3 + 2^1, so dividing
    /// an integer by 10 and multiplying back round-trips exactly), which
    /// keeps every intermediate of a fold inside the kernel's exact domain.
    fn tenths() -> impl Strategy<Value = f64> {
        (-99_999i64..=99_999).prop_map(|mantissa| mantissa as f64 / 10.0)
    }

    proptest! {
        #[test]
        fn add_pair_is_commutative(x: f64, y: f64) {
            let forward = add_pair(x, y);
            let backward = add_pair(y, x);
            prop_assert!(forward == backward || (forward.is_nan() && backward.is_nan()));
        }

        #[test]
        fn add_pair_is_associative(x in tenths(), y in tenths(), z in tenths()) {
            prop_assert_eq!(add_pair(add_pair(x, y), z), add_pair(x, add_pair(y, z)));
        }

        #[test]
        fn division_by_one_is_identity(x in tenths()) {
            prop_assert_eq!(div_pair(x, 1.0), x);
        }

        #[test]
        fn add_then_sub_round_trips(x in tenths(), y in tenths()) {
            prop_assert_eq!(sub_pair(add_pair(x, y), y), x);
        }

        #[test]
        fn junk_never_poisons_a_fold(x in tenths(), y in tenths()) {
            let values = [
                Value::Text("undefined"),
                Value::Float(x),
                Value::Float(f64::NAN),
                Value::Float(y),
                Value::Text(""),
            ];
            prop_assert_eq!(add(&values), add(&[Value::Float(x), Value::Float(y)]));
        }
    }
}
