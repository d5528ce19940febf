//! # Arithmetic Folder
//!
//! Folds an ordered sequence of operator tokens into a single number.
//!
//! The right operand is FIXED: every step applies the original `b`
//! against the running accumulator, never the result of a prior step.
//! All arithmetic is IEEE-754 double precision — division by a zero
//! `b` produces an infinity or NaN rather than an error.

use crate::types::Operation;

/// Fold `operations` over an accumulator starting at `a`, applying
/// each token against the fixed operand `b`.
///
/// Unrecognized tokens leave the accumulator unchanged. An empty
/// sequence returns `a`.
#[must_use]
pub fn evaluate(a: f64, b: f64, operations: &[Operation]) -> f64 {
    let mut accumulator = a;
    for op in operations {
        match op {
            Operation::Add => accumulator += b,
            Operation::Subtract => accumulator -= b,
            Operation::Multiply => accumulator *= b,
            Operation::Divide => accumulator /= b,
            Operation::Unrecognized => {}
        }
    }
    accumulator
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Operation::{Add, Divide, Multiply, Subtract, Unrecognized};

    #[test]
    fn single_add() {
        assert_eq!(evaluate(10.0, 5.0, &[Add]), 15.0);
    }

    #[test]
    fn chained_operations_use_fixed_operand() {
        // (10 + 5) * 5 — the second step multiplies by the original b,
        // not by the running result.
        assert_eq!(evaluate(10.0, 5.0, &[Add, Multiply]), 75.0);
    }

    #[test]
    fn all_four_operators() {
        // ((((10 + 2) - 2) * 2) / 2) = 10
        assert_eq!(evaluate(10.0, 2.0, &[Add, Subtract, Multiply, Divide]), 10.0);
    }

    #[test]
    fn empty_sequence_returns_a() {
        assert_eq!(evaluate(10.0, 5.0, &[]), 10.0);
    }

    #[test]
    fn unrecognized_token_is_a_no_op() {
        assert_eq!(
            evaluate(10.0, 5.0, &[Add, Unrecognized, Multiply]),
            evaluate(10.0, 5.0, &[Add, Multiply]),
        );
        assert_eq!(evaluate(10.0, 5.0, &[Unrecognized]), 10.0);
    }

    #[test]
    fn divide_by_zero_follows_ieee754() {
        assert_eq!(evaluate(10.0, 0.0, &[Divide]), f64::INFINITY);
        assert_eq!(evaluate(-10.0, 0.0, &[Divide]), f64::NEG_INFINITY);
        assert!(evaluate(0.0, 0.0, &[Divide]).is_nan());
    }

    #[test]
    fn evaluation_is_idempotent() {
        let ops = [Add, Multiply, Subtract];
        assert_eq!(evaluate(3.5, 1.25, &ops), evaluate(3.5, 1.25, &ops));
    }
}
