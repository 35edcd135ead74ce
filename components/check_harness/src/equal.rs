//! Structural equality between checked results.

use crate::outcome::{Outcome, Scalar};

/// Compare an actual result against an expected one.
///
/// Scalars use strict equality (so NaN never equals NaN), sequences compare
/// element-wise, and pair lists compare regardless of order. An empty pair
/// list equals an empty sequence; any other shape mismatch is unequal.
///
/// # Examples
///
/// ```
/// use check_harness::{deep_equal, Outcome};
///
/// let actual = Outcome::from(vec![("null", 1), ("boolean", 3)]);
/// let expected = Outcome::from(vec![("boolean", 3), ("null", 1)]);
/// assert!(deep_equal(&actual, &expected));
/// assert!(!deep_equal(&Outcome::from(true), &Outcome::from(vec![true])));
/// ```
pub fn deep_equal(actual: &Outcome, expected: &Outcome) -> bool {
    match (actual, expected) {
        (Outcome::Scalar(a), Outcome::Scalar(b)) => scalar_equal(a, b),
        (Outcome::Sequence(a), Outcome::Sequence(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| scalar_equal(x, y))
        }
        (Outcome::Pairs(a), Outcome::Pairs(b)) => {
            a.len() == b.len() && canonical(a) == canonical(b)
        }
        (Outcome::Sequence(items), Outcome::Pairs(pairs))
        | (Outcome::Pairs(pairs), Outcome::Sequence(items)) => items.is_empty() && pairs.is_empty(),
        _ => false,
    }
}

fn scalar_equal(a: &Scalar, b: &Scalar) -> bool {
    match (a, b) {
        (Scalar::Bool(x), Scalar::Bool(y)) => x == y,
        (Scalar::Number(x), Scalar::Number(y)) => x == y,
        (Scalar::Text(x), Scalar::Text(y)) => x == y,
        _ => false,
    }
}

/// Pairs sorted by tag, then count
fn canonical(pairs: &[(String, usize)]) -> Vec<&(String, usize)> {
    let mut sorted: Vec<&(String, usize)> = pairs.iter().collect();
    sorted.sort();
    sorted
}
