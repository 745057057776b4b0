//! Structural predicates over groups.
//!
//! Cyclicity is decided by generating subgroups; commutativity by comparing
//! every pair of elements.
//!
//! Two Abelian checks are provided:
//! - [`legacy_is_abelian`] reproduces the historical check, which compares
//!   `a * b` with itself and therefore always returns `true`.
//! - [`is_commutative`] compares `a * b` with `b * a`, which is the real test.

use crate::error::Result;
use crate::group::Group;
use crate::subgroup::generate;

/// Check whether some single element generates the whole group.
///
/// # Errors
///
/// Returns the first error produced by [`generate`].
///
/// # Example
///
/// ```
/// use modgroup::group::{additive_group, multiplicative_group};
/// use modgroup::properties::is_cyclic;
///
/// assert!(is_cyclic(&additive_group(12).unwrap()).unwrap());
/// assert!(is_cyclic(&multiplicative_group(7).unwrap()).unwrap());
/// assert!(!is_cyclic(&multiplicative_group(8).unwrap()).unwrap());
/// ```
pub fn is_cyclic(group: &Group) -> Result<bool> {
    for &element in group.carrier() {
        if generate(element, group)?.order() == group.order() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// The historical "Abelian" check.
///
/// For every pair `(a, b)` it compares `operation(a, b)` against
/// `operation(a, b)`, so it is `true` for every group, commutative or not.
/// Use [`is_commutative`] for an actual answer.
#[must_use]
pub fn legacy_is_abelian(group: &Group) -> bool {
    let carrier = group.carrier();
    carrier.iter().all(|&a| {
        carrier
            .iter()
            .all(|&b| group.operate(a, b) == group.operate(a, b))
    })
}

/// Check that `operation(a, b) == operation(b, a)` for every pair.
///
/// # Example
///
/// ```
/// use modgroup::group::multiplicative_group;
/// use modgroup::properties::is_commutative;
///
/// assert!(is_commutative(&multiplicative_group(15).unwrap()));
/// ```
#[must_use]
pub fn is_commutative(group: &Group) -> bool {
    let carrier = group.carrier();
    carrier.iter().enumerate().all(|(i, &a)| {
        carrier[i + 1..]
            .iter()
            .all(|&b| group.operate(a, b) == group.operate(b, a))
    })
}

/// The order of `element`: the size of the cyclic subgroup it generates.
///
/// # Errors
///
/// Returns the first error produced by [`generate`].
pub fn element_order(element: u32, group: &Group) -> Result<usize> {
    Ok(generate(element, group)?.order())
}

/// Every carrier element that generates the whole group, in carrier order.
///
/// The result is empty exactly when the group is not cyclic.
///
/// # Errors
///
/// Returns the first error produced by [`generate`].
///
/// # Example
///
/// ```
/// use modgroup::group::additive_group;
/// use modgroup::properties::generators;
///
/// assert_eq!(generators(&additive_group(8).unwrap()).unwrap(), vec![1, 3, 5, 7]);
/// ```
pub fn generators(group: &Group) -> Result<Vec<u32>> {
    let mut out = Vec::new();
    for &element in group.carrier() {
        if element_order(element, group)? == group.order() {
            out.push(element);
        }
    }
    Ok(out)
}
