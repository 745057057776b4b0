//! Cyclic subgroups and the subgroup lattice.
//!
//! This module computes the cyclic subgroup generated by a single element,
//! and collects those subgroups over a whole group.
//!
//! ## Overview
//!
//! - [`Subgroup`]: the powers of one generator, ending at the identity
//! - [`generate`]: the cyclic subgroup generated by one element
//! - [`all_subgroups`]: one subgroup per carrier element, duplicates kept
//! - [`distinct_subgroups`]: the same, deduplicated by element set
//!
//! ## Example
//!
//! ```
//! use modgroup::group::additive_group;
//! use modgroup::subgroup::{distinct_subgroups, generate};
//!
//! let z6 = additive_group(6).unwrap();
//!
//! let h = generate(2, &z6).unwrap();
//! assert_eq!(h.elements(), &[2, 4, 0]);
//!
//! // {0}, {0,3}, {0,2,4} and Z/6Z itself
//! assert_eq!(distinct_subgroups(&z6).unwrap().len(), 4);
//! ```

mod lattice;

pub use lattice::{all_subgroups, distinct_subgroups};
pub(crate) use lattice::dedup_by_elements;

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::error::{Error, Result};
use crate::group::Group;

/// A cyclic subgroup, listed as successive powers of its generator.
///
/// The sequence starts with the generator and ends with the identity, so
/// its length is the order of the generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Subgroup {
    generator: u32,
    elements: Vec<u32>,
}

impl Subgroup {
    /// The element this subgroup was generated from.
    #[must_use]
    pub fn generator(&self) -> u32 {
        self.generator
    }

    /// The elements in generation order.
    #[must_use]
    pub fn elements(&self) -> &[u32] {
        &self.elements
    }

    /// The number of elements.
    #[must_use]
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    /// The elements as a sorted set.
    #[must_use]
    pub fn element_set(&self) -> BTreeSet<u32> {
        self.elements.iter().copied().collect()
    }

    /// Whether both subgroups contain exactly the same elements.
    ///
    /// Order and repetition inside the sequences are ignored, so this holds
    /// iff the symmetric difference of the two element sets is empty.
    #[must_use]
    pub fn same_elements(&self, other: &Self) -> bool {
        self.element_set() == other.element_set()
    }

    /// Check whether `element` is in this subgroup.
    #[must_use]
    pub fn contains(&self, element: u32) -> bool {
        self.elements.contains(&element)
    }

    /// The index `order(group) / order(self)`.
    ///
    /// By Lagrange's theorem this division is exact for a genuine group.
    #[must_use]
    pub fn index_in(&self, group: &Group) -> usize {
        group.order() / self.order()
    }
}

/// Compute the cyclic subgroup generated by `element`.
///
/// Starting from `[element]`, the next value is `element` composed with the
/// last value, until the group's identity is reached. The result starts
/// with `element` and ends with the identity.
///
/// At most `order(group) + 1` compositions are attempted. A genuine finite
/// group always reaches the identity well within that bound.
///
/// # Errors
///
/// Returns an error if:
/// - `element` is not in the group's carrier
/// - the identity is not reached within the iteration cap
///
/// # Example
///
/// ```
/// use modgroup::group::multiplicative_group;
/// use modgroup::subgroup::generate;
///
/// let u7 = multiplicative_group(7).unwrap();
/// let h = generate(2, &u7).unwrap();
/// assert_eq!(h.elements(), &[2, 4, 1]);
///
/// assert!(generate(7, &u7).is_err());
/// ```
pub fn generate(element: u32, group: &Group) -> Result<Subgroup> {
    if !group.contains(element) {
        return Err(Error::not_in_carrier(element, group.name()));
    }

    let identity = group.identity();
    let cap = group.order() + 1;
    let mut elements = vec![element];
    let mut last = element;

    while last != identity {
        if elements.len() > cap {
            warn!(group = %group.name(), element, cap, "identity not reached");
            return Err(Error::MalformedGroup {
                group: group.name().to_string(),
                element,
                cap,
            });
        }
        last = group.operate(element, last);
        elements.push(last);
    }

    trace!(group = %group.name(), element, order = elements.len(), "generated subgroup");

    Ok(Subgroup {
        generator: element,
        elements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::{additive_group, multiplicative_group, Operation};

    #[test]
    fn test_generate_z5() {
        let z5 = additive_group(5).unwrap();
        let h = generate(2, &z5).unwrap();
        assert_eq!(h.elements(), &[2, 4, 1, 3, 0]);
        assert_eq!(h.order(), 5);
        assert_eq!(h.generator(), 2);
        assert_eq!(h.index_in(&z5), 1);
    }

    #[test]
    fn test_generate_identity() {
        let z5 = additive_group(5).unwrap();
        let h = generate(0, &z5).unwrap();
        assert_eq!(h.elements(), &[0]);

        let u9 = multiplicative_group(9).unwrap();
        assert_eq!(generate(1, &u9).unwrap().elements(), &[1]);
    }

    #[test]
    fn test_generate_u8() {
        let u8 = multiplicative_group(8).unwrap();
        for g in [3, 5, 7] {
            let h = generate(g, &u8).unwrap();
            assert_eq!(h.elements(), &[g, 1]);
            assert_eq!(h.index_in(&u8), 2);
        }
    }

    #[test]
    fn test_not_in_carrier() {
        let z5 = additive_group(5).unwrap();
        assert_eq!(
            generate(6, &z5).unwrap_err(),
            Error::ElementNotInCarrier {
                element: 6,
                group: "Z/5Z".into()
            }
        );

        // 2 is not a unit mod 8.
        let u8 = multiplicative_group(8).unwrap();
        assert!(matches!(
            generate(2, &u8),
            Err(Error::ElementNotInCarrier { element: 2, .. })
        ));
    }

    #[test]
    fn test_malformed_group_hits_cap() {
        // max() has identity 0, but the powers of 1 stay at 1 forever.
        let op = Operation::from_fn("max", |xs| xs.iter().copied().max().unwrap_or(0));
        let g = Group::new("max", vec![0, 1, 2], op).unwrap();
        assert_eq!(
            generate(1, &g).unwrap_err(),
            Error::MalformedGroup {
                group: "max".into(),
                element: 1,
                cap: 4
            }
        );
        assert_eq!(generate(0, &g).unwrap().elements(), &[0]);
    }

    #[test]
    fn test_same_elements() {
        let z6 = additive_group(6).unwrap();
        let a = generate(2, &z6).unwrap();
        let b = generate(4, &z6).unwrap();
        assert_ne!(a, b);
        assert!(a.same_elements(&b));
        assert!(!a.same_elements(&generate(3, &z6).unwrap()));
        assert!(a.contains(4));
        assert!(!a.contains(3));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let u15 = multiplicative_group(15).unwrap();
        for &e in u15.carrier() {
            assert_eq!(generate(e, &u15).unwrap(), generate(e, &u15).unwrap());
        }
    }
}
