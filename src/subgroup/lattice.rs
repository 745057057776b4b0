//! Collecting cyclic subgroups over a whole group.

use std::collections::HashSet;

use tracing::debug;

use super::{generate, Subgroup};
use crate::error::Result;
use crate::group::Group;

/// Generate the cyclic subgroup of every carrier element, in carrier order.
///
/// Duplicates are kept: the result has exactly `order(group)` entries, and
/// different generators of the same subgroup each contribute one entry.
///
/// # Errors
///
/// Returns the first error produced by [`generate`].
///
/// # Example
///
/// ```
/// use modgroup::group::additive_group;
/// use modgroup::subgroup::all_subgroups;
///
/// let z4 = additive_group(4).unwrap();
/// let orders: Vec<usize> = all_subgroups(&z4).unwrap().iter().map(|h| h.order()).collect();
/// assert_eq!(orders, vec![1, 4, 2, 4]);
/// ```
pub fn all_subgroups(group: &Group) -> Result<Vec<Subgroup>> {
    group
        .carrier()
        .iter()
        .map(|&element| generate(element, group))
        .collect()
}

/// The cyclic subgroups of `group`, deduplicated by element set.
///
/// The first subgroup seen for each element set is kept, so the result is
/// in carrier order of the first generator of each subgroup.
///
/// # Errors
///
/// Returns the first error produced by [`generate`].
///
/// # Example
///
/// ```
/// use modgroup::group::additive_group;
/// use modgroup::subgroup::distinct_subgroups;
///
/// let z5 = additive_group(5).unwrap();
/// let subs = distinct_subgroups(&z5).unwrap();
/// assert_eq!(subs.len(), 2);
/// assert_eq!(subs[0].elements(), &[0]);
/// assert_eq!(subs[1].order(), 5);
/// ```
pub fn distinct_subgroups(group: &Group) -> Result<Vec<Subgroup>> {
    let all = all_subgroups(group)?;
    let distinct = dedup_by_elements(all);
    debug!(group = %group.name(), distinct = distinct.len(), "deduplicated subgroups");
    Ok(distinct)
}

/// Keep the first subgroup of each element set, preserving order.
pub(crate) fn dedup_by_elements(subgroups: Vec<Subgroup>) -> Vec<Subgroup> {
    let mut seen = HashSet::new();
    subgroups
        .into_iter()
        .filter(|h| seen.insert(h.element_set()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::{additive_group, multiplicative_group};

    #[test]
    fn test_all_subgroups_one_per_element() {
        let z6 = additive_group(6).unwrap();
        let all = all_subgroups(&z6).unwrap();
        assert_eq!(all.len(), 6);
        let gens: Vec<u32> = all.iter().map(Subgroup::generator).collect();
        assert_eq!(gens, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_distinct_z12() {
        let z12 = additive_group(12).unwrap();
        let distinct = distinct_subgroups(&z12).unwrap();
        // One cyclic subgroup per divisor of 12.
        let mut orders: Vec<usize> = distinct.iter().map(Subgroup::order).collect();
        orders.sort_unstable();
        assert_eq!(orders, vec![1, 2, 3, 4, 6, 12]);
        let gens: Vec<u32> = distinct.iter().map(Subgroup::generator).collect();
        assert_eq!(gens, vec![0, 1, 2, 3, 4, 6]);
    }

    #[test]
    fn test_distinct_u8() {
        let u8 = multiplicative_group(8).unwrap();
        let distinct = distinct_subgroups(&u8).unwrap();
        assert_eq!(distinct.len(), 4);
        assert_eq!(distinct[0].elements(), &[1]);
        assert!(distinct[1..].iter().all(|h| h.order() == 2));
    }

    #[test]
    fn test_distinct_pairwise_unique() {
        for n in 1..=30 {
            let g = multiplicative_group(n).unwrap();
            let distinct = distinct_subgroups(&g).unwrap();
            for (i, a) in distinct.iter().enumerate() {
                for b in &distinct[i + 1..] {
                    assert!(!a.same_elements(b), "n = {n}");
                }
            }
        }
    }

    #[test]
    fn test_dedup_ignores_order() {
        let z5 = additive_group(5).unwrap();
        let a = crate::subgroup::generate(1, &z5).unwrap();
        let b = crate::subgroup::generate(3, &z5).unwrap();
        assert_ne!(a.elements(), b.elements());
        assert_eq!(dedup_by_elements(vec![a.clone(), b]), vec![a]);
    }
}
