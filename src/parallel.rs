//! Parallel subgroup generation and reporting.
//!
//! This module provides rayon-backed versions of the lattice and report
//! functions. Enable with the `parallel` feature flag.
//!
//! # Usage
//!
//! ```ignore
//! use modgroup::parallel::par_reports;
//! use modgroup::report::ReportConfig;
//! use modgroup::GroupKind;
//!
//! let reports = par_reports(1..=20, GroupKind::Multiplicative, &ReportConfig::default()).unwrap();
//! assert_eq!(reports.len(), 20);
//! ```
//!
//! Groups only share an immutable operation behind an `Arc`, so no locking
//! is involved. For small groups the sequential functions are usually
//! faster.

use rayon::prelude::*;
use tracing::debug;

use crate::builder::GroupKind;
use crate::error::Result;
use crate::group::Group;
use crate::report::{GroupReport, ReportConfig};
use crate::subgroup::{dedup_by_elements, generate, Subgroup};

/// Parallel version of [`all_subgroups`](crate::subgroup::all_subgroups).
///
/// Results keep carrier order.
///
/// # Errors
///
/// Returns an error from [`generate`] if any element fails.
pub fn par_all_subgroups(group: &Group) -> Result<Vec<Subgroup>> {
    group
        .carrier()
        .par_iter()
        .map(|&element| generate(element, group))
        .collect()
}

/// Parallel version of [`distinct_subgroups`](crate::subgroup::distinct_subgroups).
///
/// Deduplication runs after collection, so the first-seen order matches
/// the sequential version exactly.
///
/// # Errors
///
/// Returns an error from [`generate`] if any element fails.
pub fn par_distinct_subgroups(group: &Group) -> Result<Vec<Subgroup>> {
    Ok(dedup_by_elements(par_all_subgroups(group)?))
}

/// Build one report per modulus in parallel.
///
/// Reports are returned in the order of `moduli`. The first failing modulus
/// aborts the whole batch.
///
/// # Errors
///
/// Returns an error if any group cannot be built or reported on.
pub fn par_reports<I>(moduli: I, kind: GroupKind, config: &ReportConfig) -> Result<Vec<GroupReport>>
where
    I: IntoIterator<Item = u32>,
{
    let moduli: Vec<u32> = moduli.into_iter().collect();
    debug!(count = moduli.len(), %kind, "building reports in parallel");

    moduli
        .into_par_iter()
        .map(|n| GroupReport::with_config(&kind.build(n)?, config))
        .collect()
}
