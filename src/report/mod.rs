//! Structural reports over a group.
//!
//! A [`GroupReport`] is a plain value holding everything worth printing
//! about a group: its carrier, Cayley table, verdicts, subgroups and the
//! divisors of its order. Rendering is a separate step via `Display`, so
//! reports can be inspected in tests or serialized without any text
//! formatting involved.
//!
//! ## Example
//!
//! ```
//! use modgroup::group::multiplicative_group;
//! use modgroup::report::GroupReport;
//!
//! let report = GroupReport::new(&multiplicative_group(8).unwrap()).unwrap();
//! assert_eq!(report.order, 4);
//! assert!(!report.cyclic);
//! assert!(report.commutative);
//! assert_eq!(report.distinct_subgroups.len(), 4);
//! assert_eq!(report.divisors, vec![1, 2, 4]);
//!
//! let text = report.to_string();
//! assert!(text.contains("Cyclic: no"));
//! ```

mod cayley;

pub use cayley::CayleyTable;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::group::Group;
use crate::properties::{is_commutative, legacy_is_abelian};
use crate::subgroup::{all_subgroups, dedup_by_elements, Subgroup};
use crate::utils::divisors;

/// Options controlling which sections a report computes.
///
/// The Cayley table is quadratic in the group order, so large groups may
/// want to skip it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportConfig {
    /// Compute the Cayley table.
    pub include_table: bool,
    /// Keep the per-element subgroup list, duplicates included.
    pub include_all_subgroups: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_table: true,
            include_all_subgroups: true,
        }
    }
}

impl ReportConfig {
    /// Create a config with every section enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the Cayley table.
    #[must_use]
    pub fn include_table(mut self, include: bool) -> Self {
        self.include_table = include;
        self
    }

    /// Enable or disable the per-element subgroup list.
    #[must_use]
    pub fn include_all_subgroups(mut self, include: bool) -> Self {
        self.include_all_subgroups = include;
        self
    }
}

/// A subgroup together with its order and its index in the parent group.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubgroupEntry {
    /// The subgroup itself.
    pub subgroup: Subgroup,
    /// Number of elements in the subgroup.
    pub order: usize,
    /// `order(group) / order(subgroup)`.
    pub index: usize,
}

impl SubgroupEntry {
    fn new(subgroup: Subgroup, group: &Group) -> Self {
        Self {
            order: subgroup.order(),
            index: subgroup.index_in(group),
            subgroup,
        }
    }
}

/// Everything the library knows about one group.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupReport {
    /// Display name of the group.
    pub name: String,
    /// The carrier in construction order.
    pub carrier: Vec<u32>,
    /// Number of elements.
    pub order: usize,
    /// The identity element.
    pub identity: u32,
    /// The operation table, if requested.
    pub table: Option<CayleyTable>,
    /// Result of the historical self-comparing check; always `true`.
    pub legacy_abelian: bool,
    /// Whether `a * b == b * a` for every pair.
    pub commutative: bool,
    /// Whether a single element generates the group.
    pub cyclic: bool,
    /// Elements that generate the whole group.
    pub generators: Vec<u32>,
    /// One subgroup per carrier element, if requested.
    pub all_subgroups: Option<Vec<SubgroupEntry>>,
    /// Subgroups deduplicated by element set, first seen first.
    pub distinct_subgroups: Vec<SubgroupEntry>,
    /// Divisors of the group order.
    pub divisors: Vec<u32>,
}

impl GroupReport {
    /// Build a report with every section enabled.
    ///
    /// # Errors
    ///
    /// Returns the first engine error; no partial report is produced.
    pub fn new(group: &Group) -> Result<Self> {
        Self::with_config(group, &ReportConfig::default())
    }

    /// Build a report with the given options.
    ///
    /// # Errors
    ///
    /// Returns the first engine error; no partial report is produced.
    pub fn with_config(group: &Group, config: &ReportConfig) -> Result<Self> {
        let order = group.order();
        let order_u32 = u32::try_from(order)
            .map_err(|_| Error::invalid_params(format!("group order {order} exceeds u32")))?;

        // Subgroups first, so a malformed group fails before any table work.
        let all = all_subgroups(group)?;
        let generators: Vec<u32> = all
            .iter()
            .filter(|h| h.order() == order)
            .map(Subgroup::generator)
            .collect();
        let distinct = dedup_by_elements(all.clone())
            .into_iter()
            .map(|h| SubgroupEntry::new(h, group))
            .collect();
        let all_subgroups = config.include_all_subgroups.then(|| {
            all.into_iter()
                .map(|h| SubgroupEntry::new(h, group))
                .collect()
        });

        let table = config.include_table.then(|| CayleyTable::new(group));

        debug!(group = %group.name(), order, "built report");

        Ok(Self {
            name: group.name().to_string(),
            carrier: group.carrier().to_vec(),
            order,
            identity: group.identity(),
            table,
            legacy_abelian: legacy_is_abelian(group),
            commutative: is_commutative(group),
            cyclic: !generators.is_empty(),
            generators,
            all_subgroups,
            distinct_subgroups: distinct,
            divisors: divisors(order_u32)?,
        })
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn write_entries(f: &mut fmt::Formatter<'_>, entries: &[SubgroupEntry]) -> fmt::Result {
    for entry in entries {
        writeln!(
            f,
            "  <{}> = {:?}  order {}, index {}",
            entry.subgroup.generator(),
            entry.subgroup.elements(),
            entry.order,
            entry.index
        )?;
    }
    Ok(())
}

impl fmt::Display for GroupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Group: {}", self.name)?;
        writeln!(f, "Elements: {:?}", self.carrier)?;
        writeln!(f, "Order: {}", self.order)?;
        writeln!(f, "Identity: {}", self.identity)?;

        if let Some(table) = &self.table {
            writeln!(f)?;
            writeln!(f, "Cayley table:")?;
            write!(f, "{table}")?;
        }

        writeln!(f)?;
        writeln!(f, "Abelian (legacy check): {}", yes_no(self.legacy_abelian))?;
        writeln!(f, "Commutative: {}", yes_no(self.commutative))?;
        if self.cyclic {
            writeln!(f, "Cyclic: yes (generators: {:?})", self.generators)?;
        } else {
            writeln!(f, "Cyclic: no")?;
        }

        if let Some(all) = &self.all_subgroups {
            writeln!(f)?;
            writeln!(f, "Subgroups generated by each element ({}):", all.len())?;
            write_entries(f, all)?;
        }

        writeln!(f)?;
        writeln!(f, "Distinct subgroups ({}):", self.distinct_subgroups.len())?;
        write_entries(f, &self.distinct_subgroups)?;

        writeln!(f)?;
        writeln!(
            f,
            "Divisors of {} ({}): {:?}",
            self.order,
            self.divisors.len(),
            self.divisors
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::{additive_group, Operation};
    use crate::subgroup::distinct_subgroups;

    #[test]
    fn test_report_z5() {
        let z5 = additive_group(5).unwrap();
        let report = GroupReport::new(&z5).unwrap();
        assert_eq!(report.carrier, vec![0, 1, 2, 3, 4]);
        assert!(report.cyclic);
        assert_eq!(report.generators, vec![1, 2, 3, 4]);
        assert_eq!(report.distinct_subgroups.len(), 2);
        assert_eq!(report.distinct_subgroups[0].index, 5);
        assert_eq!(report.distinct_subgroups[1].index, 1);
        assert_eq!(report.all_subgroups.as_ref().map(Vec::len), Some(5));
        assert_eq!(report.divisors, vec![1, 5]);
        assert!(report.table.is_some());
    }

    #[test]
    fn test_report_matches_engine() {
        let z12 = additive_group(12).unwrap();
        let report = GroupReport::new(&z12).unwrap();
        let distinct: Vec<Subgroup> = report
            .distinct_subgroups
            .iter()
            .map(|e| e.subgroup.clone())
            .collect();
        assert_eq!(distinct, distinct_subgroups(&z12).unwrap());
    }

    #[test]
    fn test_config_skips_sections() {
        let config = ReportConfig::new()
            .include_table(false)
            .include_all_subgroups(false);
        let report = GroupReport::with_config(&additive_group(4).unwrap(), &config).unwrap();
        assert!(report.table.is_none());
        assert!(report.all_subgroups.is_none());

        let text = report.to_string();
        assert!(!text.contains("Cayley table"));
        assert!(!text.contains("generated by each element"));
        assert!(text.contains("Distinct subgroups (3):"));
    }

    #[test]
    fn test_render_z3() {
        let report = GroupReport::new(&additive_group(3).unwrap()).unwrap();
        let expected = "\
Group: Z/3Z
Elements: [0, 1, 2]
Order: 3
Identity: 0

Cayley table:
 + | 0 1 2
---+------
 0 | 0 1 2
 1 | 1 2 0
 2 | 2 0 1

Abelian (legacy check): yes
Commutative: yes
Cyclic: yes (generators: [1, 2])

Subgroups generated by each element (3):
  <0> = [0]  order 1, index 3
  <1> = [1, 2, 0]  order 3, index 1
  <2> = [2, 1, 0]  order 3, index 1

Distinct subgroups (2):
  <0> = [0]  order 1, index 3
  <1> = [1, 2, 0]  order 3, index 1

Divisors of 3 (2): [1, 3]
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_malformed_group_aborts_report() {
        let op = Operation::from_fn("max", |xs| xs.iter().copied().max().unwrap_or(0));
        let g = Group::new("max", vec![0, 1, 2], op).unwrap();
        assert!(matches!(
            GroupReport::new(&g),
            Err(Error::MalformedGroup { .. })
        ));
    }
}
