//! # modgroup
//!
//! Finite groups built from modular arithmetic, and their structure.
//!
//! ## Overview
//!
//! The library models the additive group Z/nZ and the multiplicative group
//! of units (Z/nZ)^×, and computes:
//! - the cyclic subgroup generated by each element
//! - the subgroup lattice, deduplicated by element set
//! - cyclicity and commutativity
//! - Cayley tables and full structural reports
//!
//! ## Quick Start
//!
//! ```rust
//! use modgroup::group::additive_group;
//! use modgroup::properties::is_cyclic;
//! use modgroup::subgroup::{distinct_subgroups, generate};
//!
//! let z5 = additive_group(5).unwrap();
//! assert_eq!(z5.carrier(), &[0, 1, 2, 3, 4]);
//!
//! // 2 generates all of Z/5Z.
//! assert_eq!(generate(2, &z5).unwrap().order(), 5);
//!
//! // 5 is prime: only {0} and the whole group.
//! assert_eq!(distinct_subgroups(&z5).unwrap().len(), 2);
//! assert!(is_cyclic(&z5).unwrap());
//! ```
//!
//! Or print a full report:
//!
//! ```rust
//! use modgroup::{get_group, GroupReport};
//!
//! let report = GroupReport::new(&get_group("U(8)").unwrap()).unwrap();
//! assert!(!report.cyclic);
//! println!("{report}");
//! ```
//!
//! ## Abelian checks
//!
//! [`properties::legacy_is_abelian`] keeps the historical behaviour of
//! comparing `a * b` with itself, so it is always `true`.
//! [`properties::is_commutative`] is the correct check.
//!
//! ## Logging
//!
//! The library emits `tracing` events (`debug` for construction and
//! reports, `trace` per subgroup, `warn` when a malformed group is
//! detected). No subscriber is installed by the library.
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of reports
//! - `parallel`: Enable parallel subgroup generation and reports using rayon
//! - `python`: Enable Python bindings via PyO3

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod catalogue;
pub mod error;
pub mod group;
pub mod properties;
#[cfg(feature = "python")]
pub mod python;
pub mod report;
pub mod subgroup;
pub mod utils;

#[cfg(feature = "parallel")]
pub mod parallel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::{GroupBuilder, GroupKind};
    pub use crate::catalogue::get_by_name;
    pub use crate::error::{Error, Result};
    pub use crate::group::{additive_group, multiplicative_group, BaseOp, Group, Operation};
    pub use crate::properties::{
        element_order, generators, is_commutative, is_cyclic, legacy_is_abelian,
    };
    pub use crate::report::{CayleyTable, GroupReport, ReportConfig, SubgroupEntry};
    pub use crate::subgroup::{all_subgroups, distinct_subgroups, generate, Subgroup};
    pub use crate::utils::{coprime, divisors, gcd, proper_divisors, residues};

    #[cfg(feature = "parallel")]
    pub use crate::parallel::{par_all_subgroups, par_distinct_subgroups, par_reports};
}

// Re-export commonly used items at crate root
pub use builder::{GroupBuilder, GroupKind};
pub use catalogue::get_by_name as get_group;
pub use error::{Error, Result};
pub use group::{additive_group, multiplicative_group, Group};
pub use report::GroupReport;

#[cfg(feature = "parallel")]
pub use parallel::{par_all_subgroups, par_reports};
