//! Builder pattern for constructing modular groups.
//!
//! The builder is a small configuration layer over the group constructors,
//! convenient when the kind of group is chosen at runtime.
//!
//! # Example
//!
//! ```
//! use modgroup::{GroupBuilder, GroupKind};
//!
//! let g = GroupBuilder::new()
//!     .modulus(9)
//!     .kind(GroupKind::Multiplicative)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(g.carrier(), &[1, 2, 4, 5, 7, 8]);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::group::{additive_group, multiplicative_group, Group};

/// Which modular group to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupKind {
    /// Z/nZ under addition.
    #[default]
    Additive,
    /// (Z/nZ)^× under multiplication.
    Multiplicative,
}

impl GroupKind {
    /// Build the group of this kind for modulus `n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidModulus`] if `n` is 0.
    pub fn build(self, n: u32) -> Result<Group> {
        match self {
            Self::Additive => additive_group(n),
            Self::Multiplicative => multiplicative_group(n),
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Additive => write!(f, "additive"),
            Self::Multiplicative => write!(f, "multiplicative"),
        }
    }
}

/// Builder for modular groups.
///
/// The kind defaults to [`GroupKind::Additive`]; the modulus must be set.
#[derive(Debug, Clone, Default)]
pub struct GroupBuilder {
    modulus: Option<u32>,
    kind: GroupKind,
}

impl GroupBuilder {
    /// Create a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the modulus n.
    #[must_use]
    pub fn modulus(mut self, n: u32) -> Self {
        self.modulus = Some(n);
        self
    }

    /// Set the kind of group.
    #[must_use]
    pub fn kind(mut self, kind: GroupKind) -> Self {
        self.kind = kind;
        self
    }

    /// Shorthand for `.kind(GroupKind::Additive)`.
    #[must_use]
    pub fn additive(self) -> Self {
        self.kind(GroupKind::Additive)
    }

    /// Shorthand for `.kind(GroupKind::Multiplicative)`.
    #[must_use]
    pub fn multiplicative(self) -> Self {
        self.kind(GroupKind::Multiplicative)
    }

    /// Build the group.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the modulus was not specified
    /// - the modulus is 0
    pub fn build(self) -> Result<Group> {
        let n = self
            .modulus
            .ok_or_else(|| Error::invalid_params("modulus must be specified"))?;
        self.kind.build(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_default_kind() {
        let g = GroupBuilder::new().modulus(6).build().unwrap();
        assert_eq!(g.name(), "Z/6Z");
        assert_eq!(g.order(), 6);
    }

    #[test]
    fn test_builder_multiplicative() {
        let g = GroupBuilder::new().multiplicative().modulus(5).build().unwrap();
        assert_eq!(g.carrier(), &[1, 2, 3, 4]);

        let back = GroupBuilder::new()
            .multiplicative()
            .additive()
            .modulus(5)
            .build()
            .unwrap();
        assert_eq!(back.order(), 5);
    }

    #[test]
    fn test_builder_missing_modulus() {
        let err = GroupBuilder::new().build().unwrap_err();
        assert!(matches!(err, Error::InvalidParams { .. }));
        assert!(err.to_string().contains("modulus"));
    }

    #[test]
    fn test_builder_zero_modulus() {
        assert_eq!(
            GroupBuilder::new().modulus(0).build().unwrap_err(),
            Error::InvalidModulus(0)
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(GroupKind::Additive.to_string(), "additive");
        assert_eq!(GroupKind::Multiplicative.to_string(), "multiplicative");
    }
}
