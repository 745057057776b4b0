//! Finite groups over integer carriers.
//!
//! This module provides the [`Group`] value type and the constructors for
//! the two families of groups built from modular arithmetic.
//!
//! ## Overview
//!
//! - [`Group`]: an ordered carrier, a closed operation and its identity
//! - [`Operation`]: the operation, shared behind an `Arc`
//! - [`additive_group`]: Z/nZ under addition mod n
//! - [`multiplicative_group`]: (Z/nZ)^× under multiplication mod n
//!
//! ## Example
//!
//! ```
//! use modgroup::group::{additive_group, multiplicative_group};
//!
//! let z5 = additive_group(5).unwrap();
//! assert_eq!(z5.carrier(), &[0, 1, 2, 3, 4]);
//! assert_eq!(z5.identity(), 0);
//! assert_eq!(z5.operate(3, 4), 2); // 3 + 4 = 7 ≡ 2 (mod 5)
//!
//! let u8 = multiplicative_group(8).unwrap();
//! assert_eq!(u8.carrier(), &[1, 3, 5, 7]);
//! assert_eq!(u8.identity(), 1);
//! assert_eq!(u8.operate(3, 5), 7); // 3 * 5 = 15 ≡ 7 (mod 8)
//! ```

mod modular;
mod operation;

pub use modular::{additive_group, multiplicative_group};
pub use operation::{BaseOp, Operation, OperationFn};

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};

/// A finite group: an ordered carrier of distinct elements and an operation.
///
/// Groups are immutable. The identity is computed once at construction and
/// stored, so nothing downstream relies on the position of elements in the
/// carrier. Cloning is cheap apart from the carrier itself.
///
/// The operation is trusted to be closed, associative and invertible over
/// the carrier; only the existence of an identity is checked.
#[derive(Clone)]
pub struct Group {
    name: String,
    carrier: Vec<u32>,
    identity: u32,
    operation: Operation,
}

impl Group {
    /// Create a group from a carrier and an operation.
    ///
    /// The identity is the first carrier element `e` with
    /// `operation(e, x) == x` for every `x` in the carrier.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the carrier is empty
    /// - no carrier element acts as an identity
    ///
    /// # Example
    ///
    /// ```
    /// use modgroup::group::{BaseOp, Group, Operation};
    ///
    /// let op = Operation::modular(BaseOp::Add, 3).unwrap();
    /// let g = Group::new("C3", vec![2, 0, 1], op).unwrap();
    /// assert_eq!(g.identity(), 0);
    /// assert_eq!(g.order(), 3);
    /// ```
    pub fn new(name: impl Into<String>, carrier: Vec<u32>, operation: Operation) -> Result<Self> {
        let name = name.into();
        if carrier.is_empty() {
            return Err(Error::EmptyCarrier);
        }

        let identity = carrier
            .iter()
            .copied()
            .find(|&e| carrier.iter().all(|&x| operation.pair(e, x) == x))
            .ok_or_else(|| Error::NoIdentity { group: name.clone() })?;

        debug!(group = %name, order = carrier.len(), identity, "constructed group");

        Ok(Self {
            name,
            carrier,
            identity,
            operation,
        })
    }

    /// The display name, e.g. `Z/5Z`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of elements in the carrier.
    #[must_use]
    pub fn order(&self) -> usize {
        self.carrier.len()
    }

    /// The carrier, in construction order.
    #[must_use]
    pub fn carrier(&self) -> &[u32] {
        &self.carrier
    }

    /// The identity element.
    #[must_use]
    pub fn identity(&self) -> u32 {
        self.identity
    }

    /// The group operation.
    #[must_use]
    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// Check whether `element` belongs to the carrier.
    #[must_use]
    pub fn contains(&self, element: u32) -> bool {
        self.carrier.contains(&element)
    }

    /// Position of `element` in the carrier.
    #[must_use]
    pub fn position(&self, element: u32) -> Option<usize> {
        self.carrier.iter().position(|&x| x == element)
    }

    /// Compose two elements.
    #[must_use]
    pub fn operate(&self, lhs: u32, rhs: u32) -> u32 {
        self.operation.pair(lhs, rhs)
    }

    /// Compose an ordered sequence of elements.
    #[must_use]
    pub fn operate_all(&self, operands: &[u32]) -> u32 {
        self.operation.apply(operands)
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("name", &self.name)
            .field("carrier", &self.carrier)
            .field("identity", &self.identity)
            .field("operation", &self.operation.symbol())
            .finish()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
