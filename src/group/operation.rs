//! Group operations built from a base operator and a modulus.
//!
//! An [`Operation`] maps an ordered slice of operands to a single element.
//! The modular operations fold the operands with a [`BaseOp`] and reduce
//! modulo n after every step, so intermediate values never exceed `u64`.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Shared function type behind an [`Operation`].
pub type OperationFn = dyn Fn(&[u32]) -> u32 + Send + Sync;

/// The base operator folded over the operands of a modular operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BaseOp {
    /// Integer addition.
    Add,
    /// Integer multiplication.
    Mul,
}

impl BaseOp {
    /// Apply the operator to two already-reduced values.
    ///
    /// Both inputs are below 2^32, so neither the sum nor the product
    /// overflows `u64`.
    #[must_use]
    pub fn apply(self, lhs: u64, rhs: u64) -> u64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Mul => lhs * rhs,
        }
    }

    /// The neutral element of the operator over the integers.
    #[must_use]
    pub fn neutral(self) -> u64 {
        match self {
            Self::Add => 0,
            Self::Mul => 1,
        }
    }

    /// Symbol used when rendering tables and names.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Mul => "*",
        }
    }
}

/// A closed operation over group elements.
///
/// Cloning is cheap: the underlying function is reference-counted.
///
/// # Example
///
/// ```
/// use modgroup::group::{BaseOp, Operation};
///
/// let add_mod_5 = Operation::modular(BaseOp::Add, 5).unwrap();
/// assert_eq!(add_mod_5.apply(&[3, 4]), 2);
/// assert_eq!(add_mod_5.apply(&[1, 2, 3, 4]), 0);
///
/// let mul_mod_8 = Operation::modular(BaseOp::Mul, 8).unwrap();
/// assert_eq!(mul_mod_8.pair(3, 5), 7);
/// ```
#[derive(Clone)]
pub struct Operation {
    func: Arc<OperationFn>,
    symbol: String,
}

impl Operation {
    /// Build the "fold with `base`, then reduce mod `modulus`" operation.
    ///
    /// Operands are reduced before folding, and the accumulator is reduced
    /// after each step. An empty operand slice yields the base operator's
    /// neutral element modulo `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidModulus`] if `modulus` is 0.
    pub fn modular(base: BaseOp, modulus: u32) -> Result<Self> {
        if modulus == 0 {
            return Err(Error::InvalidModulus(modulus));
        }
        let m = u64::from(modulus);

        let func = move |operands: &[u32]| -> u32 {
            let folded = operands
                .iter()
                .map(|&x| u64::from(x) % m)
                .reduce(|acc, x| base.apply(acc, x) % m)
                .unwrap_or(base.neutral() % m);
            // folded < m <= u32::MAX
            folded as u32
        };

        Ok(Self {
            func: Arc::new(func),
            symbol: base.symbol().to_string(),
        })
    }

    /// Wrap an arbitrary function as an operation.
    ///
    /// Nothing about the function is validated; it is the caller's job to
    /// make it closed over the intended carrier.
    pub fn from_fn<F>(symbol: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[u32]) -> u32 + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            symbol: symbol.into(),
        }
    }

    /// Apply the operation to an ordered slice of operands.
    #[must_use]
    pub fn apply(&self, operands: &[u32]) -> u32 {
        (self.func)(operands)
    }

    /// Apply the operation to an ordered pair.
    #[must_use]
    pub fn pair(&self, lhs: u32, rhs: u32) -> u32 {
        (self.func)(&[lhs, rhs])
    }

    /// The operator symbol, e.g. `+` or `*`.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("symbol", &self.symbol)
            .finish_non_exhaustive()
    }
}
