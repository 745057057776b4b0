//! Constructors for the additive and multiplicative groups modulo n.

use super::{BaseOp, Group, Operation};
use crate::error::{Error, Result};
use crate::utils::residues;

/// The additive group Z/nZ: carrier `[0, n)` under addition mod n.
///
/// # Errors
///
/// Returns [`Error::InvalidModulus`] if `n` is 0.
///
/// # Example
///
/// ```
/// use modgroup::group::additive_group;
///
/// let z4 = additive_group(4).unwrap();
/// assert_eq!(z4.order(), 4);
/// assert_eq!(z4.operate(3, 3), 2);
/// ```
pub fn additive_group(n: u32) -> Result<Group> {
    if n == 0 {
        return Err(Error::InvalidModulus(n));
    }
    let operation = Operation::modular(BaseOp::Add, n)?;
    Group::new(format!("Z/{n}Z"), (0..n).collect(), operation)
}

/// The group of units (Z/nZ)^×: residues coprime to n under multiplication mod n.
///
/// Each residue is stored as its representative mod n. This only differs
/// from [`residues`] when `n == 1`, where the lone residue 1 becomes 0 and
/// the result is the trivial group `[0]`.
///
/// # Errors
///
/// Returns [`Error::InvalidModulus`] if `n` is 0.
///
/// # Example
///
/// ```
/// use modgroup::group::multiplicative_group;
///
/// let u10 = multiplicative_group(10).unwrap();
/// assert_eq!(u10.carrier(), &[1, 3, 7, 9]);
/// assert_eq!(u10.operate(3, 7), 1);
/// ```
pub fn multiplicative_group(n: u32) -> Result<Group> {
    let carrier = residues(n)?.into_iter().map(|k| k % n).collect();
    let operation = Operation::modular(BaseOp::Mul, n)?;
    Group::new(format!("(Z/{n}Z)^×"), carrier, operation)
}
