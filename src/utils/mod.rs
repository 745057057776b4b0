//! Number-theory helpers: divisors, coprimality and residue sets.
//!
//! These are the building blocks for the group constructors. The carrier of
//! the multiplicative group modulo n is [`residues`]`(n)`, and the divisors
//! of a group's order are what Lagrange's theorem allows as subgroup orders.

mod divisors;

pub use divisors::{divisors, proper_divisors};

use crate::error::{Error, Result};

/// Greatest common divisor by Euclid's algorithm.
///
/// `gcd(x, 0) == x`, so `gcd(0, 0) == 0`.
///
/// # Examples
///
/// ```
/// use modgroup::utils::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(7, 0), 7);
/// assert_eq!(gcd(8, 15), 1);
/// ```
#[must_use]
pub fn gcd(mut x: u32, mut y: u32) -> u32 {
    while y != 0 {
        let r = x % y;
        x = y;
        y = r;
    }
    x
}

/// Check whether `x` and `y` share no common factor other than 1.
///
/// # Examples
///
/// ```
/// use modgroup::utils::coprime;
///
/// assert!(coprime(3, 8));
/// assert!(!coprime(4, 8));
/// assert!(coprime(1, 1));
/// ```
#[must_use]
pub fn coprime(x: u32, y: u32) -> bool {
    gcd(x, y) == 1
}

/// All integers k in [1, n] coprime to n, in ascending order.
///
/// Note that k = n is only coprime to n when n = 1, so `residues(1) == [1]`.
///
/// # Errors
///
/// Returns [`Error::InvalidModulus`] if `n` is 0.
///
/// # Examples
///
/// ```
/// use modgroup::utils::residues;
///
/// assert_eq!(residues(8).unwrap(), vec![1, 3, 5, 7]);
/// assert_eq!(residues(7).unwrap(), vec![1, 2, 3, 4, 5, 6]);
/// assert_eq!(residues(1).unwrap(), vec![1]);
/// assert!(residues(0).is_err());
/// ```
pub fn residues(n: u32) -> Result<Vec<u32>> {
    if n == 0 {
        return Err(Error::InvalidModulus(n));
    }
    Ok((1..=n).filter(|&k| coprime(k, n)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(0, 9), 9);
        assert_eq!(gcd(9, 0), 9);
        assert_eq!(gcd(48, 36), 12);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn test_coprime() {
        assert!(coprime(1, 0));
        assert!(!coprime(0, 0));
        assert!(!coprime(6, 9));
        assert!(coprime(9, 10));
    }

    #[test]
    fn test_residues() {
        assert_eq!(residues(2).unwrap(), vec![1]);
        assert_eq!(residues(9).unwrap(), vec![1, 2, 4, 5, 7, 8]);
        assert_eq!(residues(12).unwrap(), vec![1, 5, 7, 11]);
        assert_eq!(residues(0), Err(Error::InvalidModulus(0)));
    }

    #[test]
    fn test_residues_are_coprime() {
        for n in 1..=40 {
            let r = residues(n).unwrap();
            assert!(r.iter().all(|&k| coprime(k, n)));
            assert!(r.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
