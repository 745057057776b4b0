//! Divisor enumeration.

use crate::error::{Error, Result};

/// All positive divisors of `n`, in ascending order.
///
/// # Errors
///
/// Returns [`Error::InvalidModulus`] if `n` is 0.
///
/// # Examples
///
/// ```
/// use modgroup::utils::divisors;
///
/// assert_eq!(divisors(12).unwrap(), vec![1, 2, 3, 4, 6, 12]);
/// assert_eq!(divisors(1).unwrap(), vec![1]);
/// assert!(divisors(0).is_err());
/// ```
pub fn divisors(n: u32) -> Result<Vec<u32>> {
    if n == 0 {
        return Err(Error::InvalidModulus(n));
    }

    // Pair each small divisor d <= sqrt(n) with n / d.
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = 1u32;
    while u64::from(d) * u64::from(d) <= u64::from(n) {
        if n % d == 0 {
            small.push(d);
            if d != n / d {
                large.push(n / d);
            }
        }
        d += 1;
    }

    small.extend(large.into_iter().rev());
    Ok(small)
}

/// Divisors of `n` other than 1 and `n` itself, in ascending order.
///
/// The result is empty exactly when `n` is prime or `n == 1`.
///
/// # Errors
///
/// Returns [`Error::InvalidModulus`] if `n` is 0.
///
/// # Examples
///
/// ```
/// use modgroup::utils::proper_divisors;
///
/// assert_eq!(proper_divisors(12).unwrap(), vec![2, 3, 4, 6]);
/// assert!(proper_divisors(7).unwrap().is_empty());
/// assert!(proper_divisors(1).unwrap().is_empty());
/// ```
pub fn proper_divisors(n: u32) -> Result<Vec<u32>> {
    let all = divisors(n)?;
    if all.len() <= 2 {
        return Ok(Vec::new());
    }
    Ok(all[1..all.len() - 1].to_vec())
}
