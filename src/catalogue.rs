//! Groups by their common notation.
//!
//! Accepts the usual short names for the modular groups, so that callers
//! can write `Z12` or `U(8)` instead of picking a constructor.

use crate::builder::GroupKind;
use crate::error::{Error, Result};
use crate::group::Group;

/// Retrieve a group by its notation.
///
/// Supported forms (case-insensitive, surrounding whitespace ignored):
/// - **Additive**: `Z12`, `Z_12`, `Z/12`, `Z/12Z`
/// - **Multiplicative**: `U8`, `U_8`, `U(8)`
///
/// # Errors
///
/// Returns [`Error::InvalidParams`] for unrecognised notation and
/// [`Error::InvalidModulus`] for a zero modulus.
///
/// # Example
///
/// ```
/// use modgroup::catalogue::get_by_name;
///
/// let g = get_by_name("Z/12Z").unwrap();
/// assert_eq!(g.order(), 12);
///
/// let u = get_by_name("U(8)").unwrap();
/// assert_eq!(u.carrier(), &[1, 3, 5, 7]);
/// ```
pub fn get_by_name(name: &str) -> Result<Group> {
    let (kind, n) = parse_notation(name)?;
    kind.build(n)
}

/// List the accepted notations, using n = 12 as the example modulus.
#[must_use]
pub fn list_notations() -> Vec<&'static str> {
    vec!["Z12", "Z_12", "Z/12", "Z/12Z", "U12", "U_12", "U(12)"]
}

fn parse_notation(name: &str) -> Result<(GroupKind, u32)> {
    let upper = name.trim().to_uppercase();
    let unknown = || Error::invalid_params(format!("unknown group notation: {name}"));

    let (kind, rest) = if let Some(rest) = upper.strip_prefix('Z') {
        let rest = rest.strip_prefix(|c: char| c == '_' || c == '/').unwrap_or(rest);
        (GroupKind::Additive, rest.strip_suffix('Z').unwrap_or(rest))
    } else if let Some(rest) = upper.strip_prefix('U') {
        let rest = rest.strip_prefix('_').unwrap_or(rest);
        let rest = match rest.strip_prefix('(') {
            Some(inner) => inner.strip_suffix(')').ok_or_else(unknown)?,
            None => rest,
        };
        (GroupKind::Multiplicative, rest)
    } else {
        return Err(unknown());
    };

    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unknown());
    }
    let n = rest.parse::<u32>().map_err(|_| unknown())?;
    Ok((kind, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_additive_notations() {
        for name in ["Z12", "z12", "Z_12", "Z/12", "Z/12Z", " z/12z "] {
            let g = get_by_name(name).unwrap();
            assert_eq!(g.name(), "Z/12Z", "{name}");
        }
    }

    #[test]
    fn test_multiplicative_notations() {
        for name in ["U12", "u12", "U_12", "U(12)"] {
            let g = get_by_name(name).unwrap();
            assert_eq!(g.carrier(), &[1, 5, 7, 11], "{name}");
        }
    }

    #[test]
    fn test_listed_notations_parse() {
        for name in list_notations() {
            assert!(get_by_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_invalid_notation() {
        for name in ["", "Z", "U()", "U(8", "S3", "Z-4", "Z/4Q", "Z99999999999"] {
            assert!(
                matches!(get_by_name(name), Err(Error::InvalidParams { .. })),
                "{name}"
            );
        }
        assert_eq!(get_by_name("Z0").unwrap_err(), Error::InvalidModulus(0));
    }
}
