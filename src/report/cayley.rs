//! Cayley tables.

use std::fmt;

use ndarray::Array2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::group::Group;

/// The operation table of a group.
///
/// Rows and columns follow carrier order; cell `(i, j)` holds
/// `carrier[i] * carrier[j]`.
///
/// # Example
///
/// ```
/// use modgroup::group::additive_group;
/// use modgroup::report::CayleyTable;
///
/// let table = CayleyTable::new(&additive_group(3).unwrap());
/// assert_eq!(table.get(1, 2), 0);
/// assert_eq!(
///     table.to_string(),
///     " + | 0 1 2\n---+------\n 0 | 0 1 2\n 1 | 1 2 0\n 2 | 2 0 1\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CayleyTable {
    symbol: String,
    header: Vec<u32>,
    cells: Array2<u32>,
}

impl CayleyTable {
    /// Compute the full table for `group`.
    #[must_use]
    pub fn new(group: &Group) -> Self {
        let header = group.carrier().to_vec();
        let n = header.len();
        let cells = Array2::from_shape_fn((n, n), |(i, j)| group.operate(header[i], header[j]));

        Self {
            symbol: group.operation().symbol().to_string(),
            header,
            cells,
        }
    }

    /// The carrier elements labelling rows and columns.
    #[must_use]
    pub fn header(&self) -> &[u32] {
        &self.header
    }

    /// The table cells.
    #[must_use]
    pub fn cells(&self) -> &Array2<u32> {
        &self.cells
    }

    /// The product at row `row` and column `col`.
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[[row, col]]
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.header.len()
    }

    /// Field width used when rendering: one more than the widest element.
    #[must_use]
    pub fn field_width(&self) -> usize {
        1 + self
            .header
            .iter()
            .map(|e| e.to_string().len())
            .max()
            .unwrap_or(1)
    }
}

impl fmt::Display for CayleyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.field_width();

        write!(f, "{:>w$} |", self.symbol)?;
        for e in &self.header {
            write!(f, "{e:>w$}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}+{}", "-".repeat(w + 1), "-".repeat(w * self.size()))?;

        for (label, row) in self.header.iter().zip(self.cells.rows()) {
            write!(f, "{label:>w$} |")?;
            for v in row {
                write!(f, "{v:>w$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::{additive_group, multiplicative_group};

    #[test]
    fn test_table_cells() {
        let u8 = multiplicative_group(8).unwrap();
        let table = CayleyTable::new(&u8);
        assert_eq!(table.size(), 4);
        assert_eq!(table.header(), &[1, 3, 5, 7]);
        // Every element of (Z/8Z)^× squares to 1.
        for i in 0..4 {
            assert_eq!(table.get(i, i), 1);
        }
        assert_eq!(table.get(1, 2), 7);
        assert_eq!(table.cells().shape(), &[4, 4]);
    }

    #[test]
    fn test_field_width() {
        assert_eq!(CayleyTable::new(&additive_group(10).unwrap()).field_width(), 2);
        assert_eq!(CayleyTable::new(&additive_group(11).unwrap()).field_width(), 3);
        assert_eq!(CayleyTable::new(&multiplicative_group(101).unwrap()).field_width(), 4);
    }

    #[test]
    fn test_render_wide_elements() {
        let table = CayleyTable::new(&multiplicative_group(12).unwrap());
        let text = table.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  * |  1  5  7 11");
        assert_eq!(lines[1], "----+------------");
        assert_eq!(lines[2], "  1 |  1  5  7 11");
        assert_eq!(lines[5], " 11 | 11  7  5  1");
        assert_eq!(lines.len(), 6);
    }
}
