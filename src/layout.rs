//! Tabular rendering of the indices of a [`DimensionSpace`].
//!
//! This is mostly useful for eyeballing a storage order:
//!
//! ```
//! use dimspace::{Dimension, DimensionSpace, Direction, Order};
//! let space = DimensionSpace::with_storage_order(
//!     [Dimension::new("X", 3).unwrap(), Dimension::new("Y", 2).unwrap()],
//!     [("X", Direction::Descending), ("Y", Direction::Ascending)],
//! ).unwrap();
//! assert_eq!(space.layout(Order::Storage).to_string(), concat!(
//!     "Y\\X | 0 1 2\n",
//!     "----+------\n",
//!     "  0 | 2 1 0\n",
//!     "  1 | 5 4 3\n",
//! ));
//! ```

use std::fmt;

use super::radix;
use super::{Dimension, DimensionSpace};

/// Which index [`Layout`] displays.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Order {
    /// [`DimensionSpace::logical_index()`].
    Logical,

    /// [`DimensionSpace::storage_index()`].
    Storage,
}

/// The return type of [`DimensionSpace::layout()`].
///
/// Displays the index of every coordinate as a table with axis 0 across and
/// axis 1 down. Further axes are shown as a sequence of such tables, each
/// headed by its coordinates along those axes. Coordinates are relative to
/// the windows; indices are as computed by the space.
#[derive(Debug, Copy, Clone)]
pub struct Layout<'a> {
    space: &'a DimensionSpace,
    order: Order,
}

impl DimensionSpace {
    pub fn layout(&self, order: Order) -> Layout<'_> { Layout {space: self, order} }
}

impl Layout<'_> {
    fn index(&self, coord: &[usize]) -> usize {
        match self.order {
            Order::Logical => self.space.fold_logical(coord),
            Order::Storage => self.space.fold_storage(coord),
        }
    }

    fn fmt_plane(&self, f: &mut fmt::Formatter<'_>, plane: &[usize], width: usize) -> fmt::Result {
        let dims = self.space.logical_order();
        if !plane.is_empty() {
            let labels: Vec<String> = dims[2..].iter().zip(plane)
                .map(|(d, c)| format!("{}={}", d.name(), c))
                .collect();
            writeln!(f, "{}", labels.join(", "))?;
        }

        let x = &dims[0];
        let (corner, rows) = match dims.get(1) {
            Some(y) => (format!("{}\\{}", y.name(), x.name()), y.size()),
            None => (x.name().to_string(), 1),
        };
        let label_width = match dims.get(1) {
            Some(_) => corner.chars().count().max(digits(rows - 1)),
            None => corner.chars().count(),
        };

        write!(f, "{:<label_width$} |", corner)?;
        for i in 0..x.size() { write!(f, " {:>width$}", i)?; }
        writeln!(f)?;
        writeln!(f, "{}+{}", "-".repeat(label_width + 1), "-".repeat(x.size() * (width + 1)))?;

        let mut coord = vec![0; dims.len()];
        if dims.len() > 2 { coord[2..].copy_from_slice(plane); }
        for y in 0..rows {
            if dims.len() > 1 {
                coord[1] = y;
                write!(f, "{:>label_width$} |", y)?;
            } else {
                write!(f, "{:label_width$} |", "")?;
            }
            for i in 0..x.size() {
                coord[0] = i;
                write!(f, " {:>width$}", self.index(&coord))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Layout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self.space.logical_order();
        if dims.is_empty() || self.space.num_elements() == 0 { return Ok(()); }

        let mut width = digits(dims[0].size() - 1);
        self.space.each_coord(|coord| { width = width.max(digits(self.index(coord))); });

        let planes: Vec<usize> = dims.iter().skip(2).map(Dimension::size).collect();
        let mut result = Ok(());
        let mut first = true;
        radix::each(&planes, |plane| {
            if result.is_err() { return; }
            if !first { result = writeln!(f); }
            first = false;
            if result.is_ok() { result = self.fmt_plane(f, plane, width); }
        });
        result
    }
}

/// The number of decimal digits in `n`.
fn digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, DimensionSubrange};

    fn dim(name: &str, extent: usize) -> Dimension {
        Dimension::new(name, extent).unwrap()
    }

    #[test]
    fn one_dimension() {
        let space = DimensionSpace::with_storage_order(
            [dim("Single", 4)],
            [("Single", Direction::Descending)],
        ).unwrap();
        assert_eq!(space.layout(Order::Logical).to_string(), concat!(
            "Single | 0 1 2 3\n",
            "-------+--------\n",
            "       | 0 1 2 3\n",
        ));
        assert_eq!(space.layout(Order::Storage).to_string(), concat!(
            "Single | 0 1 2 3\n",
            "-------+--------\n",
            "       | 3 2 1 0\n",
        ));
    }

    #[test]
    fn planes() {
        let space = DimensionSpace::new([dim("X", 2), dim("Y", 2), dim("Z", 2)]).unwrap();
        assert_eq!(space.layout(Order::Storage).to_string(), concat!(
            "Z=0\n",
            "Y\\X | 0 1\n",
            "----+----\n",
            "  0 | 0 1\n",
            "  1 | 2 3\n",
            "\n",
            "Z=1\n",
            "Y\\X | 0 1\n",
            "----+----\n",
            "  0 | 4 5\n",
            "  1 | 6 7\n",
        ));
    }

    #[test]
    fn wide_indices() {
        let space = DimensionSpace::new([dim("X", 4), dim("Y", 3)]).unwrap();
        let view = space.subrange([DimensionSubrange::named("X", 2, 4)]).unwrap();
        assert_eq!(view.layout(Order::Storage).to_string(), concat!(
            "Y\\X |  0  1\n",
            "----+------\n",
            "  0 |  2  3\n",
            "  1 |  6  7\n",
            "  2 | 10 11\n",
        ));
        assert_eq!(view.layout(Order::Logical).to_string(), concat!(
            "Y\\X | 0 1\n",
            "----+----\n",
            "  0 | 0 1\n",
            "  1 | 2 3\n",
            "  2 | 4 5\n",
        ));
    }

    #[test]
    fn nothing_to_show() {
        let space = DimensionSpace::new([dim("X", 4)]).unwrap();
        let view = space.subrange([DimensionSubrange::named("X", 1, 1)]).unwrap();
        assert_eq!(view.layout(Order::Storage).to_string(), "");
        let space = DimensionSpace::new(Vec::<Dimension>::new()).unwrap();
        assert_eq!(space.layout(Order::Logical).to_string(), "");
    }

    #[test]
    fn digit_counts() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(28799), 5);
    }
}
