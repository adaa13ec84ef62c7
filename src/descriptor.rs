//! Descriptors that refer to a [`Dimension`] of a [`DimensionSpace`] either
//! by its position in the logical order or by its name.
//!
//! [`DimensionSpace`]: super::DimensionSpace

use std::fmt;
use std::ops::{Range};

use super::{Dimension, Direction, DimensionError, Result};

/// Identifies one [`Dimension`] of a list, by position or by name.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisRef {
    Index(usize),
    Name(String),
}

impl AxisRef {
    /// Returns the position in `dimensions` of the `Dimension` that `self`
    /// refers to.
    pub fn resolve(&self, dimensions: &[Dimension]) -> Result<usize> {
        let position = match self {
            AxisRef::Index(index) => Some(*index).filter(|&i| i < dimensions.len()),
            AxisRef::Name(name) => dimensions.iter().position(|d| d.name() == name),
        };
        position.ok_or_else(|| DimensionError::UnknownAxis {axis: self.clone()})
    }
}

impl fmt::Display for AxisRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisRef::Index(index) => write!(f, "#{}", index),
            AxisRef::Name(name) => write!(f, "`{}`", name),
        }
    }
}

impl From<usize> for AxisRef {
    fn from(index: usize) -> Self { AxisRef::Index(index) }
}

impl From<&str> for AxisRef {
    fn from(name: &str) -> Self { AxisRef::Name(name.to_string()) }
}

impl From<String> for AxisRef {
    fn from(name: String) -> Self { AxisRef::Name(name) }
}

// ----------------------------------------------------------------------------

/// Implemented by descriptors that refer to one `Dimension`.
pub trait Descriptor {
    fn axis(&self) -> &AxisRef;
}

/// Resolves the axis of every descriptor, in order.
///
/// Fails if a descriptor refers to a `Dimension` that is not in `dimensions`,
/// or to one already referred to by an earlier descriptor.
pub(crate) fn resolve_all<'a, D: 'a + Descriptor>(
    dimensions: &[Dimension],
    descriptors: impl IntoIterator<Item=&'a D>,
) -> Result<Vec<usize>> {
    let mut seen = vec![false; dimensions.len()];
    descriptors.into_iter().map(|descriptor| {
        let axis = descriptor.axis();
        let position = axis.resolve(dimensions)?;
        if std::mem::replace(&mut seen[position], true) {
            return Err(DimensionError::DuplicateAxis {axis: axis.clone()});
        }
        Ok(position)
    }).collect()
}

// ----------------------------------------------------------------------------

/// Specifies the storage direction of one `Dimension`.
///
/// A list of these specifies a storage order: the first entry is the axis
/// that varies fastest in storage.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionStorage {
    axis: AxisRef,
    direction: Direction,
}

impl DimensionStorage {
    pub fn new(axis: impl Into<AxisRef>, direction: Direction) -> Self {
        Self {axis: axis.into(), direction}
    }

    /// Refers to a `Dimension` by its position in the logical order.
    pub fn indexed(index: usize, direction: Direction) -> Self {
        Self::new(AxisRef::Index(index), direction)
    }

    /// Refers to a `Dimension` by name.
    pub fn named(name: impl Into<String>, direction: Direction) -> Self {
        Self::new(AxisRef::Name(name.into()), direction)
    }

    pub fn direction(&self) -> Direction { self.direction }
}

impl Descriptor for DimensionStorage {
    fn axis(&self) -> &AxisRef { &self.axis }
}

impl From<(usize, Direction)> for DimensionStorage {
    fn from((index, direction): (usize, Direction)) -> Self { Self::indexed(index, direction) }
}

impl From<(&str, Direction)> for DimensionStorage {
    fn from((name, direction): (&str, Direction)) -> Self { Self::named(name, direction) }
}

// ----------------------------------------------------------------------------

/// Specifies a window `begin..end` for one `Dimension`.
///
/// The bounds are relative to the current window of the `Dimension`.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionSubrange {
    axis: AxisRef,
    begin: usize,
    end: usize,
}

impl DimensionSubrange {
    pub fn new(axis: impl Into<AxisRef>, begin: usize, end: usize) -> Self {
        Self {axis: axis.into(), begin, end}
    }

    /// Refers to a `Dimension` by its position in the logical order.
    pub fn indexed(index: usize, begin: usize, end: usize) -> Self {
        Self::new(AxisRef::Index(index), begin, end)
    }

    /// Refers to a `Dimension` by name.
    pub fn named(name: impl Into<String>, begin: usize, end: usize) -> Self {
        Self::new(AxisRef::Name(name.into()), begin, end)
    }

    pub fn begin(&self) -> usize { self.begin }

    pub fn end(&self) -> usize { self.end }

    /// Narrows `dimension` by this window.
    ///
    /// Fails if `begin..end` does not fit within `0..dimension.size()`.
    pub(crate) fn apply(&self, dimension: &Dimension) -> Result<Dimension> {
        // Offsets beyond the window are rejected by `narrow()`; saturate so
        // that they cannot wrap around.
        let begin = dimension.begin().saturating_add(self.begin);
        let end = dimension.begin().saturating_add(self.end);
        dimension.narrow(begin, end)
    }
}

impl Descriptor for DimensionSubrange {
    fn axis(&self) -> &AxisRef { &self.axis }
}

impl From<(usize, Range<usize>)> for DimensionSubrange {
    fn from((index, range): (usize, Range<usize>)) -> Self {
        Self::indexed(index, range.start, range.end)
    }
}

impl From<(&str, Range<usize>)> for DimensionSubrange {
    fn from((name, range): (&str, Range<usize>)) -> Self {
        Self::named(name, range.start, range.end)
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> Vec<Dimension> {
        vec![Dimension::new("X", 3).unwrap(), Dimension::new("Y", 4).unwrap()]
    }

    #[test]
    fn resolve() {
        let dims = dims();
        assert_eq!(AxisRef::from(1usize).resolve(&dims), Ok(1));
        assert_eq!(AxisRef::from("X").resolve(&dims), Ok(0));
        assert_eq!(
            AxisRef::from(2usize).resolve(&dims),
            Err(DimensionError::UnknownAxis {axis: AxisRef::Index(2)}),
        );
        assert_eq!(
            AxisRef::from("Z").resolve(&dims),
            Err(DimensionError::UnknownAxis {axis: AxisRef::Name("Z".to_string())}),
        );
    }

    #[test]
    fn resolve_all_mixed() {
        let dims = dims();
        let order = [
            DimensionStorage::named("Y", Direction::Descending),
            DimensionStorage::indexed(0, Direction::Ascending),
        ];
        assert_eq!(resolve_all(&dims, &order), Ok(vec![1, 0]));

        // The same axis by name and by index.
        let order = [
            DimensionStorage::named("Y", Direction::Descending),
            DimensionStorage::indexed(1, Direction::Ascending),
        ];
        assert_eq!(
            resolve_all(&dims, &order),
            Err(DimensionError::DuplicateAxis {axis: AxisRef::Index(1)}),
        );
    }

    #[test]
    fn subrange_is_relative() {
        let y = Dimension::new("Y", 8).unwrap().narrow(3, 6).unwrap();
        let narrowed = DimensionSubrange::from(("Y", 1usize..3)).apply(&y).unwrap();
        assert_eq!(narrowed.range(), 4..6);
        assert!(DimensionSubrange::indexed(0, 1, 4).apply(&y).is_err());
        assert!(DimensionSubrange::indexed(0, usize::MAX, usize::MAX).apply(&y).is_err());
    }

    #[test]
    fn from_tuples() {
        assert_eq!(
            DimensionStorage::from((1usize, Direction::Descending)),
            DimensionStorage::indexed(1, Direction::Descending),
        );
        let storage = DimensionStorage::from(("T", Direction::Ascending));
        assert_eq!(storage.axis(), &AxisRef::Name("T".to_string()));
        assert_eq!(storage.direction(), Direction::Ascending);
        let subrange = DimensionSubrange::from((0usize, 2..5));
        assert_eq!(subrange, DimensionSubrange::indexed(0, 2, 5));
        assert_eq!((subrange.begin(), subrange.end()), (2, 5));
    }

    #[test]
    fn display() {
        assert_eq!(AxisRef::Index(3).to_string(), "#3");
        assert_eq!(AxisRef::from("T").to_string(), "`T`");
    }
}
