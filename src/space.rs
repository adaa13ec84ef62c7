//! [`DimensionSpace`]: a list of [`Dimension`]s with a logical order and an
//! independent storage order.

use std::fmt;

use super::radix;
use super::descriptor::{resolve_all};
use super::{
    Dimension, Direction, DimensionStorage, DimensionSubrange,
    DimensionError, InvalidArgument, Result,
};

/// One entry of a resolved storage order.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StorageAxis {
    /// The position of the `Dimension` in the logical order.
    pub index: usize,

    /// The direction in which the `Dimension` is stored.
    pub direction: Direction,
}

impl From<StorageAxis> for DimensionStorage {
    fn from(axis: StorageAxis) -> Self { DimensionStorage::indexed(axis.index, axis.direction) }
}

// ----------------------------------------------------------------------------

/// An N-dimensional index space.
///
/// The *logical order* is the list of [`Dimension`]s as supplied by the
/// caller. It defines the layout of coordinate vectors: `coord[i]` is a
/// position within the window of `logical_order()[i]`.
///
/// The *storage order* is a permutation of the same `Dimension`s, each with a
/// [`Direction`]. It defines how a coordinate is folded into a linear storage
/// index. The first entry varies fastest.
///
/// Both orderings use mixed-radix numbering with the first axis varying
/// fastest. Logical indices count the elements inside the windows. Storage
/// indices address the whole un-windowed array, so a windowed space computes
/// the same storage index for a coordinate as its un-windowed parent does for
/// the corresponding absolute coordinate.
///
/// ```
/// use dimspace::{Dimension, DimensionSpace, DimensionStorage, Direction};
/// let dims = [Dimension::new("X", 3).unwrap(), Dimension::new("Y", 4).unwrap()];
/// let space = DimensionSpace::new(dims.clone()).unwrap();
/// assert_eq!(space.num_elements(), 12);
/// assert_eq!(space.logical_coord(5).unwrap(), [2, 1]);
/// assert_eq!(space.logical_index(&[2, 1]).unwrap(), 5);
///
/// let flipped = DimensionSpace::with_storage_order(dims, [
///     DimensionStorage::named("X", Direction::Descending),
///     DimensionStorage::named("Y", Direction::Ascending),
/// ]).unwrap();
/// assert_eq!(flipped.storage_index(&[0, 0]).unwrap(), 2);
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDimensionSpace"))]
pub struct DimensionSpace {
    logical: Vec<Dimension>,
    storage: Vec<StorageAxis>,
}

impl DimensionSpace {
    /// Constructs a `DimensionSpace` whose storage order is the logical
    /// order, all ascending.
    ///
    /// Fails if two `Dimension`s have the same name.
    pub fn new(dimensions: impl Into<Vec<Dimension>>) -> Result<Self> {
        let logical: Vec<Dimension> = dimensions.into();
        check_dimensions(&logical)?;
        let storage = (0..logical.len())
            .map(|index| StorageAxis {index, direction: Direction::Ascending})
            .collect();
        Ok(Self::new_inner(logical, storage))
    }

    /// Constructs a `DimensionSpace` with the given storage order.
    ///
    /// `order` must mention every `Dimension` exactly once, by position or by
    /// name. Its first entry is the axis that varies fastest in storage.
    pub fn with_storage_order<D: Into<DimensionStorage>>(
        dimensions: impl Into<Vec<Dimension>>,
        order: impl IntoIterator<Item=D>,
    ) -> Result<Self> {
        let logical: Vec<Dimension> = dimensions.into();
        check_dimensions(&logical)?;
        let order: Vec<DimensionStorage> = order.into_iter().map(Into::into).collect();
        let positions = resolve_all(&logical, &order)?;
        if positions.len() < logical.len() {
            // No duplicates, so some position is absent.
            let mut present = vec![false; logical.len()];
            for &p in &positions { present[p] = true; }
            if let Some(missing) = present.iter().position(|&p| !p) {
                return Err(DimensionError::MissingAxis {name: logical[missing].name().to_string()});
            }
        }
        let storage = positions.into_iter().zip(&order)
            .map(|(index, descriptor)| StorageAxis {index, direction: descriptor.direction()})
            .collect();
        Ok(Self::new_inner(logical, storage))
    }

    fn new_inner(logical: Vec<Dimension>, storage: Vec<StorageAxis>) -> Self {
        let space = Self {logical, storage};
        tracing::debug!("constructed dimension space {}", space);
        space
    }

    /// The `Dimension`s in logical order.
    pub fn logical_order(&self) -> &[Dimension] { &self.logical }

    /// The resolved storage order, fastest-varying first.
    pub fn storage_order(&self) -> &[StorageAxis] { &self.storage }

    /// The number of `Dimension`s.
    pub fn size(&self) -> usize { self.logical.len() }

    /// The number of elements inside the windows of all `Dimension`s.
    pub fn num_elements(&self) -> usize {
        self.logical.iter().map(Dimension::size).product()
    }

    /// The number of elements addressed by storage indices, i.e. the product
    /// of the full extents.
    pub fn num_storage_elements(&self) -> usize {
        self.logical.iter().map(Dimension::extent).product()
    }

    /// Returns the position in the logical order of the `Dimension` called
    /// `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.logical.iter().position(|d| d.name() == name)
    }

    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.position(name).map(|i| &self.logical[i])
    }

    /// The start of the window of each `Dimension`, in logical order.
    pub fn begin_offsets(&self) -> Vec<usize> {
        self.logical.iter().map(Dimension::begin).collect()
    }

    /// This space with every window widened to the full extent.
    pub fn full(&self) -> Self {
        Self {
            logical: self.logical.iter().map(Dimension::full).collect(),
            storage: self.storage.clone(),
        }
    }

    fn check_coord(&self, coord: &[usize]) -> Result<()> {
        if coord.len() != self.logical.len() {
            return Err(InvalidArgument::CoordLength {
                expected: self.logical.len(),
                actual: coord.len(),
            }.into());
        }
        for (&value, d) in coord.iter().zip(&self.logical) {
            if value >= d.size() {
                return Err(InvalidArgument::CoordOutOfRange {
                    name: d.name().to_string(),
                    value,
                    size: d.size(),
                }.into());
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------------

    /// Returns the logical coordinate with logical index `index`.
    ///
    /// Fails unless `index < self.num_elements()`.
    pub fn logical_coord(&self, index: usize) -> Result<Vec<usize>> {
        let total = self.num_elements();
        if index >= total {
            return Err(InvalidArgument::IndexOutOfRange {index, total}.into());
        }
        Ok(radix::from_usize(self.logical.iter().map(Dimension::size), index).1)
    }

    /// Returns the logical index of `coord`.
    ///
    /// Fails if `coord` has the wrong length or lies outside the windows.
    pub fn logical_index(&self, coord: &[usize]) -> Result<usize> {
        self.check_coord(coord)?;
        Ok(self.fold_logical(coord))
    }

    /// Returns the storage index of the logical coordinate `coord`.
    ///
    /// Fails if `coord` has the wrong length or lies outside the windows.
    pub fn storage_index(&self, coord: &[usize]) -> Result<usize> {
        self.check_coord(coord)?;
        Ok(self.fold_storage(coord))
    }

    /// Returns the logical coordinate whose storage index is `index`.
    ///
    /// Fails unless `index < self.num_storage_elements()`, or if `index`
    /// addresses an element outside the windows.
    pub fn storage_coord(&self, index: usize) -> Result<Vec<usize>> {
        let total = self.num_storage_elements();
        if index >= total {
            return Err(InvalidArgument::IndexOutOfRange {index, total}.into());
        }
        let extents = self.storage.iter().map(|axis| self.logical[axis.index].extent());
        let (_, digits) = radix::from_usize(extents, index);
        let mut coord = vec![0; self.logical.len()];
        for (digit, axis) in digits.into_iter().zip(&self.storage) {
            let d = &self.logical[axis.index];
            let absolute = axis.direction.apply(digit, d.extent());
            if !d.range().contains(&absolute) {
                return Err(InvalidArgument::IndexOutsideWindow {index, name: d.name().to_string()}.into());
            }
            coord[axis.index] = absolute - d.begin();
        }
        Ok(coord)
    }

    /// `logical_index()` without the checks.
    pub(crate) fn fold_logical(&self, coord: &[usize]) -> usize {
        radix::to_usize(coord.iter().copied().zip(self.logical.iter().map(Dimension::size)))
    }

    /// `storage_index()` without the checks.
    pub(crate) fn fold_storage(&self, coord: &[usize]) -> usize {
        radix::to_usize(self.storage.iter().map(|axis| {
            let d = &self.logical[axis.index];
            (axis.direction.apply(coord[axis.index] + d.begin(), d.extent()), d.extent())
        }))
    }

    // ------------------------------------------------------------------------

    /// Apply `f` to every logical coordinate, in logical index order.
    pub fn each_coord(&self, f: impl FnMut(&[usize])) {
        let sizes: Vec<usize> = self.logical.iter().map(Dimension::size).collect();
        radix::each(&sizes, f);
    }

    /// Every logical coordinate, in logical index order.
    pub fn coords(&self) -> impl Iterator<Item=Vec<usize>> + '_ {
        (0..self.num_elements()).map(move |index| {
            radix::from_usize(self.logical.iter().map(Dimension::size), index).1
        })
    }

    /// The storage index of every logical coordinate, in logical index order.
    ///
    /// ```
    /// use dimspace::{Dimension, DimensionSpace, DimensionSubrange};
    /// let space = DimensionSpace::new([
    ///     Dimension::new("X", 4).unwrap(),
    ///     Dimension::new("Y", 3).unwrap(),
    /// ]).unwrap();
    /// let view = space.subrange([DimensionSubrange::named("X", 1, 3)]).unwrap();
    /// assert_eq!(view.storage_indices().collect::<Vec<_>>(), [1, 2, 5, 6, 9, 10]);
    /// ```
    pub fn storage_indices(&self) -> impl Iterator<Item=usize> + '_ {
        self.coords().map(move |coord| self.fold_storage(&coord))
    }

    // ------------------------------------------------------------------------

    /// Constructs a view of this space in which some `Dimension`s have
    /// narrower windows.
    ///
    /// The bounds of each descriptor are relative to the current window of its
    /// `Dimension`, and must lie within it. `Dimension`s without a descriptor
    /// are unchanged, as is the storage order. For any coordinate `c` of the
    /// result, `storage_index(c)` is `self.storage_index(c + offset)` where
    /// `offset` holds the `begin` of each descriptor.
    ///
    /// ```
    /// use dimspace::{Dimension, DimensionSpace, DimensionSubrange};
    /// let space = DimensionSpace::new([
    ///     Dimension::new("X", 16).unwrap(),
    ///     Dimension::new("Y", 32).unwrap(),
    /// ]).unwrap();
    /// let view = space.subrange([DimensionSubrange::named("Y", 24, 32)]).unwrap();
    /// assert_eq!(view.num_elements(), 16 * 8);
    /// assert_eq!(view.storage_index(&[3, 1]), space.storage_index(&[3, 25]));
    /// ```
    pub fn subrange<D: Into<DimensionSubrange>>(
        &self,
        descriptors: impl IntoIterator<Item=D>,
    ) -> Result<Self> {
        let descriptors: Vec<DimensionSubrange> = descriptors.into_iter().map(Into::into).collect();
        let positions = resolve_all(&self.logical, &descriptors)?;
        let mut logical = self.logical.clone();
        for (position, descriptor) in positions.into_iter().zip(&descriptors) {
            logical[position] = descriptor.apply(&self.logical[position])?;
        }
        let space = Self {logical, storage: self.storage.clone()};
        tracing::debug!("narrowed dimension space {} to {}", self, space);
        Ok(space)
    }
}

/// Checks that names are unique and that the whole array is addressable.
fn check_dimensions(dimensions: &[Dimension]) -> Result<()> {
    let mut total: usize = 1;
    for (i, d) in dimensions.iter().enumerate() {
        if dimensions[..i].iter().any(|other| other.name() == d.name()) {
            return Err(DimensionError::DuplicateName {name: d.name().to_string()});
        }
        total = total.checked_mul(d.extent()).ok_or_else(|| {
            InvalidArgument::TooManyElements {name: d.name().to_string()}
        })?;
    }
    Ok(())
}

impl fmt::Display for DimensionSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, d) in self.logical.iter().enumerate() {
            if i > 0 { write!(f, ",")?; }
            write!(f, "{}", d)?;
        }
        write!(f, "}} storage [")?;
        for (i, axis) in self.storage.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{} {}", self.logical[axis.index].name(), axis.direction)?;
        }
        write!(f, "]")
    }
}

// ----------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDimensionSpace {
    logical: Vec<Dimension>,
    storage: Vec<StorageAxis>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDimensionSpace> for DimensionSpace {
    type Error = DimensionError;

    fn try_from(raw: RawDimensionSpace) -> Result<Self> {
        Self::with_storage_order(raw.logical, raw.storage)
    }
}

// ----------------------------------------------------------------------------
