//! A single named axis, and the direction in which it is traversed.

use std::cmp::{Ordering};
use std::fmt;

use super::{InvalidArgument, Result};

/// The order in which the positions along an axis are laid out in storage.
#[derive(Debug, Default, Copy, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Position `0` is stored first.
    #[default]
    Ascending,

    /// Position `extent - 1` is stored first.
    Descending,
}

impl Direction {
    /// Maps a position along an axis of length `extent` to the position at
    /// which it is stored.
    ///
    /// This is its own inverse. `value` must be less than `extent`.
    ///
    /// ```
    /// use dimspace::Direction;
    /// assert_eq!(Direction::Ascending.apply(1, 4), 1);
    /// assert_eq!(Direction::Descending.apply(1, 4), 2);
    /// ```
    #[inline(always)]
    pub fn apply(self, value: usize, extent: usize) -> usize {
        debug_assert!(value < extent, "Position {:?} is out of bounds for extent {:?}", value, extent);
        match self {
            Direction::Ascending => value,
            Direction::Descending => (extent - 1) - value,
        }
    }

    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => write!(f, "ascending"),
            Direction::Descending => write!(f, "descending"),
        }
    }
}

// ----------------------------------------------------------------------------

/// One named axis of an N-dimensional index space.
///
/// A `Dimension` has a full `extent`, and an active window `begin..end`
/// within it. Coordinates along the axis are relative to `begin` and range
/// over `0..size()`.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDimension"))]
pub struct Dimension {
    name: String,
    extent: usize,
    begin: usize,
    end: usize,
}

impl Dimension {
    /// Constructs a full-range `Dimension`.
    ///
    /// Fails if `extent` is zero.
    ///
    /// ```
    /// use dimspace::Dimension;
    /// let t = Dimension::new("T", 43).unwrap();
    /// assert_eq!((t.begin(), t.end(), t.size()), (0, 43, 43));
    /// assert!(Dimension::new("T", 0).is_err());
    /// ```
    pub fn new(name: impl Into<String>, extent: usize) -> Result<Self> {
        Self::with_range(name, extent, 0, extent)
    }

    /// Constructs a full-range `Dimension` of extent `1`.
    pub fn unit(name: impl Into<String>) -> Self {
        Self {name: name.into(), extent: 1, begin: 0, end: 1}
    }

    /// Constructs a `Dimension` whose active window is `begin..end`.
    ///
    /// Fails if `extent` is zero or if `begin..end` is not within
    /// `0..extent`.
    pub fn with_range(
        name: impl Into<String>,
        extent: usize,
        begin: usize,
        end: usize,
    ) -> Result<Self> {
        let name = name.into();
        if extent == 0 { return Err(InvalidArgument::ZeroExtent {name}.into()); }
        check_range(&name, begin, end, 0, extent)?;
        Ok(Self {name, extent, begin, end})
    }

    /// Narrows the active window to `begin..end`, which is expressed in
    /// absolute positions and must lie within the current window.
    ///
    /// A window can therefore only shrink.
    ///
    /// ```
    /// use dimspace::Dimension;
    /// let x = Dimension::new("X", 64).unwrap();
    /// let x2 = x.narrow(16, 48).unwrap();
    /// assert_eq!((x2.extent(), x2.size()), (64, 32));
    /// assert!(x2.narrow(0, 56).is_err());
    /// ```
    pub fn narrow(&self, begin: usize, end: usize) -> Result<Self> {
        check_range(&self.name, begin, end, self.begin, self.end)?;
        Ok(Self {name: self.name.clone(), extent: self.extent, begin, end})
    }

    /// This `Dimension` with its window widened to `0..extent`.
    pub fn full(&self) -> Self {
        Self {name: self.name.clone(), extent: self.extent, begin: 0, end: self.extent}
    }

    pub fn name(&self) -> &str { &self.name }

    /// The total number of positions along this axis, ignoring the window.
    pub fn extent(&self) -> usize { self.extent }

    /// The first position inside the window.
    pub fn begin(&self) -> usize { self.begin }

    /// One past the last position inside the window.
    pub fn end(&self) -> usize { self.end }

    /// The number of positions inside the window.
    pub fn size(&self) -> usize { self.end - self.begin }

    pub fn range(&self) -> std::ops::Range<usize> { self.begin..self.end }

    /// Returns `true` if the window is narrower than the extent.
    pub fn is_subrange(&self) -> bool { self.size() != self.extent }
}

fn check_range(name: &str, begin: usize, end: usize, lower: usize, upper: usize) -> Result<()> {
    if lower <= begin && begin <= end && end <= upper {
        Ok(())
    } else {
        Err(InvalidArgument::InvalidRange {name: name.to_string(), begin, end, lower, upper}.into())
    }
}

/// `Dimension`s are ordered by name. Two `Dimension`s with the same name but
/// different bounds are unordered.
///
/// ```
/// use dimspace::Dimension;
/// assert!(Dimension::unit("T") < Dimension::unit("X"));
/// assert!(Dimension::new("C", 84).unwrap() < Dimension::new("Y", 32).unwrap());
/// ```
impl PartialOrd for Dimension {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.name.cmp(&other.name) {
            Ordering::Equal => if self == other { Some(Ordering::Equal) } else { None },
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_subrange() {
            write!(f, "{}={}..{}/{}", self.name, self.begin, self.end, self.extent)
        } else {
            write!(f, "{}={}", self.name, self.extent)
        }
    }
}

// ----------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDimension {
    name: String,
    extent: usize,
    begin: usize,
    end: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDimension> for Dimension {
    type Error = super::DimensionError;

    fn try_from(raw: RawDimension) -> Result<Self> {
        Self::with_range(raw.name, raw.extent, raw.begin, raw.end)
    }
}

// ----------------------------------------------------------------------------
