//! A pure-Rust library providing the coordinate and index algebra of
//! N-dimensional arrays whose axes may be stored in a different order, and
//! in a different direction, from the one in which they are presented.
//!
//! [`Dimension`] describes one named axis: its full extent, and an active
//! window `begin..end` within it. [`DimensionSpace`] is an ordered list of
//! `Dimension`s, the *logical order*, together with a *storage order*: a
//! permutation of the same `Dimension`s, each tagged with a [`Direction`].
//! Coordinates are always expressed in logical order. A `DimensionSpace`
//! converts them to and from a logical index, which enumerates the elements
//! inside the windows, and a storage index, which is the position of the
//! element in the full array as it is laid out in memory or on disk.
//!
//! Storage orders are given as lists of [`DimensionStorage`]s, and windows as
//! lists of [`DimensionSubrange`]s. Each refers to a `Dimension` either by its
//! position in the logical order or by its name.
//!
//! [`DimensionSpace::subrange()`] narrows the windows of some `Dimension`s.
//! The resulting space computes, for each of its coordinates, the same storage
//! index as its parent does for the corresponding absolute coordinate. This
//! allows a window of an array to be read without re-deriving its layout.
//!
//! ```
//! use dimspace::{Dimension, DimensionSpace, DimensionStorage, DimensionSubrange, Direction};
//! let space = DimensionSpace::with_storage_order(
//!     [Dimension::new("X", 16).unwrap(), Dimension::new("Y", 32).unwrap()],
//!     [DimensionStorage::named("Y", Direction::Ascending), DimensionStorage::named("X", Direction::Descending)],
//! ).unwrap();
//! let view = space.subrange([DimensionSubrange::named("X", 4, 12)]).unwrap();
//! assert_eq!(view.num_elements(), 8 * 32);
//! assert_eq!(view.storage_index(&[1, 2]), space.storage_index(&[5, 2]));
//! assert_eq!(view.storage_coord(space.storage_index(&[5, 2]).unwrap()).unwrap(), [1, 2]);
//! ```
//!
//! All types are immutable values. Operations that would change a space
//! return a new one instead.

mod error;
pub use error::{DimensionError, InvalidArgument, Result};

mod radix;

mod dimension;
pub use dimension::{Dimension, Direction};

mod descriptor;
pub use descriptor::{AxisRef, Descriptor, DimensionStorage, DimensionSubrange};

mod space;
pub use space::{DimensionSpace, StorageAxis};

pub mod layout;
pub use layout::{Layout, Order};
