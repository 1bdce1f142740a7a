//! Index paths for addressing items in a sectioned data source.
//!
//! An `IndexPath` is the pair of section and item position the host widget
//! uses to ask about a single item. It is a plain value: whether it points
//! at an existing item is only known by asking the data source.

use std::fmt;

/// Identifies one item by its section and its position within that section.
///
/// Index paths are ordered section-major, so sorting a set of paths yields
/// display order.
///
/// # Index Validity
///
/// A path is valid iff `section < section_count` and `item` is below that
/// section's item count. Out-of-range paths are ordinary input: the data
/// source answers them with an absent item, never an error.
///
/// # Example
///
/// ```
/// use array_data_source::IndexPath;
///
/// let path = IndexPath::new(1, 4);
/// assert_eq!(path.section(), 1);
/// assert_eq!(path.item(), 4);
/// assert_eq!(path.row(), 4);
/// assert_eq!(path.to_string(), "[1, 4]");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    /// The section index.
    section: usize,
    /// The item index within the section.
    item: usize,
}

impl IndexPath {
    /// Creates an index path for `item` within `section`.
    #[inline]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// Returns the section index.
    #[inline]
    pub const fn section(&self) -> usize {
        self.section
    }

    /// Returns the item index within the section.
    #[inline]
    pub const fn item(&self) -> usize {
        self.item
    }

    /// Returns the item index within the section.
    ///
    /// Table-like hosts call items rows; this is the same value as [`item`](Self::item).
    #[inline]
    pub const fn row(&self) -> usize {
        self.item
    }

    /// Creates a path in the same section at a different item index.
    #[inline]
    pub const fn sibling(&self, item: usize) -> Self {
        Self::new(self.section, item)
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, item): (usize, usize)) -> Self {
        Self::new(section, item)
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}
