//! Traits for the host widgets that drive a data source.
//!
//! The host widget owns rendering, layout and the reuse pool. A data source
//! only ever asks it for one thing: a reusable rendering surface for an
//! identifier and a position. These traits describe that request for the two
//! widget shapes the data source serves.

use crate::index_path::IndexPath;

/// The surface types a host widget hands out.
pub trait HostView {
    /// The rendering surface for a primary item (a list row or grid cell).
    type Cell;

    /// The rendering surface for a supplementary element (header, footer, ...).
    ///
    /// Hosts without supplementary elements can use `()`.
    type SupplementaryView;
}

/// A table-like host: one column of rows grouped in sections.
pub trait TableView: HostView {
    /// Returns a reusable cell for `identifier`, positioned at `index_path`.
    fn dequeue_reusable_cell(&self, identifier: &str, index_path: IndexPath) -> Self::Cell;
}

/// A grid-like host: cells laid out freely, plus supplementary elements
/// grouped by a kind tag.
pub trait CollectionView: HostView {
    /// Returns a reusable cell for `identifier`, positioned at `index_path`.
    fn dequeue_reusable_cell(&self, identifier: &str, index_path: IndexPath) -> Self::Cell;

    /// Returns a reusable supplementary view of `kind` for `identifier`,
    /// positioned at `index_path`.
    fn dequeue_reusable_supplementary_view(
        &self,
        kind: &str,
        identifier: &str,
        index_path: IndexPath,
    ) -> Self::SupplementaryView;
}

/// The editing action a table host asks the data source to commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditingStyle {
    /// No editing action.
    #[default]
    None,
    /// The row should be deleted.
    Delete,
    /// A row should be inserted.
    Insert,
}
