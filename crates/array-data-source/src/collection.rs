//! Grid-like host binding.

use crate::data_source::ArrayDataSource;
use crate::host::CollectionView;
use crate::index_path::IndexPath;
use crate::logging::targets;

/// The calls a grid-like host makes on its data source.
pub trait CollectionViewDataSource<V: CollectionView> {
    /// Returns the number of sections.
    fn number_of_sections_in_collection(&self, view: &V) -> usize;

    /// Returns the number of items in `section`.
    fn number_of_items_in_section(&self, view: &V, section: usize) -> usize;

    /// Returns a configured cell for the item at `index_path`.
    fn cell_for_item_at(&self, view: &V, index_path: IndexPath) -> V::Cell;

    /// Returns a configured supplementary view of `kind` at `index_path`.
    fn view_for_supplementary_element(
        &self,
        view: &V,
        kind: &str,
        index_path: IndexPath,
    ) -> V::SupplementaryView;
}

impl<T, V> CollectionViewDataSource<V> for ArrayDataSource<T, V>
where
    T: Clone + Send + Sync + 'static,
    V: CollectionView,
{
    fn number_of_sections_in_collection(&self, _view: &V) -> usize {
        self.section_count()
    }

    fn number_of_items_in_section(&self, _view: &V, section: usize) -> usize {
        self.item_count(section)
    }

    fn cell_for_item_at(&self, view: &V, index_path: IndexPath) -> V::Cell {
        let identifier = self.cell_identifier(index_path);
        tracing::trace!(target: targets::DATA_SOURCE, %index_path, %identifier, "grid cell");
        let mut cell = view.dequeue_reusable_cell(&identifier, index_path);
        self.configure_cell(&mut cell, index_path);
        cell
    }

    fn view_for_supplementary_element(
        &self,
        view: &V,
        kind: &str,
        index_path: IndexPath,
    ) -> V::SupplementaryView {
        let identifier = self.supplementary_identifier(kind, index_path);
        tracing::trace!(target: targets::DATA_SOURCE, %index_path, kind, %identifier, "supplementary view");
        let mut supplementary = view.dequeue_reusable_supplementary_view(kind, &identifier, index_path);
        self.configure_supplementary_view(&mut supplementary, kind, index_path);
        supplementary
    }
}
