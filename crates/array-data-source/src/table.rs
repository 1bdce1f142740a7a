//! Table-like host binding.

use crate::data_source::ArrayDataSource;
use crate::host::{EditingStyle, TableView};
use crate::index_path::IndexPath;
use crate::logging::targets;

/// The calls a table-like host makes on its data source.
pub trait TableViewDataSource<V: TableView> {
    /// Returns the number of sections.
    fn number_of_sections_in_table(&self, view: &V) -> usize;

    /// Returns the number of rows in `section`.
    fn number_of_rows_in_section(&self, view: &V, section: usize) -> usize;

    /// Returns a configured cell for the row at `index_path`.
    fn cell_for_row_at(&self, view: &V, index_path: IndexPath) -> V::Cell;

    /// Returns the header title for `section`.
    fn title_for_header_in_section(&self, _view: &V, _section: usize) -> Option<String> {
        None
    }

    /// Returns whether the row at `index_path` can be edited.
    fn can_edit_row_at(&self, _view: &V, _index_path: IndexPath) -> bool {
        false
    }

    /// Commits an editing action for the row at `index_path`.
    fn commit_editing_style(&self, _view: &V, _style: EditingStyle, _index_path: IndexPath) {}

    /// Returns whether the row at `index_path` can be moved.
    fn can_move_row_at(&self, _view: &V, _index_path: IndexPath) -> bool {
        false
    }

    /// Commits a row move.
    fn move_row(&self, _view: &V, _from: IndexPath, _to: IndexPath) {}
}

impl<T, V> TableViewDataSource<V> for ArrayDataSource<T, V>
where
    T: Clone + Send + Sync + 'static,
    V: TableView,
{
    fn number_of_sections_in_table(&self, _view: &V) -> usize {
        self.section_count()
    }

    fn number_of_rows_in_section(&self, _view: &V, section: usize) -> usize {
        self.item_count(section)
    }

    fn cell_for_row_at(&self, view: &V, index_path: IndexPath) -> V::Cell {
        let identifier = self.cell_identifier(index_path);
        tracing::trace!(target: targets::DATA_SOURCE, %index_path, %identifier, "table cell");
        let mut cell = view.dequeue_reusable_cell(&identifier, index_path);
        self.configure_cell(&mut cell, index_path);
        cell
    }

    fn title_for_header_in_section(&self, _view: &V, section: usize) -> Option<String> {
        self.header_title(section)
    }

    fn can_edit_row_at(&self, _view: &V, index_path: IndexPath) -> bool {
        self.can_edit(index_path)
    }

    fn commit_editing_style(&self, view: &V, style: EditingStyle, index_path: IndexPath) {
        self.commit_edit(view, style, index_path);
    }

    fn can_move_row_at(&self, _view: &V, index_path: IndexPath) -> bool {
        self.can_move(index_path)
    }

    fn move_row(&self, view: &V, from: IndexPath, to: IndexPath) {
        self.move_item(view, from, to);
    }
}
