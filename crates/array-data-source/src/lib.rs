//! A sectioned array data source for table and grid views.
//!
//! This crate binds an in-memory, two-level collection (sections of items)
//! to a list-rendering widget. The host widget drives the data source with
//! structural queries (how many sections, how many items) and requests for
//! rendering surfaces; the data source answers from its [`SectionStore`] and
//! from optional callback hooks supplied by the caller.
//!
//! # Core Types
//!
//! - [`IndexPath`]: Identifies an item by section and position
//! - [`SectionStore`]: Shared, replaceable sections of items
//! - [`DataSourceConfig`]: Default cell identifier and section header titles
//! - [`ArrayDataSource`]: The adapter holding the store, config and hooks
//! - [`TableViewDataSource`] / [`CollectionViewDataSource`]: The call shapes
//!   expected by table-like and grid-like hosts
//!
//! # Example
//!
//! ```
//! use array_data_source::{
//!     ArrayDataSource, DataSourceConfig, HostView, IndexPath, SectionStore, TableView,
//!     TableViewDataSource,
//! };
//!
//! struct Table;
//!
//! #[derive(Debug, Default)]
//! struct Row {
//!     identifier: String,
//!     text: String,
//! }
//!
//! impl HostView for Table {
//!     type Cell = Row;
//!     type SupplementaryView = ();
//! }
//!
//! impl TableView for Table {
//!     fn dequeue_reusable_cell(&self, identifier: &str, _index_path: IndexPath) -> Row {
//!         Row { identifier: identifier.to_string(), ..Default::default() }
//!     }
//! }
//!
//! let store = SectionStore::new(vec![vec!["Apple", "Banana"], vec!["Carrot"]]);
//! let config = DataSourceConfig::new()
//!     .with_default_cell_identifier("Cell")
//!     .with_section_header_titles(vec!["Fruit".into(), "Vegetables".into()]);
//!
//! let source = ArrayDataSource::<_, Table>::with_store(store, config)
//!     .with_configure_cell(|row, _path, item| row.text = item.to_string());
//!
//! let table = Table;
//! assert_eq!(source.number_of_sections_in_table(&table), 2);
//! assert_eq!(source.number_of_rows_in_section(&table, 0), 2);
//!
//! let row = source.cell_for_row_at(&table, IndexPath::new(1, 0));
//! assert_eq!(row.identifier, "Cell");
//! assert_eq!(row.text, "Carrot");
//! ```
//!
//! # Error Handling
//!
//! Out-of-range index paths, missing header titles and unset hooks all
//! resolve to benign defaults. The one fatal condition is a cell that has no
//! identifier at all: neither a default identifier nor a selector that can
//! resolve. That is a configuration mistake and panics; use
//! [`ArrayDataSource::try_cell_identifier`] to check ahead of a render pass.

mod collection;
mod config;
mod data_source;
mod error;
mod hooks;
mod host;
mod index_path;
pub mod logging;
mod store;
mod table;

pub use collection::CollectionViewDataSource;
pub use config::DataSourceConfig;
pub use data_source::{ArrayDataSource, DataSource};
pub use error::{DataSourceError, Result};
pub use hooks::{
    CanEditFn, CanMoveItemFn, CellIdentifierFn, CommitEditingStyleFn, ConfigureCellFn,
    ConfigureSupplementaryViewFn, Hooks, MoveItemFn, SupplementaryIdentifierFn,
};
pub use host::{CollectionView, EditingStyle, HostView, TableView};
pub use index_path::IndexPath;
pub use store::SectionStore;
pub use table::TableViewDataSource;
