//! The sectioned array data source.
//!
//! `ArrayDataSource<T, V>` answers every question a host widget `V` asks
//! about a [`SectionStore<T>`]: structural counts, item lookup, identifiers,
//! cell configuration, header titles and edit/move permissions. The table
//! and grid bindings in this crate are thin forwarding layers over it.

use std::fmt;
use std::sync::Arc;

use crate::config::DataSourceConfig;
use crate::error::{DataSourceError, Result};
use crate::hooks::Hooks;
use crate::host::{EditingStyle, HostView};
use crate::index_path::IndexPath;
use crate::logging::targets;
use crate::store::SectionStore;

/// Canonical item lookup shared by data sources.
pub trait DataSource {
    /// The item type served.
    type Item;

    /// Returns the item at `index_path`, or `None` if the section or item
    /// index is out of range.
    fn item_at(&self, index_path: IndexPath) -> Option<Self::Item>;
}

/// A data source backed by a [`SectionStore`] and optional callback hooks.
///
/// The data source holds no state of its own beyond the store handle, the
/// configuration and the hooks. It never mutates the store: commit and move
/// hooks that want their change to persist must update the store themselves,
/// typically through a clone of the store handle.
///
/// # Defaults
///
/// | Hook | When unset |
/// |---|---|
/// | cell identifier | the default cell identifier is used |
/// | configure cell | the cell is returned as dequeued |
/// | can edit / can move item | `false` |
/// | commit editing style / move item | nothing happens |
/// | configure supplementary view | the view is returned as dequeued |
/// | supplementary identifier | **panics** when a supplementary view is requested |
///
/// # Example
///
/// ```
/// use array_data_source::{ArrayDataSource, DataSourceConfig, HostView, IndexPath, SectionStore};
///
/// struct Grid;
///
/// impl HostView for Grid {
///     type Cell = String;
///     type SupplementaryView = String;
/// }
///
/// let store = SectionStore::new(vec![vec![1, 2, 3], vec![]]);
/// let source = ArrayDataSource::<i32, Grid>::with_store(
///     store,
///     DataSourceConfig::new().with_default_cell_identifier("Number"),
/// )
/// .with_cell_identifier(|_, n| if n % 2 == 0 { "Even".into() } else { "Odd".into() });
///
/// assert_eq!(source.section_count(), 2);
/// assert_eq!(source.cell_identifier(IndexPath::new(0, 1)), "Even");
/// // Out of range: the selector cannot resolve, so the default applies.
/// assert_eq!(source.cell_identifier(IndexPath::new(1, 0)), "Number");
/// ```
pub struct ArrayDataSource<T, V: HostView> {
    store: SectionStore<T>,
    config: DataSourceConfig,
    hooks: Hooks<T, V>,
}

impl<T, V: HostView> ArrayDataSource<T, V> {
    /// Creates a data source with the default store (one empty section).
    pub fn new(config: DataSourceConfig) -> Self {
        Self::with_store(SectionStore::default(), config)
    }

    /// Creates a data source serving `store`.
    pub fn with_store(store: SectionStore<T>, config: DataSourceConfig) -> Self {
        Self {
            store,
            config,
            hooks: Hooks::new(),
        }
    }

    /// Returns the store handle.
    ///
    /// Clone it to replace or edit the sections from outside the data source.
    pub fn store(&self) -> &SectionStore<T> {
        &self.store
    }

    /// Points the data source at a different store.
    pub fn set_store(&mut self, store: SectionStore<T>) {
        self.store = store;
    }

    /// Replaces all sections of the current store.
    pub fn set_sections(&self, sections: Vec<Vec<T>>) {
        self.store.replace(sections);
    }

    /// Returns the configuration.
    pub fn config(&self) -> &DataSourceConfig {
        &self.config
    }

    /// Returns the hooks.
    pub fn hooks(&self) -> &Hooks<T, V> {
        &self.hooks
    }

    /// Returns the hooks for direct modification.
    pub fn hooks_mut(&mut self) -> &mut Hooks<T, V> {
        &mut self.hooks
    }

    // -------------------------------------------------------------------------
    // Structural queries
    // -------------------------------------------------------------------------

    /// Returns the number of sections.
    pub fn section_count(&self) -> usize {
        self.store.section_count()
    }

    /// Returns the number of items in `section`, or 0 if out of range.
    pub fn item_count(&self, section: usize) -> usize {
        self.store.item_count(section)
    }

    /// Returns the header title for `section`, if one is configured.
    pub fn header_title(&self, section: usize) -> Option<String> {
        self.config.header_title(section).map(str::to_owned)
    }

    // -------------------------------------------------------------------------
    // Edit / move
    // -------------------------------------------------------------------------

    /// Returns whether the item at `index_path` can be edited. `false` unless
    /// a can-edit hook says otherwise.
    pub fn can_edit(&self, index_path: IndexPath) -> bool {
        self.hooks
            .can_edit
            .as_ref()
            .is_some_and(|can_edit| can_edit(index_path))
    }

    /// Forwards an editing action to the commit hook, if set.
    pub fn commit_edit(&self, view: &V, style: EditingStyle, index_path: IndexPath) {
        if let Some(commit) = &self.hooks.commit_editing_style {
            tracing::trace!(target: targets::DATA_SOURCE, %index_path, ?style, "commit editing style");
            commit(view, style, index_path);
        }
    }

    /// Returns whether the item at `index_path` can be moved. `false` unless
    /// a can-move hook says otherwise.
    pub fn can_move(&self, index_path: IndexPath) -> bool {
        self.hooks
            .can_move_item
            .as_ref()
            .is_some_and(|can_move| can_move(index_path))
    }

    /// Forwards a move to the move hook, if set.
    pub fn move_item(&self, view: &V, from: IndexPath, to: IndexPath) {
        if let Some(move_item) = &self.hooks.move_item {
            tracing::trace!(target: targets::DATA_SOURCE, %from, %to, "move item");
            move_item(view, from, to);
        }
    }

    // -------------------------------------------------------------------------
    // Supplementary views
    // -------------------------------------------------------------------------

    /// Resolves the identifier for a supplementary view of `kind`.
    ///
    /// Returns [`DataSourceError::MissingSupplementaryIdentifier`] if the
    /// supplementary identifier hook is unset.
    pub fn try_supplementary_identifier(&self, kind: &str, index_path: IndexPath) -> Result<String> {
        self.hooks
            .supplementary_identifier
            .as_ref()
            .map(|identifier| identifier(kind, index_path))
            .ok_or_else(|| DataSourceError::missing_supplementary_identifier(kind, index_path))
    }

    /// Resolves the identifier for a supplementary view of `kind`.
    ///
    /// # Panics
    ///
    /// Panics if the supplementary identifier hook is unset. The hook is
    /// required for any host that requests supplementary views.
    pub fn supplementary_identifier(&self, kind: &str, index_path: IndexPath) -> String {
        self.try_supplementary_identifier(kind, index_path)
            .unwrap_or_else(|err| fatal(err))
    }

    /// Populates a dequeued supplementary view, if a configure hook is set.
    pub fn configure_supplementary_view(
        &self,
        view: &mut V::SupplementaryView,
        kind: &str,
        index_path: IndexPath,
    ) {
        if let Some(configure) = &self.hooks.configure_supplementary_view {
            configure(view, kind, index_path);
        }
    }

    // -------------------------------------------------------------------------
    // Hook setters
    // -------------------------------------------------------------------------

    /// Sets the can-edit hook.
    pub fn with_can_edit<F>(mut self, can_edit: F) -> Self
    where
        F: Fn(IndexPath) -> bool + Send + Sync + 'static,
    {
        self.set_can_edit(can_edit);
        self
    }

    /// Sets the can-edit hook.
    pub fn set_can_edit<F>(&mut self, can_edit: F)
    where
        F: Fn(IndexPath) -> bool + Send + Sync + 'static,
    {
        self.hooks.can_edit = Some(Arc::new(can_edit));
    }

    /// Sets the commit editing style hook.
    pub fn with_commit_editing_style<F>(mut self, commit: F) -> Self
    where
        F: Fn(&V, EditingStyle, IndexPath) + Send + Sync + 'static,
    {
        self.set_commit_editing_style(commit);
        self
    }

    /// Sets the commit editing style hook.
    pub fn set_commit_editing_style<F>(&mut self, commit: F)
    where
        F: Fn(&V, EditingStyle, IndexPath) + Send + Sync + 'static,
    {
        self.hooks.commit_editing_style = Some(Arc::new(commit));
    }

    /// Sets the can-move hook.
    pub fn with_can_move_item<F>(mut self, can_move: F) -> Self
    where
        F: Fn(IndexPath) -> bool + Send + Sync + 'static,
    {
        self.set_can_move_item(can_move);
        self
    }

    /// Sets the can-move hook.
    pub fn set_can_move_item<F>(&mut self, can_move: F)
    where
        F: Fn(IndexPath) -> bool + Send + Sync + 'static,
    {
        self.hooks.can_move_item = Some(Arc::new(can_move));
    }

    /// Sets the move hook.
    ///
    /// To make the reorder persist, capture a clone of the store and move
    /// the item there.
    pub fn with_move_item<F>(mut self, move_item: F) -> Self
    where
        F: Fn(&V, IndexPath, IndexPath) + Send + Sync + 'static,
    {
        self.set_move_item(move_item);
        self
    }

    /// Sets the move hook.
    pub fn set_move_item<F>(&mut self, move_item: F)
    where
        F: Fn(&V, IndexPath, IndexPath) + Send + Sync + 'static,
    {
        self.hooks.move_item = Some(Arc::new(move_item));
    }

    /// Sets the supplementary view configure hook.
    pub fn with_configure_supplementary_view<F>(mut self, configure: F) -> Self
    where
        F: Fn(&mut V::SupplementaryView, &str, IndexPath) + Send + Sync + 'static,
    {
        self.set_configure_supplementary_view(configure);
        self
    }

    /// Sets the supplementary view configure hook.
    pub fn set_configure_supplementary_view<F>(&mut self, configure: F)
    where
        F: Fn(&mut V::SupplementaryView, &str, IndexPath) + Send + Sync + 'static,
    {
        self.hooks.configure_supplementary_view = Some(Arc::new(configure));
    }

    /// Sets the supplementary identifier hook.
    pub fn with_supplementary_identifier<F>(mut self, identifier: F) -> Self
    where
        F: Fn(&str, IndexPath) -> String + Send + Sync + 'static,
    {
        self.set_supplementary_identifier(identifier);
        self
    }

    /// Sets the supplementary identifier hook.
    pub fn set_supplementary_identifier<F>(&mut self, identifier: F)
    where
        F: Fn(&str, IndexPath) -> String + Send + Sync + 'static,
    {
        self.hooks.supplementary_identifier = Some(Arc::new(identifier));
    }

    /// Unsets every hook.
    pub fn clear_hooks(&mut self) {
        self.hooks = Hooks::new();
    }
}

impl<T, V> ArrayDataSource<T, V>
where
    T: Clone + Send + Sync + 'static,
    V: HostView,
{
    /// Returns the item at `index_path`, or `None` if out of range.
    pub fn item_at(&self, index_path: IndexPath) -> Option<T> {
        self.store.item_at(index_path)
    }

    /// Resolves the cell identifier for `index_path`.
    ///
    /// The cell identifier hook wins when it is set and an item exists at
    /// `index_path`; otherwise the default cell identifier is used. Returns
    /// [`DataSourceError::MissingCellIdentifier`] when neither yields one.
    pub fn try_cell_identifier(&self, index_path: IndexPath) -> Result<String> {
        let selected = self.hooks.cell_identifier.as_ref().and_then(|identifier| {
            self.item_at(index_path)
                .map(|item| identifier(index_path, &item))
        });

        selected
            .or_else(|| self.config.default_cell_identifier.clone())
            .ok_or_else(|| DataSourceError::missing_cell_identifier(index_path))
    }

    /// Resolves the cell identifier for `index_path`.
    ///
    /// # Panics
    ///
    /// Panics if there is neither a default cell identifier nor a cell
    /// identifier hook that resolves for this path. That is a setup mistake,
    /// not a runtime condition.
    pub fn cell_identifier(&self, index_path: IndexPath) -> String {
        self.try_cell_identifier(index_path)
            .unwrap_or_else(|err| fatal(err))
    }

    /// Populates a dequeued cell, if a configure hook is set and the item exists.
    pub fn configure_cell(&self, cell: &mut V::Cell, index_path: IndexPath) {
        if let Some(configure) = &self.hooks.configure_cell {
            // Clone out so no store lock is held while caller code runs.
            if let Some(item) = self.item_at(index_path) {
                configure(cell, index_path, &item);
            }
        }
    }

    /// Sets the cell identifier hook.
    pub fn with_cell_identifier<F>(mut self, identifier: F) -> Self
    where
        F: Fn(IndexPath, &T) -> String + Send + Sync + 'static,
    {
        self.set_cell_identifier(identifier);
        self
    }

    /// Sets the cell identifier hook.
    pub fn set_cell_identifier<F>(&mut self, identifier: F)
    where
        F: Fn(IndexPath, &T) -> String + Send + Sync + 'static,
    {
        self.hooks.cell_identifier = Some(Arc::new(identifier));
    }

    /// Sets the cell configure hook.
    pub fn with_configure_cell<F>(mut self, configure: F) -> Self
    where
        F: Fn(&mut V::Cell, IndexPath, &T) + Send + Sync + 'static,
    {
        self.set_configure_cell(configure);
        self
    }

    /// Sets the cell configure hook.
    pub fn set_configure_cell<F>(&mut self, configure: F)
    where
        F: Fn(&mut V::Cell, IndexPath, &T) + Send + Sync + 'static,
    {
        self.hooks.configure_cell = Some(Arc::new(configure));
    }
}

impl<T, V> DataSource for ArrayDataSource<T, V>
where
    T: Clone + Send + Sync + 'static,
    V: HostView,
{
    type Item = T;

    fn item_at(&self, index_path: IndexPath) -> Option<T> {
        self.store.item_at(index_path)
    }
}

impl<T, V: HostView> fmt::Debug for ArrayDataSource<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayDataSource")
            .field("store", &self.store)
            .field("config", &self.config)
            .field("hooks", &self.hooks)
            .finish()
    }
}

/// Logs a configuration error and aborts the current render pass.
#[cold]
#[track_caller]
fn fatal(err: DataSourceError) -> ! {
    tracing::error!(target: targets::DATA_SOURCE, index_path = %err.index_path(), "{err}");
    panic!("{err}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    struct Host;

    impl HostView for Host {
        type Cell = Vec<String>;
        type SupplementaryView = Vec<String>;
    }

    fn two_sections() -> SectionStore<&'static str> {
        SectionStore::new(vec![vec!["a", "b", "c"], vec![]])
    }

    fn with_default(identifier: &str) -> DataSourceConfig {
        DataSourceConfig::new().with_default_cell_identifier(identifier)
    }

    #[test]
    fn test_new_starts_with_one_empty_section() {
        let source = ArrayDataSource::<String, Host>::new(DataSourceConfig::new());
        assert_eq!(source.section_count(), 1);
        assert_eq!(source.item_count(0), 0);
        assert_eq!(source.item_at(IndexPath::new(0, 0)), None);
    }

    #[test]
    fn test_structural_queries() {
        let source = ArrayDataSource::<_, Host>::with_store(two_sections(), with_default("Cell"));

        assert_eq!(source.section_count(), 2);
        assert_eq!(source.item_count(0), 3);
        assert_eq!(source.item_count(1), 0);
        assert_eq!(source.item_count(7), 0);
    }

    #[test]
    fn test_item_at_matches_store() {
        let store = two_sections();
        let source = ArrayDataSource::<_, Host>::with_store(store.clone(), with_default("Cell"));

        for (section, items) in store.snapshot().iter().enumerate() {
            for (item, value) in items.iter().enumerate() {
                assert_eq!(source.item_at(IndexPath::new(section, item)), Some(*value));
            }
        }
        assert_eq!(source.item_at(IndexPath::new(0, 3)), None);
        assert_eq!(source.item_at(IndexPath::new(1, 0)), None);
        assert_eq!(source.item_at(IndexPath::new(2, 0)), None);
        assert_eq!(DataSource::item_at(&source, IndexPath::new(0, 2)), Some("c"));
    }

    #[test]
    fn test_queries_follow_store_replacement() {
        let store = two_sections();
        let source = ArrayDataSource::<_, Host>::with_store(store.clone(), with_default("Cell"));

        store.replace(vec![vec!["x"]]);
        assert_eq!(source.section_count(), 1);
        assert_eq!(source.item_at(IndexPath::new(0, 0)), Some("x"));

        source.set_sections(vec![vec![], vec![], vec!["y"]]);
        assert_eq!(source.section_count(), 3);
        assert_eq!(store.item_at(IndexPath::new(2, 0)), Some("y"));
    }

    #[test]
    fn test_queries_are_idempotent() {
        let source = ArrayDataSource::<_, Host>::with_store(two_sections(), with_default("Cell"))
            .with_cell_identifier(|path, _| format!("Cell{}", path.item()));
        let path = IndexPath::new(0, 1);

        assert_eq!(source.cell_identifier(path), source.cell_identifier(path));
        assert_eq!(source.item_at(path), source.item_at(path));
        assert_eq!(source.item_count(0), source.item_count(0));
    }

    #[test]
    fn test_default_identifier_for_out_of_range_path() {
        let source = ArrayDataSource::<_, Host>::with_store(two_sections(), with_default("Cell"));
        assert_eq!(source.cell_identifier(IndexPath::new(1, 0)), "Cell");
    }

    #[test]
    fn test_selector_overrides_default_when_item_present() {
        let source = ArrayDataSource::<_, Host>::with_store(two_sections(), with_default("Cell"))
            .with_cell_identifier(|_, item| format!("{item}Cell"));

        assert_eq!(source.cell_identifier(IndexPath::new(0, 1)), "bCell");
        assert_eq!(source.cell_identifier(IndexPath::new(1, 0)), "Cell");
    }

    #[test]
    fn test_missing_identifier_is_error() {
        let source = ArrayDataSource::<_, Host>::with_store(two_sections(), DataSourceConfig::new())
            .with_cell_identifier(|_, _| "Dynamic".into());

        assert_eq!(source.try_cell_identifier(IndexPath::new(0, 0)).unwrap(), "Dynamic");
        assert_eq!(
            source.try_cell_identifier(IndexPath::new(1, 0)),
            Err(DataSourceError::missing_cell_identifier(IndexPath::new(1, 0)))
        );
    }

    #[test]
    #[should_panic(expected = "no cell identifier for [0, 0]")]
    fn test_missing_identifier_panics() {
        let source =
            ArrayDataSource::<_, Host>::with_store(two_sections(), DataSourceConfig::new());
        source.cell_identifier(IndexPath::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "no cell identifier for [1, 0]")]
    fn test_unresolved_selector_without_default_panics() {
        let source = ArrayDataSource::<_, Host>::with_store(two_sections(), DataSourceConfig::new())
            .with_cell_identifier(|_, _| "Dynamic".into());
        source.cell_identifier(IndexPath::new(1, 0));
    }

    #[test]
    fn test_configure_cell() {
        let source = ArrayDataSource::<_, Host>::with_store(two_sections(), with_default("Cell"))
            .with_configure_cell(|cell, path, item| cell.push(format!("{path} {item}")));

        let mut cell = Vec::new();
        source.configure_cell(&mut cell, IndexPath::new(0, 2));
        assert_eq!(cell, vec!["[0, 2] c".to_string()]);

        // No item, nothing to configure with.
        source.configure_cell(&mut cell, IndexPath::new(1, 0));
        assert_eq!(cell.len(), 1);
    }

    #[test]
    fn test_configure_cell_may_touch_store() {
        let store = two_sections();
        let observed = store.clone();
        let source = ArrayDataSource::<_, Host>::with_store(store, with_default("Cell"))
            .with_configure_cell(move |cell, _, _| {
                cell.push(observed.section_count().to_string());
            });

        let mut cell = Vec::new();
        source.configure_cell(&mut cell, IndexPath::new(0, 0));
        assert_eq!(cell, vec!["2".to_string()]);
    }

    #[test]
    fn test_header_titles() {
        let config = with_default("Cell").with_section_header_titles(vec!["First".into()]);
        let source = ArrayDataSource::<_, Host>::with_store(two_sections(), config);

        assert_eq!(source.header_title(0).as_deref(), Some("First"));
        assert_eq!(source.header_title(1), None);

        let untitled = ArrayDataSource::<_, Host>::with_store(two_sections(), with_default("Cell"));
        assert_eq!(untitled.header_title(0), None);
    }

    #[test]
    fn test_edit_and_move_default_to_false() {
        let source = ArrayDataSource::<_, Host>::with_store(two_sections(), with_default("Cell"));
        for path in [IndexPath::new(0, 0), IndexPath::new(1, 5), IndexPath::new(9, 9)] {
            assert!(!source.can_edit(path));
            assert!(!source.can_move(path));
        }
        // Unset action hooks are no-ops.
        source.commit_edit(&Host, EditingStyle::Delete, IndexPath::new(0, 0));
        source.move_item(&Host, IndexPath::new(0, 0), IndexPath::new(0, 1));
        assert_eq!(source.store().snapshot(), two_sections().snapshot());
    }

    #[test]
    fn test_can_move_only_first_section() {
        let source = ArrayDataSource::<_, Host>::with_store(two_sections(), with_default("Cell"))
            .with_can_move_item(|path| path.section() == 0);

        assert!(source.can_move(IndexPath::new(0, 0)));
        assert!(source.can_move(IndexPath::new(0, 42)));
        assert!(!source.can_move(IndexPath::new(1, 0)));
        assert!(!source.can_edit(IndexPath::new(0, 0)));
    }

    #[test]
    fn test_commit_and_move_dispatch() {
        let calls = Arc::new(Mutex::new(Vec::new()));

        let commits = calls.clone();
        let moves = calls.clone();
        let source = ArrayDataSource::<_, Host>::with_store(two_sections(), with_default("Cell"))
            .with_commit_editing_style(move |_, style, path| {
                commits.lock().push(format!("{style:?} {path}"));
            })
            .with_move_item(move |_, from, to| {
                moves.lock().push(format!("move {from} {to}"));
            });

        source.commit_edit(&Host, EditingStyle::Delete, IndexPath::new(0, 1));
        source.move_item(&Host, IndexPath::new(0, 0), IndexPath::new(0, 2));

        let calls = calls.lock();
        assert_eq!(*calls, vec!["Delete [0, 1]", "move [0, 0] [0, 2]"]);
    }

    #[test]
    fn test_supplementary_identifier() {
        let source = ArrayDataSource::<_, Host>::with_store(two_sections(), with_default("Cell"))
            .with_supplementary_identifier(|kind, path| format!("{kind}-{}", path.section()));

        assert_eq!(source.supplementary_identifier("header", IndexPath::new(1, 0)), "header-1");
    }

    #[test]
    fn test_missing_supplementary_identifier_is_error() {
        let source = ArrayDataSource::<_, Host>::with_store(two_sections(), with_default("Cell"));
        assert_eq!(
            source.try_supplementary_identifier("footer", IndexPath::new(0, 0)),
            Err(DataSourceError::missing_supplementary_identifier(
                "footer",
                IndexPath::new(0, 0)
            ))
        );
    }

    #[test]
    #[should_panic(expected = "no supplementary identifier hook set for kind 'header'")]
    fn test_missing_supplementary_identifier_panics() {
        let source = ArrayDataSource::<_, Host>::with_store(two_sections(), with_default("Cell"));
        source.supplementary_identifier("header", IndexPath::new(0, 0));
    }

    #[test]
    fn test_clear_hooks() {
        let mut source =
            ArrayDataSource::<_, Host>::with_store(two_sections(), with_default("Cell"))
                .with_can_edit(|_| true);
        assert!(source.can_edit(IndexPath::new(0, 0)));

        source.clear_hooks();
        assert!(!source.can_edit(IndexPath::new(0, 0)));
        assert!(source.hooks().can_edit.is_none());
    }
}
