//! Optional callback hooks consulted by a data source.
//!
//! Every hook is independently optional. An unset hook is a normal state
//! with a documented fallback (see [`ArrayDataSource`](crate::ArrayDataSource)),
//! except the supplementary identifier hook, which is required as soon as a
//! host asks for supplementary views.

use std::fmt;
use std::sync::Arc;

use crate::host::{EditingStyle, HostView};
use crate::index_path::IndexPath;

/// Chooses the cell identifier for an item. Overrides the default identifier.
pub type CellIdentifierFn<T> = Arc<dyn Fn(IndexPath, &T) -> String + Send + Sync>;

/// Populates a dequeued cell from its item.
pub type ConfigureCellFn<T, C> = Arc<dyn Fn(&mut C, IndexPath, &T) + Send + Sync>;

/// Answers whether the item at a path can be edited.
pub type CanEditFn = Arc<dyn Fn(IndexPath) -> bool + Send + Sync>;

/// Commits an editing action. Responsible for any change to the store.
pub type CommitEditingStyleFn<V> = Arc<dyn Fn(&V, EditingStyle, IndexPath) + Send + Sync>;

/// Answers whether the item at a path can be moved.
pub type CanMoveItemFn = Arc<dyn Fn(IndexPath) -> bool + Send + Sync>;

/// Commits a move from the first path to the second. Responsible for any
/// change to the store.
pub type MoveItemFn<V> = Arc<dyn Fn(&V, IndexPath, IndexPath) + Send + Sync>;

/// Populates a dequeued supplementary view of the given kind.
pub type ConfigureSupplementaryViewFn<S> = Arc<dyn Fn(&mut S, &str, IndexPath) + Send + Sync>;

/// Chooses the identifier for a supplementary view of the given kind.
pub type SupplementaryIdentifierFn = Arc<dyn Fn(&str, IndexPath) -> String + Send + Sync>;

/// The full set of hooks for a data source serving items `T` to host `V`.
pub struct Hooks<T, V: HostView> {
    /// Per-item cell identifier.
    pub cell_identifier: Option<CellIdentifierFn<T>>,
    /// Cell population.
    pub configure_cell: Option<ConfigureCellFn<T, V::Cell>>,
    /// Edit permission.
    pub can_edit: Option<CanEditFn>,
    /// Edit commit.
    pub commit_editing_style: Option<CommitEditingStyleFn<V>>,
    /// Move permission.
    pub can_move_item: Option<CanMoveItemFn>,
    /// Move commit.
    pub move_item: Option<MoveItemFn<V>>,
    /// Supplementary view population.
    pub configure_supplementary_view: Option<ConfigureSupplementaryViewFn<V::SupplementaryView>>,
    /// Supplementary view identifier.
    pub supplementary_identifier: Option<SupplementaryIdentifierFn>,
}

impl<T, V: HostView> Hooks<T, V> {
    /// Creates a hook set with every hook unset.
    pub fn new() -> Self {
        Self {
            cell_identifier: None,
            configure_cell: None,
            can_edit: None,
            commit_editing_style: None,
            can_move_item: None,
            move_item: None,
            configure_supplementary_view: None,
            supplementary_identifier: None,
        }
    }

    fn set_names(&self) -> Vec<&'static str> {
        [
            ("cell_identifier", self.cell_identifier.is_some()),
            ("configure_cell", self.configure_cell.is_some()),
            ("can_edit", self.can_edit.is_some()),
            ("commit_editing_style", self.commit_editing_style.is_some()),
            ("can_move_item", self.can_move_item.is_some()),
            ("move_item", self.move_item.is_some()),
            (
                "configure_supplementary_view",
                self.configure_supplementary_view.is_some(),
            ),
            (
                "supplementary_identifier",
                self.supplementary_identifier.is_some(),
            ),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }
}

impl<T, V: HostView> Default for Hooks<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impl: a derive would require `T: Clone` and `V: Clone`.
impl<T, V: HostView> Clone for Hooks<T, V> {
    fn clone(&self) -> Self {
        Self {
            cell_identifier: self.cell_identifier.clone(),
            configure_cell: self.configure_cell.clone(),
            can_edit: self.can_edit.clone(),
            commit_editing_style: self.commit_editing_style.clone(),
            can_move_item: self.can_move_item.clone(),
            move_item: self.move_item.clone(),
            configure_supplementary_view: self.configure_supplementary_view.clone(),
            supplementary_identifier: self.supplementary_identifier.clone(),
        }
    }
}

impl<T, V: HostView> fmt::Debug for Hooks<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("set", &self.set_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Host;

    impl HostView for Host {
        type Cell = String;
        type SupplementaryView = ();
    }

    #[test]
    fn test_new_has_no_hooks() {
        let hooks = Hooks::<u32, Host>::new();
        assert!(hooks.set_names().is_empty());
        assert_eq!(format!("{:?}", hooks), "Hooks { set: [] }");
    }

    #[test]
    fn test_debug_lists_set_hooks() {
        let mut hooks = Hooks::<u32, Host>::default();
        hooks.can_edit = Some(Arc::new(|_: IndexPath| true));
        hooks.move_item = Some(Arc::new(|_: &Host, _: IndexPath, _: IndexPath| {}));

        assert_eq!(
            format!("{:?}", hooks),
            r#"Hooks { set: ["can_edit", "move_item"] }"#
        );
    }

    #[test]
    fn test_clone_shares_callbacks() {
        let mut hooks = Hooks::<u32, Host>::new();
        let can_edit: CanEditFn = Arc::new(|path: IndexPath| path.section() == 0);
        hooks.can_edit = Some(can_edit.clone());

        let cloned = hooks.clone();
        let cloned_can_edit = cloned.can_edit.as_ref().unwrap();
        assert!(Arc::ptr_eq(cloned_can_edit, &can_edit));
        assert!(cloned_can_edit(IndexPath::new(0, 4)));
        assert!(!cloned_can_edit(IndexPath::new(1, 0)));
    }
}
