//! Shared storage for sectioned items.
//!
//! `SectionStore<T>` is the data a data source serves. It is a handle: clones
//! share the same sections, so the owner can replace the data and callback
//! hooks can persist a reorder while the data source keeps reading from it.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

use crate::index_path::IndexPath;
use crate::logging::targets;

/// An ordered sequence of sections, each an ordered sequence of items.
///
/// The default store holds a single empty section. Nothing derived from the
/// sections is cached, so every query reflects the current contents.
///
/// # Example
///
/// ```
/// use array_data_source::{IndexPath, SectionStore};
///
/// let store = SectionStore::new(vec![vec![1, 2, 3], vec![]]);
/// let owner = store.clone();
///
/// owner.replace(vec![vec![10]]);
///
/// assert_eq!(store.section_count(), 1);
/// assert_eq!(store.item_at(IndexPath::new(0, 0)), Some(10));
/// ```
pub struct SectionStore<T> {
    sections: Arc<RwLock<Vec<Vec<T>>>>,
}

impl<T> SectionStore<T> {
    /// Creates a store holding the given sections.
    pub fn new(sections: Vec<Vec<T>>) -> Self {
        Self {
            sections: Arc::new(RwLock::new(sections)),
        }
    }

    /// Returns the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.read().len()
    }

    /// Returns the number of items in `section`, or 0 if there is no such section.
    pub fn item_count(&self, section: usize) -> usize {
        self.sections.read().get(section).map_or(0, Vec::len)
    }

    /// Returns `true` if the store has no items in any section.
    pub fn is_empty(&self) -> bool {
        self.sections.read().iter().all(Vec::is_empty)
    }

    /// Replaces all sections.
    pub fn replace(&self, sections: Vec<Vec<T>>) {
        let section_count = sections.len();
        *self.sections.write() = sections;
        tracing::debug!(target: targets::STORE, section_count, "sections replaced");
    }

    /// Edits the sections in place.
    ///
    /// The write lock is held while `f` runs, so `f` must not call back into
    /// this store or a data source reading from it.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<Vec<T>>) -> R,
    {
        let mut sections = self.sections.write();
        let result = f(&mut *sections);
        tracing::debug!(target: targets::STORE, section_count = sections.len(), "sections updated");
        result
    }

    /// Returns a read guard over the sections.
    pub fn sections(&self) -> impl std::ops::Deref<Target = Vec<Vec<T>>> + '_ {
        self.sections.read()
    }

    /// Runs `f` with the item at `index_path`, if there is one.
    pub(crate) fn with_item<F, R>(&self, index_path: IndexPath, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        let sections = self.sections.read();
        sections
            .get(index_path.section())
            .and_then(|section| section.get(index_path.item()))
            .map(f)
    }

    /// Returns `true` if both handles share the same sections.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.sections, &other.sections)
    }
}

impl<T: Clone> SectionStore<T> {
    /// Returns a copy of the item at `index_path`.
    ///
    /// Returns `None` if the section or the item index is out of range.
    pub fn item_at(&self, index_path: IndexPath) -> Option<T> {
        self.with_item(index_path, T::clone)
    }

    /// Returns a copy of all sections.
    pub fn snapshot(&self) -> Vec<Vec<T>> {
        self.sections.read().clone()
    }
}

impl<T> Clone for SectionStore<T> {
    fn clone(&self) -> Self {
        Self {
            sections: Arc::clone(&self.sections),
        }
    }
}

impl<T> Default for SectionStore<T> {
    fn default() -> Self {
        Self::new(vec![Vec::new()])
    }
}

impl<T> From<Vec<Vec<T>>> for SectionStore<T> {
    fn from(sections: Vec<Vec<T>>) -> Self {
        Self::new(sections)
    }
}

impl<T> fmt::Debug for SectionStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections = self.sections.read();
        let counts: Vec<usize> = sections.iter().map(Vec::len).collect();
        f.debug_struct("SectionStore")
            .field("item_counts", &counts)
            .finish()
    }
}
