//! Analyzed-type cache
//!
//! Keeps diagrams keyed by [`ClassDiagram::key`] in insertion order, so a
//! listing of the cache matches the order types were analyzed in.

use indexmap::IndexMap;
use tracing::debug;

use crate::model::ClassDiagram;

#[derive(Debug, Clone, Default)]
pub struct DiagramCache {
    diagrams: IndexMap<String, ClassDiagram>,
}

impl DiagramCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a diagram.
    ///
    /// Re-inserting an existing key keeps its original position. Returns
    /// `true` when the key was not present before.
    pub fn insert(&mut self, diagram: ClassDiagram) -> bool {
        let key = diagram.key();
        let is_new = self.diagrams.insert(key.clone(), diagram).is_none();
        if !is_new {
            debug!(key = key.as_str(), "Replaced cached diagram");
        }
        is_new
    }

    /// Drop everything and refill, as after reloading an assembly
    pub fn replace_all(&mut self, diagrams: impl IntoIterator<Item = ClassDiagram>) {
        self.diagrams.clear();
        for diagram in diagrams {
            self.insert(diagram);
        }
        debug!(count = self.diagrams.len(), "Cache refilled");
    }

    pub fn get(&self, key: &str) -> Option<&ClassDiagram> {
        self.diagrams.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.diagrams.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassDiagram> {
        self.diagrams.values()
    }

    pub fn len(&self) -> usize {
        self.diagrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagrams.is_empty()
    }

    pub fn clear(&mut self) {
        self.diagrams.clear();
    }
}

impl FromIterator<ClassDiagram> for DiagramCache {
    fn from_iter<I: IntoIterator<Item = ClassDiagram>>(iter: I) -> Self {
        let mut cache = DiagramCache::new();
        cache.replace_all(iter);
        cache
    }
}
