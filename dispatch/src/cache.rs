//! Memoizing wrapper around an [Oracle].

use crate::{CapabilitySet, Oracle, TypeDescriptor};
use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};
use tracing::trace;

/// Caches the capabilities reported by an inner [Oracle], keyed by [TypeDescriptor].
///
/// Safe to share between concurrent traversals. Two traversals racing on the first lookup of the
/// same type may both consult the inner oracle, but only the first answer is stored and both
/// observe the same value.
#[derive(Debug, Default)]
pub struct Cached<O> {
    inner: O,
    resolved: RwLock<HashMap<TypeDescriptor, CapabilitySet>>,
}

impl<O: Oracle> Cached<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            resolved: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the wrapped oracle.
    pub fn inner(&self) -> &O {
        &self.inner
    }

    /// Returns the number of memoized descriptors.
    pub fn len(&self) -> usize {
        self.resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<O: Oracle> Oracle for Cached<O> {
    fn capabilities(&self, ty: &TypeDescriptor) -> CapabilitySet {
        // Entries are pure functions of the descriptor, so a poisoned lock holds nothing wrong.
        if let Some(set) = self
            .resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(ty)
        {
            return *set;
        }

        let set = self.inner.capabilities(ty);
        trace!(ty = %ty, capabilities = ?set, "memoized capabilities");
        *self
            .resolved
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(*ty)
            .or_insert(set)
    }
}
