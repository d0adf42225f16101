//! Explicit registry of codec capabilities.
//!
//! Rust cannot ask at runtime whether an arbitrary type implements a trait, so capabilities are
//! recorded up front, where the compiler can still check the trait bounds, and looked up by
//! [TypeId] afterwards. A [Registry] is immutable once built and can be shared freely across
//! concurrent traversals.
//!
//! Registering a handle type (`Box<T>`, `Rc<T>`, `Arc<T>`) records the capability on the handle
//! receiver of `T`: the value form of `T` does not see it, but any handle form does.

use crate::{
    CapabilitySet, Decoder, Encoder, Indirection, Oracle, Reflect, Serializer, Sizer, TypeDescriptor,
};
use core::any::TypeId;
use std::collections::HashMap;
use tracing::debug;

/// Capabilities recorded for one canonical type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Entry {
    /// Supplied by the value itself.
    value: CapabilitySet,
    /// Supplied only through a handle.
    handle: CapabilitySet,
}

impl Entry {
    fn record(&mut self, indirection: Indirection, set: CapabilitySet) {
        match indirection {
            Indirection::Value => self.value = self.value | set,
            Indirection::Handle => self.handle = self.handle | set,
        }
    }

    fn resolve(&self, indirection: Indirection) -> CapabilitySet {
        match indirection {
            Indirection::Value => self.value,
            Indirection::Handle => self.value | self.handle,
        }
    }
}

/// Collects capability registrations before freezing them into a [Registry].
#[derive(Debug, Default)]
pub struct Builder {
    entries: HashMap<TypeId, Entry>,
}

impl Builder {
    fn record<T: Reflect>(mut self, set: CapabilitySet) -> Self {
        let ty = T::descriptor();
        debug!(ty = %ty, capabilities = ?set, "registering capabilities");
        self.entries
            .entry(ty.id())
            .or_default()
            .record(ty.indirection(), set);
        self
    }

    /// Records the full [Serializer] capability for `T`.
    pub fn register<T: Reflect + Serializer>(self) -> Self {
        self.record::<T>(CapabilitySet::FULL)
    }

    /// Records the [Sizer] capability for `T`.
    pub fn register_sizer<T: Reflect + Sizer>(self) -> Self {
        self.record::<T>(CapabilitySet::SIZER)
    }

    /// Records the [Encoder] capability for `T`.
    pub fn register_encoder<T: Reflect + Encoder>(self) -> Self {
        self.record::<T>(CapabilitySet::ENCODER)
    }

    /// Records the [Decoder] capability for `T`.
    pub fn register_decoder<T: Reflect + Decoder>(self) -> Self {
        self.record::<T>(CapabilitySet::DECODER)
    }

    /// Freezes the registrations.
    pub fn build(self) -> Registry {
        debug!(types = self.entries.len(), "built capability registry");
        Registry {
            entries: self.entries,
        }
    }
}

/// Immutable map from canonical type to the capabilities it supplies.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    entries: HashMap<TypeId, Entry>,
}

impl Registry {
    /// Returns a [Builder] for a new registry.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the number of registered canonical types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Oracle for Registry {
    fn capabilities(&self, ty: &TypeDescriptor) -> CapabilitySet {
        self.entries
            .get(&ty.id())
            .map_or(CapabilitySet::EMPTY, |entry| entry.resolve(ty.indirection()))
    }
}
