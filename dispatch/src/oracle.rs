//! Interface-satisfaction queries.

use crate::{CapabilitySet, TypeDescriptor};

/// How far a capability query may look.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Access {
    /// Check exactly the given form.
    #[default]
    Shallow,
    /// Check the given form and, failing that, its one-level handle form.
    Deep,
}

/// Trait for sources that know which capabilities a type supplies.
pub trait Oracle {
    /// Returns the capabilities available on exactly the form described by `ty`.
    ///
    /// A handle form sees every capability its value form has plus those only supplied through
    /// the handle.
    fn capabilities(&self, ty: &TypeDescriptor) -> CapabilitySet;

    /// Returns true if `ty` supplies the full [crate::Serializer] capability.
    ///
    /// (Provided method).
    fn query_full_serializer(&self, ty: &TypeDescriptor) -> bool {
        self.capabilities(ty).is_full()
    }

    /// Returns true if `ty` supplies the full capability under the given access policy.
    ///
    /// (Provided method).
    fn query(&self, ty: &TypeDescriptor, access: Access) -> bool {
        match access {
            Access::Shallow => self.query_full_serializer(ty),
            Access::Deep => {
                self.query_full_serializer(ty) || self.query_full_serializer(&ty.indirect())
            }
        }
    }
}

impl<O: Oracle + ?Sized> Oracle for &O {
    fn capabilities(&self, ty: &TypeDescriptor) -> CapabilitySet {
        (**self).capabilities(ty)
    }
}

impl<O: Oracle + ?Sized> Oracle for std::sync::Arc<O> {
    fn capabilities(&self, ty: &TypeDescriptor) -> CapabilitySet {
        (**self).capabilities(ty)
    }
}
