//! Type identity and one-level handle indirection.
//!
//! A [TypeDescriptor] names a type independently of any value of that type. It always refers to
//! the canonical (non-handle) form of the type and separately records whether the type was seen
//! through a handle (`Box<T>`, `Rc<T>`, `Arc<T>`). Collapsing every handle onto the same
//! canonical identity is what lets a capability registered through one handle be found through
//! any other.

use bytes::Bytes;
use core::{any::TypeId, fmt};
use std::{
    collections::{BTreeMap, HashMap},
    rc::Rc,
    sync::Arc,
};

/// Structural kind of a type, as seen by the traversal engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Struct,
    Slice,
    Array,
    Map,
    Pointer,
    Primitive,
}

/// Structural kind of a canonical (non-handle) type.
///
/// Handles have no [BaseKind] of their own: a handle type reports the kind of its target and is
/// described with [TypeDescriptor::indirect].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseKind {
    Struct,
    Slice,
    Array,
    Map,
    Primitive,
}

impl From<BaseKind> for Kind {
    fn from(kind: BaseKind) -> Self {
        match kind {
            BaseKind::Struct => Self::Struct,
            BaseKind::Slice => Self::Slice,
            BaseKind::Array => Self::Array,
            BaseKind::Map => Self::Map,
            BaseKind::Primitive => Self::Primitive,
        }
    }
}

/// Whether a type is accessed directly or through a handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Indirection {
    Value,
    Handle,
}

/// Identity of a type, independent of any particular value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
    kind: BaseKind,
    indirection: Indirection,
}

impl TypeDescriptor {
    /// Describes the value form of `T`.
    pub fn new<T: ?Sized + 'static>(kind: BaseKind) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: core::any::type_name::<T>(),
            kind,
            indirection: Indirection::Value,
        }
    }

    /// Returns the [TypeId] of the canonical form.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the name of the canonical form.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the structural kind of this exact form.
    ///
    /// Handle forms report [Kind::Pointer].
    pub fn kind(&self) -> Kind {
        match self.indirection {
            Indirection::Value => self.kind.into(),
            Indirection::Handle => Kind::Pointer,
        }
    }

    /// Returns the structural kind of the canonical form.
    pub fn base_kind(&self) -> BaseKind {
        self.kind
    }

    pub fn indirection(&self) -> Indirection {
        self.indirection
    }

    pub fn is_handle(&self) -> bool {
        self.indirection == Indirection::Handle
    }

    /// Returns the one-level handle form. Handles are returned unchanged.
    pub fn indirect(self) -> Self {
        Self {
            indirection: Indirection::Handle,
            ..self
        }
    }

    /// Returns the canonical (value) form.
    pub fn canonical(self) -> Self {
        Self {
            indirection: Indirection::Value,
            ..self
        }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.indirection {
            Indirection::Value => write!(f, "{}", self.name),
            Indirection::Handle => write!(f, "&{}", self.name),
        }
    }
}

/// Trait for types the traversal engine can describe.
///
/// User-defined types only need to name their structural kind:
///
/// ```
/// use commonware_dispatch::{BaseKind, Kind, Reflect};
///
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl Reflect for Point {
///     const KIND: BaseKind = BaseKind::Struct;
/// }
///
/// assert_eq!(Point::descriptor().kind(), Kind::Struct);
/// assert!(Box::<Point>::descriptor().is_handle());
/// ```
///
/// A handle type reports its target's kind and overrides [Reflect::descriptor]:
///
/// ```
/// use commonware_dispatch::{BaseKind, Kind, Reflect, TypeDescriptor};
///
/// struct Ptr<T>(*const T);
///
/// impl<T: Reflect> Reflect for Ptr<T> {
///     const KIND: BaseKind = T::KIND;
///
///     fn descriptor() -> TypeDescriptor {
///         T::descriptor().indirect()
///     }
/// }
///
/// assert_eq!(Ptr::<u8>::descriptor().kind(), Kind::Pointer);
/// assert_eq!(Ptr::<u8>::descriptor(), Box::<u8>::descriptor());
/// ```
pub trait Reflect: 'static {
    /// Structural kind of the canonical form.
    const KIND: BaseKind;

    /// Returns the descriptor of this type.
    ///
    /// (Provided method).
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new::<Self>(Self::KIND)
    }
}

/// Returns the descriptor of `T`.
pub fn descriptor<T: Reflect>() -> TypeDescriptor {
    T::descriptor()
}

macro_rules! impl_reflect {
    ($kind:expr => $($type:ty),+ $(,)?) => {
        $(
            impl Reflect for $type {
                const KIND: BaseKind = $kind;
            }
        )+
    };
}

impl_reflect!(BaseKind::Primitive =>
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64, bool, char, (), String, Bytes,
);

impl<T: Reflect> Reflect for Vec<T> {
    const KIND: BaseKind = BaseKind::Slice;
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    const KIND: BaseKind = BaseKind::Array;
}

impl<K: Reflect, V: Reflect, S: 'static> Reflect for HashMap<K, V, S> {
    const KIND: BaseKind = BaseKind::Map;
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    const KIND: BaseKind = BaseKind::Map;
}

macro_rules! impl_reflect_handle {
    ($($handle:ident),+) => {
        $(
            impl<T: Reflect> Reflect for $handle<T> {
                const KIND: BaseKind = T::KIND;

                fn descriptor() -> TypeDescriptor {
                    T::descriptor().indirect()
                }
            }
        )+
    };
}

impl_reflect_handle!(Box, Rc, Arc);

#[cfg(test)]
mod tests {
    use super::*;

    struct Point;

    impl Reflect for Point {
        const KIND: BaseKind = BaseKind::Struct;
    }

    /// A handle defined outside the standard library.
    struct Ptr<T>(Box<T>);

    impl<T: Reflect> Reflect for Ptr<T> {
        const KIND: BaseKind = T::KIND;

        fn descriptor() -> TypeDescriptor {
            T::descriptor().indirect()
        }
    }

    #[test]
    fn test_kinds() {
        assert_eq!(u32::descriptor().kind(), Kind::Primitive);
        assert_eq!(String::descriptor().kind(), Kind::Primitive);
        assert_eq!(Vec::<u8>::descriptor().kind(), Kind::Slice);
        assert_eq!(<[u8; 4]>::descriptor().kind(), Kind::Array);
        assert_eq!(HashMap::<u8, Point>::descriptor().kind(), Kind::Map);
        assert_eq!(BTreeMap::<u8, u8>::descriptor().kind(), Kind::Map);
        assert_eq!(Point::descriptor().kind(), Kind::Struct);
    }

    #[test]
    fn test_handles_share_canonical_form() {
        let value = Point::descriptor();
        let boxed = Box::<Point>::descriptor();
        assert_eq!(boxed, Rc::<Point>::descriptor());
        assert_eq!(boxed, Arc::<Point>::descriptor());
        assert_ne!(value, boxed);

        assert_eq!(boxed.kind(), Kind::Pointer);
        assert_eq!(boxed.base_kind(), BaseKind::Struct);
        assert_eq!(boxed.id(), TypeId::of::<Point>());
        assert_eq!(boxed.canonical(), value);
        assert_eq!(value.indirect(), boxed);
    }

    #[test]
    fn test_indirection_is_one_level() {
        let nested = Box::<Box<Point>>::descriptor();
        assert_eq!(nested, Box::<Point>::descriptor());
        assert_eq!(nested.indirect(), nested);
    }

    #[test]
    fn test_user_defined_handle() {
        let ptr = Ptr::<Point>::descriptor();
        assert!(ptr.is_handle());
        assert_eq!(ptr.kind(), Kind::Pointer);
        assert_eq!(ptr.base_kind(), BaseKind::Struct);
        assert_eq!(Ptr::<Point>::KIND, BaseKind::Struct);
        assert_eq!(ptr, Box::<Point>::descriptor());
        assert_eq!(ptr.canonical(), Point::descriptor());

        let _ = Ptr(Box::new(Point));
    }

    #[test]
    fn test_display() {
        let name = core::any::type_name::<Point>();
        assert_eq!(Point::descriptor().to_string(), name);
        assert_eq!(Box::<Point>::descriptor().to_string(), format!("&{name}"));
    }
}
