//! Decide, per nesting level, whether a type carries its own binary codec.
//!
//! # Overview
//!
//! A serializer that walks nested values (struct fields, slice and array elements, map values)
//! must decide at every level whether the current type supplies a custom codec, the full
//! [Sizer] + [Encoder] + [Decoder] capability, or whether the generic structural codec applies.
//! This crate makes that decision and nothing else: it never encodes or decodes bytes itself.
//!
//! - [Registry]: records, at startup, which types supply which capabilities.
//! - [Switch]: the verdict for the current nesting level, derived fresh for every child type.
//! - [Dispatcher]: entry points for the traversal engine and for library consumers.
//!
//! A capability may be supplied by the value itself or only through a handle (`Box<T>`, `Rc<T>`,
//! `Arc<T>`). A shallow check looks at exactly the given form. A deep check also looks through
//! one level of handle.
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use commonware_dispatch::{
//!     BaseKind, Config, Decoder, Dispatcher, Encoder, Error, Reflect, Registry, Sizer, Switch,
//! };
//!
//! // A type with its own codec
//! struct Custom(u32);
//!
//! impl Reflect for Custom {
//!     const KIND: BaseKind = BaseKind::Struct;
//! }
//!
//! impl Sizer for Custom {
//!     fn size(&self) -> usize {
//!         4
//!     }
//! }
//!
//! impl Encoder for Custom {
//!     fn encode(&self, buf: &mut BytesMut) -> Result<(), Error> {
//!         buf.extend_from_slice(&self.0.to_be_bytes());
//!         Ok(())
//!     }
//! }
//!
//! impl Decoder for Custom {
//!     fn decode(&mut self, buf: &[u8]) -> Result<(), Error> {
//!         let bytes: [u8; 4] = buf.try_into().map_err(|_| Error::EndOfBuffer)?;
//!         self.0 = u32::from_be_bytes(bytes);
//!         Ok(())
//!     }
//! }
//!
//! // A type without one
//! struct Point {
//!     x: i64,
//!     y: i64,
//! }
//!
//! impl Reflect for Point {
//!     const KIND: BaseKind = BaseKind::Struct;
//! }
//!
//! let registry = Registry::builder().register::<Custom>().build();
//! let dispatcher = Dispatcher::new(registry, Config { enabled: true });
//!
//! assert!(dispatcher.check_capability(&Custom(1)));
//! assert!(!dispatcher.check_capability(&Point { x: 1, y: 2 }));
//!
//! // Resolve a collection's element type once, then reuse the verdict for every element.
//! let root = dispatcher.root();
//! assert_eq!(root, Switch::Check);
//! let elements = dispatcher.derive::<Custom>(root);
//! assert_eq!(elements, Switch::CheckOk);
//! assert_eq!(dispatcher.derive::<Point>(root), Switch::CheckFalse);
//! ```

pub mod cache;
pub mod capability;
pub mod descriptor;
pub mod dispatcher;
pub mod error;
pub mod oracle;
pub mod registry;
pub mod switch;

// Re-export main types and traits
pub use cache::Cached;
pub use capability::{CapabilitySet, Decoder, Encoder, Serializer, Sizer};
pub use descriptor::{descriptor, BaseKind, Indirection, Kind, Reflect, TypeDescriptor};
pub use dispatcher::{default_dispatch_enabled, initial, Config, Dispatcher};
pub use error::Error;
pub use oracle::{Access, Oracle};
pub use registry::{Builder, Registry};
pub use switch::Switch;
