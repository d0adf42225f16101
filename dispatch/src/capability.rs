//! Codec capabilities a type may supply and the flag set used to record them.

use crate::Error;
use bytes::BytesMut;
use core::{fmt, ops::BitOr};

/// Trait for types that can report their encoded length.
pub trait Sizer {
    /// Returns the number of bytes [Encoder::encode] will append.
    fn size(&self) -> usize;
}

/// Trait for types that can append their own binary representation to a buffer.
pub trait Encoder {
    /// Appends the encoded value to `buf`, growing it as needed.
    fn encode(&self, buf: &mut BytesMut) -> Result<(), Error>;
}

/// Trait for types that can overwrite themselves from a binary representation.
pub trait Decoder {
    /// Decodes `buf` into `self`. The entire buffer belongs to this value.
    fn decode(&mut self, buf: &[u8]) -> Result<(), Error>;
}

/// Trait for types supplying the full custom codec capability.
pub trait Serializer: Sizer + Encoder + Decoder {
    /// Encodes a value into a freshly allocated buffer of exactly [Sizer::size] bytes.
    ///
    /// Returns [Error::LengthMismatch] if the encoder disagrees with the reported size.
    ///
    /// (Provided method).
    fn serialize(&self) -> Result<BytesMut, Error> {
        let len = self.size();
        let mut buffer = BytesMut::with_capacity(len);
        self.encode(&mut buffer)?;
        if buffer.len() != len {
            return Err(Error::LengthMismatch(buffer.len(), len));
        }
        Ok(buffer)
    }
}

// Automatically implement `Serializer` for types that implement all three capabilities.
impl<T: Sizer + Encoder + Decoder + ?Sized> Serializer for T {}

/// Set of capabilities recorded for one receiver of a type.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    /// No capability.
    pub const EMPTY: Self = Self(0);
    /// [Sizer].
    pub const SIZER: Self = Self(1 << 0);
    /// [Encoder].
    pub const ENCODER: Self = Self(1 << 1);
    /// [Decoder].
    pub const DECODER: Self = Self(1 << 2);
    /// [Serializer].
    pub const FULL: Self = Self(Self::SIZER.0 | Self::ENCODER.0 | Self::DECODER.0);

    /// Returns true if every capability in `other` is also in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if the set is eligible for custom-codec dispatch.
    ///
    /// Partial sets (for example, a missing [Decoder]) are not.
    pub const fn is_full(self) -> bool {
        self.contains(Self::FULL)
    }

    /// Returns true if no capability is recorded.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the union of both sets.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for CapabilitySet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        if self.contains(Self::SIZER) {
            set.entry(&"Sizer");
        }
        if self.contains(Self::ENCODER) {
            set.entry(&"Encoder");
        }
        if self.contains(Self::DECODER) {
            set.entry(&"Decoder");
        }
        set.finish()
    }
}
