//! Error types for user-supplied codecs

use thiserror::Error;

/// Error returned by [crate::Encoder] and [crate::Decoder] implementations.
///
/// The dispatch core never produces one of these itself: capability queries are
/// plain booleans.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("invalid data in {0}: {1}")]
    InvalidData(String, String), // context, message
    #[error("length mismatch: wrote {0} bytes, size reported {1}")]
    LengthMismatch(usize, usize), // written, reported
}
