//! Typed error taxonomy shared by every module in this crate.
//!
//! The library never panics or swallows a failed validation: every fallible
//! operation returns one of the variants below with the expected/obtained
//! values folded into the message, so a caller (or the CLI's `anyhow`
//! wrapping) can print a useful diagnostic without re-deriving context.

use std::fmt::{self, Display, Formatter};

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// The complete error taxonomy for this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Entropy bit length, mnemonic word count, seed byte length, or image
    /// capacity violates its constraint.
    #[error("{0}")]
    InvalidSize(InvalidSize),

    /// Malformed hex, non-numeric CLI selector, or an out-of-range selector.
    #[error("{0}")]
    InvalidValue(InvalidValue),

    /// A mnemonic token is absent from the word list.
    #[error("invalid mnemonic word '{word}' at position {position}")]
    InvalidWord { word: String, position: usize },

    /// BIP-0039 checksum mismatch with `correct_last_word` disabled.
    #[error("invalid checksum\n\texpected: {expected:#010b}\n\tobtained: {obtained:#010b}")]
    InvalidChecksum { expected: u16, obtained: u16 },

    /// An argument is structurally invalid for the operation requested (an
    /// empty `PASSWORD` transform password, or `PASSWORD` used with
    /// split/join).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Fernet HMAC verification failed, or the token was malformed.
    #[error("authentication failure: {0}")]
    AuthFailure(&'static str),

    /// The message is too large for the host image to carry.
    #[error("capacity exceeded\n\timage can carry: {capacity} bytes\n\tmessage needs: {needed} bytes")]
    CapacityExceeded { capacity: usize, needed: usize },
}

/// An invalid size, naming what was being sized, what was expected, and what
/// was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSize {
    pub context: &'static str,
    pub expected: Vec<usize>,
    pub obtained: usize,
}

impl Display for InvalidSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let expected = self
            .expected
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "invalid {}\n\texpected: {expected}\n\tobtained: {}",
            self.context, self.obtained
        )
    }
}

impl InvalidSize {
    pub fn new(context: &'static str, expected: impl IntoIterator<Item = usize>, obtained: usize) -> Self {
        Self {
            context,
            expected: expected.into_iter().collect(),
            obtained,
        }
    }
}

/// A malformed value, naming what was being parsed and why it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValue {
    pub context: &'static str,
    pub reason: String,
}

impl Display for InvalidValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}\n\t{}", self.context, self.reason)
    }
}

impl InvalidValue {
    pub fn new(context: &'static str, reason: impl Into<String>) -> Self {
        Self {
            context,
            reason: reason.into(),
        }
    }
}

impl From<InvalidSize> for Error {
    fn from(e: InvalidSize) -> Self {
        Error::InvalidSize(e)
    }
}

impl From<InvalidValue> for Error {
    fn from(e: InvalidValue) -> Self {
        Error::InvalidValue(e)
    }
}

impl From<bs58::decode::Error> for Error {
    fn from(e: bs58::decode::Error) -> Self {
        Error::InvalidValue(InvalidValue::new("base58 string", e.to_string()))
    }
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::InvalidValue(InvalidValue::new("hexadecimal string", e.to_string()))
    }
}

impl From<hmac::digest::InvalidLength> for Error {
    fn from(_: hmac::digest::InvalidLength) -> Self {
        Error::InvalidValue(InvalidValue::new("hmac key", "key length rejected by HMAC implementation"))
    }
}
