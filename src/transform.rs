//! Entropy transform algebra: identity, bitwise complement, bit reversal and
//! a password-based Fernet envelope.

mod fernet;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{Error, InvalidValue};

/// A reversible byte-string transform, selectable at the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Leaves the message untouched.
    None,
    /// Bitwise complement of every bit in the message.
    Negative,
    /// Reverses the message bit-by-bit (not byte-by-byte).
    Reversal,
    /// Symmetric authenticated encryption keyed by a password (Fernet v1).
    Password,
}

/// The transform used when none is given explicitly.
pub const DEFAULT_TRANSFORM: Transform = Transform::None;

/// Parses the CLI's `-e N` numeric selector (`N` in `0..=3`).
impl FromStr for Transform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "0" => Ok(Transform::None),
            "1" => Ok(Transform::Negative),
            "2" => Ok(Transform::Reversal),
            "3" => Ok(Transform::Password),
            _ => Err(InvalidValue::new("encryption selector", format!("'{s}' is not one of 0-3")).into()),
        }
    }
}

impl Display for Transform {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let n = match self {
            Transform::None => 0,
            Transform::Negative => 1,
            Transform::Reversal => 2,
            Transform::Password => 3,
        };
        write!(f, "{n}")
    }
}

impl Transform {
    /// Applies this transform to `message`, encrypting it under
    /// [`Transform::Password`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `self` is [`Transform::Password`]
    /// and `password` is empty.
    pub fn encrypt(self, message: &[u8], password: Option<&str>) -> Result<Vec<u8>, Error> {
        log::debug!("transform algorithm: {self:?}");
        match self {
            Transform::None => {
                log::warn!("nothing to do");
                Ok(message.to_vec())
            }
            Transform::Negative => Ok(negate(message)),
            Transform::Reversal => Ok(reverse_bits(message)),
            Transform::Password => {
                let password = require_password(password)?;
                Ok(fernet::encrypt(&fernet::key_from_password(password), message))
            }
        }
    }

    /// Reverses [`Transform::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `self` is [`Transform::Password`]
    /// and `password` is empty, and [`Error::AuthFailure`] if the Fernet
    /// token fails authentication.
    pub fn decrypt(self, message: &[u8], password: Option<&str>) -> Result<Vec<u8>, Error> {
        log::debug!("transform algorithm: {self:?}");
        match self {
            Transform::None => {
                log::warn!("nothing to do");
                Ok(message.to_vec())
            }
            Transform::Negative => Ok(negate(message)),
            Transform::Reversal => Ok(reverse_bits(message)),
            Transform::Password => {
                let password = require_password(password)?;
                fernet::decrypt(&fernet::key_from_password(password), message)
            }
        }
    }
}

fn require_password(password: Option<&str>) -> Result<&str, Error> {
    match password {
        Some(p) if !p.is_empty() => Ok(p),
        _ => Err(Error::InvalidArgument("password cannot be empty")),
    }
}

/// Bitwise complement over the whole message.
fn negate(message: &[u8]) -> Vec<u8> {
    message.iter().map(|b| !b).collect()
}

/// Reverses the message at the bit level: the bit at position 0 (the
/// most-significant bit of the first byte) swaps with the bit at the last
/// position, and so on.
fn reverse_bits(message: &[u8]) -> Vec<u8> {
    let total_bits = message.len() * 8;
    let mut out = vec![0u8; message.len()];
    for i in 0..total_bits {
        let src_byte = i / 8;
        let src_shift = 7 - (i % 8);
        let bit = (message[src_byte] >> src_shift) & 1;

        let dst_bit_index = total_bits - 1 - i;
        let dst_byte = dst_bit_index / 8;
        let dst_shift = 7 - (dst_bit_index % 8);
        out[dst_byte] |= bit << dst_shift;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_identity() {
        let msg = b"hello world";
        assert_eq!(Transform::None.encrypt(msg, None).unwrap(), msg);
        assert_eq!(Transform::None.decrypt(msg, None).unwrap(), msg);
    }

    #[test]
    fn negative_is_its_own_inverse() {
        let msg = b"entropy-bytes-1234";
        let transformed = Transform::Negative.encrypt(msg, None).unwrap();
        assert_ne!(transformed, msg);
        assert_eq!(Transform::Negative.decrypt(&transformed, None).unwrap(), msg);
    }

    #[test]
    fn reversal_is_its_own_inverse() {
        let msg = b"entropy-bytes-1234";
        let transformed = Transform::Reversal.encrypt(msg, None).unwrap();
        assert_ne!(transformed, msg);
        assert_eq!(Transform::Reversal.decrypt(&transformed, None).unwrap(), msg);
    }

    #[test]
    fn reversal_swaps_first_and_last_bit() {
        let msg = [0b1000_0000u8, 0b0000_0000];
        let out = reverse_bits(&msg);
        assert_eq!(out, [0b0000_0000, 0b0000_0001]);
    }

    #[test]
    fn password_round_trips() {
        let msg = b"twelve secret words go here";
        let encrypted = Transform::Password.encrypt(msg, Some("hunter2")).unwrap();
        assert_ne!(encrypted, msg);
        let decrypted = Transform::Password.decrypt(&encrypted, Some("hunter2")).unwrap();
        assert_eq!(decrypted, msg);
    }

    #[test]
    fn password_rejects_empty_password() {
        assert!(Transform::Password.encrypt(b"x", Some("")).is_err());
        assert!(Transform::Password.encrypt(b"x", None).is_err());
    }

    #[test]
    fn password_rejects_wrong_password() {
        let msg = b"secret";
        let encrypted = Transform::Password.encrypt(msg, Some("right")).unwrap();
        assert!(Transform::Password.decrypt(&encrypted, Some("wrong")).is_err());
    }

    #[test]
    fn from_str_parses_the_numeric_cli_selector() {
        assert_eq!("0".parse::<Transform>().unwrap(), Transform::None);
        assert_eq!("1".parse::<Transform>().unwrap(), Transform::Negative);
        assert_eq!("2".parse::<Transform>().unwrap(), Transform::Reversal);
        assert_eq!("3".parse::<Transform>().unwrap(), Transform::Password);
        assert!("4".parse::<Transform>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for transform in [Transform::None, Transform::Negative, Transform::Reversal, Transform::Password] {
            assert_eq!(transform.to_string().parse::<Transform>().unwrap(), transform);
        }
    }
}
