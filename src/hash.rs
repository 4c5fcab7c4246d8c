//! Module implementing the hashing primitives shared by the seed codec, the
//! master-node derivation and the entropy transforms.

use hmac::{Hmac, Mac as _};
use sha2::{Digest as _, Sha256, Sha512};

/// Returns the SHA-256 hash of the specified input.
pub fn sha256(data: impl AsRef<[u8]>) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data.as_ref());
    hasher.finalize().into()
}

/// Returns HMAC-SHA512(key, message), used both by BIP-0032 master-node
/// derivation (keyed with the constant `"Bitcoin seed"`) and by the BIP-0039
/// root seed's PBKDF2-HMAC-SHA512 construction.
pub fn hmac_sha512(key: impl AsRef<[u8]>, message: impl AsRef<[u8]>) -> [u8; 64] {
    let mut mac =
        Hmac::<Sha512>::new_from_slice(key.as_ref()).expect("HMAC accepts a key of any length");
    mac.update(message.as_ref());
    mac.finalize().into_bytes().into()
}

/// Returns HMAC-SHA256(key, message), used by the Fernet token's
/// authentication tag.
pub fn hmac_sha256(key: impl AsRef<[u8]>, message: impl AsRef<[u8]>) -> [u8; 32] {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(key.as_ref()).expect("HMAC accepts a key of any length");
    mac.update(message.as_ref());
    mac.finalize().into_bytes().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            sha256(b""),
            hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
        );
    }
}
