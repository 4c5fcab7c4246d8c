//! A from-scratch Fernet v1 envelope (<https://github.com/fernet/spec>),
//! keyed from a plain password rather than a pre-shared Fernet key.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes128;
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use cbc::{Decryptor, Encryptor};
use subtle::ConstantTimeEq as _;
use zeroize::Zeroizing;

use crate::error::Error;
use crate::hash;
use crate::rand;

type Aes128CbcEnc = Encryptor<Aes128>;
type Aes128CbcDec = Decryptor<Aes128>;

const VERSION: u8 = 0x80;
const HEADER_LEN: usize = 1 + 8 + 16; // version + timestamp + iv
const TAG_LEN: usize = 32;

/// Derives a 32-byte Fernet key from a password: `SHA-256(password)`, the
/// first 16 bytes used for HMAC-SHA256 signing, the last 16 for AES-128.
pub fn key_from_password(password: &str) -> Zeroizing<[u8; 32]> {
    Zeroizing::new(hash::sha256(password.as_bytes()))
}

/// Encrypts `message` into a Base64URL-encoded Fernet token.
pub fn encrypt(key: &Zeroizing<[u8; 32]>, message: &[u8]) -> Vec<u8> {
    let (signing_key, encryption_key) = key.split_at(16);

    let mut iv = [0u8; 16];
    rand::fill(&mut iv);

    let ciphertext =
        Aes128CbcEnc::new(encryption_key.into(), &iv.into()).encrypt_padded_vec_mut::<Pkcs7>(message);

    let timestamp = current_unix_timestamp();

    let mut body = Vec::with_capacity(HEADER_LEN + ciphertext.len());
    body.push(VERSION);
    body.extend_from_slice(&timestamp.to_be_bytes());
    body.extend_from_slice(&iv);
    body.extend_from_slice(&ciphertext);

    let tag = hash::hmac_sha256(signing_key, &body);
    body.extend_from_slice(&tag);

    URL_SAFE.encode(body).into_bytes()
}

/// Decrypts and authenticates a Base64URL-encoded Fernet token.
///
/// # Errors
///
/// Returns [`Error::AuthFailure`] if the token is malformed, carries an
/// unsupported version byte, or fails HMAC verification.
pub fn decrypt(key: &Zeroizing<[u8; 32]>, token: &[u8]) -> Result<Vec<u8>, Error> {
    let (signing_key, encryption_key) = key.split_at(16);

    let body = URL_SAFE
        .decode(token)
        .map_err(|_| Error::AuthFailure("token is not valid base64url"))?;

    if body.len() < HEADER_LEN + TAG_LEN {
        return Err(Error::AuthFailure("token is too short"));
    }

    let (signed, tag) = body.split_at(body.len() - TAG_LEN);
    let expected_tag = hash::hmac_sha256(signing_key, signed);
    if expected_tag.as_slice().ct_eq(tag).unwrap_u8() != 1 {
        return Err(Error::AuthFailure("HMAC verification failed"));
    }

    if signed[0] != VERSION {
        return Err(Error::AuthFailure("unsupported token version"));
    }

    let iv = &signed[9..25];
    let ciphertext = &signed[25..];

    Aes128CbcDec::new(encryption_key.into(), iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| Error::AuthFailure("ciphertext padding is invalid"))
}

fn current_unix_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is after the Unix epoch")
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_message() {
        let key = key_from_password("correct horse battery staple");
        let token = encrypt(&key, b"secret entropy");
        assert_eq!(decrypt(&key, &token).unwrap(), b"secret entropy");
    }

    #[test]
    fn rejects_tampered_token() {
        let key = key_from_password("pw");
        let token = encrypt(&key, b"message");

        let mut body = URL_SAFE.decode(&token).unwrap();
        let last = body.len() - 1;
        body[last] ^= 0xff;
        let tampered = URL_SAFE.encode(body).into_bytes();

        assert!(decrypt(&key, &tampered).is_err());
    }

    #[test]
    fn rejects_token_under_wrong_key() {
        let key_a = key_from_password("a");
        let key_b = key_from_password("b");
        let token = encrypt(&key_a, b"message");
        assert!(decrypt(&key_b, &token).is_err());
    }

    #[test]
    fn empty_message_round_trips() {
        let key = key_from_password("pw");
        let token = encrypt(&key, b"");
        assert_eq!(decrypt(&key, &token).unwrap(), b"");
    }
}
