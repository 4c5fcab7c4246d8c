//! BIP-0039 entropy ⇄ mnemonic ⇄ root-seed codec.

use std::fmt::Write as _;

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization as _;
use zeroize::Zeroize;

use crate::error::{Error, InvalidSize, InvalidValue};
use crate::hash;
use crate::wordlist;

/// Entropy bit lengths allowed by BIP-0039.
const VALID_BIT_LENGTHS: [usize; 5] = [128, 160, 192, 224, 256];

/// Number of PBKDF2-HMAC-SHA512 rounds used to stretch a mnemonic into its
/// root seed.
const ROOT_SEED_ROUNDS: u32 = 2048;

/// A BIP-0039 seed: entropy plus an optional passphrase.
///
/// Immutable apart from the passphrase, which may be changed after
/// construction. Equality compares entropy and passphrase together.
#[derive(Clone, Debug)]
pub struct Seed {
    entropy: Vec<u8>,
    passphrase: String,
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.entropy == other.entropy && self.passphrase == other.passphrase
    }
}

impl Eq for Seed {}

impl Drop for Seed {
    fn drop(&mut self) {
        self.entropy.zeroize();
        self.passphrase.zeroize();
    }
}

impl Seed {
    /// Builds a seed from raw entropy bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if the entropy's bit length is not one
    /// of 128, 160, 192, 224 or 256.
    pub fn from_entropy_bytes(entropy: impl Into<Vec<u8>>) -> Result<Self, Error> {
        let entropy = entropy.into();
        let bits = entropy.len() * 8;
        if !VALID_BIT_LENGTHS.contains(&bits) {
            return Err(InvalidSize::new("entropy bit length", VALID_BIT_LENGTHS, bits).into());
        }
        log::debug!("seed entropy: {}", hex::encode(&entropy));
        Ok(Self {
            entropy,
            passphrase: String::new(),
        })
    }

    /// Builds a seed from a big-endian unsigned integer, rounding its bit
    /// width up to the next multiple of 32 before validating it.
    pub fn from_entropy_int(value: impl AsRef<[u8]>) -> Result<Self, Error> {
        let be = value.as_ref();
        let significant = be.iter().position(|&b| b != 0).unwrap_or(be.len());
        let minimal = &be[significant..];

        let bits = minimal.len() * 8;
        let rounded_bits = bits.div_ceil(32) * 32;
        let rounded_bytes = rounded_bits / 8;

        let mut padded = vec![0u8; rounded_bytes];
        let offset = rounded_bytes - minimal.len();
        padded[offset..].copy_from_slice(minimal);

        Self::from_entropy_bytes(padded)
    }

    /// Builds a seed from a hexadecimal string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if `hex` is not valid hexadecimal.
    pub fn from_entropy_hex(hex_str: impl AsRef<str>) -> Result<Self, Error> {
        let bytes = hex::decode(hex_str.as_ref())
            .map_err(|e| InvalidValue::new("hexadecimal entropy", e.to_string()))?;
        Self::from_entropy_bytes(bytes)
    }

    /// Parses a seed from a mnemonic phrase or word sequence.
    ///
    /// When `correct_last_word` is true, a checksum mismatch is silently
    /// accepted: the returned seed is built from the recovered entropy as
    /// though the last word had carried the correct checksum all along.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if the word count isn't one of 12, 15,
    /// 18, 21 or 24; [`Error::InvalidWord`] if a word isn't in the list; and
    /// [`Error::InvalidChecksum`] on a checksum mismatch when
    /// `correct_last_word` is false.
    pub fn from_mnemonic(
        words: impl AsRef<[String]>,
        correct_last_word: bool,
    ) -> Result<Self, Error> {
        let words = words.as_ref();
        let w = words.len();
        if !matches!(w, 12 | 15 | 18 | 21 | 24) {
            return Err(InvalidSize::new("mnemonic word count", [12, 15, 18, 21, 24], w).into());
        }

        // W = (L + K) / 11, K = L/32  =>  L = 32*W/33.
        let entropy_bits = (w * 11 * 32) / 33;
        let checksum_bits = entropy_bits / 32;
        debug_assert_eq!(entropy_bits + checksum_bits, w * 11);
        let entropy_bytes = entropy_bits / 8;

        let mut entropy = vec![0u8; entropy_bytes];
        let mut acc: usize = 0;
        let mut bit_offset = 0;
        let mut byte_offset = 0;
        for (position, word) in words.iter().enumerate() {
            let index = wordlist::search(word).ok_or_else(|| Error::InvalidWord {
                word: word.clone(),
                position,
            })?;
            acc = (acc << 11) | index;

            bit_offset += 11;
            while bit_offset > 8 {
                bit_offset -= 8;
                entropy[byte_offset] = ((acc >> bit_offset) & 0xff) as u8;
                byte_offset += 1;
            }
        }
        debug_assert_eq!(byte_offset, entropy_bytes);
        debug_assert_eq!(bit_offset, checksum_bits);

        let presented_checksum = (acc & ((1 << bit_offset) - 1)) as u8;
        let expected_checksum = hash::sha256(&entropy)[0] >> (8 - checksum_bits);
        if expected_checksum != presented_checksum {
            if !correct_last_word {
                return Err(Error::InvalidChecksum {
                    expected: expected_checksum as u16,
                    obtained: presented_checksum as u16,
                });
            }
            log::warn!("mnemonic checksum mismatch corrected via last word");
        }

        Self::from_entropy_bytes(entropy)
    }

    /// Returns the raw entropy bytes.
    pub fn entropy(&self) -> &[u8] {
        &self.entropy
    }

    /// Returns the entropy's bit length.
    pub fn bit_length(&self) -> usize {
        self.entropy.len() * 8
    }

    /// Returns K, the checksum's bit length (L/32).
    fn checksum_bits(&self) -> usize {
        self.bit_length() / 32
    }

    /// Returns the K-bit checksum value: the top K bits of SHA-256(entropy).
    pub fn checksum(&self) -> u8 {
        let k = self.checksum_bits();
        hash::sha256(&self.entropy)[0] >> (8 - k)
    }

    /// Returns the mnemonic word sequence for this seed's entropy.
    pub fn mnemonic(&self) -> Vec<&'static str> {
        use std::mem;

        let k = self.checksum_bits();
        let l = self.bit_length();
        let w = (l + k) / 11;

        // entropy ++ sha256(entropy) gives enough trailing bytes to read an
        // 8-byte window at every word's bit offset, including the checksum
        // bits past the entropy's own end, without a separate size-agnostic
        // bit accumulator.
        let mut buf = self.entropy.clone();
        buf.extend_from_slice(&hash::sha256(&self.entropy));

        (0..w)
            .map(|i| {
                let bit_offset = i * 11;
                let offset = bit_offset / 8;
                let shift = mem::size_of::<usize>() * 8 - 11 - bit_offset % 8;
                let window: [u8; mem::size_of::<usize>()] = buf[offset..][..mem::size_of::<usize>()]
                    .try_into()
                    .expect("buffer has enough trailing hash bytes for the window read");
                let index = (usize::from_be_bytes(window) >> shift) & 0x7ff;
                wordlist::word(index).expect("checksum-verified mnemonic index in range")
            })
            .collect()
    }

    /// Returns the mnemonic phrase, words separated by a single space.
    pub fn to_phrase(&self) -> String {
        self.mnemonic().join(" ")
    }

    /// Sets the passphrase used by [`Seed::root_seed`].
    pub fn set_passphrase(&mut self, passphrase: impl Into<String>) {
        self.passphrase = passphrase.into();
    }

    /// Returns a copy of this seed with the given passphrase.
    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.set_passphrase(passphrase);
        self
    }

    /// Derives the 64-byte BIP-0032 root seed via PBKDF2-HMAC-SHA512 over
    /// the NFKD-normalized mnemonic phrase, salted with
    /// `"mnemonic"` + the NFKD-normalized passphrase, for 2048 rounds.
    pub fn root_seed(&self) -> RootSeed {
        let mut salt = String::from("mnemonic");
        write!(salt, "{}", self.passphrase).expect("writing to a String cannot fail");

        let phrase: String = self.to_phrase().nfkd().collect();
        let salt: String = salt.nfkd().collect();

        let mut buf = [0u8; 64];
        pbkdf2::<Hmac<Sha512>>(phrase.as_bytes(), salt.as_bytes(), ROOT_SEED_ROUNDS, &mut buf);
        log::debug!("derived root seed from {}-bit entropy", self.bit_length());

        RootSeed(buf)
    }
}

/// The 64-byte PBKDF2-HMAC-SHA512 root seed derived from a [`Seed`].
///
/// Distinct from [`Seed`] itself to keep the BIP-0039 mnemonic object and its
/// stretched BIP-0032 seed input from colliding under one name.
#[derive(Clone, Eq, PartialEq)]
pub struct RootSeed([u8; 64]);

impl RootSeed {
    /// Returns the 64 root seed bytes.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl AsRef<[u8]> for RootSeed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for RootSeed {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for RootSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("RootSeed").field(&"<redacted>").finish()
    }
}
