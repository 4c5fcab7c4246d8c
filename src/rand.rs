//! Cryptographically secure randomness.
//!
//! `raw` exposes the operating system CSPRNG directly (test/debug use).
//! `hardened` is the entropy producer actually used when minting new
//! mnemonics: it whitens two independent CSPRNG draws through 2048 rounds of
//! PBKDF2-HMAC-SHA256, so the output's security still derives entirely from
//! the CSPRNG rather than from the PBKDF2 step itself.

use std::io;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

/// The maximum amount of entropy that can be read at a time.
pub const MAX_SIZE: usize = 256;

/// Number of PBKDF2-HMAC-SHA256 rounds applied by [`hardened`].
const HARDENED_ROUNDS: u32 = 2048;

/// Output length in bytes of [`hardened`].
const HARDENED_LEN: usize = 32;

/// Fills the specified slice with cryptographically strong entropy.
pub fn fill(buf: &mut [u8]) {
    for chunk in buf.chunks_mut(MAX_SIZE) {
        getentropy(chunk).expect("chunk size less than max");
    }
}

/// Populates the specified slice with cryptographically strong entropy.
///
/// Returns an error if the buffer length is greater than [`MAX_SIZE`].
pub fn getentropy(buf: &mut [u8]) -> io::Result<()> {
    let result = unsafe { ffi::getentropy(buf.as_mut_ptr(), buf.len()) };
    if result >= 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

/// Returns `n_bits` of raw CSPRNG output as a big-endian byte string, the
/// bit length rounded up to the next whole byte.
///
/// Intended for tests and diagnostics; [`hardened`] is the entropy source
/// used by the rest of the crate.
pub fn raw(n_bits: usize) -> Vec<u8> {
    let mut buf = vec![0u8; n_bits.div_ceil(8)];
    fill(&mut buf);
    buf
}

/// Returns 32 bytes of PBKDF2-HMAC-SHA256-whitened CSPRNG entropy.
///
/// Draws a 32-byte password and a 16-byte salt independently from the CSPRNG
/// and runs 2048 rounds of PBKDF2-HMAC-SHA256 over them. The round count is
/// a whitening pass, not a key-stretching defense against a weak password:
/// both inputs already come from the CSPRNG.
pub fn hardened() -> [u8; HARDENED_LEN] {
    let mut password = [0u8; 32];
    let mut salt = [0u8; 16];
    fill(&mut password);
    fill(&mut salt);

    let mut out = [0u8; HARDENED_LEN];
    pbkdf2_hmac::<Sha256>(&password, &salt, HARDENED_ROUNDS, &mut out);
    out
}

mod ffi {
    use std::ffi::c_int;

    extern "C" {
        pub fn getentropy(buffer: *mut u8, len: usize) -> c_int;
    }
}
