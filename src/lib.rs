//! Offline BIP-0039 / BIP-0032 seed toolkit.
//!
//! This crate implements the four tightly coupled subsystems that make up a
//! self-contained mnemonic/wallet toolkit: a BIP-0039 mnemonic codec, a
//! BIP-0032 master-node deriver with SLIP-0132 versioned Base58Check
//! serialization, a reversible entropy transform algebra (including a
//! password-based Fernet envelope), and mnemonic split/join built on top of
//! it. The `stego` feature additionally composes the transform algebra with
//! LSB steganographic embedding into an RGB image.

pub mod error;
pub mod hash;
pub mod hdkey;
pub mod rand;
pub mod seed;
#[cfg(feature = "stego")]
pub mod stego;
pub mod split;
pub mod transform;
pub mod version;
pub mod wordlist;
