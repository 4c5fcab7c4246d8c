//! CLI subcommand implementations.
//!
//! Each submodule is one `mnemoforge <subcommand>`: an `Options` struct
//! parsed by `clap::Parser`, and a `run` function returning
//! `anyhow::Result<()>`. The library underneath never sees `anyhow`; it stays
//! entirely on [`mnemoforge::error::Error`], which this layer displays.

pub mod generate;
#[cfg(feature = "stego")]
pub mod hide;
pub mod join;
pub mod seed;
#[cfg(feature = "stego")]
pub mod show;
pub mod split;
pub mod transform;
pub mod xkeys;

/// Splits a mnemonic phrase on ASCII whitespace into owned words, the way
/// every subcommand that takes a `--mnemonic` string does before handing it
/// to [`mnemoforge::seed::Seed::from_mnemonic`].
pub fn split_words(phrase: &str) -> Vec<String> {
    phrase.split_whitespace().map(String::from).collect()
}
