mod cmd;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "mnemoforge", about = "Offline BIP-0039/BIP-0032 seed toolkit")]
struct Options {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a new 24-word mnemonic from hardened CSPRNG entropy.
    Generate(cmd::generate::Options),
    /// Derive the BIP-0039 root seed for a mnemonic.
    Seed(cmd::seed::Options),
    /// Derive xprv/xpub extended keys from a BIP-0032 seed.
    Xkeys(cmd::xkeys::Options),
    /// Apply a reversible transform to raw hex input.
    Transform(cmd::transform::Options),
    /// Split a 24-word mnemonic into two 12-word halves.
    Split(cmd::split::Options),
    /// Join two 12-word mnemonic halves into one 24-word mnemonic.
    Join(cmd::join::Options),
    /// Hide a mnemonic inside an image with LSB steganography.
    #[cfg(feature = "stego")]
    Hide(cmd::hide::Options),
    /// Recover a mnemonic hidden inside an image.
    #[cfg(feature = "stego")]
    Show(cmd::show::Options),
}

fn main() {
    env_logger::init();

    let options = Options::parse();
    let result = match options.command {
        Command::Generate(options) => cmd::generate::run(options),
        Command::Seed(options) => cmd::seed::run(options),
        Command::Xkeys(options) => cmd::xkeys::run(options),
        Command::Transform(options) => cmd::transform::run(options),
        Command::Split(options) => cmd::split::run(options),
        Command::Join(options) => cmd::join::run(options),
        #[cfg(feature = "stego")]
        Command::Hide(options) => cmd::hide::run(options),
        #[cfg(feature = "stego")]
        Command::Show(options) => cmd::show::run(options),
    };

    if let Err(err) = result {
        if cfg!(debug_assertions) {
            eprintln!("ERROR: {err:?}");
        } else {
            eprintln!("ERROR: {err}");
        }
        process::exit(1);
    }
}
