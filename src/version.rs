//! Static SLIP-0132 registry mapping (network, address type, key type) to
//! the 4-byte version prefix used by an extended key's Base58Check encoding.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{Error, InvalidValue};

/// Which Bitcoin network an extended key is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkId {
    Mainnet,
    Testnet,
}

impl FromStr for NetworkId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "mainnet" => Ok(NetworkId::Mainnet),
            "testnet" => Ok(NetworkId::Testnet),
            _ => Err(InvalidValue::new("network", format!("'{s}' is not mainnet or testnet")).into()),
        }
    }
}

impl Display for NetworkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NetworkId::Mainnet => "mainnet",
            NetworkId::Testnet => "testnet",
        })
    }
}

/// Which address/script type the extended key's path is associated with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressType {
    /// BIP-0044, `m/44'/...`.
    P2sh,
    /// BIP-0049, `m/49'/...`.
    P2shP2wpkh,
    /// BIP-0084, `m/84'/...`.
    P2wpkh,
}

impl FromStr for AddressType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "p2sh" => Ok(AddressType::P2sh),
            "p2sh-p2wpkh" => Ok(AddressType::P2shP2wpkh),
            "p2wpkh" => Ok(AddressType::P2wpkh),
            _ => Err(InvalidValue::new(
                "address type",
                format!("'{s}' is not one of p2sh, p2sh-p2wpkh, p2wpkh"),
            )
            .into()),
        }
    }
}

impl Display for AddressType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AddressType::P2sh => "p2sh",
            AddressType::P2shP2wpkh => "p2sh-p2wpkh",
            AddressType::P2wpkh => "p2wpkh",
        })
    }
}

/// Whether the extended key carries a private or public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyType {
    Private,
    Public,
}

impl FromStr for KeyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "private" => Ok(KeyType::Private),
            "public" => Ok(KeyType::Public),
            _ => Err(InvalidValue::new("key type", format!("'{s}' is not private or public")).into()),
        }
    }
}

impl Display for KeyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyType::Private => "private",
            KeyType::Public => "public",
        })
    }
}

/// The network used when none is given explicitly.
pub const DEFAULT_NETWORK: NetworkId = NetworkId::Mainnet;

/// The address type used when none is given explicitly.
pub const DEFAULT_ADDRESS_TYPE: AddressType = AddressType::P2wpkh;

/// The key type used when none is given explicitly.
pub const DEFAULT_KEY_TYPE: KeyType = KeyType::Public;

/// One row of the version registry.
struct Entry {
    network: NetworkId,
    address_type: AddressType,
    path: &'static str,
    pubkey_version: u32,
    prvkey_version: u32,
}

const REGISTRY: &[Entry] = &[
    Entry {
        network: NetworkId::Mainnet,
        address_type: AddressType::P2sh,
        path: "m/44h/0h",
        pubkey_version: 0x0488_b21e,
        prvkey_version: 0x0488_ade4,
    },
    Entry {
        network: NetworkId::Mainnet,
        address_type: AddressType::P2shP2wpkh,
        path: "m/49h/0h",
        pubkey_version: 0x049d_7cb2,
        prvkey_version: 0x049d_7878,
    },
    Entry {
        network: NetworkId::Mainnet,
        address_type: AddressType::P2wpkh,
        path: "m/84h/0h",
        pubkey_version: 0x04b2_4746,
        prvkey_version: 0x04b2_430c,
    },
    Entry {
        network: NetworkId::Testnet,
        address_type: AddressType::P2sh,
        path: "m/44h/1h",
        pubkey_version: 0x0435_87cf,
        prvkey_version: 0x0435_8394,
    },
    Entry {
        network: NetworkId::Testnet,
        address_type: AddressType::P2shP2wpkh,
        path: "m/49h/1h",
        pubkey_version: 0x044a_5262,
        prvkey_version: 0x044a_4e28,
    },
    Entry {
        network: NetworkId::Testnet,
        address_type: AddressType::P2wpkh,
        path: "m/84h/1h",
        pubkey_version: 0x045f_1cf6,
        prvkey_version: 0x045f_18bc,
    },
];

/// Returns the 4-byte version for `(network, address_type, key_type)`.
///
/// Total: always succeeds, since every combination of the three enums has an
/// entry in the registry.
pub fn get_version(network: NetworkId, address_type: AddressType, key_type: KeyType) -> u32 {
    let entry = entry_for(network, address_type);
    match key_type {
        KeyType::Private => entry.prvkey_version,
        KeyType::Public => entry.pubkey_version,
    }
}

/// Returns the default BIP-0032 derivation path for `(network, address_type)`,
/// e.g. `"m/84h/0h"` for mainnet P2WPKH.
pub fn path_for(network: NetworkId, address_type: AddressType) -> &'static str {
    entry_for(network, address_type).path
}

fn entry_for(network: NetworkId, address_type: AddressType) -> &'static Entry {
    REGISTRY
        .iter()
        .find(|e| e.network == network && e.address_type == address_type)
        .expect("version registry covers every (network, address_type) pair")
}

/// Looks up `(network, address_type)` for a default derivation path string.
///
/// Returns `None` if `path` matches no registry entry.
pub fn find_by_path(path: &str) -> Option<(NetworkId, AddressType)> {
    REGISTRY
        .iter()
        .find(|e| e.path == path)
        .map(|e| (e.network, e.address_type))
}

/// Looks up `(network, address_type, key_type)` for a 4-byte version.
///
/// Returns `None` if `version` matches no registry entry.
pub fn find_by_version(version: u32) -> Option<(NetworkId, AddressType, KeyType)> {
    REGISTRY.iter().find_map(|e| {
        if e.pubkey_version == version {
            Some((e.network, e.address_type, KeyType::Public))
        } else if e.prvkey_version == version {
            Some((e.network, e.address_type, KeyType::Private))
        } else {
            None
        }
    })
}
