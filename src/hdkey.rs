//! BIP-0032 master-node derivation and SLIP-0132 extended-key serialization.

use k256::elliptic_curve::sec1::ToEncodedPoint as _;
use k256::SecretKey;
use zeroize::Zeroize;

use crate::error::{Error, InvalidSize};
use crate::hash;
use crate::version::{AddressType, KeyType, NetworkId};

/// The size in bytes of a serialized extended key.
const SERIALIZED_LEN: usize = 78;

/// A BIP-0032 master node: the private/public key pair and chain code
/// derived directly from a root seed, with depth, parent fingerprint and
/// child index fixed at their master-node values (all zero).
///
/// View-only nodes (no private key) are not produced by [`Node::from_seed`]
/// but the type supports them so a node recovered from an `xpub` string can
/// still serialize and derive its public extended key.
pub struct Node {
    private_key: Option<SecretKey>,
    public_key_compressed: [u8; 33],
    chain_code: [u8; 32],
}

impl Drop for Node {
    fn drop(&mut self) {
        self.chain_code.zeroize();
    }
}

impl Node {
    /// Derives the master node from a BIP-0032 seed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if the seed isn't between 16 and 64
    /// bytes long, and [`Error::InvalidValue`] if the derived private key is
    /// one of the (astronomically unlikely) invalid secp256k1 scalars.
    pub fn from_seed(seed: impl AsRef<[u8]>) -> Result<Self, Error> {
        let seed = seed.as_ref();
        if !(16..=64).contains(&seed.len()) {
            return Err(InvalidSize::new("BIP-0032 seed length", 16..=64, seed.len()).into());
        }

        let i = hash::hmac_sha512(b"Bitcoin seed", seed);
        let (i_l, i_r) = i.split_at(32);

        let private_key = SecretKey::from_slice(i_l)
            .map_err(|e| crate::error::InvalidValue::new("master private key", e.to_string()))?;
        let public_key_compressed = compressed_public_key(&private_key);

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(i_r);

        log::debug!("derived master node chain code: {}", hex::encode(chain_code));

        Ok(Self {
            private_key: Some(private_key),
            public_key_compressed,
            chain_code,
        })
    }

    /// Returns the 33-byte compressed public key.
    pub fn public_key(&self) -> [u8; 33] {
        self.public_key_compressed
    }

    /// Returns the raw 32-byte private key scalar, if this node has one.
    pub fn private_key(&self) -> Option<[u8; 32]> {
        self.private_key
            .as_ref()
            .map(|k| k.to_bytes().as_slice().try_into().expect("32-byte scalar"))
    }

    /// Serializes this node as a 78-byte extended key body (unencoded).
    ///
    /// `key_type` selects whether the 33-byte key material is the private
    /// key (`0x00` ∥ 32-byte scalar) or the compressed public key; it must
    /// be [`KeyType::Private`] only if this node actually holds a private
    /// key.
    fn serialize(&self, version: u32, key_type: KeyType) -> Result<[u8; SERIALIZED_LEN], Error> {
        let mut buf = [0u8; SERIALIZED_LEN];
        buf[0..4].copy_from_slice(&version.to_be_bytes());
        // depth, parent fingerprint and child index are all zero at the master node.
        buf[4] = 0;
        buf[5..9].copy_from_slice(&[0u8; 4]);
        buf[9..13].copy_from_slice(&[0u8; 4]);
        buf[13..45].copy_from_slice(&self.chain_code);

        match key_type {
            KeyType::Private => {
                let private_key = self
                    .private_key()
                    .ok_or(Error::InvalidArgument("node has no private key to serialize"))?;
                buf[45] = 0;
                buf[46..78].copy_from_slice(&private_key);
            }
            KeyType::Public => {
                buf[45..78].copy_from_slice(&self.public_key_compressed);
            }
        }

        Ok(buf)
    }

    /// Returns the Base58Check-encoded extended key string (xprv/xpub).
    pub fn extended_key(
        &self,
        network: NetworkId,
        address_type: AddressType,
        key_type: KeyType,
    ) -> Result<String, Error> {
        let version = crate::version::get_version(network, address_type, key_type);
        let body = self.serialize(version, key_type)?;
        Ok(bs58::encode(body).with_check().into_string())
    }
}

fn compressed_public_key(private_key: &SecretKey) -> [u8; 33] {
    private_key
        .public_key()
        .to_encoded_point(true)
        .as_bytes()
        .try_into()
        .expect("compressed SEC1 point is always 33 bytes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn bip32_test_vector_1_master_node() {
        let node = Node::from_seed(hex!("000102030405060708090a0b0c0d0e0f")).unwrap();

        assert_eq!(
            node.extended_key(NetworkId::Mainnet, AddressType::P2sh, KeyType::Private)
                .unwrap(),
            "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi"
        );
        assert_eq!(
            node.extended_key(NetworkId::Mainnet, AddressType::P2sh, KeyType::Public)
                .unwrap(),
            "xpub661MyMwAqRbcFtXgS5sYJABqqG9YVUD4oYYJaDGTtA4XFuCAbGedVCuU4SeHZb8gBPBv5skdCpFgGZ5GpiUNuZ64utWBEcoyMtz5Q5jqFvw"
        );
    }

    #[test]
    fn rejects_seeds_outside_the_16_to_64_byte_range() {
        assert!(Node::from_seed([0u8; 15]).is_err());
        assert!(Node::from_seed([0u8; 65]).is_err());
        assert!(Node::from_seed([0u8; 16]).is_ok());
        assert!(Node::from_seed([0u8; 64]).is_ok());
    }

    #[test]
    fn public_extended_key_has_no_private_key_leak() {
        let node = Node::from_seed(hex!("000102030405060708090a0b0c0d0e0f")).unwrap();
        let body = node.serialize(0x0488_b21e, KeyType::Public).unwrap();
        assert_eq!(&body[45..78], &node.public_key()[..]);
    }
}
