// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod errors;
mod protocol;

pub use self::errors::Error;
pub use self::protocol::Protocol;

use data_encoding::Encoding;
#[allow(unused_imports)]
use data_encoding_macro::{internal_new_encoding, new_encoding};
use encoding::{blake2b_variable, serde_bytes};
use serde::{de, ser, Deserialize};
use std::fmt;

/// Hash length of payload for secp addresses.
pub const PAYLOAD_HASH_LEN: usize = 20;

/// Uncompressed secp public key used for validation of secp addresses.
pub const SECP_PUB_LEN: usize = 65;

/// Length of the checksum hash for string encodings.
pub const CHECKSUM_HASH_LEN: usize = 4;

/// Prefix of the human readable address encoding.
const NETWORK_PREFIX: &str = "v";

/// Custom lowercase base32 encoding without padding for address strings.
const ADDRESS_ENCODER: Encoding = new_encoding! {
    symbols: "abcdefghijklmnopqrstuvwxyz234567",
    padding: None,
};

/// An opaque identifier of an account on chain. Addresses are either
/// protocol-assigned ID numbers or hashes of a secp public key.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Address {
    protocol: Protocol,
    payload: Vec<u8>,
}

impl Address {
    /// Generates a new address with an ID protocol payload.
    pub fn new_id(id: u64) -> Self {
        let mut payload = Vec::new();
        leb128::write::unsigned(&mut payload, id).expect("write to vec cannot fail");
        Self {
            protocol: Protocol::ID,
            payload,
        }
    }

    /// Generates a new address hashed from an uncompressed secp public key.
    pub fn new_secp256k1(pubkey: &[u8]) -> Result<Self, Error> {
        if pubkey.len() != SECP_PUB_LEN {
            return Err(Error::InvalidSECPLength(pubkey.len()));
        }
        Ok(Self {
            protocol: Protocol::Secp256k1,
            payload: blake2b_variable(pubkey, PAYLOAD_HASH_LEN),
        })
    }

    /// Parses an address from its protocol-prefixed byte representation.
    pub fn from_bytes(bz: &[u8]) -> Result<Self, Error> {
        if bz.len() < 2 {
            return Err(Error::InvalidLength);
        }
        let protocol = Protocol::from_byte(bz[0]).ok_or(Error::UnknownProtocol)?;
        let payload = bz[1..].to_vec();
        match protocol {
            Protocol::ID => {
                let mut cursor = &payload[..];
                leb128::read::unsigned(&mut cursor).map_err(|_| Error::InvalidPayload)?;
                if !cursor.is_empty() {
                    return Err(Error::InvalidPayload);
                }
            }
            Protocol::Secp256k1 => {
                if payload.len() != PAYLOAD_HASH_LEN {
                    return Err(Error::InvalidPayload);
                }
            }
        }
        Ok(Self { protocol, payload })
    }

    /// Returns the address protocol.
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Returns the raw payload of the address.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Returns the protocol-prefixed byte representation of the address.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bz = Vec::with_capacity(self.payload.len() + 1);
        bz.push(self.protocol as u8);
        bz.extend_from_slice(&self.payload);
        bz
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.protocol {
            Protocol::ID => {
                let mut cursor = &self.payload[..];
                let id = leb128::read::unsigned(&mut cursor).map_err(|_| fmt::Error)?;
                write!(f, "{}{}{}", NETWORK_PREFIX, self.protocol, id)
            }
            Protocol::Secp256k1 => {
                let mut ingest = self.payload.clone();
                ingest.extend_from_slice(&checksum(&self.to_bytes()));
                write!(
                    f,
                    "{}{}{}",
                    NETWORK_PREFIX,
                    self.protocol,
                    ADDRESS_ENCODER.encode(&ingest)
                )
            }
        }
    }
}

impl ser::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        let address_bytes = self.to_bytes();
        serde_bytes::Serialize::serialize(&serde_bytes::ByteBuf::from(address_bytes), serializer)
    }
}

impl<'de> de::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let bz: serde_bytes::ByteBuf = Deserialize::deserialize(deserializer)?;
        Address::from_bytes(&bz).map_err(de::Error::custom)
    }
}

/// Checksum calculates the 4 byte checksum hash.
pub fn checksum(ingest: &[u8]) -> Vec<u8> {
    blake2b_variable(ingest, CHECKSUM_HASH_LEN)
}

/// Validates the checksum against the ingest data.
pub fn validate_checksum(ingest: &[u8], expect: Vec<u8>) -> bool {
    let digest = checksum(ingest);
    digest == expect
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding::{from_slice, to_vec};

    #[test]
    fn id_address_display() {
        let addr = Address::new_id(1001);
        assert_eq!(addr.to_string(), "v01001");
        assert_eq!(addr.protocol(), Protocol::ID);
    }

    #[test]
    fn secp_payload_is_hashed() {
        let pubkey = [8u8; SECP_PUB_LEN];
        let addr = Address::new_secp256k1(&pubkey).unwrap();
        assert_eq!(addr.payload().len(), PAYLOAD_HASH_LEN);
        assert_eq!(addr.protocol(), Protocol::Secp256k1);
    }

    #[test]
    fn secp_key_length_check() {
        let pubkey = [8u8; 10];
        assert_eq!(
            Address::new_secp256k1(&pubkey),
            Err(Error::InvalidSECPLength(10))
        );
    }

    #[test]
    fn bytes_round_trip() {
        let addr = Address::new_secp256k1(&[3u8; SECP_PUB_LEN]).unwrap();
        assert_eq!(Address::from_bytes(&addr.to_bytes()).unwrap(), addr);

        let id = Address::new_id(217);
        assert_eq!(Address::from_bytes(&id.to_bytes()).unwrap(), id);
    }

    #[test]
    fn cbor_round_trip() {
        let addr = Address::new_secp256k1(&[3u8; SECP_PUB_LEN]).unwrap();
        let bz = to_vec(&addr).unwrap();
        assert_eq!(from_slice::<Address>(&bz).unwrap(), addr);
    }

    #[test]
    fn unknown_protocol_rejected() {
        assert_eq!(Address::from_bytes(&[7, 1, 2]), Err(Error::UnknownProtocol));
    }
}
