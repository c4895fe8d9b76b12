// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::errors::Error;
use address::Address;
use encoding::{blake2b_256, serde_bytes};
use secp256k1::{recover, Message, RecoveryId, Signature as EcdsaSignature};
use serde::{Deserialize, Serialize};

/// Length of a recoverable secp signature: 64 signature bytes plus one
/// recovery byte.
pub const SECP_SIG_LEN: usize = 65;

/// A recoverable signature over the blake2b hash of the signed payload. The
/// signer's public key, and from it the signer's address, is recovered during
/// verification.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature {
    #[serde(with = "serde_bytes")]
    bytes: Vec<u8>,
}

impl Signature {
    /// Creates a signature from raw bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns reference to the signature bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Checks if the signature verifies `data` for the given address. The
    /// address must be a secp key address; recovery yields the public key
    /// whose hash is compared against the address payload.
    pub fn verify(&self, data: &[u8], addr: &Address) -> Result<(), Error> {
        if self.bytes.len() != SECP_SIG_LEN {
            return Err(Error::VerificationError(format!(
                "Invalid signature length, expected {}, got {}",
                SECP_SIG_LEN,
                self.bytes.len()
            )));
        }

        let hash = blake2b_256(data);
        let message = Message::parse(&hash);
        let signature = EcdsaSignature::parse_standard_slice(&self.bytes[..64])
            .map_err(|e| Error::VerificationError(e.to_string()))?;
        let rec_id =
            RecoveryId::parse(self.bytes[64]).map_err(|e| Error::VerificationError(e.to_string()))?;
        let pubkey = recover(&message, &signature, &rec_id)
            .map_err(|e| Error::VerificationError(e.to_string()))?;

        let rec_addr = Address::new_secp256k1(&pubkey.serialize())
            .map_err(|e| Error::VerificationError(e.to_string()))?;
        if &rec_addr == addr {
            Ok(())
        } else {
            Err(Error::VerificationError(format!(
                "Recovered address {} does not match signer {}",
                rec_addr, addr
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secp256k1::{sign, PublicKey, SecretKey};

    fn sign_bytes(data: &[u8], key: &SecretKey) -> Signature {
        let hash = blake2b_256(data);
        let (sig, rec_id) = sign(&Message::parse(&hash), key);
        let mut bytes = [0u8; SECP_SIG_LEN];
        bytes[..64].copy_from_slice(&sig.serialize());
        bytes[64] = rec_id.serialize();
        Signature::new(bytes.to_vec())
    }

    #[test]
    fn verify_recovers_signer() {
        let key = SecretKey::parse(&[5u8; 32]).unwrap();
        let addr =
            Address::new_secp256k1(&PublicKey::from_secret_key(&key).serialize()).unwrap();

        let sig = sign_bytes(b"message payload", &key);
        assert!(sig.verify(b"message payload", &addr).is_ok());
        assert!(sig.verify(b"other payload", &addr).is_err());
    }

    #[test]
    fn verify_rejects_wrong_address() {
        let key = SecretKey::parse(&[5u8; 32]).unwrap();
        let other = Address::new_secp256k1(&[9u8; 65]).unwrap();

        let sig = sign_bytes(b"message payload", &key);
        assert!(sig.verify(b"message payload", &other).is_err());
    }

    #[test]
    fn verify_rejects_malformed_signature() {
        let addr = Address::new_secp256k1(&[9u8; 65]).unwrap();
        let sig = Signature::new(vec![1, 2, 3]);
        assert!(sig.verify(b"payload", &addr).is_err());
    }
}
