// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::errors::Error;
use address::Address;
use crypto::{Signature, SECP_SIG_LEN};
use encoding::blake2b_256;
use rand::rngs::OsRng;
use secp256k1::{Message as SecpMessage, PublicKey as SecpPublic, SecretKey as SecpPrivate};

/// Return the public key for a given private_key.
pub fn to_public(private_key: &[u8]) -> Result<Vec<u8>, Error> {
    let private_key =
        SecpPrivate::parse_slice(private_key).map_err(|err| Error::Other(err.to_string()))?;
    let public_key = SecpPublic::from_secret_key(&private_key);
    Ok(public_key.serialize().to_vec())
}

/// Return a new Address that uses the supplied public key.
pub fn new_address(public_key: &[u8]) -> Result<Address, Error> {
    Address::new_secp256k1(public_key).map_err(|err| Error::Other(err.to_string()))
}

/// Sign takes in a private key and message. Returns a Signature for the message.
pub fn sign(private_key: &[u8], msg: &[u8]) -> Result<Signature, Error> {
    let priv_key =
        SecpPrivate::parse_slice(private_key).map_err(|err| Error::Other(err.to_string()))?;
    let msg_hash = blake2b_256(msg);
    let message = SecpMessage::parse(&msg_hash);
    let (sig, recovery_id) = secp256k1::sign(&message, &priv_key);
    let mut new_bytes = [0; SECP_SIG_LEN];
    new_bytes[..64].copy_from_slice(&sig.serialize());
    new_bytes[64] = recovery_id.serialize();
    Ok(Signature::new(new_bytes.to_vec()))
}

/// Generate a new private key.
pub fn generate() -> Vec<u8> {
    let rng = &mut OsRng;
    let key = SecpPrivate::random(rng);
    key.serialize().to_vec()
}
