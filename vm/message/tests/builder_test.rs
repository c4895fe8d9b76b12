// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use address::Address;
use crypto::{Error as CryptoError, Signature, Signer, SECP_SIG_LEN};
use encoding::{blake2b_256, Cbor};
use message::{Message, SignedMessage, UnsignedMessage};
use num_bigint::BigInt;
use secp256k1::{sign, Message as SecpMessage, PublicKey, SecretKey};

struct KeySigner {
    key: SecretKey,
}

impl KeySigner {
    fn new(seed: u8) -> Self {
        Self {
            key: SecretKey::parse(&[seed; 32]).unwrap(),
        }
    }

    fn address(&self) -> Address {
        Address::new_secp256k1(&PublicKey::from_secret_key(&self.key).serialize()).unwrap()
    }
}

impl Signer for KeySigner {
    fn sign_bytes(&self, data: &[u8], _address: &Address) -> Result<Signature, CryptoError> {
        let hash = blake2b_256(data);
        let (sig, rec_id) = sign(&SecpMessage::parse(&hash), &self.key);
        let mut bytes = [0u8; SECP_SIG_LEN];
        bytes[..64].copy_from_slice(&sig.serialize());
        bytes[64] = rec_id.serialize();
        Ok(Signature::new(bytes.to_vec()))
    }
}

fn template_message(from: &Address) -> UnsignedMessage {
    UnsignedMessage::builder()
        .from(from.clone())
        .to(Address::new_id(1))
        .sequence(0)
        .build()
        .unwrap()
}

#[test]
fn generate_signed_message() {
    let signer = KeySigner::new(3);
    let msg = template_message(&signer.address());

    let signed_msg = SignedMessage::new(msg.clone(), &signer).unwrap();
    assert_eq!(signed_msg.message(), &msg);

    // Signature should be able to be verified back to the sender
    assert!(signed_msg.verify().is_ok());
}

#[test]
fn builder_defaults() {
    let msg = UnsignedMessage::builder()
        .from(Address::new_id(0))
        .to(Address::new_id(1))
        .build()
        .unwrap();
    assert_eq!(msg.sequence(), 0);
    assert_eq!(msg.gas_limit(), 0);
    assert_eq!(msg.value(), &BigInt::from(0));
    assert_eq!(msg.method(), "");
}

#[test]
fn required_funds_includes_gas() {
    let msg = UnsignedMessage::builder()
        .from(Address::new_id(0))
        .to(Address::new_id(1))
        .value(BigInt::from(4000))
        .gas_price(BigInt::from(20))
        .gas_limit(1000)
        .build()
        .unwrap();
    assert_eq!(msg.required_funds(), BigInt::from(4000 + 20 * 1000));
}

#[test]
fn cbor_round_trip() {
    let signer = KeySigner::new(8);
    let msg = template_message(&signer.address());
    let bz = msg.marshal_cbor().unwrap();
    assert_eq!(UnsignedMessage::unmarshal_cbor(&bz).unwrap(), msg);

    let signed_msg = SignedMessage::new(msg, &signer).unwrap();
    let bz = signed_msg.marshal_cbor().unwrap();
    assert_eq!(SignedMessage::unmarshal_cbor(&bz).unwrap(), signed_msg);
}

#[test]
fn signed_message_cid_covers_signature() {
    let signer = KeySigner::new(11);
    let msg = template_message(&signer.address());

    let signed = SignedMessage::new(msg.clone(), &signer).unwrap();
    let forged = SignedMessage::new_from_parts(msg, Signature::new(vec![0u8; SECP_SIG_LEN]));
    assert_ne!(signed.cid().unwrap(), forged.cid().unwrap());
}
