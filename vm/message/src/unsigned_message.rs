// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::Message;
use address::Address;
use derive_builder::Builder;
use encoding::tuple::*;
use encoding::{Cbor, Error as EncodingError};
use vm::{Serialized, TokenAmount};

/// Default unsigned message type which includes all data needed for a state
/// transition.
///
/// Usage:
/// ```
/// use message::{UnsignedMessage, Message};
/// use address::Address;
///
/// // Use the builder pattern to generate a message
/// let message = UnsignedMessage::builder()
///     .to(Address::new_id(0))
///     .from(Address::new_id(1))
///     .sequence(0) // optional
///     .value(0.into()) // optional
///     .method("".to_string()) // optional
///     .params(Default::default()) // optional
///     .gas_limit(0) // optional
///     .gas_price(0.into()) // optional
///     .build()
///     .unwrap();
/// assert_eq!(message.sequence(), 0);
/// ```
#[derive(PartialEq, Clone, Debug, Builder, Serialize_tuple, Deserialize_tuple)]
#[builder(name = "MessageBuilder")]
pub struct UnsignedMessage {
    from: Address,
    to: Address,
    #[builder(default)]
    sequence: u64,
    #[builder(default)]
    value: TokenAmount,
    #[builder(default)]
    method: String,
    #[builder(default)]
    params: Serialized,
    #[builder(default)]
    gas_price: TokenAmount,
    #[builder(default)]
    gas_limit: u64,
}

impl UnsignedMessage {
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    /// Returns the canonical bytes a signer commits to when signing the
    /// message.
    pub fn to_signing_bytes(&self) -> Result<Vec<u8>, EncodingError> {
        self.marshal_cbor()
    }
}

impl Message for UnsignedMessage {
    fn from(&self) -> &Address {
        &self.from
    }
    fn to(&self) -> &Address {
        &self.to
    }
    fn sequence(&self) -> u64 {
        self.sequence
    }
    fn value(&self) -> &TokenAmount {
        &self.value
    }
    fn method(&self) -> &str {
        &self.method
    }
    fn params(&self) -> &Serialized {
        &self.params
    }
    fn gas_price(&self) -> &TokenAmount {
        &self.gas_price
    }
    fn gas_limit(&self) -> u64 {
        self.gas_limit
    }
    fn required_funds(&self) -> TokenAmount {
        let total_gas: TokenAmount = self.gas_price.clone() * self.gas_limit;
        total_gas + &self.value
    }
}

impl Cbor for UnsignedMessage {}
