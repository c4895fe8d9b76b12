// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use address::Address;
use vm::{Serialized, TokenAmount};

/// Message interface to interact with signed and unsigned messages.
pub trait Message {
    /// Returns the sender of the message.
    fn from(&self) -> &Address;
    /// Returns the destination of the message.
    fn to(&self) -> &Address;
    /// Returns the message sequence or nonce.
    fn sequence(&self) -> u64;
    /// Returns the amount sent in message.
    fn value(&self) -> &TokenAmount;
    /// Returns the method invoked on the receiving actor.
    fn method(&self) -> &str;
    /// Returns the encoded parameters for the method call.
    fn params(&self) -> &Serialized;
    /// Returns the gas price for the message.
    fn gas_price(&self) -> &TokenAmount;
    /// Returns the gas limit for the message.
    fn gas_limit(&self) -> u64;
    /// Returns the funds required to cover the transfer value and the full
    /// gas cost of the message.
    fn required_funds(&self) -> TokenAmount;
}
