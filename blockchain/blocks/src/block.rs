// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::{Error, TipsetKeys};
use address::Address;
use cid::Cid;
use clock::ChainEpoch;
use derive_builder::Builder;
use encoding::tuple::*;
use encoding::Cbor;
use message::SignedMessage;
use std::fmt;

/// A complete block. The ordered messages it carries are treated as mined at
/// the block's epoch; the parent keys link it into the tipset DAG.
///
/// Usage:
/// ```
/// use blocks::{Block, TipsetKeys};
/// use address::Address;
///
/// Block::builder()
///     .miner_address(Address::new_id(0)) // required
///     .epoch(0) // optional
///     .parents(TipsetKeys::default()) // optional
///     .messages(Vec::new()) // optional
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Builder, Serialize_tuple, Deserialize_tuple)]
#[builder(name = "BlockBuilder")]
pub struct Block {
    /// The address of the miner actor that produced this block.
    miner_address: Address,
    /// The epoch this block was produced at.
    #[builder(default)]
    epoch: ChainEpoch,
    /// The keys of the blocks composing the parent tipset.
    #[builder(default)]
    parents: TipsetKeys,
    /// The signed messages included in this block, in execution order.
    #[builder(default)]
    messages: Vec<SignedMessage>,
}

impl Block {
    pub fn builder() -> BlockBuilder {
        BlockBuilder::default()
    }

    /// Returns the address of the miner actor that produced this block.
    pub fn miner_address(&self) -> &Address {
        &self.miner_address
    }

    /// Returns the epoch this block was produced at.
    pub fn epoch(&self) -> ChainEpoch {
        self.epoch
    }

    /// Returns the keys of the blocks composing the parent tipset.
    pub fn parents(&self) -> &TipsetKeys {
        &self.parents
    }

    /// Returns the signed messages included in this block.
    pub fn messages(&self) -> &[SignedMessage] {
        &self.messages
    }

    /// Returns the content identifier of the block.
    pub fn cid(&self) -> Result<Cid, Error> {
        Ok(Cbor::cid(self)?)
    }
}

impl Cbor for Block {}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block at epoch {} by {}", self.epoch, self.miner_address)
    }
}
