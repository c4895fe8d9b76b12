// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::errors::Error;
use address::Address;
use async_trait::async_trait;
use blocks::Block;
use cid::Cid;
use clock::ChainEpoch;
use vm::ActorState;

/// Read-only view of chain state the pool consults while validating
/// messages. Implementations resolve against the current head.
pub trait Provider {
    /// Returns the actor state for the given address at the current head, or
    /// `None` if the address is unknown on chain. An unknown sender is
    /// treated as having nonce 0 and no balance.
    fn get_actor(&self, addr: &Address) -> Result<Option<ActorState>, Error>;

    /// Returns the height of the current head.
    fn chain_height(&self) -> ChainEpoch;
}

/// Fetches blocks by content identifier. Only used while walking parent
/// tipsets during a head change.
#[async_trait]
pub trait BlockProvider {
    /// Returns the block for the given cid.
    async fn get_block(&self, cid: &Cid) -> Result<Block, Error>;
}
