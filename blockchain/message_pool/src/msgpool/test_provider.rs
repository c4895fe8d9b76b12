// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! In-memory providers and chain builders used by the message pool tests.

use crate::errors::Error;
use crate::provider::{BlockProvider, Provider};
use address::Address;
use async_trait::async_trait;
use blocks::{Block, Tipset, TipsetKeys};
use cid::Cid;
use clock::ChainEpoch;
use message::SignedMessage;
use num_bigint::BigInt;
use std::collections::HashMap;
use vm::{ActorState, CodeID, TokenAmount};

/// Programmable chain view. Addresses without an explicit actor read as
/// unknown on chain.
#[derive(Default)]
pub struct TestApi {
    actors: HashMap<Address, ActorState>,
    height: ChainEpoch,
}

impl TestApi {
    /// Replaces the actor state of the given address.
    pub fn set_actor(&mut self, addr: &Address, actor: ActorState) {
        self.actors.insert(addr.clone(), actor);
    }

    /// Sets the on-chain nonce of the given address, creating an account
    /// actor with zero balance if none is known.
    pub fn set_state_sequence(&mut self, addr: &Address, sequence: u64) {
        self.actors
            .entry(addr.clone())
            .or_insert_with(|| ActorState::new(CodeID::Account, 0, BigInt::from(0)))
            .sequence = sequence;
    }

    /// Sets the balance of the given address, creating an account actor
    /// with zero nonce if none is known.
    pub fn set_state_balance(&mut self, addr: &Address, balance: TokenAmount) {
        self.actors
            .entry(addr.clone())
            .or_insert_with(|| ActorState::new(CodeID::Account, 0, BigInt::from(0)))
            .balance = balance;
    }

    /// Sets the height of the current head.
    pub fn set_height(&mut self, height: ChainEpoch) {
        self.height = height;
    }
}

impl Provider for TestApi {
    fn get_actor(&self, addr: &Address) -> Result<Option<ActorState>, Error> {
        Ok(self.actors.get(addr).cloned())
    }

    fn chain_height(&self) -> ChainEpoch {
        self.height
    }
}

/// Block fetcher backed by a hashmap. Blocks are registered as the test
/// chain is built.
#[derive(Default)]
pub struct TestBlockProvider {
    blocks: HashMap<Cid, Block>,
    next_miner: u64,
}

impl TestBlockProvider {
    pub fn new() -> Self {
        Default::default()
    }

    /// Registers a block so the reorg walk can fetch it.
    pub fn put(&mut self, block: &Block) -> Cid {
        let cid = block.cid().expect("test block must encode");
        self.blocks.insert(cid, block.clone());
        cid
    }

    /// Returns a miner address not used by any previously built block, so
    /// that every mock block has a distinct identity.
    fn fresh_miner(&mut self) -> Address {
        self.next_miner += 1;
        Address::new_id(1000 + self.next_miner)
    }
}

#[async_trait]
impl BlockProvider for TestBlockProvider {
    async fn get_block(&self, cid: &Cid) -> Result<Block, Error> {
        self.blocks
            .get(cid)
            .cloned()
            .ok_or_else(|| Error::BlockFetch(format!("block {} not found", cid)))
    }
}

/// Builds a block at the given epoch on top of `parent`, registers it with
/// the provider and returns it.
pub fn mock_block(
    store: &mut TestBlockProvider,
    parent: Option<&Tipset>,
    epoch: ChainEpoch,
    messages: Vec<SignedMessage>,
) -> Block {
    let parents = parent
        .map(|ts| ts.key().clone())
        .unwrap_or_else(TipsetKeys::default);
    let block = Block::builder()
        .miner_address(store.fresh_miner())
        .epoch(epoch)
        .parents(parents)
        .messages(messages)
        .build()
        .expect("mock block must build");
    store.put(&block);
    block
}

/// Builds a chain of tipsets on top of `parent`, one tipset per entry of
/// `tipsets`, where each inner vector holds the messages of one sibling
/// block. Heights increase by one per tipset.
pub fn mock_chain_with_messages(
    store: &mut TestBlockProvider,
    parent: Option<&Tipset>,
    tipsets: &[Vec<Vec<SignedMessage>>],
) -> Vec<Tipset> {
    let mut out: Vec<Tipset> = Vec::with_capacity(tipsets.len());
    let mut height = parent.map(|ts| ts.epoch() + 1).unwrap_or(0);
    let mut prev = parent.cloned();

    for blocks_msgs in tipsets {
        let mut blocks = Vec::with_capacity(blocks_msgs.len());
        for messages in blocks_msgs {
            blocks.push(mock_block(store, prev.as_ref(), height, messages.clone()));
        }
        let ts = Tipset::new(blocks).expect("mock tipset must be valid");
        height = ts.epoch() + 1;
        prev = Some(ts.clone());
        out.push(ts);
    }
    out
}
