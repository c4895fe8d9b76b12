// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::config::MESSAGE_TIMEOUT;
use crate::errors::Error;
use address::Address;
use cid::Cid;
use clock::ChainEpoch;
use encoding::Cbor;
use message::{Message, SignedMessage};
use std::collections::HashMap;
use vm::TokenAmount;

/// A message resident in the pool together with the height at which it was
/// admitted. The height is captured once at admission and preserved across
/// reorgs so that age-out stays grounded in chain time.
#[derive(Clone, Debug, PartialEq)]
pub struct PoolEntry {
    msg: SignedMessage,
    added_at: ChainEpoch,
}

impl PoolEntry {
    pub fn new(msg: SignedMessage, added_at: ChainEpoch) -> Self {
        Self { msg, added_at }
    }

    /// Returns reference to the resident message.
    pub fn message(&self) -> &SignedMessage {
        &self.msg
    }

    /// Returns the height the message was admitted at.
    pub fn added_at(&self) -> ChainEpoch {
        self.added_at
    }
}

/// Per-sender index mapping message nonces to resident cids.
#[derive(Default, Debug)]
struct MsgSet {
    msgs: HashMap<u64, Cid>,
}

impl MsgSet {
    fn add(&mut self, sequence: u64, cid: Cid) {
        self.msgs.insert(sequence, cid);
    }

    fn rm(&mut self, sequence: u64) {
        self.msgs.remove(&sequence);
    }

    fn is_empty(&self) -> bool {
        self.msgs.is_empty()
    }
}

/// In-memory index of admitted messages: primary map keyed by message cid,
/// secondary index keyed by sender address and nonce. Both indices are kept
/// consistent at every return.
#[derive(Default)]
pub(crate) struct Pending {
    entries: HashMap<Cid, PoolEntry>,
    by_sender: HashMap<Address, MsgSet>,
}

impl Pending {
    pub fn new() -> Self {
        Default::default()
    }

    /// Number of resident messages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if a message with the given cid is resident.
    pub fn contains(&self, cid: &Cid) -> bool {
        self.entries.contains_key(cid)
    }

    /// Returns the entry for the given cid.
    pub fn get(&self, cid: &Cid) -> Option<&PoolEntry> {
        self.entries.get(cid)
    }

    /// Inserts an entry. Fails with `DuplicateNonce` if a different message
    /// from the same sender with the same nonce is already resident.
    pub fn insert(&mut self, entry: PoolEntry) -> Result<(), Error> {
        let cid = entry.message().cid()?;
        let from = entry.message().from().clone();
        let sequence = entry.message().sequence();
        if let Some(mset) = self.by_sender.get(&from) {
            if let Some(existing) = mset.msgs.get(&sequence) {
                if existing != &cid {
                    return Err(Error::DuplicateNonce);
                }
            }
        }
        self.by_sender.entry(from).or_default().add(sequence, cid);
        self.entries.insert(cid, entry);
        Ok(())
    }

    /// Removes the entry with the given cid. Removing an absent cid is a
    /// no-op. Empty sender sets are pruned.
    pub fn remove(&mut self, cid: &Cid) {
        if let Some(entry) = self.entries.remove(cid) {
            let from = entry.message().from();
            if let Some(mset) = self.by_sender.get_mut(from) {
                mset.rm(entry.message().sequence());
                if mset.is_empty() {
                    self.by_sender.remove(from);
                }
            }
        }
    }

    /// Snapshot of all resident messages, in no particular order.
    pub fn messages(&self) -> Vec<SignedMessage> {
        self.entries.values().map(|e| e.message().clone()).collect()
    }

    /// Messages from the given sender sorted by nonce, or `None` if the
    /// sender has no resident messages.
    pub fn messages_for(&self, addr: &Address) -> Option<Vec<SignedMessage>> {
        let mset = self.by_sender.get(addr)?;
        let mut msgs: Vec<SignedMessage> = mset
            .msgs
            .values()
            .filter_map(|cid| self.entries.get(cid))
            .map(|e| e.message().clone())
            .collect();
        msgs.sort_by_key(|m| m.sequence());
        Some(msgs)
    }

    /// Largest nonce among resident messages of the given sender. Zero is a
    /// valid returned nonce.
    pub fn largest_nonce(&self, addr: &Address) -> Option<u64> {
        self.by_sender
            .get(addr)
            .and_then(|mset| mset.msgs.keys().max().copied())
    }

    /// Funds committed by the sender's resident messages: the sum of value
    /// plus full gas cost over every entry.
    pub fn required_funds(&self, addr: &Address) -> TokenAmount {
        match self.by_sender.get(addr) {
            Some(mset) => mset
                .msgs
                .values()
                .filter_map(|cid| self.entries.get(cid))
                .map(|e| e.message().required_funds())
                .sum(),
            None => TokenAmount::default(),
        }
    }

    /// Evicts every entry which has been resident for `MESSAGE_TIMEOUT` or
    /// more heights at the given height.
    pub fn prune_expired(&mut self, height: ChainEpoch) {
        let expired: Vec<Cid> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.added_at() + MESSAGE_TIMEOUT <= height)
            .map(|(cid, _)| *cid)
            .collect();
        for cid in &expired {
            self.remove(cid);
        }
    }

    /// Drops every resident message.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.by_sender.clear();
    }
}
