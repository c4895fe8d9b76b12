// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::{Block, Error};
use cid::Cid;
use clock::ChainEpoch;
use encoding::Cbor;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The identity of a tipset: the CIDs of its member blocks, kept in the
/// tipset's canonical block order. Two tipsets are the same point of the
/// chain exactly when their keys hold the same CIDs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TipsetKeys {
    pub cids: Vec<Cid>,
}

impl TipsetKeys {
    pub fn new(cids: Vec<Cid>) -> Self {
        Self { cids }
    }

    /// Checks whether the key holds exactly the same CIDs as another.
    pub fn equals(&self, key: &TipsetKeys) -> bool {
        self.cids == key.cids
    }

    /// Returns the block cids composing the key.
    pub fn cids(&self) -> &[Cid] {
        &self.cids
    }
}

impl Cbor for TipsetKeys {}

/// An immutable set of blocks at the same height with the same parent set.
/// Blocks in a tipset are canonically ordered by CID.
#[derive(Clone, Debug, PartialEq)]
pub struct Tipset {
    blocks: Vec<Block>,
    key: TipsetKeys,
}

#[allow(clippy::len_without_is_empty)]
impl Tipset {
    /// Builds a new Tipset from a collection of blocks. A valid tipset
    /// contains a non-empty collection of blocks that have distinct miners
    /// and all specify identical epoch and parents.
    pub fn new(blocks: Vec<Block>) -> Result<Self, Error> {
        // check blocks is non-empty
        if blocks.is_empty() {
            return Err(Error::NoBlocks);
        }

        let mut pairs = Vec::with_capacity(blocks.len());

        // loop through blocks and validate conditions against the 0th block
        for (i, block) in blocks.into_iter().enumerate() {
            if i > 0 {
                // Skip redundant checks for the 0th block
                if !block.parents().equals(pairs[0].1.parents()) {
                    return Err(Error::InvalidTipset(
                        "parent cids are not equal".to_string(),
                    ));
                }
                if block.epoch() != pairs[0].1.epoch() {
                    return Err(Error::InvalidTipset("epochs are not equal".to_string()));
                }
                if block.miner_address() == pairs[0].1.miner_address() {
                    return Err(Error::InvalidTipset(
                        "miner addresses are not distinct".to_string(),
                    ));
                }
            }
            pairs.push((block.cid()?, block));
        }

        // check that block cids are distinct
        let mut seen = HashSet::with_capacity(pairs.len());
        for (cid, _) in pairs.iter() {
            if !seen.insert(*cid) {
                return Err(Error::InvalidTipset("duplicate block cids".to_string()));
            }
        }

        // sort blocks by CID to give the tipset its canonical order
        pairs.sort_by(|a, b| a.0.to_bytes().cmp(&b.0.to_bytes()));

        let cids = pairs.iter().map(|(cid, _)| *cid).collect();
        Ok(Self {
            blocks: pairs.into_iter().map(|(_, block)| block).collect(),
            key: TipsetKeys { cids },
        })
    }

    /// Returns the epoch of the tipset.
    pub fn epoch(&self) -> ChainEpoch {
        self.blocks[0].epoch()
    }

    /// Returns all blocks in the tipset.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns all blocks in the tipset.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Returns the number of blocks in the tipset.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns a key for the tipset.
    pub fn key(&self) -> &TipsetKeys {
        &self.key
    }

    /// Returns slice of `Cid`s for the current tipset.
    pub fn cids(&self) -> &[Cid] {
        self.key.cids()
    }

    /// Returns the keys of the parents of the blocks in the tipset.
    pub fn parents(&self) -> &TipsetKeys {
        self.blocks[0].parents()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use address::Address;

    fn mock_block(miner: u64, epoch: ChainEpoch, parents: TipsetKeys) -> Block {
        Block::builder()
            .miner_address(Address::new_id(miner))
            .epoch(epoch)
            .parents(parents)
            .build()
            .unwrap()
    }

    #[test]
    fn empty_tipset_fails() {
        assert_eq!(Tipset::new(Vec::new()), Err(Error::NoBlocks));
    }

    #[test]
    fn single_block_tipset() {
        let blk = mock_block(1, 0, TipsetKeys::default());
        let ts = Tipset::new(vec![blk.clone()]).unwrap();
        assert_eq!(ts.len(), 1);
        assert_eq!(ts.epoch(), 0);
        assert_eq!(ts.cids(), &[blk.cid().unwrap()]);
    }

    #[test]
    fn mismatched_epochs_fail() {
        let b1 = mock_block(1, 1, TipsetKeys::default());
        let b2 = mock_block(2, 2, TipsetKeys::default());
        assert!(matches!(
            Tipset::new(vec![b1, b2]),
            Err(Error::InvalidTipset(_))
        ));
    }

    #[test]
    fn mismatched_parents_fail() {
        let parent = mock_block(1, 0, TipsetKeys::default());
        let b1 = mock_block(1, 1, TipsetKeys::new(vec![parent.cid().unwrap()]));
        let b2 = mock_block(2, 1, TipsetKeys::default());
        assert!(matches!(
            Tipset::new(vec![b1, b2]),
            Err(Error::InvalidTipset(_))
        ));
    }

    #[test]
    fn duplicate_miners_fail() {
        let b1 = mock_block(1, 1, TipsetKeys::default());
        let b2 = mock_block(1, 1, TipsetKeys::default());
        assert!(matches!(
            Tipset::new(vec![b1, b2]),
            Err(Error::InvalidTipset(_))
        ));
    }

    #[test]
    fn key_independent_of_insertion_order() {
        let b1 = mock_block(1, 1, TipsetKeys::default());
        let b2 = mock_block(2, 1, TipsetKeys::default());
        let ts1 = Tipset::new(vec![b1.clone(), b2.clone()]).unwrap();
        let ts2 = Tipset::new(vec![b2, b1]).unwrap();
        assert!(ts1.key().equals(ts2.key()));
        assert_eq!(ts1, ts2);
    }
}
