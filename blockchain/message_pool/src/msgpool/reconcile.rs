// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::errors::Error;
use crate::provider::BlockProvider;
use blocks::Tipset;
use cid::Cid;
use clock::ChainEpoch;
use encoding::Cbor;
use message::SignedMessage;
use std::collections::HashSet;

/// Symmetric difference of the messages mined along two branches of the
/// chain: `removed` holds the cids mined on the path from the common
/// ancestor to the new head, `reinstated` the messages mined only on the
/// now-abandoned path together with the height they were mined at.
pub(crate) struct BranchDiff {
    pub removed: HashSet<Cid>,
    pub reinstated: Vec<(SignedMessage, ChainEpoch)>,
}

/// Walks the old and new heads back to their common ancestor, collecting the
/// messages mined on each side. The walk keeps two frontiers and always
/// descends the higher one, so the frontiers meet at equal heights and are
/// compared by tipset identity. A frontier whose tipset has no parents
/// descends to `None`; two exhausted frontiers have met at the undefined
/// ancestor below the chain base. All block fetches happen here, before the
/// caller mutates any state.
pub(crate) async fn branch_diff<BP>(
    provider: &BP,
    old_head: &Tipset,
    new_head: &Tipset,
) -> Result<BranchDiff, Error>
where
    BP: BlockProvider + Sync,
{
    let mut removed = HashSet::new();
    let mut seen = HashSet::new();
    let mut reinstated = Vec::new();

    let mut old = Some(old_head.clone());
    let mut new = Some(new_head.clone());

    loop {
        match (old, new) {
            (Some(o), Some(n)) => {
                if o.key().equals(n.key()) {
                    break;
                }
                if n.epoch() > o.epoch() {
                    collect_removed(&n, &mut removed)?;
                    old = Some(o);
                    new = parent_tipset(provider, &n).await?;
                } else if o.epoch() > n.epoch() {
                    collect_reinstated(&o, &mut seen, &mut reinstated)?;
                    old = parent_tipset(provider, &o).await?;
                    new = Some(n);
                } else {
                    collect_removed(&n, &mut removed)?;
                    collect_reinstated(&o, &mut seen, &mut reinstated)?;
                    old = parent_tipset(provider, &o).await?;
                    new = parent_tipset(provider, &n).await?;
                }
            }
            // both frontiers ran out of parents in the same step, the
            // branches are rooted at the same undefined ancestor
            (None, None) => break,
            // one branch is exhausted while the other still descends
            _ => return Err(Error::AncestorNotFound),
        }
    }

    Ok(BranchDiff {
        removed,
        reinstated,
    })
}

/// Resolves the parent tipset of the given tipset through the block
/// provider. Returns `None` for a tipset with no parents.
async fn parent_tipset<BP>(provider: &BP, ts: &Tipset) -> Result<Option<Tipset>, Error>
where
    BP: BlockProvider + Sync,
{
    let parents = ts.parents();
    if parents.cids().is_empty() {
        return Ok(None);
    }
    let mut blocks = Vec::with_capacity(parents.cids().len());
    for cid in parents.cids() {
        blocks.push(provider.get_block(cid).await?);
    }
    Ok(Some(Tipset::new(blocks)?))
}

/// Collects the cids of every message mined in the tipset. The union of all
/// sibling blocks counts as mined at the tipset's height.
fn collect_removed(ts: &Tipset, removed: &mut HashSet<Cid>) -> Result<(), Error> {
    for block in ts.blocks() {
        for msg in block.messages() {
            removed.insert(msg.cid()?);
        }
    }
    Ok(())
}

/// Collects every message mined in the tipset, deduplicated by cid, tagged
/// with the height it was mined at.
fn collect_reinstated(
    ts: &Tipset,
    seen: &mut HashSet<Cid>,
    reinstated: &mut Vec<(SignedMessage, ChainEpoch)>,
) -> Result<(), Error> {
    for block in ts.blocks() {
        for msg in block.messages() {
            if seen.insert(msg.cid()?) {
                reinstated.push((msg.clone(), ts.epoch()));
            }
        }
    }
    Ok(())
}
