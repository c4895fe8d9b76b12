// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

// Contains the implementation of the message pool component. The message
// pool is the component of vireo that holds pending messages for inclusion
// in the chain. Messages are added either directly for locally published
// messages or through network propagation, and the pool is reconciled
// against every observed head change.

pub(crate) mod provider;
mod reconcile;
pub(crate) mod store;
pub mod test_provider;
mod validator;

pub use self::provider::{BlockProvider, Provider};
pub use self::store::PoolEntry;

use crate::config::MAX_MESSAGE_POOL_SIZE;
use crate::errors::Error;
use address::Address;
use async_std::sync::{Mutex, RwLock};
use blocks::Tipset;
use cid::Cid;
use encoding::Cbor;
use log::warn;
use lru::LruCache;
use message::{Message, SignedMessage};
use self::reconcile::BranchDiff;
use self::store::Pending;

const SIG_VAL_CACHE_SIZE: usize = 32000;

/// Keeps an unordered, deduplicated set of pending messages and supports
/// removal by cid. Messages received from clients and peers are admitted
/// through validation against the chain view; admitted messages are removed
/// as the blocks mining them are observed, reinstated when those blocks are
/// abandoned by a reorg, and evicted once they have been resident for too
/// many heights.
///
/// The pool is safe for concurrent access: a single lock guards the resident
/// set and every operation holds it for its full duration. Dropping a call
/// future at one of its provider suspension points leaves the pool
/// unchanged.
pub struct MessagePool<T> {
    /// The chain view messages are validated against.
    pub api: RwLock<T>,
    /// Resident messages, guarded by the pool-wide lock.
    pending: Mutex<Pending>,
    /// Caches message signature validations by cid.
    sig_val_cache: RwLock<LruCache<Cid, ()>>,
}

impl<T> MessagePool<T>
where
    T: Provider + Send + Sync,
{
    /// Constructs a new, empty MessagePool using the given chain view.
    pub fn new(api: T) -> Self {
        MessagePool {
            api: RwLock::new(api),
            pending: Mutex::new(Pending::new()),
            sig_val_cache: RwLock::new(LruCache::new(SIG_VAL_CACHE_SIZE)),
        }
    }

    /// Validates a message and adds it to the pool, tagged with the height
    /// it was received at. Re-adding an already resident message succeeds
    /// and returns its cid without further effect.
    pub async fn add(&self, msg: SignedMessage) -> Result<Cid, Error> {
        let mut pending = self.pending.lock().await;

        if pending.len() >= MAX_MESSAGE_POOL_SIZE {
            return Err(Error::PoolFull);
        }

        let cid = msg.cid()?;
        if pending.contains(&cid) {
            return Ok(cid);
        }

        self.verify_msg_sig(&msg).await?;
        validator::check_message(&msg)?;

        let api = self.api.read().await;
        let actor = api.get_actor(msg.from())?;
        let height = api.chain_height();
        drop(api);

        validator::check_state(&msg, actor.as_ref(), &pending.required_funds(msg.from()))?;

        pending.insert(PoolEntry::new(msg, height))?;
        Ok(cid)
    }

    /// Removes the message with the given cid from the pool. Removing an
    /// absent cid is a no-op.
    pub async fn remove(&self, cid: &Cid) {
        self.pending.lock().await.remove(cid);
    }

    /// Returns the resident message with the given cid.
    pub async fn get(&self, cid: &Cid) -> Option<SignedMessage> {
        self.pending
            .lock()
            .await
            .get(cid)
            .map(|entry| entry.message().clone())
    }

    /// Returns a snapshot of all resident messages, in no particular order.
    pub async fn pending(&self) -> Vec<SignedMessage> {
        self.pending.lock().await.messages()
    }

    /// Returns the resident messages of the given sender sorted by nonce,
    /// or `None` if the sender has none.
    pub async fn pending_for(&self, addr: &Address) -> Option<Vec<SignedMessage>> {
        self.pending.lock().await.messages_for(addr)
    }

    /// Returns the largest nonce among the resident messages of the given
    /// sender. Zero is a valid returned nonce.
    pub async fn largest_nonce(&self, addr: &Address) -> Option<u64> {
        self.pending.lock().await.largest_nonce(addr)
    }

    /// Returns the nonce the sender's next message should carry: one past
    /// the largest resident nonce, or the on-chain nonce when that is
    /// higher or nothing is resident.
    pub async fn next_nonce(&self, addr: &Address) -> Result<u64, Error> {
        let pending = self.pending.lock().await;
        let state_nonce = self
            .api
            .read()
            .await
            .get_actor(addr)?
            .map(|actor| actor.sequence)
            .unwrap_or(0);
        Ok(match pending.largest_nonce(addr) {
            Some(largest) if largest + 1 > state_nonce => largest + 1,
            _ => state_nonce,
        })
    }

    /// Drops every resident message.
    pub async fn clear(&self) {
        self.pending.lock().await.clear();
    }

    /// Reconciles the pool with an observed head change from `old_head` to
    /// `new_head`: messages mined on the new branch since the common
    /// ancestor are evicted, messages mined only on the abandoned branch are
    /// reinstated, and messages resident for too many heights are aged out.
    ///
    /// Reinstated messages keep the height they were originally mined at
    /// and bypass the pool size cap; a reinstated message that no longer
    /// validates against the current chain view is dropped. Provider
    /// failures abort the call before any change to the pool.
    pub async fn update_message_pool<BP>(
        &self,
        provider: &BP,
        old_head: &Tipset,
        new_head: &Tipset,
    ) -> Result<(), Error>
    where
        BP: BlockProvider + Sync,
    {
        let mut pending = self.pending.lock().await;

        if !old_head.key().equals(new_head.key()) {
            let BranchDiff {
                removed,
                reinstated,
            } = reconcile::branch_diff(provider, old_head, new_head).await?;

            for cid in &removed {
                pending.remove(cid);
            }

            for (msg, mined_at) in reinstated {
                let cid = msg.cid()?;
                if removed.contains(&cid) || pending.contains(&cid) {
                    continue;
                }
                if let Err(e) = self.reinstate(&mut pending, msg, mined_at).await {
                    warn!("dropping message {} on reinstatement: {}", cid, e);
                }
            }
        }

        pending.prune_expired(new_head.epoch());
        Ok(())
    }

    /// Re-admits a message that fell off the canonical chain, keeping the
    /// height it was mined at so age-out stays grounded in chain time. The
    /// pool size cap is not applied.
    async fn reinstate(
        &self,
        pending: &mut Pending,
        msg: SignedMessage,
        mined_at: clock::ChainEpoch,
    ) -> Result<(), Error> {
        self.verify_msg_sig(&msg).await?;
        validator::check_message(&msg)?;
        let actor = self.api.read().await.get_actor(msg.from())?;
        validator::check_state(&msg, actor.as_ref(), &pending.required_funds(msg.from()))?;
        pending.insert(PoolEntry::new(msg, mined_at))
    }

    /// Verifies the message signature, first consulting the validation
    /// cache. A verified signature is cached by message cid for future use.
    async fn verify_msg_sig(&self, msg: &SignedMessage) -> Result<(), Error> {
        let cid = msg.cid()?;

        if let Some(()) = self.sig_val_cache.write().await.get(&cid) {
            return Ok(());
        }

        msg.verify().map_err(|_| Error::InvalidSignature)?;

        self.sig_val_cache.write().await.put(cid, ());

        Ok(())
    }
}
