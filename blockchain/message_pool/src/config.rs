// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use clock::ChainEpoch;

/// Hard cap on the number of messages resident in the pool at any time.
/// Reinstated messages from a reorg are exempt so that pending user
/// transactions are not silently lost.
pub const MAX_MESSAGE_POOL_SIZE: usize = 10_000;

/// Maximum distance the nonce of an admitted message may be ahead of its
/// sender's on-chain nonce.
pub const MAX_NONCE_GAP: u64 = 100;

/// Number of heights a message may stay resident in the pool before it is
/// evicted. Measured against the chain height, so null rounds count.
pub const MESSAGE_TIMEOUT: ChainEpoch = 300;

/// Upper bound on the gas limit of a single message.
pub const BLOCK_GAS_LIMIT: u64 = 10_000_000_000;
