// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

/// Duration of each tipset epoch.
pub const EPOCH_DURATION_SECONDS: u64 = 30;

/// Epoch number of a chain. This acts as a proxy for time within the chain.
/// Every epoch advances the logical clock, whether or not a block was
/// produced at that height.
pub type ChainEpoch = u64;
