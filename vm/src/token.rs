// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use num_bigint::BigInt;

/// Token amount in the smallest denomination. Arbitrary precision; gas and
/// transfer arithmetic must never truncate.
pub type TokenAmount = BigInt;
