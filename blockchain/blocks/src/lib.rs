// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod block;
mod errors;
mod tipset;

pub use self::block::*;
pub use self::errors::*;
pub use self::tipset::*;
