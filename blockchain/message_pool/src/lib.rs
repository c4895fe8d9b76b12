// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod config;
mod errors;
mod msgpool;

pub use self::config::*;
pub use self::errors::*;
pub use self::msgpool::*;
