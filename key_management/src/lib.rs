// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod errors;
mod keystore;
mod wallet;
pub mod wallet_helpers;

pub use self::errors::Error;
pub use self::keystore::{KeyInfo, KeyStore, MemKeyStore};
pub use self::wallet::{Key, Wallet};
