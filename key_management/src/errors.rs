// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// Info that corresponds to key does not exist.
    #[error("Key info not found")]
    KeyInfo,
    /// Key already exists in keystore.
    #[error("Key already exists")]
    KeyExists,
    #[error("Key does not exist")]
    KeyNotExists,
    #[error("{0}")]
    Other(String),
}
