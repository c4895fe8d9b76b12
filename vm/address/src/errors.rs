// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use thiserror::Error;

/// Address error.
#[derive(Debug, PartialEq, Error)]
pub enum Error {
    #[error("Unknown address protocol")]
    UnknownProtocol,
    #[error("Invalid address payload")]
    InvalidPayload,
    #[error("Invalid address length")]
    InvalidLength,
    #[error("Invalid secp256k1 public key length, expected 65 bytes, got {0}")]
    InvalidSECPLength(usize),
}
