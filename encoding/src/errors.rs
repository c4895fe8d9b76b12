// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use thiserror::Error;

/// Encoding error covering both directions of CBOR serialization.
#[derive(Debug, PartialEq, Error)]
pub enum Error {
    #[error("Failed to encode data: {0}")]
    Marshalling(String),
    #[error("Failed to decode data: {0}")]
    Unmarshalling(String),
}
