// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use encoding::serde_bytes;
use serde::{Deserialize, Serialize};

/// Serialized bytes to be used as parameters into actor methods.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Serialized {
    #[serde(with = "serde_bytes")]
    bytes: Vec<u8>,
}

impl Serialized {
    /// Constructor for encoded bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns reference to the encoded bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
