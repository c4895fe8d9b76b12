// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use encoding::Error as EncodingError;
use thiserror::Error;

/// Blockchain blocks error.
#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// Tipset contains invalid data, as described by the string parameter.
    #[error("Invalid tipset: {0}")]
    InvalidTipset(String),
    /// The given tipset has no blocks.
    #[error("No blocks for tipset")]
    NoBlocks,
    /// Block could not be encoded.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<EncodingError> for Error {
    fn from(e: EncodingError) -> Error {
        Error::Encoding(e.to_string())
    }
}
