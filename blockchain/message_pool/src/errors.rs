// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use blocks::Error as BlocksError;
use encoding::Error as EncodingError;
use thiserror::Error;

/// MessagePool error.
#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// The pool has reached its resident message cap.
    #[error("Message pool is full")]
    PoolFull,
    #[error("Signature is invalid")]
    InvalidSignature,
    #[error("Message cannot be sent to self")]
    SelfSend,
    #[error("Message value cannot be negative")]
    NegativeValue,
    #[error("Message gas limit is above the block gas limit")]
    AboveBlockGasLimit,
    #[error("Message sender is not an account actor")]
    NonAccountActor,
    #[error("Message nonce is lower than the sender's on-chain nonce")]
    NonceTooLow,
    #[error("Message nonce exceeds the maximum gap past the on-chain nonce")]
    NonceGapExceeded,
    /// A different message with the same sender and nonce is already resident.
    #[error("Message with same sender and nonce already in pool")]
    DuplicateNonce,
    #[error("Sender balance cannot cover the message and its pending siblings")]
    BalanceInsufficient,
    /// A block needed during reorg traversal could not be fetched.
    #[error("Failed to fetch block: {0}")]
    BlockFetch(String),
    /// The old and new heads do not share a common ancestor.
    #[error("No common ancestor between old and new head")]
    AncestorNotFound,
    #[error("{0}")]
    Other(String),
}

impl From<EncodingError> for Error {
    fn from(e: EncodingError) -> Self {
        Error::Other(e.to_string())
    }
}

impl From<BlocksError> for Error {
    fn from(e: BlocksError) -> Self {
        Error::BlockFetch(e.to_string())
    }
}
