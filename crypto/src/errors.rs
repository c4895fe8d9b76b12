// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use thiserror::Error;

/// Crypto error.
#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// Failed to produce a signature over the given data.
    #[error("Could not sign data: {0}")]
    SigningError(String),
    /// The signature does not verify against the claimed signer.
    #[error("Signature verification failed: {0}")]
    VerificationError(String),
}
