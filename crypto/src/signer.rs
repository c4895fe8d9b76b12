// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::errors::Error;
use crate::signature::Signature;
use address::Address;

/// Signer is a trait which allows a key implementation to sign data for an
/// address.
pub trait Signer {
    /// Signs any arbitrary data for the given [Address].
    fn sign_bytes(&self, data: &[u8], address: &Address) -> Result<Signature, Error>;
}
