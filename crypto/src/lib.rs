// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod errors;
mod signature;
mod signer;

pub use self::errors::Error;
pub use self::signature::{Signature, SECP_SIG_LEN};
pub use self::signer::Signer;
