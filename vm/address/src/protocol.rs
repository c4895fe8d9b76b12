// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;

/// Protocol defines the addressing protocol used to derive data to an address.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Protocol {
    /// ID protocol addressing.
    ID = 0,
    /// Secp256k1 key addressing.
    Secp256k1 = 1,
}

impl Protocol {
    /// Returns the protocol for the identifier byte, if known.
    pub(crate) fn from_byte(b: u8) -> Option<Protocol> {
        match b {
            0 => Some(Protocol::ID),
            1 => Some(Protocol::Secp256k1),
            _ => None,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}
