// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod cbor;
mod errors;
mod hash;

pub use self::cbor::*;
pub use self::errors::*;
pub use self::hash::*;

pub use serde::{de, ser};
pub use serde_bytes;

/// Re-exports for the tuple serialization derives used by wire types.
pub mod tuple {
    pub use serde_tuple::{self, Deserialize_tuple, Serialize_tuple};
}

/// Serializes a value into CBOR encoded bytes.
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>, Error>
where
    T: ser::Serialize,
{
    serde_cbor::to_vec(value).map_err(|e| Error::Marshalling(e.to_string()))
}

/// Deserializes CBOR encoded bytes into a value.
pub fn from_slice<T>(bz: &[u8]) -> Result<T, Error>
where
    T: de::DeserializeOwned,
{
    serde_cbor::from_slice(bz).map_err(|e| Error::Unmarshalling(e.to_string()))
}
