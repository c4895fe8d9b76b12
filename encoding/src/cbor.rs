// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::errors::Error;
use crate::{from_slice, to_vec};
use cid::Cid;
use multihash_codetable::{Code, MultihashDigest};
use serde::{de, ser};

/// Multicodec identifier for DAG-CBOR encoded data.
pub const DAG_CBOR: u64 = 0x71;

/// Implemented by types which are serialized on the wire as CBOR. Provides
/// the canonical bytes of the object and its content identifier.
pub trait Cbor: ser::Serialize + de::DeserializeOwned {
    /// Marshals the object into CBOR encoded bytes.
    fn marshal_cbor(&self) -> Result<Vec<u8>, Error> {
        to_vec(self)
    }

    /// Unmarshals CBOR encoded bytes into the object.
    fn unmarshal_cbor(bz: &[u8]) -> Result<Self, Error> {
        from_slice(bz)
    }

    /// Returns the content identifier of the object's canonical bytes.
    fn cid(&self) -> Result<Cid, Error> {
        let bz = self.marshal_cbor()?;
        Ok(Cid::new_v1(DAG_CBOR, Code::Blake2b256.digest(&bz)))
    }
}
