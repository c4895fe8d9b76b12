// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use blake2b_simd::Params;

/// Hashes the ingest bytes with blake2b into a digest of the requested
/// length. Short digests back address payloads and string checksums.
///
/// # Example
/// ```
/// use encoding::blake2b_variable;
///
/// // the 20 byte form used for key address payloads
/// let payload = blake2b_variable(b"uncompressed public key bytes", 20);
/// assert_eq!(payload.len(), 20);
/// ```
pub fn blake2b_variable(ingest: &[u8], size: usize) -> Vec<u8> {
    Params::new()
        .hash_length(size)
        .hash(ingest)
        .as_bytes()
        .to_vec()
}

/// Hashes the ingest bytes with blake2b into a fixed 32 byte digest, the
/// form committed to by message signatures.
///
/// # Example
/// ```
/// use encoding::blake2b_256;
///
/// let digest = blake2b_256(b"message signing bytes");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn blake2b_256(ingest: &[u8]) -> [u8; 32] {
    let digest = Params::new().hash_length(32).hash(ingest);

    let mut ret = [0u8; 32];
    ret.copy_from_slice(digest.as_bytes());
    ret
}
