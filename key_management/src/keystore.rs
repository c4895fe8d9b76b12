// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::errors::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// KeyInfo contains a private key. Note how the private key is stored as a
/// byte vector rather than a typed key, so the keystore does not depend on
/// any particular key implementation.
#[derive(Clone, PartialEq, Debug, Eq, Serialize, Deserialize)]
pub struct KeyInfo {
    private_key: Vec<u8>,
}

impl KeyInfo {
    /// Return a new KeyInfo given the private_key.
    pub fn new(private_key: Vec<u8>) -> Self {
        KeyInfo { private_key }
    }

    /// Return a reference to the private_key.
    pub fn private_key(&self) -> &Vec<u8> {
        &self.private_key
    }
}

/// KeyStore is a generic trait for storing KeyInfos resolved by a string key.
pub trait KeyStore {
    /// Return all of the keys that are stored in the KeyStore.
    fn list(&self) -> Vec<String>;
    /// Return KeyInfo that corresponds to a given key.
    fn get(&self, k: &str) -> Result<KeyInfo, Error>;
    /// Save a key/key_info pair to the KeyStore.
    fn put(&mut self, key: String, key_info: KeyInfo) -> Result<(), Error>;
    /// Remove the key and corresponding key_info from the KeyStore.
    fn remove(&mut self, key: &str) -> Option<KeyInfo>;
}

/// MemKeyStore is a simple in-memory implementation of the KeyStore trait.
#[derive(Clone, PartialEq, Debug, Eq, Default)]
pub struct MemKeyStore {
    pub key_info: HashMap<String, KeyInfo>,
}

impl MemKeyStore {
    /// Return a new empty MemKeyStore.
    pub fn new() -> Self {
        Self {
            key_info: HashMap::new(),
        }
    }
}

impl KeyStore for MemKeyStore {
    fn list(&self) -> Vec<String> {
        self.key_info.keys().cloned().collect()
    }

    fn get(&self, k: &str) -> Result<KeyInfo, Error> {
        self.key_info.get(k).cloned().ok_or(Error::KeyInfo)
    }

    fn put(&mut self, key: String, key_info: KeyInfo) -> Result<(), Error> {
        if self.key_info.contains_key(&key) {
            return Err(Error::KeyExists);
        }
        self.key_info.insert(key, key_info);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Option<KeyInfo> {
        self.key_info.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_and_get() {
        let mut ks = MemKeyStore::new();
        let info = KeyInfo::new(vec![1, 2, 3]);
        ks.put("wallet-test".to_string(), info.clone()).unwrap();
        assert_eq!(ks.get("wallet-test").unwrap(), info);
    }

    #[test]
    fn duplicate_put_fails() {
        let mut ks = MemKeyStore::new();
        let info = KeyInfo::new(vec![1, 2, 3]);
        ks.put("wallet-test".to_string(), info.clone()).unwrap();
        assert_eq!(ks.put("wallet-test".to_string(), info), Err(Error::KeyExists));
    }

    #[test]
    fn missing_key() {
        let ks = MemKeyStore::new();
        assert_eq!(ks.get("wallet-none"), Err(Error::KeyInfo));
    }
}
