// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::errors::Error;
use super::keystore::{KeyInfo, KeyStore};
use super::wallet_helpers;
use address::Address;
use crypto::{Error as CryptoError, Signature, Signer};

/// A key, the address derived from it, and the public key it contains.
#[derive(Clone, PartialEq, Debug, Eq)]
pub struct Key {
    pub key_info: KeyInfo,
    pub public_key: Vec<u8>,
    pub address: Address,
}

impl Key {
    /// Derive the public key and address for the given key info.
    pub fn new(key_info: KeyInfo) -> Result<Self, Error> {
        let public_key = wallet_helpers::to_public(key_info.private_key())?;
        let address = wallet_helpers::new_address(&public_key)?;
        Ok(Key {
            key_info,
            public_key,
            address,
        })
    }
}

/// A wallet which holds keys in the given KeyStore and signs data for the
/// addresses those keys derive to.
pub struct Wallet<T> {
    keystore: T,
}

impl<T> Wallet<T>
where
    T: KeyStore,
{
    /// Constructor for the Wallet.
    pub fn new(keystore: T) -> Self {
        Wallet { keystore }
    }

    /// Generate a new private key and store it. Returns the derived address.
    pub fn generate_addr(&mut self) -> Result<Address, Error> {
        let key = Key::new(KeyInfo::new(wallet_helpers::generate()))?;
        self.keystore
            .put(format!("wallet-{}", key.address), key.key_info.clone())?;
        Ok(key.address)
    }

    /// Import an existing key info into the wallet. Returns the derived
    /// address.
    pub fn import(&mut self, key_info: KeyInfo) -> Result<Address, Error> {
        let key = Key::new(key_info)?;
        self.keystore
            .put(format!("wallet-{}", key.address), key.key_info.clone())?;
        Ok(key.address)
    }

    /// Return the addresses of all keys resident in the wallet.
    pub fn list_addrs(&self) -> Result<Vec<Address>, Error> {
        let mut addrs = Vec::new();
        for k in self.keystore.list() {
            if let Some(addr) = k.strip_prefix("wallet-") {
                let key_info = self.keystore.get(&k)?;
                let key = Key::new(key_info)?;
                debug_assert_eq!(key.address.to_string(), addr);
                addrs.push(key.address);
            }
        }
        Ok(addrs)
    }

    /// Sign data for the given address, if the wallet holds its key.
    pub fn sign(&self, addr: &Address, data: &[u8]) -> Result<Signature, Error> {
        let key_info = self.keystore.get(&format!("wallet-{}", addr))?;
        wallet_helpers::sign(key_info.private_key(), data)
    }
}

impl<T> Signer for Wallet<T>
where
    T: KeyStore,
{
    fn sign_bytes(&self, data: &[u8], address: &Address) -> Result<Signature, CryptoError> {
        self.sign(address, data)
            .map_err(|e| CryptoError::SigningError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::keystore::MemKeyStore;
    use super::*;
    use address::Protocol;

    #[test]
    fn generate_and_sign() {
        let mut wallet = Wallet::new(MemKeyStore::new());
        let addr = wallet.generate_addr().unwrap();
        assert_eq!(addr.protocol(), Protocol::Secp256k1);

        let sig = wallet.sign(&addr, b"some data").unwrap();
        assert!(sig.verify(b"some data", &addr).is_ok());
    }

    #[test]
    fn sign_unknown_addr_fails() {
        let mut wallet = Wallet::new(MemKeyStore::new());
        wallet.generate_addr().unwrap();
        let other = Address::new_id(42);
        assert!(wallet.sign(&other, b"some data").is_err());
    }

    #[test]
    fn import_derives_same_address() {
        let mut wallet = Wallet::new(MemKeyStore::new());
        let addr = wallet.generate_addr().unwrap();

        let key_info = wallet
            .keystore
            .get(&format!("wallet-{}", addr))
            .unwrap();
        let mut other = Wallet::new(MemKeyStore::new());
        let imported = other.import(key_info).unwrap();
        assert_eq!(imported, addr);
    }

    #[test]
    fn list_addrs_returns_generated() {
        let mut wallet = Wallet::new(MemKeyStore::new());
        let addr1 = wallet.generate_addr().unwrap();
        let addr2 = wallet.generate_addr().unwrap();
        let mut addrs = wallet.list_addrs().unwrap();
        addrs.sort();
        let mut expected = vec![addr1, addr2];
        expected.sort();
        assert_eq!(addrs, expected);
    }
}
