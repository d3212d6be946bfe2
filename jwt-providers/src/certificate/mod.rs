//! Extraction of raw elliptic-curve key material from PEM private key files.
//!
//! The source PEM is first rewritten into a sibling normalized copy (see
//! [`normalize_pem`]); the copy is then parsed as PKCS#8 and turned into a
//! [`RawKeyPair`] usable by the ECDSA signer.

use std::path::{Path, PathBuf};

use jwt_crypto::RawKeyPair;
use once_cell::sync::OnceCell;

use self::{
    error::CertificateError,
    model::{KeyCachePolicy, KeyType},
};

pub mod error;
pub mod model;
pub mod normalize;

mod extraction;


pub use normalize::{cache_path, normalize_pem};

/// A PEM key file together with the keys extracted from it.
///
/// Keys are extracted on the first successful [`Certificate::keys`] call and
/// kept for the lifetime of the value. Concurrent first callers wait for a
/// single extraction; failures are not remembered.
#[derive(Debug)]
pub struct Certificate {
    file_path: PathBuf,
    key_type: KeyType,
    cache_policy: KeyCachePolicy,
    keys: OnceCell<RawKeyPair>,
}

impl Certificate {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self::with_cache_policy(file_path, KeyCachePolicy::default())
    }

    pub fn with_cache_policy(file_path: impl Into<PathBuf>, cache_policy: KeyCachePolicy) -> Self {
        Self {
            file_path: file_path.into(),
            key_type: KeyType::Pem,
            cache_policy,
            keys: OnceCell::new(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn keys(&self) -> Result<RawKeyPair, CertificateError> {
        self.keys
            .get_or_try_init(|| extract_keys(&self.file_path, self.cache_policy))
            .cloned()
    }
}

/// Normalizes `path` into its cached copy and extracts the raw keys from it.
pub fn extract_keys(path: &Path, policy: KeyCachePolicy) -> Result<RawKeyPair, CertificateError> {
    if !path.is_file() {
        return Err(CertificateError::NoFile(path.display().to_string()));
    }

    let cache = cache_path(path)?;
    normalize_pem(path, &cache, policy)?;

    extraction::read_raw_keys(&cache)
}
