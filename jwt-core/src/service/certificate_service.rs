use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use jwt_crypto::{JwtSigner, RawKeyPair, Signer, SigningAlgorithm};
use jwt_providers::certificate::{model::KeyCachePolicy, Certificate};

use super::error::ServiceError;

/// Hands out keys and signers for PEM key files.
///
/// Each path gets one [`Certificate`], so keys are extracted once per path.
/// Extraction runs under a lock, which keeps writes of the normalized copy to
/// a single writer.
pub struct CertificateService {
    cache_policy: KeyCachePolicy,
    certificates: Mutex<HashMap<PathBuf, Arc<Certificate>>>,
}

impl CertificateService {
    pub fn new(cache_policy: KeyCachePolicy) -> Self {
        Self {
            cache_policy,
            certificates: Mutex::new(HashMap::new()),
        }
    }

    pub fn keys(&self, path: impl AsRef<Path>) -> Result<RawKeyPair, ServiceError> {
        let path = path.as_ref();

        let mut certificates = self
            .certificates
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let certificate = certificates
            .entry(path.to_path_buf())
            .or_insert_with(|| {
                tracing::debug!(path = %path.display(), "Registering certificate");
                Arc::new(Certificate::with_cache_policy(path, self.cache_policy))
            })
            .clone();

        Ok(certificate.keys()?)
    }

    pub fn ecdsa_signer(
        &self,
        algorithm: SigningAlgorithm,
        path: impl AsRef<Path>,
    ) -> Result<Arc<dyn Signer>, ServiceError> {
        let keys = self.keys(path)?;

        Ok(Arc::new(JwtSigner::ecdsa(algorithm, keys)?))
    }
}
