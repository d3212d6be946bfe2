use crate::{imp::signer::SigningAlgorithm, Signer, SignerError};

/// Signer for unauthenticated tokens: empty signature, always verifies.
#[derive(Debug, Copy, Clone, Default)]
pub struct UnsignedSigner;

impl Signer for UnsignedSigner {
    fn algorithm(&self) -> SigningAlgorithm {
        SigningAlgorithm::None
    }

    fn sign(&self, _message: &str) -> Result<Vec<u8>, SignerError> {
        Ok(Vec::new())
    }

    fn verify(&self, _message: &[u8], _signature: &[u8]) -> Result<bool, SignerError> {
        Ok(true)
    }
}
