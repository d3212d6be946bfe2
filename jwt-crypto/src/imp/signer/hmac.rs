use std::fmt;

use ::hmac::{digest::KeyInit, Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

use crate::{imp::signer::SigningAlgorithm, Signer, SignerError};

/// HS256 / HS384 / HS512 over a shared secret.
#[derive(Clone)]
pub struct HmacSigner {
    algorithm: SigningAlgorithm,
    secret: Zeroizing<Vec<u8>>,
}

impl HmacSigner {
    pub fn new(
        algorithm: SigningAlgorithm,
        secret: impl Into<Vec<u8>>,
    ) -> Result<Self, SignerError> {
        match algorithm {
            SigningAlgorithm::Hs256 | SigningAlgorithm::Hs384 | SigningAlgorithm::Hs512 => {
                Ok(Self {
                    algorithm,
                    secret: Zeroizing::new(secret.into()),
                })
            }
            _ => Err(SignerError::AlgorithmMismatch {
                algorithm,
                signer: "HMAC",
            }),
        }
    }

    fn mac(&self, message: &[u8]) -> Result<Vec<u8>, SignerError> {
        match self.algorithm {
            SigningAlgorithm::Hs256 => compute::<Hmac<Sha256>>(&self.secret, message),
            SigningAlgorithm::Hs384 => compute::<Hmac<Sha384>>(&self.secret, message),
            SigningAlgorithm::Hs512 => compute::<Hmac<Sha512>>(&self.secret, message),
            other => Err(SignerError::Unsupported(other.to_string())),
        }
    }

    fn verify_mac(&self, message: &[u8], signature: &[u8]) -> Result<bool, SignerError> {
        match self.algorithm {
            SigningAlgorithm::Hs256 => check::<Hmac<Sha256>>(&self.secret, message, signature),
            SigningAlgorithm::Hs384 => check::<Hmac<Sha384>>(&self.secret, message, signature),
            SigningAlgorithm::Hs512 => check::<Hmac<Sha512>>(&self.secret, message, signature),
            other => Err(SignerError::Unsupported(other.to_string())),
        }
    }
}

fn keyed<M: Mac + KeyInit>(secret: &[u8], message: &[u8]) -> Result<M, SignerError> {
    let mut mac = <M as KeyInit>::new_from_slice(secret)
        .map_err(|e| SignerError::CannotSign(e.to_string()))?;
    mac.update(message);
    Ok(mac)
}

fn compute<M: Mac + KeyInit>(secret: &[u8], message: &[u8]) -> Result<Vec<u8>, SignerError> {
    Ok(keyed::<M>(secret, message)?.finalize().into_bytes().to_vec())
}

fn check<M: Mac + KeyInit>(
    secret: &[u8],
    message: &[u8],
    signature: &[u8],
) -> Result<bool, SignerError> {
    Ok(keyed::<M>(secret, message)?.verify_slice(signature).is_ok())
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

impl Signer for HmacSigner {
    fn algorithm(&self) -> SigningAlgorithm {
        self.algorithm
    }

    fn sign(&self, message: &str) -> Result<Vec<u8>, SignerError> {
        self.mac(message.as_bytes())
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool, SignerError> {
        self.verify_mac(message, signature)
    }
}
