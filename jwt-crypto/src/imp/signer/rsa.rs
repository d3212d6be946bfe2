use ::rsa::{
    pkcs1v15::{Signature, SigningKey, VerifyingKey},
    pkcs8::{AssociatedOid, DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey},
    signature::{SignatureEncoding, Signer as _, Verifier as _},
    RsaPrivateKey, RsaPublicKey,
};
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::{
    imp::{encoding::Encoding, signer::SigningAlgorithm},
    RawKeyPair, Signer, SignerError,
};

/// RSASSA-PKCS1-v1_5 (RS256 / RS384 / RS512).
///
/// Keys are exchanged as base64 PKCS#8 DER (`private`) and base64 SPKI DER
/// (`public`). A verify-only signer may leave `private` empty.
#[derive(Debug, Clone)]
pub struct RsaSigner {
    algorithm: SigningAlgorithm,
    keys: RawKeyPair,
}

impl RsaSigner {
    pub fn new(algorithm: SigningAlgorithm, keys: RawKeyPair) -> Result<Self, SignerError> {
        match algorithm {
            SigningAlgorithm::Rs256 | SigningAlgorithm::Rs384 | SigningAlgorithm::Rs512 => {
                Ok(Self { algorithm, keys })
            }
            _ => Err(SignerError::AlgorithmMismatch {
                algorithm,
                signer: "RSA",
            }),
        }
    }

    /// Builds the signer from a PKCS#8 `PRIVATE KEY` PEM document.
    pub fn from_pem(algorithm: SigningAlgorithm, pem: &str) -> Result<Self, SignerError> {
        let private_key = RsaPrivateKey::from_pkcs8_pem(pem)
            .map_err(|e| SignerError::CannotCreatePrivateKey(e.to_string()))?;

        let private_der = private_key
            .to_pkcs8_der()
            .map_err(|e| SignerError::CannotCreatePrivateKey(e.to_string()))?;
        let public_der = private_key
            .to_public_key()
            .to_public_key_der()
            .map_err(|e| SignerError::CannotCreatePublicKey(e.to_string()))?;

        let keys = RawKeyPair::new(
            Encoding::Base64
                .encode(private_der.as_bytes())
                .map_err(|e| SignerError::CannotCreatePrivateKey(e.to_string()))?,
            Encoding::Base64
                .encode(public_der.as_bytes())
                .map_err(|e| SignerError::CannotCreatePublicKey(e.to_string()))?,
        );

        Self::new(algorithm, keys)
    }

    pub fn keys(&self) -> &RawKeyPair {
        &self.keys
    }

    fn private_key(&self) -> Result<RsaPrivateKey, SignerError> {
        if self.keys.private.is_empty() {
            return Err(SignerError::NoPrivateKey);
        }

        let der = Encoding::Base64
            .decode(&self.keys.private)
            .map_err(|_| SignerError::NonBase64EncodedKey)?;

        RsaPrivateKey::from_pkcs8_der(&der)
            .map_err(|e| SignerError::CannotCreatePrivateKey(e.to_string()))
    }

    fn public_key(&self) -> Result<RsaPublicKey, SignerError> {
        if self.keys.public.is_empty() {
            return Err(SignerError::NoPublicKey);
        }

        let der = Encoding::Base64
            .decode(&self.keys.public)
            .map_err(|e| SignerError::CannotCreatePublicKey(e.to_string()))?;

        RsaPublicKey::from_public_key_der(&der)
            .map_err(|e| SignerError::CannotCreatePublicKey(e.to_string()))
    }
}

fn sign_with<D: Digest + AssociatedOid>(
    private_key: RsaPrivateKey,
    message: &[u8],
) -> Result<Vec<u8>, SignerError> {
    let signing_key = SigningKey::<D>::new(private_key);
    let signature = signing_key
        .try_sign(message)
        .map_err(|e| SignerError::CannotSign(e.to_string()))?;

    Ok(signature.to_vec())
}

fn verify_with<D: Digest + AssociatedOid>(
    public_key: RsaPublicKey,
    message: &[u8],
    signature: &[u8],
) -> bool {
    let Ok(signature) = Signature::try_from(signature) else {
        return false;
    };

    VerifyingKey::<D>::new(public_key)
        .verify(message, &signature)
        .is_ok()
}

impl Signer for RsaSigner {
    fn algorithm(&self) -> SigningAlgorithm {
        self.algorithm
    }

    fn sign(&self, message: &str) -> Result<Vec<u8>, SignerError> {
        let private_key = self.private_key()?;

        match self.algorithm {
            SigningAlgorithm::Rs256 => sign_with::<Sha256>(private_key, message.as_bytes()),
            SigningAlgorithm::Rs384 => sign_with::<Sha384>(private_key, message.as_bytes()),
            SigningAlgorithm::Rs512 => sign_with::<Sha512>(private_key, message.as_bytes()),
            other => Err(SignerError::Unsupported(other.to_string())),
        }
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool, SignerError> {
        let public_key = self.public_key()?;

        match self.algorithm {
            SigningAlgorithm::Rs256 => Ok(verify_with::<Sha256>(public_key, message, signature)),
            SigningAlgorithm::Rs384 => Ok(verify_with::<Sha384>(public_key, message, signature)),
            SigningAlgorithm::Rs512 => Ok(verify_with::<Sha512>(public_key, message, signature)),
            other => Err(SignerError::Unsupported(other.to_string())),
        }
    }
}
