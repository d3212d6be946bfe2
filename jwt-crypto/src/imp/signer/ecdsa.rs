//! ECDSA over the NIST prime curves (ES256 / ES384 / ES512).
//!
//! Key material arrives in the raw interchange form produced by the key
//! extractor: a base64 big-endian scalar (possibly carrying leading zero bytes)
//! and a base64 uncompressed SEC1 point. Signatures leave and enter as DER
//! encoded `(r, s)` pairs.

use ::ecdsa::{
    elliptic_curve::FieldBytes,
    signature::hazmat::{PrehashVerifier, RandomizedPrehashSigner},
    Signature, SigningKey, VerifyingKey,
};
use p256::NistP256;
use p384::NistP384;
use p521::NistP521;
use rand::rngs::OsRng;
use strum::Display;

use crate::{
    imp::{encoding::Encoding, hasher::HashAlgorithm, signer::SigningAlgorithm},
    Hasher, RawKeyPair, Signer, SignerError,
};

#[derive(Debug, Copy, Clone, Display, PartialEq, Eq)]
pub enum EcCurve {
    #[strum(serialize = "P-256")]
    P256,
    #[strum(serialize = "P-384")]
    P384,
    #[strum(serialize = "P-521")]
    P521,
}

impl EcCurve {
    pub fn for_algorithm(algorithm: SigningAlgorithm) -> Option<Self> {
        match algorithm {
            SigningAlgorithm::Es256 => Some(Self::P256),
            SigningAlgorithm::Es384 => Some(Self::P384),
            SigningAlgorithm::Es512 => Some(Self::P521),
            _ => None,
        }
    }

    pub fn hash(&self) -> HashAlgorithm {
        match self {
            Self::P256 => HashAlgorithm::Sha256,
            Self::P384 => HashAlgorithm::Sha384,
            Self::P521 => HashAlgorithm::Sha512,
        }
    }

    fn sign_prehash(&self, scalar: &[u8], prehash: &[u8]) -> Result<Vec<u8>, SignerError> {
        match self {
            Self::P256 => <NistP256 as CurveSigner>::sign_prehash(scalar, prehash),
            Self::P384 => <NistP384 as CurveSigner>::sign_prehash(scalar, prehash),
            Self::P521 => <NistP521 as CurveSigner>::sign_prehash(scalar, prehash),
        }
    }

    fn verify_prehash(
        &self,
        public_key: &[u8],
        prehash: &[u8],
        signature: &[u8],
    ) -> Result<bool, SignerError> {
        match self {
            Self::P256 => {
                <NistP256 as CurveSigner>::verify_prehash(public_key, prehash, signature)
            }
            Self::P384 => {
                <NistP384 as CurveSigner>::verify_prehash(public_key, prehash, signature)
            }
            Self::P521 => {
                <NistP521 as CurveSigner>::verify_prehash(public_key, prehash, signature)
            }
        }
    }
}

trait CurveSigner {
    fn sign_prehash(scalar: &[u8], prehash: &[u8]) -> Result<Vec<u8>, SignerError>;

    fn verify_prehash(
        public_key: &[u8],
        prehash: &[u8],
        signature: &[u8],
    ) -> Result<bool, SignerError>;
}

macro_rules! impl_curve_signer {
    ($curve:ty, $signing_key:ty, $name:literal) => {
        impl CurveSigner for $curve {
            fn sign_prehash(scalar: &[u8], prehash: &[u8]) -> Result<Vec<u8>, SignerError> {
                let scalar = strip_leading_zeros(scalar);

                let mut field_bytes = FieldBytes::<$curve>::default();
                let offset = field_bytes
                    .len()
                    .checked_sub(scalar.len())
                    .ok_or_else(|| SignerError::NoKeyForCurve($name.to_owned()))?;
                field_bytes[offset..].copy_from_slice(scalar);

                let signing_key = <$signing_key>::from_slice(field_bytes.as_slice())
                    .map_err(|_| SignerError::NoKeyForCurve($name.to_owned()))?;

                let signature: Signature<$curve> = signing_key
                    .sign_prehash_with_rng(&mut OsRng, prehash)
                    .map_err(|e| SignerError::CannotSign(e.to_string()))?;

                Ok(signature.to_der().as_bytes().to_vec())
            }

            fn verify_prehash(
                public_key: &[u8],
                prehash: &[u8],
                signature: &[u8],
            ) -> Result<bool, SignerError> {
                let signature = match Signature::<$curve>::from_der(signature) {
                    Ok(signature) => signature,
                    Err(err) => {
                        tracing::debug!(curve = $name, "Malformed DER signature: {err}");
                        return Ok(false);
                    }
                };

                if public_key.is_empty() {
                    return Err(SignerError::NoPublicKey);
                }

                let verifying_key = VerifyingKey::<$curve>::from_sec1_bytes(public_key)
                    .map_err(|e| SignerError::CannotCreatePublicKey(e.to_string()))?;

                Ok(verifying_key.verify_prehash(prehash, &signature).is_ok())
            }
        }
    };
}

impl_curve_signer!(NistP256, SigningKey<NistP256>, "P-256");
impl_curve_signer!(NistP384, SigningKey<NistP384>, "P-384");
// p521 only implements prehash signing on its own key wrapper
impl_curve_signer!(NistP521, p521::ecdsa::SigningKey, "P-521");

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

#[derive(Debug, Clone)]
pub struct EcdsaSigner {
    algorithm: SigningAlgorithm,
    curve: EcCurve,
    keys: RawKeyPair,
}

impl EcdsaSigner {
    pub fn new(algorithm: SigningAlgorithm, keys: RawKeyPair) -> Result<Self, SignerError> {
        let curve = EcCurve::for_algorithm(algorithm).ok_or(SignerError::AlgorithmMismatch {
            algorithm,
            signer: "ECDSA",
        })?;

        Ok(Self {
            algorithm,
            curve,
            keys,
        })
    }

    pub fn curve(&self) -> EcCurve {
        self.curve
    }

    pub fn keys(&self) -> &RawKeyPair {
        &self.keys
    }
}

impl Signer for EcdsaSigner {
    fn algorithm(&self) -> SigningAlgorithm {
        self.algorithm
    }

    fn sign(&self, message: &str) -> Result<Vec<u8>, SignerError> {
        let scalar = Encoding::Base64
            .decode(&self.keys.private)
            .map_err(|_| SignerError::NonBase64EncodedKey)?;

        let digest = self.curve.hash().hash(message.as_bytes())?;

        self.curve.sign_prehash(&scalar, &digest)
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool, SignerError> {
        let digest = self.curve.hash().hash(message)?;

        let public_key = Encoding::Base64
            .decode(&self.keys.public)
            .map_err(|e| SignerError::CannotCreatePublicKey(e.to_string()))?;

        self.curve.verify_prehash(&public_key, &digest, signature)
    }
}
