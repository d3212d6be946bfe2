//! Signer variants selectable for a token.

use strum::{Display, EnumString};

use crate::{imp::hasher::HashAlgorithm, RawKeyPair, Signer, SignerError};

pub mod ecdsa;
pub mod hmac;
pub mod rsa;
pub mod unsigned;


pub use self::{
    ecdsa::{EcCurve, EcdsaSigner},
    hmac::HmacSigner,
    rsa::RsaSigner,
    unsigned::UnsignedSigner,
};

/// Algorithm identifiers as written to the `alg` header.
#[derive(Debug, Copy, Clone, Display, EnumString, PartialEq, Eq)]
pub enum SigningAlgorithm {
    #[strum(serialize = "none")]
    None,
    #[strum(serialize = "HS256")]
    Hs256,
    #[strum(serialize = "HS384")]
    Hs384,
    #[strum(serialize = "HS512")]
    Hs512,
    #[strum(serialize = "RS256")]
    Rs256,
    #[strum(serialize = "RS384")]
    Rs384,
    #[strum(serialize = "RS512")]
    Rs512,
    #[strum(serialize = "ES256")]
    Es256,
    #[strum(serialize = "ES384")]
    Es384,
    #[strum(serialize = "ES512")]
    Es512,
}

impl SigningAlgorithm {
    /// Digest used by the algorithm, `None` for unsigned tokens.
    pub fn hash(&self) -> Option<HashAlgorithm> {
        match self {
            Self::None => None,
            Self::Hs256 | Self::Rs256 | Self::Es256 => Some(HashAlgorithm::Sha256),
            Self::Hs384 | Self::Rs384 | Self::Es384 => Some(HashAlgorithm::Sha384),
            Self::Hs512 | Self::Rs512 | Self::Es512 => Some(HashAlgorithm::Sha512),
        }
    }
}

/// Closed set of signers, dispatched by variant.
#[derive(Debug, Clone)]
pub enum JwtSigner {
    Unsigned(UnsignedSigner),
    Hmac(HmacSigner),
    Rsa(RsaSigner),
    Ecdsa(EcdsaSigner),
}

impl JwtSigner {
    pub fn unsigned() -> Self {
        Self::Unsigned(UnsignedSigner)
    }

    pub fn hmac(
        algorithm: SigningAlgorithm,
        secret: impl Into<Vec<u8>>,
    ) -> Result<Self, SignerError> {
        Ok(Self::Hmac(HmacSigner::new(algorithm, secret)?))
    }

    pub fn rsa(algorithm: SigningAlgorithm, keys: RawKeyPair) -> Result<Self, SignerError> {
        Ok(Self::Rsa(RsaSigner::new(algorithm, keys)?))
    }

    pub fn ecdsa(algorithm: SigningAlgorithm, keys: RawKeyPair) -> Result<Self, SignerError> {
        Ok(Self::Ecdsa(EcdsaSigner::new(algorithm, keys)?))
    }

    /// Picks the variant serving `algorithm` from asymmetric key material.
    ///
    /// HMAC needs a shared secret rather than a key pair and is not served here.
    pub fn from_key_pair(
        algorithm: SigningAlgorithm,
        keys: RawKeyPair,
    ) -> Result<Self, SignerError> {
        match algorithm {
            SigningAlgorithm::None => Ok(Self::unsigned()),
            SigningAlgorithm::Rs256 | SigningAlgorithm::Rs384 | SigningAlgorithm::Rs512 => {
                Self::rsa(algorithm, keys)
            }
            SigningAlgorithm::Es256 | SigningAlgorithm::Es384 | SigningAlgorithm::Es512 => {
                Self::ecdsa(algorithm, keys)
            }
            SigningAlgorithm::Hs256 | SigningAlgorithm::Hs384 | SigningAlgorithm::Hs512 => Err(
                SignerError::Unsupported(format!("{algorithm} requires a shared secret")),
            ),
        }
    }
}

impl Signer for JwtSigner {
    fn algorithm(&self) -> SigningAlgorithm {
        match self {
            Self::Unsigned(signer) => signer.algorithm(),
            Self::Hmac(signer) => signer.algorithm(),
            Self::Rsa(signer) => signer.algorithm(),
            Self::Ecdsa(signer) => signer.algorithm(),
        }
    }

    fn sign(&self, message: &str) -> Result<Vec<u8>, SignerError> {
        match self {
            Self::Unsigned(signer) => signer.sign(message),
            Self::Hmac(signer) => signer.sign(message),
            Self::Rsa(signer) => signer.sign(message),
            Self::Ecdsa(signer) => signer.sign(message),
        }
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool, SignerError> {
        match self {
            Self::Unsigned(signer) => signer.verify(message, signature),
            Self::Hmac(signer) => signer.verify(message, signature),
            Self::Rsa(signer) => signer.verify(message, signature),
            Self::Ecdsa(signer) => signer.verify(message, signature),
        }
    }
}
