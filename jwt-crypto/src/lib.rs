//! Encoding, hashing, signing and verifying of raw bytes for compact tokens.
//!
//! This crate holds the cryptographic building blocks used by the token
//! providers: the base64 transform encoders, the SHA-2 hash provider and the
//! signer variants (`none`, HMAC, RSA and ECDSA). It has been separated into its
//! own crate so the primitives can be reviewed independently of the token
//! format built on top of them.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub mod imp;

pub use imp::{
    encoding::Encoding,
    hasher::HashAlgorithm,
    signer::{JwtSigner, SigningAlgorithm},
};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("Decoded bytes are not valid UTF-8")]
    NonUtf8String,
    #[error("Not a base64 string: `{0}`")]
    NonBase64String(String),
    #[error("Could not encode: `{0}`")]
    CannotEncode(String),
}

/// SHA-2 hashing never fails; the variant exists for `Hasher`
/// implementations backed by a fallible engine.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum HasherError {
    #[error("Could not hash")]
    CannotHash,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum SignerError {
    #[error("Unsupported: `{0}`")]
    Unsupported(String),
    #[error("Algorithm `{algorithm}` cannot be used by the {signer} signer")]
    AlgorithmMismatch {
        algorithm: SigningAlgorithm,
        signer: &'static str,
    },
    #[error("Private key is not base64 encoded")]
    NonBase64EncodedKey,
    #[error("No key for curve `{0}`")]
    NoKeyForCurve(String),
    #[error("Missing public key")]
    NoPublicKey,
    #[error("Missing private key")]
    NoPrivateKey,
    #[error("Could not create public key: `{0}`")]
    CannotCreatePublicKey(String),
    #[error("Could not create private key: `{0}`")]
    CannotCreatePrivateKey(String),
    #[error("Could not sign: `{0}`")]
    CannotSign(String),
    #[error("Hasher error: `{0}`")]
    Hasher(#[from] HasherError),
}

/// Raw elliptic-curve key material as exchanged between the key extractor and
/// the ECDSA signer.
///
/// * `private`: base64 of `0x00 ‖ scalar`, the scalar big-endian without
///   leading zero bytes.
/// * `public`: base64 of the uncompressed SEC1 point `0x04 ‖ X ‖ Y`, or empty
///   when the key carried no public point.
///
/// The RSA signer reuses the same shape with base64 PKCS#8 / SPKI DER.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RawKeyPair {
    pub private: String,
    pub public: String,
}

impl RawKeyPair {
    pub fn new(private: impl Into<String>, public: impl Into<String>) -> Self {
        Self {
            private: private.into(),
            public: public.into(),
        }
    }
}

impl fmt::Debug for RawKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawKeyPair")
            .field("private", &"***")
            .field("public", &self.public)
            .finish()
    }
}

/// Provides hashing.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Hasher: Send + Sync {
    /// Raw digest bytes.
    fn hash(&self, input: &[u8]) -> Result<Vec<u8>, HasherError>;
}

/// Signs token input and verifies token signatures.
///
/// A verification mismatch is `Ok(false)`; errors are reserved for key
/// material that cannot be used at all.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Signer: Send + Sync {
    /// Value written to the `alg` header.
    fn algorithm(&self) -> SigningAlgorithm;

    fn sign(&self, message: &str) -> Result<Vec<u8>, SignerError>;

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool, SignerError>;
}
