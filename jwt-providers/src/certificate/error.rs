//! Enumerates errors related to key extraction.

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CertificateError {
    #[error("No such file: `{0}`")]
    NoFile(String),
    #[error("Could not normalize PEM: `{0}`")]
    CannotNormalize(String),
    #[error("Could not read private key: `{0}`")]
    CannotReadPrivateKey(String),
    #[error("Not an elliptic curve key: `{0}`")]
    NoEcKey(String),
    #[error("Could not extract private key: `{0}`")]
    CannotExtractPrivateKey(String),
    #[error("Could not extract public key: `{0}`")]
    CannotExtractPublicKey(String),
}
