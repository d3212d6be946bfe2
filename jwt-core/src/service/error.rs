use jwt_crypto::SignerError;
use jwt_providers::{certificate::error::CertificateError, token::error::TokenError};
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Certificate error: `{0}`")]
    Certificate(#[from] CertificateError),
    #[error("Token error: `{0}`")]
    Token(#[from] TokenError),
    #[error("Signer error: `{0}`")]
    Signer(#[from] SignerError),
}
