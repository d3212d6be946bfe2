//! Enumerates errors related to token assembly and parsing.

use jwt_crypto::{EncodingError, SignerError};
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Not a JSON object: `{0}`")]
    NotJson(String),
    #[error("Token must have 3 segments, found {0}")]
    WrongToken(usize),
    #[error("Token segment is not a JSON object: `{0}`")]
    WrongTokenJson(String),
    #[error("Encoding error: `{0}`")]
    Encoding(#[from] EncodingError),
    #[error("Signer error: `{0}`")]
    Signer(#[from] SignerError),
}
