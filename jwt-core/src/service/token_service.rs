use std::sync::Arc;

use jwt_crypto::{Encoding, Signer};
use jwt_providers::token::Token;
use serde::Serialize;

use super::error::ServiceError;

pub struct TokenService {
    encoding: Encoding,
}

impl TokenService {
    pub fn new(encoding: Encoding) -> Self {
        Self { encoding }
    }

    pub fn issue(
        &self,
        headers: impl Serialize,
        payload: impl Serialize,
        signer: Arc<dyn Signer>,
    ) -> Result<Token, ServiceError> {
        Ok(Token::new(headers, payload, self.encoding, signer)?)
    }

    pub fn parse(&self, token: &str, signer: Arc<dyn Signer>) -> Result<Token, ServiceError> {
        Ok(Token::parse(token, self.encoding, signer)?)
    }

    /// Parses and checks `token`; malformed tokens are invalid.
    pub fn validate(&self, token: &str, signer: Arc<dyn Signer>) -> bool {
        match self.parse(token, signer) {
            Ok(token) => token.is_valid(),
            Err(err) => {
                tracing::debug!("Could not parse token: {err}");
                false
            }
        }
    }
}
