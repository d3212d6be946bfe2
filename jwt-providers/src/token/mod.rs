//! Compact three-segment tokens: `header.payload.signature`.
//!
//! Header and payload are JSON objects serialized with sorted keys and
//! transform-encoded; the signature is computed over the encoded
//! `header.payload` text. The header always carries `alg` (taken from the
//! signer) and `"typ": "JWT"`; values supplied by the caller for these two keys
//! are replaced.

use std::{fmt, sync::Arc};

use jwt_crypto::{Encoding, Signer};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use self::{
    error::TokenError,
    mapper::{decode_json_object, encode_json_object, to_json_object},
    model::{EncodedSegments, JsonObject, ALGORITHM_HEADER, TOKEN_TYPE, TYPE_HEADER},
};

pub mod error;
pub mod mapper;
pub mod model;


#[derive(Clone)]
pub struct Token {
    header: JsonObject,
    payload: JsonObject,
    encoding: Encoding,
    signer: Arc<dyn Signer>,
    encoded: EncodedSegments,
}

impl Token {
    /// Builds and signs a token.
    ///
    /// `headers` and `payload` must serialize to JSON objects.
    pub fn new(
        headers: impl Serialize,
        payload: impl Serialize,
        encoding: Encoding,
        signer: Arc<dyn Signer>,
    ) -> Result<Self, TokenError> {
        let mut header = to_json_object(headers)?;
        header.insert(
            ALGORITHM_HEADER.to_owned(),
            Value::String(signer.algorithm().to_string()),
        );
        header.insert(TYPE_HEADER.to_owned(), Value::String(TOKEN_TYPE.to_owned()));

        let payload = to_json_object(payload)?;

        let encoded_header = encode_json_object(encoding, &header)?;
        let encoded_payload = encode_json_object(encoding, &payload)?;

        let signature = signer.sign(&format!("{encoded_header}.{encoded_payload}"))?;

        let encoded = EncodedSegments {
            header: encoded_header,
            payload: encoded_payload,
            signature: encoding.encode(&signature)?,
        };

        Ok(Self {
            header,
            payload,
            encoding,
            signer,
            encoded,
        })
    }

    /// Splits and decodes a token string. The signature is not checked here,
    /// see [`Token::is_valid`].
    pub fn parse(
        token: &str,
        encoding: Encoding,
        signer: Arc<dyn Signer>,
    ) -> Result<Self, TokenError> {
        let segments: Vec<&str> = token.split('.').collect();
        let [header, payload, signature] = segments.as_slice() else {
            return Err(TokenError::WrongToken(segments.len()));
        };

        Ok(Self {
            header: decode_json_object(encoding, header)?,
            payload: decode_json_object(encoding, payload)?,
            encoding,
            signer,
            encoded: EncodedSegments {
                header: (*header).to_owned(),
                payload: (*payload).to_owned(),
                signature: (*signature).to_owned(),
            },
        })
    }

    /// Checks the signature segment against the encoded header and payload.
    ///
    /// Any decoding or signer failure counts as an invalid token.
    pub fn is_valid(&self) -> bool {
        let signature = match self.encoding.decode(&self.encoded.signature) {
            Ok(signature) => signature,
            Err(err) => {
                tracing::debug!("Could not decode token signature: {err}");
                return false;
            }
        };

        match self
            .signer
            .verify(self.encoded.signing_input().as_bytes(), &signature)
        {
            Ok(true) => true,
            Ok(false) => {
                tracing::debug!(algorithm = ?self.algorithm(), "Token signature does not match");
                false
            }
            Err(err) => {
                tracing::debug!("Could not verify token signature: {err}");
                false
            }
        }
    }

    pub fn token(&self) -> String {
        format!(
            "{}.{}",
            self.encoded.signing_input(),
            self.encoded.signature
        )
    }

    pub fn header(&self) -> &JsonObject {
        &self.header
    }

    pub fn payload(&self) -> &JsonObject {
        &self.payload
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn encoded_header(&self) -> &str {
        &self.encoded.header
    }

    pub fn encoded_payload(&self) -> &str {
        &self.encoded.payload
    }

    pub fn encoded_signature(&self) -> &str {
        &self.encoded.signature
    }

    /// The `alg` header value, as written in the token.
    pub fn algorithm(&self) -> Option<&str> {
        self.header.get(ALGORITHM_HEADER).and_then(Value::as_str)
    }

    pub fn claims<T: DeserializeOwned>(&self) -> Result<T, TokenError> {
        serde_json::from_value(Value::Object(self.payload.clone()))
            .map_err(|e| TokenError::WrongTokenJson(e.to_string()))
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("header", &self.header)
            .field("payload", &self.payload)
            .field("encoding", &self.encoding)
            .field("encoded", &self.encoded)
            .finish_non_exhaustive()
    }
}
