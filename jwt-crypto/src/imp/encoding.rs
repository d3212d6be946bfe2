//! Reversible byte/text transforms used for token segments and key material.

use ct_codecs::{Base64, Decoder, Encoder};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::EncodingError;

#[derive(
    Debug, Copy, Clone, Default, Display, EnumString, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum Encoding {
    /// Standard alphabet, `=` padded.
    #[strum(serialize = "BASE64")]
    #[serde(rename = "BASE64")]
    Base64,
    /// `-`/`_` alphabet, padding stripped.
    #[default]
    #[strum(serialize = "BASE64URL")]
    #[serde(rename = "BASE64URL")]
    Base64Url,
}

impl Encoding {
    pub fn encode(&self, data: &[u8]) -> Result<String, EncodingError> {
        let base64 = Base64::encode_to_string(data)
            .map_err(|e| EncodingError::CannotEncode(e.to_string()))?;

        Ok(match self {
            Self::Base64 => base64,
            Self::Base64Url => base64
                .chars()
                .filter_map(|c| match c {
                    '+' => Some('-'),
                    '/' => Some('_'),
                    '=' => None,
                    other => Some(other),
                })
                .collect(),
        })
    }

    pub fn encode_str(&self, string: &str) -> Result<String, EncodingError> {
        self.encode(string.as_bytes())
    }

    pub fn decode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        match self {
            Self::Base64 => decode_base64(text),
            Self::Base64Url => {
                let mut converted: String = text
                    .chars()
                    .map(|c| match c {
                        '-' => '+',
                        '_' => '/',
                        other => other,
                    })
                    .collect();

                let padding = (4 - converted.len() % 4) % 4;
                converted.extend(std::iter::repeat('=').take(padding));

                decode_base64(&converted)
            }
        }
    }

    pub fn decode_to_string(&self, text: &str) -> Result<String, EncodingError> {
        String::from_utf8(self.decode(text)?).map_err(|_| EncodingError::NonUtf8String)
    }
}

fn decode_base64(text: &str) -> Result<Vec<u8>, EncodingError> {
    // unsigned tokens carry an empty signature segment
    if text.is_empty() {
        return Ok(Vec::new());
    }

    Base64::decode_to_vec(text, None).map_err(|e| EncodingError::NonBase64String(e.to_string()))
}
