use jwt_crypto::Encoding;
use serde::Serialize;
use serde_json::Value;

use super::{error::TokenError, model::JsonObject};

pub fn to_json_object(value: impl Serialize) -> Result<JsonObject, TokenError> {
    match serde_json::to_value(value).map_err(|e| TokenError::NotJson(e.to_string()))? {
        Value::Object(object) => Ok(object),
        other => Err(TokenError::NotJson(other.to_string())),
    }
}

pub fn encode_json_object(
    encoding: Encoding,
    object: &JsonObject,
) -> Result<String, TokenError> {
    let json = serde_json::to_string(object).map_err(|e| TokenError::NotJson(e.to_string()))?;

    Ok(encoding.encode_str(&json)?)
}

pub fn decode_json_object(encoding: Encoding, segment: &str) -> Result<JsonObject, TokenError> {
    let json = encoding.decode(segment)?;

    // non UTF-8 bytes are a JSON failure, not an encoding one
    serde_json::from_slice(&json).map_err(|e| TokenError::WrongTokenJson(e.to_string()))
}
