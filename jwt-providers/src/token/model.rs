use serde_json::{Map, Value};

pub type JsonObject = Map<String, Value>;

pub const ALGORITHM_HEADER: &str = "alg";
pub const TYPE_HEADER: &str = "typ";
pub const TOKEN_TYPE: &str = "JWT";

/// Transform-encoded token segments, in token order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSegments {
    pub header: String,
    pub payload: String,
    pub signature: String,
}

impl EncodedSegments {
    pub fn signing_input(&self) -> String {
        format!("{}.{}", self.header, self.payload)
    }
}
