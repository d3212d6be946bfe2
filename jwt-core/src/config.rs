use jwt_crypto::Encoding;
use jwt_providers::certificate::model::KeyCachePolicy;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JwtCoreConfig {
    /// Transform applied to every token segment.
    pub encoding: Encoding,
    pub key_cache_policy: KeyCachePolicy,
}
