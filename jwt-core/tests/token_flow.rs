use std::{fs, sync::Arc};

use jwt_core::{config::JwtCoreConfig, JwtCore};
use jwt_crypto::{Encoding, JwtSigner, RawKeyPair, SigningAlgorithm};
use jwt_providers::certificate::model::KeyCachePolicy;
use serde_json::json;
use tempfile::TempDir;

const ES256_PEM: &str = include_str!("data/es256.pem");

#[test]
fn test_config_defaults() {
    let config: JwtCoreConfig = serde_json::from_value(json!({})).unwrap();

    assert_eq!(config, JwtCoreConfig::default());
    assert_eq!(config.encoding, Encoding::Base64Url);
    assert_eq!(config.key_cache_policy, KeyCachePolicy::Reuse);
}

#[test]
fn test_config_from_json() {
    let config: JwtCoreConfig = serde_json::from_value(json!({
        "encoding": "BASE64",
        "keyCachePolicy": "REFRESH_WHEN_STALE",
    }))
    .unwrap();

    assert_eq!(
        config,
        JwtCoreConfig {
            encoding: Encoding::Base64,
            key_cache_policy: KeyCachePolicy::RefreshWhenStale,
        }
    );
}

#[test]
fn test_issue_and_validate_with_pem_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("signing.pem");
    fs::write(&path, ES256_PEM.replace('\n', "")).unwrap();

    let core = JwtCore::default();

    let signer = core
        .certificate_service
        .ecdsa_signer(SigningAlgorithm::Es256, &path)
        .unwrap();

    let token = core
        .token_service
        .issue(
            json!({"kid": "signing"}),
            json!({"sub": "1234567890", "name": "John Doe"}),
            signer.clone(),
        )
        .unwrap()
        .token();

    assert!(core.token_service.validate(&token, signer.clone()));

    let parsed = core.token_service.parse(&token, signer).unwrap();
    assert_eq!(parsed.algorithm(), Some("ES256"));
    assert_eq!(parsed.header().get("kid"), Some(&json!("signing")));
    assert_eq!(parsed.payload().get("name"), Some(&json!("John Doe")));

    // verification needs the public point only
    let keys = core.certificate_service.keys(&path).unwrap();
    let verifier = Arc::new(
        JwtSigner::ecdsa(SigningAlgorithm::Es256, RawKeyPair::new("", keys.public.clone())).unwrap(),
    );
    assert!(core.token_service.validate(&token, verifier));
}

#[test]
fn test_token_from_other_key_is_rejected() {
    let core = JwtCore::new(Some(JwtCoreConfig {
        encoding: Encoding::Base64Url,
        key_cache_policy: KeyCachePolicy::Reuse,
    }));

    let issuer = Arc::new(JwtSigner::hmac(SigningAlgorithm::Hs512, "issuer secret").unwrap());
    let verifier = Arc::new(JwtSigner::hmac(SigningAlgorithm::Hs512, "other secret").unwrap());

    let token = core
        .token_service
        .issue(json!({}), json!({"sub": "1234567890"}), issuer.clone())
        .unwrap()
        .token();

    assert!(core.token_service.validate(&token, issuer));
    assert!(!core.token_service.validate(&token, verifier));
}
