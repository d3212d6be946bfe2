use std::{path::PathBuf, sync::Arc};

use jwt_core::JwtCore;
use jwt_crypto::{JwtSigner, SigningAlgorithm};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let core = JwtCore::new(None);

    let payload = json!({"sub": "1234567890", "name": "John Doe"});

    let unsigned = Arc::new(JwtSigner::unsigned());
    let token = core
        .token_service
        .issue(json!({}), &payload, unsigned.clone())
        .expect("Unsigned token creation failed")
        .token();
    println!("none:  {token}");
    println!("valid: {}", core.token_service.validate(&token, unsigned));

    let hmac = Arc::new(
        JwtSigner::hmac(SigningAlgorithm::Hs256, "your-256-bit-secret")
            .expect("HMAC signer creation failed"),
    );
    let token = core
        .token_service
        .issue(json!({}), &payload, hmac.clone())
        .expect("HS256 token creation failed")
        .token();
    println!("HS256: {token}");
    println!("valid: {}", core.token_service.validate(&token, hmac));

    let key_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("keys/es384.pem"));

    tracing::info!(path = %key_path.display(), "Extracting ES384 keys");
    let ecdsa = core
        .certificate_service
        .ecdsa_signer(SigningAlgorithm::Es384, &key_path)
        .expect("Key extraction failed");
    let token = core
        .token_service
        .issue(json!({"kid": "es384"}), &payload, ecdsa.clone())
        .expect("ES384 token creation failed")
        .token();
    println!("ES384: {token}");

    match core.token_service.validate(&token, ecdsa) {
        true => println!("Successfully verified"),
        false => println!("Signature is incorrect"),
    };
}
