//! Entry point for issuing and verifying compact signed tokens.
//!
//! The library consists of three crates:
//!
//! * **Crypto**: base64 transforms, SHA-2 hashing and the signer variants
//!   (`none`, HMAC, RSA, ECDSA).
//! * **Providers**: key extraction from PEM files and the token itself.
//! * **Core**: configuration and the services below.
//!
//! ```ignore rust
//! /// `None` initializes the core with the default configuration
//! let core = JwtCore::new(None);
//!
//! let signer = core
//!     .certificate_service
//!     .ecdsa_signer(SigningAlgorithm::Es256, "keys/signing.pem")?;
//! let token = core
//!     .token_service
//!     .issue(json!({}), json!({"sub": "1234567890"}), signer)?;
//! ```

use config::JwtCoreConfig;
use service::{certificate_service::CertificateService, token_service::TokenService};

pub mod config;
pub mod service;

pub struct JwtCore {
    pub token_service: TokenService,
    pub certificate_service: CertificateService,
}

impl Default for JwtCore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl JwtCore {
    pub fn new(config: Option<JwtCoreConfig>) -> Self {
        let config = config.unwrap_or_default();

        tracing::debug!(
            encoding = %config.encoding,
            key_cache_policy = %config.key_cache_policy,
            "Initializing core"
        );

        Self {
            token_service: TokenService::new(config.encoding),
            certificate_service: CertificateService::new(config.key_cache_policy),
        }
    }
}
