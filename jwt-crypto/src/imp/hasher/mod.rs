use sha2::Digest;
use strum::{Display, EnumString};

use crate::{Hasher, HasherError};

#[derive(Debug, Copy, Clone, Display, EnumString, PartialEq, Eq)]
pub enum HashAlgorithm {
    #[strum(serialize = "sha-256")]
    Sha256,
    #[strum(serialize = "sha-384")]
    Sha384,
    #[strum(serialize = "sha-512")]
    Sha512,
}

impl Hasher for HashAlgorithm {
    fn hash(&self, input: &[u8]) -> Result<Vec<u8>, HasherError> {
        Ok(match self {
            Self::Sha256 => sha2::Sha256::digest(input).to_vec(),
            Self::Sha384 => sha2::Sha384::digest(input).to_vec(),
            Self::Sha512 => sha2::Sha512::digest(input).to_vec(),
        })
    }
}
