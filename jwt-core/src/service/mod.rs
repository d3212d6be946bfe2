//! Services orchestrating key extraction, signing and token handling.

pub mod certificate_service;
pub mod error;
pub mod token_service;
