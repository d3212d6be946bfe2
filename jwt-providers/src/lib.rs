//! Key extraction from PEM files and assembly, parsing and validation of
//! compact three-segment tokens.

pub mod certificate;
pub mod token;
