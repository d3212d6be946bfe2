pub mod encoding;
pub mod hasher;
pub mod signer;

#[cfg(test)]
mod test;
