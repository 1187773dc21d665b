//! Base58 encoding over the Bitcoin alphabet, which leaves out `0`, `I`, `O` and `l`.

pub mod base58;
pub mod base_common;
