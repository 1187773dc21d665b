pub mod decode;
pub mod encode;
pub use crate::base_common::Alphabet;

pub use decode::decode;
pub use encode::{encode, max_encoded_len};

const BASE: u32 = ALPHABET.len() as u32;

pub const ALPHABET: Alphabet<58> = match Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};
