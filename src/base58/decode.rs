use super::{ALPHABET, BASE};
use crate::base_common::BigUint;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The input holds a character outside the alphabet. Which one is not reported.
    InvalidCharacter,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCharacter => write!(f, "Invalid base58 character"),
        }
    }
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    let zero = ALPHABET.zero();
    let zeroes = input.iter().take_while(|&&value| value == zero).count();

    // The leading run contributes nothing to the total but is still validated with the rest.
    let mut value = BigUint::with_capacity(input.len());
    for &character in input {
        let digit = ALPHABET.decode(character).ok_or(Error::InvalidCharacter)?;
        value.mul_add_small(BASE, digit as u32);
    }

    let mut output = vec![0u8; zeroes];
    value.write_be_bytes(&mut output);
    Ok(output)
}
