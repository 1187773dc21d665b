use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

/// Digit table for a positional alphabet of `N` symbols.
///
/// The reverse table covers every byte value, so lookups of arbitrary input never go out of range.
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 256],
}

impl<const N: usize> Alphabet<N> {
    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        assert!(N <= 256);
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 256] = [None; 256];

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if let Some(first) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    pub fn encode(&self, digit: usize) -> u8 {
        self.encode[digit]
    }

    pub fn decode(&self, character: u8) -> Option<u8> {
        self.decode[character as usize]
    }

    /// The symbol for digit zero, which also stands for each leading zero byte.
    pub const fn zero(&self) -> u8 {
        self.encode[0]
    }

    pub const fn len(&self) -> usize {
        N
    }
}
