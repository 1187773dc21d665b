use super::{ALPHABET, BASE};
use crate::base_common::BigUint;

/// Upper bound on the encoded length of `len` bytes: log(256) / log(58) rounded up to 1.37, plus one.
pub const fn max_encoded_len(len: usize) -> usize {
    len * 137 / 100 + 1
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let zeroes = input.iter().take_while(|&&value| value == 0).count();
    let digits = &input[zeroes..];

    let size = max_encoded_len(digits.len()) + zeroes;
    let mut output = vec![0u8; size];

    // Remainders come out least significant first, so fill from the back.
    let mut index = size;
    let mut value = BigUint::from_be_bytes(digits);
    while !value.is_zero() {
        index -= 1;
        output[index] = ALPHABET.encode(value.div_rem_small(BASE) as usize);
    }

    let start = index - zeroes;
    output[start..index].fill(ALPHABET.zero());
    output.drain(..start);
    // ALPHABET only holds ascii characters.
    unsafe { String::from_utf8_unchecked(output) }
}

#[cfg(test)]
mod tests {
    #[test]
    fn encode() {
        assert_eq!(super::encode([]), "");
        assert_eq!(super::encode([0]), "1");
        assert_eq!(super::encode([0, 0]), "11");
        assert_eq!(super::encode([0, 0, 0]), "111");
        assert_eq!(super::encode([0, 0, 0, 1]), "1112");
        assert_eq!(super::encode([0, 0, 0, 1, 1]), "1115S");
        assert_eq!(super::encode([193]), "4L");
        assert_eq!(super::encode([179, 43]), "Edp");
        assert_eq!(super::encode([0, 87, 10]), "17dB");
        assert_eq!(super::encode([171, 14, 39, 165]), "5Nbdwz");
        assert_eq!(super::encode([132, 244, 233, 50, 105]), "G12Fsdz");
        assert_eq!(
            super::encode([0, 0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 16, 32, 64, 128, 240, 250, 255]),
            "11112drXXUifSrS46koaV2Qv"
        );
        assert_eq!(super::encode("a"), "2g");
        assert_eq!(super::encode("bbb"), "a3gV");
        assert_eq!(super::encode("ccc"), "aPEr");
        assert_eq!(super::encode("simply a long string"), "2cFupjhnEsSn59qHXstmK2ffpLv2");
        assert_eq!(
            super::encode([
                0x00, 0xeb, 0x15, 0x23, 0x1d, 0xfc, 0xeb, 0x60, 0x92, 0x58, 0x86, 0xb6, 0x7d, 0x06, 0x52, 0x99, 0x92, 0x59, 0x15, 0xae,
                0xb1, 0x72, 0xc0, 0x66, 0x47,
            ]),
            "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"
        );
        assert_eq!(super::encode([0x51, 0x6b, 0x6f, 0xcd, 0x0f]), "ABnLTmg");
        assert_eq!(
            super::encode([0xbf, 0x4f, 0x89, 0x00, 0x1e, 0x67, 0x02, 0x74, 0xdd]),
            "3SEo3LWLoPntC"
        );
        assert_eq!(super::encode([0x57, 0x2e, 0x47, 0x94]), "3EFU7m");
        assert_eq!(
            super::encode([0xec, 0xac, 0x89, 0xca, 0xd9, 0x39, 0x23, 0xc0, 0x23, 0x21]),
            "EJDM8drfXA6uyA"
        );
        assert_eq!(super::encode([0x10, 0xc8, 0x51, 0x1e]), "Rt5zm");
        assert_eq!(super::encode([0u8; 10]), "1111111111");
    }

    #[test]
    fn max_encoded_len() {
        for len in 0..512 {
            let input = vec![0xffu8; len];
            assert!(super::encode(&input).len() <= super::max_encoded_len(len));
        }
    }
}
