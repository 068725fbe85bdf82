use super::constants::TABLES;
use super::schedule::RoundKeyWords;
use super::state::{State, add_round_key, load, store};
use crate::gf::{Gf2n, Matrix, Vector};

/// MixColumns coefficients.
/// [ d0 ]      [ 2  3  1  1 ]  [ b0 ]
/// | d1 |  =   | 1  2  3  1 |  | b1 |
/// | d2 |      | 1  1  2  3 |  | b2 |
/// [ d3 ]      [ 3  1  1  2 ]  [ b3 ]
pub(crate) const MIX_COLUMNS: Matrix<4, 4> =
    Matrix::from_rows([[2, 3, 1, 1], [1, 2, 3, 1], [1, 1, 2, 3], [3, 1, 1, 2]]);

/// Core AES encryption function. Encrypts a 16 byte block using the provided round keys.
pub fn encrypt_block(plaintext: &[u8; 16], round_keys: &RoundKeyWords) -> [u8; 16] {
    let nr = round_keys.nr();
    let mut state = load(plaintext);

    add_round_key(&mut state, round_keys.round_key(0));

    for round in 1..=nr {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        // last round skips mixcolumns step
        if round != nr {
            mix_columns(&mut state);
        }
        add_round_key(&mut state, round_keys.round_key(round));
    }

    store(&state)
}

/// SubBytes step. Each byte is substituted using the SBOX.
#[inline(always)]
pub(crate) fn sub_bytes(state: &mut State) {
    for word in state.iter_mut() {
        for byte in word.iter_mut() {
            *byte = TABLES.sbox[*byte as usize];
        }
    }
}

/// ShiftRows step. Row `y` (byte `y` of every word) is rotated left by `y` words.
#[inline(always)]
pub(crate) fn shift_rows(state: &mut State) {
    let s = *state;
    for y in 0..4 {
        for x in 0..4 {
            state[x][y] = s[(x + y) % 4][y];
        }
    }
}

/// MixColumns step. Each word is multiplied by [MIX_COLUMNS] over GF(2^8).
#[inline(always)]
pub(crate) fn mix_columns(state: &mut State) {
    for word in state.iter_mut() {
        *word = MIX_COLUMNS
            .multiply(&Gf2n::AES, &Vector::from_column(*word))
            .into_column();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::key::Key;

    #[test]
    fn test_sub_bytes() {
        let mut state = load(&[0x00, 0x01, 0x53, 0xff, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        sub_bytes(&mut state);
        assert_eq!(state[0], [0x63, 0x7c, 0xed, 0x16]);
        assert_eq!(state[1], [0x63; 4]);
    }

    #[test]
    fn test_shift_rows() {
        let mut state = load(&std::array::from_fn(|i| i as u8));
        shift_rows(&mut state);
        assert_eq!(
            store(&state),
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11],
            "row y must be rotated left by y"
        );
    }

    #[test]
    fn test_mix_columns() {
        // test cases from https://en.wikipedia.org/wiki/Rijndael_MixColumns
        let mut test1: State = [
            [0x63, 0x47, 0xa2, 0xf0],
            [0xf2, 0x0a, 0x22, 0x5c],
            [0x01, 0x01, 0x01, 0x01],
            [0xc6, 0xc6, 0xc6, 0xc6],
        ];

        let mut test2: State = [
            [0x01, 0x01, 0x01, 0x01],
            [0xc6, 0xc6, 0xc6, 0xc6],
            [0xd4, 0xd4, 0xd4, 0xd5],
            [0x2d, 0x26, 0x31, 0x4c],
        ];

        mix_columns(&mut test1);
        mix_columns(&mut test2);

        assert_eq!(
            test1,
            [
                [0x5d, 0xe0, 0x70, 0xbb],
                [0x9f, 0xdc, 0x58, 0x9d],
                [0x01, 0x01, 0x01, 0x01],
                [0xc6, 0xc6, 0xc6, 0xc6],
            ],
            "mix columns test case 1 does not match"
        );

        assert_eq!(
            test2,
            [
                [0x01, 0x01, 0x01, 0x01],
                [0xc6, 0xc6, 0xc6, 0xc6],
                [0xd5, 0xd5, 0xd7, 0xd6],
                [0x4d, 0x7e, 0xbd, 0xf8],
            ],
            "mix columns test case 2 does not match"
        );
    }

    #[test]
    fn test_encrypt_block_fips_197_appendix_c() -> Result<()> {
        // FIPS-197 Appendix C.1, C.2, C.3
        let plaintext: [u8; 16] = [
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, //
            0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, //
        ];
        let key: Vec<u8> = (0u8..32).collect();

        let cases: [(usize, [u8; 16]); 3] = [
            (
                16,
                [
                    0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, //
                    0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5, 0x5a, //
                ],
            ),
            (
                24,
                [
                    0xdd, 0xa9, 0x7c, 0xa4, 0x86, 0x4c, 0xdf, 0xe0, //
                    0x6e, 0xaf, 0x70, 0xa0, 0xec, 0x0d, 0x71, 0x91, //
                ],
            ),
            (
                32,
                [
                    0x8e, 0xa2, 0xb7, 0xca, 0x51, 0x67, 0x45, 0xbf, //
                    0xea, 0xfc, 0x49, 0x90, 0x4b, 0x49, 0x60, 0x89, //
                ],
            ),
        ];

        for (len, expected) in cases {
            let keys = RoundKeyWords::expand(&Key::try_from_slice(&key[..len])?);
            assert_eq!(
                encrypt_block(&plaintext, &keys),
                expected,
                "incorrect AES-{} encryption of block",
                len * 8
            );
        }
        Ok(())
    }

    #[test]
    fn test_encrypt_block_zero_key() -> Result<()> {
        let keys = RoundKeyWords::expand(&Key::try_from_slice(&[0u8; 16])?);
        let expected: [u8; 16] = [
            0x66, 0xe9, 0x4b, 0xd4, 0xef, 0x8a, 0x2c, 0x3b, //
            0x88, 0x4c, 0xfa, 0x59, 0xca, 0x34, 0x2b, 0x2e, //
        ];
        assert_eq!(encrypt_block(&[0u8; 16], &keys), expected);
        Ok(())
    }
}
