use super::constants::TABLES;
use super::schedule::RoundKeyWords;
use super::state::{State, add_round_key, load, store};
use crate::gf::{Gf2n, Matrix, Vector};

/// Inverse MixColumns coefficients.
/// [ b0 ]      [ 14  11  13  09 ]  [ d0 ]
/// | b1 |  =   | 09  14  11  13 |  | d1 |
/// | b2 |      | 13  09  14  11 |  | d2 |
/// [ b3 ]      [ 11  13  09  14 ]  [ d3 ]
pub(crate) const MIX_COLUMNS_INV: Matrix<4, 4> = Matrix::from_rows([
    [14, 11, 13, 9],
    [9, 14, 11, 13],
    [13, 9, 14, 11],
    [11, 13, 9, 14],
]);

/// Core AES decryption function. Decrypts a 16 byte block using the provided round keys.
pub fn decrypt_block(ciphertext: &[u8; 16], round_keys: &RoundKeyWords) -> [u8; 16] {
    let nr = round_keys.nr();
    let mut state = load(ciphertext);

    add_round_key(&mut state, round_keys.round_key(nr));

    for round in (0..nr).rev() {
        shift_rows_inv(&mut state);
        sub_bytes_inv(&mut state);
        add_round_key(&mut state, round_keys.round_key(round));
        if round != 0 {
            mix_columns_inv(&mut state);
        }
    }

    store(&state)
}

/// Inverse SubBytes step. Each byte is substituted using the inverse SBOX.
#[inline(always)]
pub(crate) fn sub_bytes_inv(state: &mut State) {
    for word in state.iter_mut() {
        for byte in word.iter_mut() {
            *byte = TABLES.sbox_inv[*byte as usize];
        }
    }
}

/// Inverse ShiftRows step.
/// The 0th row does not change.
/// The first row shifts right by one position.
/// The second row shifts right by two positions.
/// The third row shifts right by three positions.
#[inline(always)]
pub(crate) fn shift_rows_inv(state: &mut State) {
    let s = *state;
    for y in 0..4 {
        for x in 0..4 {
            state[x][y] = s[(x + (4 - y)) % 4][y];
        }
    }
}

/// Inverse MixColumns step. Each word is multiplied by [MIX_COLUMNS_INV] over GF(2^8).
#[inline(always)]
pub(crate) fn mix_columns_inv(state: &mut State) {
    for word in state.iter_mut() {
        *word = MIX_COLUMNS_INV
            .multiply(&Gf2n::AES, &Vector::from_column(*word))
            .into_column();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::encryption::{self, MIX_COLUMNS};
    use crate::error::Result;
    use crate::key::Key;

    fn sample_state() -> State {
        [
            // word 0
            [0x00, 0x01, 0x02, 0x03],
            // word 1
            [0x04, 0x05, 0x06, 0x07],
            // word 2
            [0x08, 0x09, 0x0a, 0x0b],
            // word 3
            [0x0c, 0x0d, 0x0e, 0x0f],
        ]
    }

    #[test]
    fn test_shift_rows() {
        let mut actual = sample_state();
        encryption::shift_rows(&mut actual);
        shift_rows_inv(&mut actual);
        assert_eq!(
            actual,
            sample_state(),
            "shift rows inverse does not exactly reverse shift rows"
        );
    }

    #[test]
    fn test_shift_rows_inv_layout() {
        let mut state = load(&std::array::from_fn(|i| i as u8));
        shift_rows_inv(&mut state);
        assert_eq!(
            store(&state),
            [0, 13, 10, 7, 4, 1, 14, 11, 8, 5, 2, 15, 12, 9, 6, 3],
            "row y must be rotated right by y"
        );
    }

    #[test]
    fn test_sub_bytes() {
        let mut actual = sample_state();
        encryption::sub_bytes(&mut actual);
        sub_bytes_inv(&mut actual);
        assert_eq!(
            actual,
            sample_state(),
            "sub bytes inverse does not exactly reverse sub bytes"
        );
    }

    #[test]
    fn test_mix_columns() {
        let mut actual = sample_state();
        encryption::mix_columns(&mut actual);
        mix_columns_inv(&mut actual);
        assert_eq!(
            actual,
            sample_state(),
            "mix columns inverse does not exactly reverse mix columns"
        );
    }

    #[test]
    fn mix_matrices_are_inverse() {
        let identity = Matrix::<4, 4>::from_fn(|r, c| (r == c) as u8);
        assert_eq!(MIX_COLUMNS.multiply(&Gf2n::AES, &MIX_COLUMNS_INV), identity);
        assert_eq!(MIX_COLUMNS_INV.multiply(&Gf2n::AES, &MIX_COLUMNS), identity);
    }

    #[test]
    fn test_decrypt_block() -> Result<()> {
        let key: [u8; 32] = [
            0x60, 0x3D, 0xEB, 0x10, 0x15, 0xCA, 0x71, 0xBE, //
            0x2B, 0x73, 0xAE, 0xF0, 0x85, 0x7D, 0x77, 0x81, //
            0x1F, 0x35, 0x2C, 0x07, 0x3B, 0x61, 0x08, 0xD7, //
            0x2D, 0x98, 0x10, 0xA3, 0x09, 0x14, 0xDF, 0xF4, //
        ];

        let plaintext: [u8; 16] = [
            0x6B, 0xC1, 0xBE, 0xE2, 0x2E, 0x40, 0x9F, 0x96, //
            0xE9, 0x3D, 0x7E, 0x11, 0x73, 0x93, 0x17, 0x2A, //
        ];

        for len in [16, 24, 32] {
            let keys = RoundKeyWords::expand(&Key::try_from_slice(&key[..len])?);
            let encrypted = encryption::encrypt_block(&plaintext, &keys);
            let decrypted = decrypt_block(&encrypted, &keys);

            assert_eq!(
                decrypted, plaintext,
                "decrypt block does not exactly reverse encrypt block"
            );
        }

        Ok(())
    }

    #[test]
    fn test_decrypt_block_fips_197_appendix_c1() -> Result<()> {
        let key: Vec<u8> = (0u8..16).collect();
        let ciphertext: [u8; 16] = [
            0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, //
            0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5, 0x5a, //
        ];
        let keys = RoundKeyWords::expand(&Key::try_from_slice(&key)?);
        assert_eq!(
            decrypt_block(&ciphertext, &keys),
            [
                0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, //
                0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, //
            ]
        );
        Ok(())
    }
}
