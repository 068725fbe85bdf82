//! SBOX, inverse SBOX, and round constants, derived from GF(2^8) arithmetic on first use.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::gf::{Gf2, Gf2n, Matrix, Vector};

/// Additive constant of the forward affine transform.
const SBOX_AFFINE_CONST: u8 = 0x63;
/// Additive constant of the inverse affine transform.
const SBOX_INV_AFFINE_CONST: u8 = 0x05;
/// `Rcon[0]` is never used by the key schedule; 0x8d is `2^-1`, continuing the power sequence backwards.
const RCON_ZERO: u8 = 0x8d;

/// Lookup tables shared by every cipher call. Built once per process.
pub(crate) struct Tables {
    pub sbox: [u8; 256],
    pub sbox_inv: [u8; 256],
    pub rcon: [u8; 256],
}

pub(crate) static TABLES: Lazy<Tables> = Lazy::new(Tables::build);

/// Forward affine matrix. Row `i` is 1 everywhere except columns `i+1`, `i+2`, `i+3` (mod 8).
/// [
///     1 0 0 0 1 1 1 1
///     1 1 0 0 0 1 1 1
///     1 1 1 0 0 0 1 1
///     1 1 1 1 0 0 0 1
///     1 1 1 1 1 0 0 0
///     0 1 1 1 1 1 0 0
///     0 0 1 1 1 1 1 0
///     0 0 0 1 1 1 1 1
/// ]
fn affine_matrix() -> Matrix<8, 8> {
    Matrix::from_fn(|row, col| {
        let skipped = [(row + 1) % 8, (row + 2) % 8, (row + 3) % 8];
        !skipped.contains(&col) as u8
    })
}

/// Inverse affine matrix. Row `i` has ones in columns `i+7`, `i+10`, `i+13` (mod 8).
/// [
///     0 0 1 0 0 1 0 1
///     1 0 0 1 0 0 1 0
///     0 1 0 0 1 0 0 1
///     1 0 1 0 0 1 0 0
///     0 1 0 1 0 0 1 0
///     0 0 1 0 1 0 0 1
///     1 0 0 1 0 1 0 0
///     0 1 0 0 1 0 1 0
/// ]
fn affine_matrix_inv() -> Matrix<8, 8> {
    Matrix::from_fn(|row, col| {
        let taps = [(row + 7) % 8, (row + 10) % 8, (row + 13) % 8];
        taps.contains(&col) as u8
    })
}

impl Tables {
    fn build() -> Self {
        let field = Gf2n::AES;
        let affine = affine_matrix();
        let affine_inv = affine_matrix_inv();
        let c = Vector::<8>::from_bits(SBOX_AFFINE_CONST);
        let c_inv = Vector::<8>::from_bits(SBOX_INV_AFFINE_CONST);

        let mut tables = Tables {
            sbox: [0u8; 256],
            sbox_inv: [0u8; 256],
            rcon: [0u8; 256],
        };

        for x in 0..=255u8 {
            // 0 has no inverse and is mapped to itself
            let inv = field.invert(x).unwrap_or(0);
            tables.sbox[x as usize] = affine
                .multiply(&Gf2, &Vector::from_bits(inv))
                .add(&Gf2, &c)
                .to_bits();

            let pre = affine_inv
                .multiply(&Gf2, &Vector::from_bits(x))
                .add(&Gf2, &c_inv)
                .to_bits();
            tables.sbox_inv[x as usize] = field.invert(pre).unwrap_or(0);

            tables.rcon[x as usize] = match x {
                0 => RCON_ZERO,
                _ => field.power(2, x as u32 - 1),
            };
        }

        debug!(modulus = field.modulus(), "derived AES substitution and round constant tables");
        tables
    }
}
