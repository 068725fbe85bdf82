//! Finite field and linear algebra primitives used to derive the AES tables and to mix columns.
//!
//! Elements of both supported fields fit in a byte: GF(2) uses only the low bit, GF(2^n) for
//! n <= 8 uses the low n bits.

mod field;
mod matrix;

pub use field::{AES_MODULUS, Field, Gf2, Gf2n};
pub use matrix::{Matrix, Vector};
