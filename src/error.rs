use rand::rand_core;
use thiserror::Error;

/// AES Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to use an AES key with an input size that is not 128, 192, or 256 bits.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// Initialisation vector was not exactly one block long in a mode that requires one.
    #[error("invalid initialisation vector length: {len} bytes (expected 16)")]
    InvalidIvLength { len: usize },

    /// Single-block encryption or decryption was given less than a full block.
    #[error("cannot transform block of {len} bytes (expected at least 16)")]
    BlockTooShort { len: usize },

    /// OS RNG failed during random key or IV generation.
    #[error("OS RNG failed in random key or IV generation")]
    Rng(#[from] rand_core::OsError),
}
