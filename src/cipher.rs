use tracing::trace;

use crate::core::{RoundKeyWords, decrypt_block, encrypt_block};
use crate::error::{Error, Result};
use crate::key::Key;
use crate::modes::{
    Block, Chaining, EcbMode, Mode, ModeOfOperation, blockify_zero_pad, flatten,
};

/// Provides encryption and decryption in modes [ECB](Mode::Ecb), [CBC](Mode::Cbc),
/// [CFB](Mode::Cfb), and [OFB](Mode::Ofb).
///
/// The mode is chosen at construction and never changes. Keys and IVs are supplied per call
/// as raw bytes; round keys are derived for the duration of that call only.
///
/// Inputs are processed in 16-byte blocks. A trailing partial block is filled with zeros
/// before it is transformed, in both directions, and no length is recorded. Decrypting
/// therefore returns the zero-padded plaintext, and output is always a multiple of 16 bytes.
///
/// ## Examples
/// ```
/// # fn main() -> aesgf::Result<()> {
/// use aesgf::{Cipher, Mode, random_iv};
///
/// let key = [0x2bu8; 32];
/// let iv = random_iv()?;
/// let cipher = Cipher::new(Mode::Cbc);
///
/// let ciphertext = cipher.encrypt(b"Hello, World!", &key, &iv)?;
/// assert_eq!(ciphertext.len(), 16);
///
/// // padding is not removed
/// let plaintext = cipher.decrypt(&ciphertext, &key, &iv)?;
/// assert_eq!(&plaintext[..13], b"Hello, World!");
/// assert_eq!(&plaintext[13..], &[0, 0, 0]);
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cipher {
    mode: Mode,
}

impl Cipher {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Encrypts `data` in the configured mode.
    ///
    /// Returns [InvalidKeyLength](Error::InvalidKeyLength) unless `key` is 16, 24, or 32
    /// bytes, and [InvalidIvLength](Error::InvalidIvLength) unless `iv` is 16 bytes. The IV is
    /// ignored in ECB mode.
    pub fn encrypt(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let round_keys = Self::round_keys(key)?;
        let chaining = Chaining::new(self.mode, iv)?;
        trace!(mode = %self.mode, key_bits = key.len() * 8, len = data.len(), "encrypt");

        let blocks = blockify_zero_pad(data);
        Ok(flatten(chaining.encrypt(&round_keys, &blocks)))
    }

    /// Decrypts `data` in the configured mode. Validation matches [encrypt](Cipher::encrypt).
    pub fn decrypt(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let round_keys = Self::round_keys(key)?;
        let chaining = Chaining::new(self.mode, iv)?;
        trace!(mode = %self.mode, key_bits = key.len() * 8, len = data.len(), "decrypt");

        let blocks = blockify_zero_pad(data);
        Ok(flatten(chaining.decrypt(&round_keys, &blocks)))
    }

    /// **Electronic codebook** encryption, regardless of the configured mode.
    ///
    /// Encrypts each 16-byte block entirely independently. **Identical plaintext blocks
    /// produce identical ciphertext blocks.**
    pub fn encrypt_ecb(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let round_keys = Self::round_keys(key)?;
        trace!(key_bits = key.len() * 8, len = data.len(), "encrypt ecb");
        Ok(flatten(EcbMode.encrypt(&round_keys, &blockify_zero_pad(data))))
    }

    /// **Electronic codebook** decryption, regardless of the configured mode.
    pub fn decrypt_ecb(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let round_keys = Self::round_keys(key)?;
        trace!(key_bits = key.len() * 8, len = data.len(), "decrypt ecb");
        Ok(flatten(EcbMode.decrypt(&round_keys, &blockify_zero_pad(data))))
    }

    /// Encrypts the first 16 bytes of `data` as a single block. Returns
    /// [BlockTooShort](Error::BlockTooShort) if fewer than 16 bytes are given.
    pub fn encrypt_block(&self, data: &[u8], key: &[u8]) -> Result<[u8; 16]> {
        let round_keys = Self::round_keys(key)?;
        Ok(encrypt_block(&first_block(data)?, &round_keys))
    }

    /// Decrypts the first 16 bytes of `data` as a single block. Returns
    /// [BlockTooShort](Error::BlockTooShort) if fewer than 16 bytes are given.
    pub fn decrypt_block(&self, data: &[u8], key: &[u8]) -> Result<[u8; 16]> {
        let round_keys = Self::round_keys(key)?;
        Ok(decrypt_block(&first_block(data)?, &round_keys))
    }

    fn round_keys(key: &[u8]) -> Result<RoundKeyWords> {
        Ok(RoundKeyWords::expand(&Key::try_from_slice(key)?))
    }
}

fn first_block(data: &[u8]) -> Result<Block> {
    data.get(..16)
        .and_then(|b| b.try_into().ok())
        .ok_or(Error::BlockTooShort { len: data.len() })
}
