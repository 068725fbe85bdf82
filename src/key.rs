//! Defines the [`Key`] struct, which holds a valid AES key of 128, 192, or 256 bits.
//! Keys can be randomly generated or constructed from an existing byte slice.

use crate::error::{Error, Result};
use crate::util::random_bytes;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// Contains a valid AES key. Can be instantiated with a random key, or built from a slice
/// of bytes that is 16, 24, or 32 bytes long.
///
/// [Cipher](crate::Cipher) accepts raw key bytes and validates them through this type on
/// every call, so building a `Key` up front is only needed to generate one.
///
/// ## Examples
/// ```
/// # fn main() -> aesgf::Result<()> {
/// use aesgf::Key;
///
/// let key_bytes: [u8; 32] = [0xBA, 0x32, 0x82, 0x9A, 0x43, 0x8A, 0x48, 0xED,
///                            0xC2, 0xEA, 0x10, 0x73, 0x26, 0xF8, 0xA9, 0x62,
///                            0xDE, 0x82, 0x06, 0xBA, 0x53, 0xC2, 0xC7, 0x55,
///                            0x2C, 0x72, 0xC5, 0x37, 0xBF, 0xD4, 0xDB, 0x5E];
///
/// let k128 = Key::try_from_slice(&key_bytes[..16])?;
/// let k256 = Key::try_from_slice(&key_bytes)?;
/// assert_eq!((k128.nk(), k128.nr()), (4, 10));
/// assert_eq!((k256.nk(), k256.nr()), (8, 14));
/// assert_eq!(k256.as_bytes(), &key_bytes);
///
/// // anything other than 16, 24, or 32 bytes is rejected
/// assert!(Key::try_from_slice(&key_bytes[..20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn rand_key_128() -> Result<Self> {
        Ok(Self {
            bytes: KeyBytes::K128(random_bytes()?),
        })
    }

    /// Generate a random 192-bit key. Returns Error if OsRng fails.
    pub fn rand_key_192() -> Result<Self> {
        Ok(Self {
            bytes: KeyBytes::K192(random_bytes()?),
        })
    }

    /// Generate a random 256-bit key. Returns Error if OsRng fails.
    pub fn rand_key_256() -> Result<Self> {
        Ok(Self {
            bytes: KeyBytes::K256(random_bytes()?),
        })
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let invalid = || Error::InvalidKeyLength { len: bytes.len() };
        let bytes = match bytes.len() {
            16 => KeyBytes::K128(bytes.try_into().map_err(|_| invalid())?),
            24 => KeyBytes::K192(bytes.try_into().map_err(|_| invalid())?),
            32 => KeyBytes::K256(bytes.try_into().map_err(|_| invalid())?),
            _ => return Err(invalid()),
        };
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as a slice of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }

    /// Number of 32-bit words in the key (`Nk` in FIPS-197): 4, 6, or 8.
    pub fn nk(&self) -> usize {
        self.as_bytes().len() / 4
    }

    /// Number of rounds (`Nr` in FIPS-197): 10, 12, or 14.
    pub fn nr(&self) -> usize {
        self.nk() + 6
    }
}
