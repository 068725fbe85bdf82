use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::Result;

/// Fills an `N`-byte array from the OS RNG.
pub(crate) fn random_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

/// Generates a random 16-byte initialisation vector for [CBC](crate::Mode::Cbc),
/// [CFB](crate::Mode::Cfb), or [OFB](crate::Mode::Ofb). Returns Error if OsRng fails.
pub fn random_iv() -> Result<[u8; 16]> {
    random_bytes()
}
