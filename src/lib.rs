//! AES block cipher built from its finite-field definition.
//!
//! The S-box, its inverse, the round constants, and the MixColumns step are all derived from
//! arithmetic in GF(2^8) and GF(2) rather than stored as literal tables. The [gf] module
//! exposes that arithmetic.
//!
//! ```
//! # fn main() -> aesgf::Result<()> {
//! use aesgf::{Cipher, Key, Mode, random_iv};
//!
//! let key = Key::rand_key_128()?;
//! let iv = random_iv()?;
//! let cipher = Cipher::new(Mode::Cfb);
//!
//! let ciphertext = cipher.encrypt(&[0x42; 32], key.as_bytes(), &iv)?;
//! assert_eq!(cipher.decrypt(&ciphertext, key.as_bytes(), &iv)?, [0x42; 32]);
//! # Ok(())
//! # }
//! ```

mod cipher;
mod core;
mod error;
pub mod gf;
mod key;
mod modes;
mod util;

pub use cipher::Cipher;
pub use error::{Error, Result};
pub use key::Key;
pub use modes::{Mode, PARALLEL_THRESHOLD};
pub use util::random_iv;
