//! Single-block AES: the key schedule ([RoundKeyWords]) and the [encrypt_block] and
//! [decrypt_block] round functions built on it.

pub(crate) mod constants;
mod decryption;
mod encryption;
mod schedule;
mod state;
mod util;

pub use decryption::decrypt_block;
pub use encryption::encrypt_block;
pub use schedule::RoundKeyWords;
