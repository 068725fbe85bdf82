//! Block cipher modes of operation.
//!
//! Every mode consumes zero-padded 16-byte blocks and produces the same number of blocks.
//! Modes are generic over [BlockCipher] so the chaining logic never depends on how a single
//! block is transformed.

mod cbc;
mod cfb;
mod ecb;
mod ofb;
mod util;

use std::fmt;

use crate::core::{RoundKeyWords, decrypt_block, encrypt_block};
use crate::error::{Error, Result};

pub(crate) use cbc::CbcMode;
pub(crate) use cfb::CfbMode;
pub(crate) use ecb::EcbMode;
pub(crate) use ofb::OfbMode;
pub use util::PARALLEL_THRESHOLD;
pub(crate) use util::{Block, blockify_zero_pad, flatten};

#[cfg(test)]
pub(crate) use util::test_util;

/// Mode of operation, fixed for the lifetime of a [Cipher](crate::Cipher).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Electronic codebook. Every block is encrypted independently. Ignores the IV.
    #[default]
    Ecb,
    /// Cipher block chaining.
    Cbc,
    /// Cipher feedback, full 128-bit segments.
    Cfb,
    /// Output feedback.
    Ofb,
}

impl Mode {
    /// Whether the mode consumes an initialisation vector.
    pub fn requires_iv(&self) -> bool {
        !matches!(self, Mode::Ecb)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
            Mode::Cfb => "CFB",
            Mode::Ofb => "OFB",
        })
    }
}

/// Single-block primitive the modes are built on.
pub(crate) trait BlockCipher: Sync {
    fn encrypt_block(&self, block: &Block) -> Block;
    fn decrypt_block(&self, block: &Block) -> Block;
}

impl BlockCipher for RoundKeyWords {
    #[inline(always)]
    fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, self)
    }

    #[inline(always)]
    fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, self)
    }
}

/// Whole-buffer transform over blocks.
pub(crate) trait ModeOfOperation {
    fn encrypt<B: BlockCipher>(&self, cipher: &B, blocks: &[Block]) -> Vec<Block>;
    fn decrypt<B: BlockCipher>(&self, cipher: &B, blocks: &[Block]) -> Vec<Block>;
}

/// A [Mode] bound to its initialisation vector.
pub(crate) enum Chaining {
    Ecb(EcbMode),
    Cbc(CbcMode),
    Cfb(CfbMode),
    Ofb(OfbMode),
}

impl Chaining {
    /// Validates `iv` for modes that need one. ECB never looks at it.
    pub(crate) fn new(mode: Mode, iv: &[u8]) -> Result<Self> {
        if !mode.requires_iv() {
            return Ok(Chaining::Ecb(EcbMode));
        }

        let iv: Block = iv
            .try_into()
            .map_err(|_| Error::InvalidIvLength { len: iv.len() })?;

        Ok(match mode {
            Mode::Ecb => Chaining::Ecb(EcbMode),
            Mode::Cbc => Chaining::Cbc(CbcMode::new(iv)),
            Mode::Cfb => Chaining::Cfb(CfbMode::new(iv)),
            Mode::Ofb => Chaining::Ofb(OfbMode::new(iv)),
        })
    }
}

impl ModeOfOperation for Chaining {
    fn encrypt<B: BlockCipher>(&self, cipher: &B, blocks: &[Block]) -> Vec<Block> {
        match self {
            Chaining::Ecb(m) => m.encrypt(cipher, blocks),
            Chaining::Cbc(m) => m.encrypt(cipher, blocks),
            Chaining::Cfb(m) => m.encrypt(cipher, blocks),
            Chaining::Ofb(m) => m.encrypt(cipher, blocks),
        }
    }

    fn decrypt<B: BlockCipher>(&self, cipher: &B, blocks: &[Block]) -> Vec<Block> {
        match self {
            Chaining::Ecb(m) => m.decrypt(cipher, blocks),
            Chaining::Cbc(m) => m.decrypt(cipher, blocks),
            Chaining::Cfb(m) => m.decrypt(cipher, blocks),
            Chaining::Ofb(m) => m.decrypt(cipher, blocks),
        }
    }
}
