use std::iter;

use super::util::{Block, map_blocks, xor_blocks};
use super::{BlockCipher, ModeOfOperation};

/// Cipher block chaining.
///
/// Encryption: `C[i] = E(P[i] ^ C[i-1])`, with `C[-1] = IV`. Strictly sequential.
///
/// Decryption: `P[i] = D(C[i]) ^ C[i-1]`. Every `D(C[i])` is independent, so the block
/// decryptions run in parallel on large inputs and are combined in order afterwards.
#[derive(Copy, Clone, Debug)]
pub(crate) struct CbcMode {
    iv: Block,
}

impl CbcMode {
    pub(crate) fn new(iv: Block) -> Self {
        Self { iv }
    }
}

impl ModeOfOperation for CbcMode {
    fn encrypt<B: BlockCipher>(&self, cipher: &B, blocks: &[Block]) -> Vec<Block> {
        let mut prev = self.iv;
        blocks
            .iter()
            .map(|pt| {
                prev = cipher.encrypt_block(&xor_blocks(pt, &prev));
                prev
            })
            .collect()
    }

    fn decrypt<B: BlockCipher>(&self, cipher: &B, blocks: &[Block]) -> Vec<Block> {
        let decrypted = map_blocks(blocks, |ct| cipher.decrypt_block(ct));
        let previous = iter::once(&self.iv).chain(blocks);

        decrypted
            .iter()
            .zip(previous)
            .map(|(d, prev)| xor_blocks(d, prev))
            .collect()
    }
}
