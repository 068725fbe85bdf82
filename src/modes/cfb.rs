use std::iter;

use super::util::{Block, map_blocks, xor_blocks};
use super::{BlockCipher, ModeOfOperation};

/// Cipher feedback with 128-bit segments.
///
/// `C[i] = P[i] ^ E(C[i-1])`, with `C[-1] = IV`. Only the forward cipher is used in either
/// direction. Decryption knows every `C[i-1]` up front, so its block encryptions run in
/// parallel on large inputs.
#[derive(Copy, Clone, Debug)]
pub(crate) struct CfbMode {
    iv: Block,
}

impl CfbMode {
    pub(crate) fn new(iv: Block) -> Self {
        Self { iv }
    }
}

impl ModeOfOperation for CfbMode {
    fn encrypt<B: BlockCipher>(&self, cipher: &B, blocks: &[Block]) -> Vec<Block> {
        let mut feedback = self.iv;
        blocks
            .iter()
            .map(|pt| {
                feedback = xor_blocks(pt, &cipher.encrypt_block(&feedback));
                feedback
            })
            .collect()
    }

    fn decrypt<B: BlockCipher>(&self, cipher: &B, blocks: &[Block]) -> Vec<Block> {
        let feedback: Vec<Block> = iter::once(self.iv)
            .chain(blocks.iter().copied())
            .take(blocks.len())
            .collect();
        let keystream = map_blocks(&feedback, |f| cipher.encrypt_block(f));

        blocks
            .iter()
            .zip(&keystream)
            .map(|(ct, ks)| xor_blocks(ct, ks))
            .collect()
    }
}
