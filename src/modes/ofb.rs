use super::util::{Block, xor_blocks};
use super::{BlockCipher, ModeOfOperation};

/// Output feedback.
///
/// The keystream `K[i] = E(K[i-1])`, `K[-1] = IV`, never depends on the data, so encryption
/// and decryption are the same XOR. Each keystream block depends on the previous one, which
/// keeps generation sequential.
#[derive(Copy, Clone, Debug)]
pub(crate) struct OfbMode {
    iv: Block,
}

impl OfbMode {
    pub(crate) fn new(iv: Block) -> Self {
        Self { iv }
    }

    fn apply<B: BlockCipher>(&self, cipher: &B, blocks: &[Block]) -> Vec<Block> {
        let mut keystream = self.iv;
        blocks
            .iter()
            .map(|block| {
                keystream = cipher.encrypt_block(&keystream);
                xor_blocks(block, &keystream)
            })
            .collect()
    }
}

impl ModeOfOperation for OfbMode {
    fn encrypt<B: BlockCipher>(&self, cipher: &B, blocks: &[Block]) -> Vec<Block> {
        self.apply(cipher, blocks)
    }

    fn decrypt<B: BlockCipher>(&self, cipher: &B, blocks: &[Block]) -> Vec<Block> {
        self.apply(cipher, blocks)
    }
}
