use super::util::{Block, map_blocks};
use super::{BlockCipher, ModeOfOperation};

/// Electronic codebook. Blocks are independent, so both directions run in parallel on large
/// inputs.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct EcbMode;

impl ModeOfOperation for EcbMode {
    fn encrypt<B: BlockCipher>(&self, cipher: &B, blocks: &[Block]) -> Vec<Block> {
        map_blocks(blocks, |b| cipher.encrypt_block(b))
    }

    fn decrypt<B: BlockCipher>(&self, cipher: &B, blocks: &[Block]) -> Vec<Block> {
        map_blocks(blocks, |b| cipher.decrypt_block(b))
    }
}

#[cfg(test)]
mod test_ecb {
    use super::*;
    use crate::core::RoundKeyWords;
    use crate::error::Result;
    use crate::key::Key;
    use crate::modes::util::test_util::{KEY_128, KEY_192, KEY_256, PLAINTEXT, hex_to_bytes};
    use crate::modes::util::{blockify_zero_pad, flatten, map_blocks_parallel, map_blocks_serial};

    fn check(key: &[u8], expected_hex: &str) -> Result<()> {
        let keys = RoundKeyWords::expand(&Key::try_from_slice(key)?);
        let expected = hex_to_bytes(expected_hex);

        let encrypted = flatten(EcbMode.encrypt(&keys, &blockify_zero_pad(&PLAINTEXT)));
        assert_eq!(expected, encrypted, "encrypted result does not match expected");

        let decrypted = flatten(EcbMode.decrypt(&keys, &blockify_zero_pad(&expected)));
        assert_eq!(PLAINTEXT.to_vec(), decrypted, "decrypted result does not match expected");
        Ok(())
    }

    #[test]
    fn aes_ecb_128() -> Result<()> {
        check(
            &KEY_128,
            "3ad77bb40d7a3660a89ecaf32466ef97
             f5d3d58503b9699de785895a96fdbaaf
             43b1cd7f598ece23881b00e3ed030688
             7b0c785e27e8ad3f8223207104725dd4",
        )
    }

    #[test]
    fn aes_ecb_192() -> Result<()> {
        check(
            &KEY_192,
            "bd334f1d6e45f25ff712a214571fa5cc
             974104846d0ad3ad7734ecb3ecee4eef
             ef7afd2270e2e60adce0ba2face6444e
             9a4b41ba738d6c72fb16691603c18e0e",
        )
    }

    #[test]
    fn aes_ecb_256() -> Result<()> {
        check(
            &KEY_256,
            "f3eed1bdb5d2a03c064b5a7e3db181f8
             591ccb10d410ed26dc5ba74a31362870
             b6ed21b99ca6f4f9f153e7b1beafed1d
             23304b7a39f9f3ff067d8d8f9e24ecc7",
        )
    }

    #[test]
    fn identical_blocks_encrypt_identically() -> Result<()> {
        let keys = RoundKeyWords::expand(&Key::try_from_slice(&KEY_128)?);
        let blocks = vec![[0x42u8; 16]; 5];
        let out = EcbMode.encrypt(&keys, &blocks);
        assert!(out.iter().all(|b| *b == out[0]));
        Ok(())
    }

    #[test]
    fn parallel_matches_serial() -> Result<()> {
        let keys = RoundKeyWords::expand(&Key::try_from_slice(&KEY_256)?);
        let data: Vec<u8> = (0..10_000u32).map(|i| (i * 7) as u8).collect();
        let blocks = blockify_zero_pad(&data);

        let serial = map_blocks_serial(&blocks, |b| keys.encrypt_block(b));
        let parallel = map_blocks_parallel(&blocks, |b| keys.encrypt_block(b));
        assert_eq!(serial, parallel);

        // large enough to take the parallel path
        assert_eq!(EcbMode.encrypt(&keys, &blocks), serial);
        Ok(())
    }
}
