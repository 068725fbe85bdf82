use rayon::prelude::*;

/// One 16-byte AES block.
pub(crate) type Block = [u8; 16];

/// Inputs longer than this many bytes have their independent block transforms spread across
/// the rayon thread pool.
pub const PARALLEL_THRESHOLD: usize = 4 * 1024;

#[inline(always)]
pub(crate) fn xor_blocks(a: &Block, b: &Block) -> Block {
    let mut out = *a;
    for (o, k) in out.iter_mut().zip(b) {
        *o ^= k;
    }
    out
}

/// Splits input into 16-byte blocks, zero-filling the tail of the last one. Empty input
/// yields no blocks.
pub(crate) fn blockify_zero_pad(input: &[u8]) -> Vec<Block> {
    input
        .chunks(16)
        .map(|chunk| {
            let mut block = [0u8; 16];
            block[..chunk.len()].copy_from_slice(chunk);
            block
        })
        .collect()
}

pub(crate) fn flatten(blocks: Vec<Block>) -> Vec<u8> {
    blocks.into_iter().flatten().collect()
}

/// Applies `f` to every block independently, in parallel once the input is large enough to
/// be worth it. Output order always matches input order.
pub(crate) fn map_blocks<F>(blocks: &[Block], f: F) -> Vec<Block>
where
    F: Fn(&Block) -> Block + Sync + Send,
{
    if blocks.len() * 16 > PARALLEL_THRESHOLD {
        map_blocks_parallel(blocks, f)
    } else {
        map_blocks_serial(blocks, f)
    }
}

pub(crate) fn map_blocks_serial<F>(blocks: &[Block], f: F) -> Vec<Block>
where
    F: Fn(&Block) -> Block,
{
    blocks.iter().map(f).collect()
}

pub(crate) fn map_blocks_parallel<F>(blocks: &[Block], f: F) -> Vec<Block>
where
    F: Fn(&Block) -> Block + Sync + Send,
{
    blocks.par_iter().map(f).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pads_partial_block() {
        let blocks = blockify_zero_pad(&[1, 2, 3]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0][..3], [1, 2, 3]);
        assert!(blocks[0][3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn block_counts() {
        assert!(blockify_zero_pad(&[]).is_empty());
        assert_eq!(blockify_zero_pad(&[0u8; 16]).len(), 1);
        assert_eq!(blockify_zero_pad(&[0u8; 17]).len(), 2);
        assert_eq!(flatten(blockify_zero_pad(&[7u8; 33])).len(), 48);
    }

    #[test]
    fn serial_and_parallel_maps_agree() {
        let blocks: Vec<Block> = (0..1000u32)
            .map(|i| std::array::from_fn(|j| (i as usize * 31 + j) as u8))
            .collect();
        let f = |b: &Block| xor_blocks(b, &[0x5a; 16]);
        assert_eq!(map_blocks_serial(&blocks, f), map_blocks_parallel(&blocks, f));
    }
}
