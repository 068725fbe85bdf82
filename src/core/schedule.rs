use super::constants::TABLES;
use super::util::{Word, xor_words};
use crate::key::Key;

/// Output of the AES key schedule: `4 * (Nr + 1)` words, four per round key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundKeyWords {
    words: Vec<Word>,
    nr: usize,
}

impl RoundKeyWords {
    /// AES key schedule.
    pub fn expand(key: &Key) -> Self {
        let key = key.as_bytes();

        // FIPS-197 names: nk key words, nr rounds, nw = 4 * (nr + 1) words in w
        let nk = key.len() / 4;
        let nr = nk + 6;
        let nw = (nr + 1) * 4;

        let mut w: Vec<Word> = vec![[0u8; 4]; nw];

        // first nk words of w are filled with the initial key
        for (word, chunk) in w.iter_mut().zip(key.chunks_exact(4)) {
            word.copy_from_slice(chunk);
        }

        for i in nk..nw {
            let mut temp = w[i - 1];
            if i % nk == 0 {
                temp = sub_word(rot_word(temp));
                temp[0] ^= TABLES.rcon[i / nk];
            } else if nk == 8 && i % nk == 4 {
                // additional substitution for AES-256 only
                temp = sub_word(temp);
            }
            w[i] = xor_words(&w[i - nk], &temp);
        }

        Self { words: w, nr }
    }

    /// Number of rounds these words were expanded for.
    pub fn nr(&self) -> usize {
        self.nr
    }

    /// The four words of round key `round`, `0..=Nr`.
    #[inline(always)]
    pub fn round_key(&self, round: usize) -> &[Word] {
        &self.words[4 * round..4 * round + 4]
    }

    #[cfg(test)]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

/// Cyclic left rotation by one byte.
#[inline(always)]
pub(crate) fn rot_word(w: Word) -> Word {
    [w[1], w[2], w[3], w[0]]
}

#[inline(always)]
pub(crate) fn sub_word(w: Word) -> Word {
    w.map(|b| TABLES.sbox[b as usize])
}
