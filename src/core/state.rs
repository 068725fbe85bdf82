use super::util::{Word, xor_words};

/// AES state. `state[x][y]` holds byte `4 * x + y` of the block, so each `state[x]` is one
/// word (an AES "column") and `y` indexes the row within it.
pub type State = [Word; 4];

#[inline(always)]
pub(crate) fn load(block: &[u8; 16]) -> State {
    let mut state = [[0u8; 4]; 4];
    for (i, &b) in block.iter().enumerate() {
        state[i / 4][i % 4] = b;
    }
    state
}

#[inline(always)]
pub(crate) fn store(state: &State) -> [u8; 16] {
    let mut block = [0u8; 16];
    for (i, b) in block.iter_mut().enumerate() {
        *b = state[i / 4][i % 4];
    }
    block
}

// used for both encryption and decryption
#[inline(always)]
pub(crate) fn add_round_key(state: &mut State, round_key: &[Word]) {
    for (word, key_word) in state.iter_mut().zip(round_key) {
        *word = xor_words(word, key_word);
    }
}
