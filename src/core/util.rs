/// 4-byte AES word.
pub type Word = [u8; 4];

#[inline(always)]
pub(crate) fn xor_words(a: &Word, b: &Word) -> Word {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}
