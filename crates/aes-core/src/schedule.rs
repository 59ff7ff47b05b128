//! FIPS-197 key expansion over 32-bit round words.

use crate::sbox::{sbox, RCON};

/// Rotates the word's bytes left: `(a, b, c, d)` becomes `(b, c, d, a)`.
#[inline]
fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// Applies the S-box to each byte of the word.
#[inline]
fn sub_word(word: u32) -> u32 {
    let b0 = sbox((word >> 24) as u8) as u32;
    let b1 = sbox((word >> 16) as u8) as u32;
    let b2 = sbox((word >> 8) as u8) as u32;
    let b3 = sbox(word as u8) as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

/// Expands `key` into the round-word schedule `w`.
///
/// Key bytes are packed big-endian, four per word; the first `Nk` words are
/// the raw key. `key.len()` must be a multiple of four with at least four
/// words, and `w.len()` the full `Nb * (Nr + 1)` schedule length for that
/// key size.
pub fn expand_words(key: &[u8], w: &mut [u32]) {
    let nk = key.len() / 4;
    debug_assert!(nk >= 4 && key.len() % 4 == 0);
    debug_assert!(w.len() > nk);

    for (i, chunk) in key.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }

    for i in nk..w.len() {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ RCON[i / nk];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }
}
