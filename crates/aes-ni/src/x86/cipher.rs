//! Single-block round loops over AESENC/AESDEC.

use aes_core::Block;

use super::arch::*;

/// Encrypts one block with the forward schedule.
///
/// The state lives in a register for the whole computation, so the input is
/// read in full before anything is stored.
#[target_feature(enable = "aes")]
pub(crate) unsafe fn encrypt_block(w: &[__m128i], block: &Block) -> Block {
    let last = w.len() - 1;
    let mut state = _mm_loadu_si128(block.as_ptr().cast());

    state = _mm_xor_si128(state, w[0]);
    for &round_key in &w[1..last] {
        state = _mm_aesenc_si128(state, round_key);
    }
    state = _mm_aesenclast_si128(state, w[last]);

    let mut out = [0u8; 16];
    _mm_storeu_si128(out.as_mut_ptr().cast(), state);
    out
}

/// Decrypts one block with the InvMixColumns-transformed schedule.
#[target_feature(enable = "aes")]
pub(crate) unsafe fn decrypt_block(dw: &[__m128i], block: &Block) -> Block {
    let last = dw.len() - 1;
    let mut state = _mm_loadu_si128(block.as_ptr().cast());

    state = _mm_xor_si128(state, dw[0]);
    for &round_key in &dw[1..last] {
        state = _mm_aesdec_si128(state, round_key);
    }
    state = _mm_aesdeclast_si128(state, dw[last]);

    let mut out = [0u8; 16];
    _mm_storeu_si128(out.as_mut_ptr().cast(), state);
    out
}
