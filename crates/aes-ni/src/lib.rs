//! Hardware-accelerated single-block AES for x86 and x86_64.
//!
//! The round function and key schedule are driven by the CPU's AES
//! instructions (AESENC/AESDEC, AESKEYGENASSIST, AESIMC). Expanded round
//! keys live in 128-bit lanes holding, byte for byte, the values XORed into
//! the state, so keys are loaded with unaligned byte copies rather than the
//! big-endian word packing the portable backend uses. The decryption
//! schedule is derived eagerly at set-key time because AESDEC consumes round
//! keys pre-transformed by InvMixColumns.
//!
//! Instruction support is a construction-time precondition: probe with
//! [`is_available`] before building a cipher. On targets without the
//! instruction set this crate exports only `is_available`, which returns
//! false.

#![deny(missing_docs)]

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod x86;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use crate::x86::{is_available, Aes128, Aes192, Aes256};

/// Always false: this target has no AES instruction set.
#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
pub fn is_available() -> bool {
    false
}
