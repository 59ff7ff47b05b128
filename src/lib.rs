//! Single-block AES (FIPS 197) with two interchangeable backends.
//!
//! The [`soft`] backend computes the cipher in portable software over
//! GF(2⁸); the [`ni`] backend drives the CPU's AES instructions. Both expose
//! the same per-key-size types behind the [`BlockCipher`] contract and
//! produce identical ciphertext for identical keys, so callers pick a
//! backend at construction and nothing else changes.
//!
//! ```
//! use dual_aes::soft::Aes128;
//!
//! let aes = Aes128::new(&[0u8; 16]);
//! let ciphertext = aes.encrypt(&[0u8; 16]);
//! assert_eq!(aes.decrypt(&ciphertext), [0u8; 16]);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub use aes_core::{Block, BlockCipher, BLOCK_SIZE};

/// Portable software backend.
pub mod soft {
    pub use aes_core::{Aes128, Aes192, Aes256};
}

/// Hardware backend driven by the CPU's AES instruction set.
///
/// Check [`is_available`](ni::is_available) before constructing a cipher;
/// on targets without the instructions only the probe is exported.
pub mod ni {
    pub use aes_ni::is_available;

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    pub use aes_ni::{Aes128, Aes192, Aes256};
}
