//! Reference AES implementation for the three FIPS-197 key sizes.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key schedule for AES-128, AES-192 and AES-256.
//! - Single-block encryption and decryption.
//! - The constant tables and the [`BlockCipher`] contract shared with the
//!   hardware backend.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod round;
mod sbox;
mod schedule;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{Aes128, Aes192, Aes256, BlockCipher};
pub use crate::round::{inv_mix_columns, mix_columns};
pub use crate::sbox::{inv_sbox, sbox};
pub use crate::schedule::expand_words;
