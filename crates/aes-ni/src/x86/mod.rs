//! Cipher types backed by the x86 AES instruction set.

mod cipher;
mod schedule;

use core::fmt;

#[cfg(target_arch = "x86")]
pub(crate) use core::arch::x86 as arch;
#[cfg(target_arch = "x86_64")]
pub(crate) use core::arch::x86_64 as arch;

use aes_core::{Block, BlockCipher};

/// Returns true when the CPU provides the AES and SSE2 instruction sets.
pub fn is_available() -> bool {
    std::arch::is_x86_feature_detected!("aes") && std::arch::is_x86_feature_detected!("sse2")
}

#[inline]
fn zero128() -> arch::__m128i {
    // SAFETY: SSE2 is baseline on x86_64 and verified before any cipher is
    // constructed on x86.
    unsafe { arch::_mm_setzero_si128() }
}

macro_rules! define_aes {
    (
        $(#[$doc:meta])*
        $name:ident, key = $key_bytes:literal, rounds = $rounds:literal
    ) => {
        $(#[$doc])*
        #[derive(Clone)]
        pub struct $name {
            w: [arch::__m128i; $rounds + 1],
            dw: [arch::__m128i; $rounds + 1],
        }

        impl $name {
            /// Expands `key` into the forward and inverse schedules and
            /// returns a ready cipher.
            ///
            /// # Panics
            ///
            /// Panics when the CPU lacks the AES or SSE2 instruction sets;
            /// probe with [`is_available`] first.
            pub fn new(key: &[u8; $key_bytes]) -> Self {
                assert!(
                    is_available(),
                    concat!(stringify!($name), " requires the aes and sse2 instruction sets"),
                );
                let mut cipher = Self {
                    w: [zero128(); $rounds + 1],
                    dw: [zero128(); $rounds + 1],
                };
                cipher.set(key);
                cipher
            }

            /// Replaces the key, recomputing both schedules.
            ///
            /// # Panics
            ///
            /// Panics when the CPU lacks the AES or SSE2 instruction sets.
            pub fn set(&mut self, key: &[u8; $key_bytes]) {
                assert!(
                    is_available(),
                    concat!(stringify!($name), " requires the aes and sse2 instruction sets"),
                );
                // SAFETY: instruction availability was checked above; the
                // schedule slices are sized for this key length.
                unsafe {
                    schedule::expand(key, &mut self.w);
                    schedule::invert(&self.w, &mut self.dw);
                }
            }

            /// Encrypts one 16-byte block.
            pub fn encrypt(&self, block: &Block) -> Block {
                // SAFETY: instances only exist on CPUs with AES support.
                unsafe { cipher::encrypt_block(&self.w, block) }
            }

            /// Decrypts one 16-byte block.
            pub fn decrypt(&self, block: &Block) -> Block {
                // SAFETY: instances only exist on CPUs with AES support.
                unsafe { cipher::decrypt_block(&self.dw, block) }
            }

            /// Encrypts a block in place; the input is fully read first.
            pub fn encrypt_in_place(&self, block: &mut Block) {
                *block = self.encrypt(block);
            }

            /// Decrypts a block in place; the input is fully read first.
            pub fn decrypt_in_place(&self, block: &mut Block) {
                *block = self.decrypt(block);
            }
        }

        impl BlockCipher for $name {
            type Key = [u8; $key_bytes];

            fn set(&mut self, key: &Self::Key) {
                $name::set(self, key);
            }

            fn encrypt(&self, block: &Block) -> Block {
                $name::encrypt(self, block)
            }

            fn decrypt(&self, block: &Block) -> Block {
                $name::decrypt(self, block)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($name), " { .. }"))
            }
        }
    };
}

define_aes! {
    /// Hardware AES-128: 16-byte key, 10 rounds.
    Aes128, key = 16, rounds = 10
}

define_aes! {
    /// Hardware AES-192: 24-byte key, 12 rounds.
    Aes192, key = 24, rounds = 12
}

define_aes! {
    /// Hardware AES-256: 32-byte key, 14 rounds.
    Aes256, key = 32, rounds = 14
}
