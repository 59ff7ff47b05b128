//! The single-block cipher contract and the software cipher types.

use core::fmt;

use crate::block::Block;
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::schedule::expand_words;

/// Common single-block contract implemented by every backend.
///
/// An instance is immutable between [`BlockCipher::set`] calls; `encrypt` and
/// `decrypt` are pure reads of the expanded schedule, so concurrent readers
/// of one instance are safe.
pub trait BlockCipher {
    /// Key byte array for this cipher's key size.
    type Key;

    /// Replaces the key, recomputing the schedule.
    fn set(&mut self, key: &Self::Key);

    /// Maps one 16-byte plaintext block to its ciphertext.
    fn encrypt(&self, block: &Block) -> Block;

    /// Inverse of [`BlockCipher::encrypt`] under the same key.
    fn decrypt(&self, block: &Block) -> Block;

    /// Encrypts a block in place.
    ///
    /// The input is fully read before any output byte is written.
    fn encrypt_in_place(&self, block: &mut Block) {
        *block = self.encrypt(block);
    }

    /// Decrypts a block in place.
    ///
    /// The input is fully read before any output byte is written.
    fn decrypt_in_place(&self, block: &mut Block) {
        *block = self.decrypt(block);
    }
}

/// Encrypts one block with a schedule of `4 * (Nr + 1)` round words.
fn encrypt_with(block: &Block, w: &[u32]) -> Block {
    let nr = w.len() / 4 - 1;
    let mut state = *block;

    add_round_key(&mut state, &w[..4]);

    for round in 1..nr {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &w[4 * round..4 * round + 4]);
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &w[4 * nr..]);

    state
}

/// Decrypts one block with the same schedule `encrypt_with` consumes.
fn decrypt_with(block: &Block, w: &[u32]) -> Block {
    let nr = w.len() / 4 - 1;
    let mut state = *block;

    add_round_key(&mut state, &w[4 * nr..]);

    for round in (1..nr).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, &w[4 * round..4 * round + 4]);
        inv_mix_columns(&mut state);
    }

    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, &w[..4]);

    state
}

macro_rules! define_aes {
    (
        $(#[$doc:meta])*
        $name:ident, key = $key_bytes:literal, words = $words:literal
    ) => {
        $(#[$doc])*
        #[derive(Clone)]
        pub struct $name {
            w: [u32; $words],
        }

        impl $name {
            /// Expands `key` and returns a ready cipher.
            pub fn new(key: &[u8; $key_bytes]) -> Self {
                let mut w = [0u32; $words];
                expand_words(key, &mut w);
                Self { w }
            }

            /// Replaces the key, recomputing the schedule.
            pub fn set(&mut self, key: &[u8; $key_bytes]) {
                expand_words(key, &mut self.w);
            }

            /// Encrypts one 16-byte block.
            pub fn encrypt(&self, block: &Block) -> Block {
                encrypt_with(block, &self.w)
            }

            /// Decrypts one 16-byte block.
            pub fn decrypt(&self, block: &Block) -> Block {
                decrypt_with(block, &self.w)
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
    /// Software AES-128: 16-byte key, 10 rounds.
    Aes128, key = 16, words = 44
}

define_aes! {
    /// Software AES-192: 24-byte key, 12 rounds.
    Aes192, key = 24, words = 52
}

define_aes! {
    /// Software AES-256: 32-byte key, 14 rounds.
    Aes256, key = 32, words = 60
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    const NIST_PLAIN: Block = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];

    #[test]
    fn aes128_matches_nist_vector() {
        let key: [u8; 16] = core::array::from_fn(|i| i as u8);
        let expected: Block = [
            0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4,
            0xc5, 0x5a,
        ];
        let aes = Aes128::new(&key);
        let ct = aes.encrypt(&NIST_PLAIN);
        assert_eq!(ct, expected);
        assert_eq!(aes.decrypt(&ct), NIST_PLAIN);
    }

    #[test]
    fn aes192_matches_nist_vector() {
        let key: [u8; 24] = core::array::from_fn(|i| i as u8);
        let expected: Block = [
            0xdd, 0xa9, 0x7c, 0xa4, 0x86, 0x4c, 0xdf, 0xe0, 0x6e, 0xaf, 0x70, 0xa0, 0xec, 0x0d,
            0x71, 0x91,
        ];
        let aes = Aes192::new(&key);
        let ct = aes.encrypt(&NIST_PLAIN);
        assert_eq!(ct, expected);
        assert_eq!(aes.decrypt(&ct), NIST_PLAIN);
    }

    #[test]
    fn aes256_matches_nist_vector() {
        let key: [u8; 32] = core::array::from_fn(|i| i as u8);
        let expected: Block = [
            0x8e, 0xa2, 0xb7, 0xca, 0x51, 0x67, 0x45, 0xbf, 0xea, 0xfc, 0x49, 0x90, 0x4b, 0x49,
            0x60, 0x89,
        ];
        let aes = Aes256::new(&key);
        let ct = aes.encrypt(&NIST_PLAIN);
        assert_eq!(ct, expected);
        assert_eq!(aes.decrypt(&ct), NIST_PLAIN);
    }

    #[test]
    fn all_zero_key_and_block() {
        let expected: Block = [
            0x66, 0xe9, 0x4b, 0xd4, 0xef, 0x8a, 0x2c, 0x3b, 0x88, 0x4c, 0xfa, 0x59, 0xca, 0x34,
            0x2b, 0x2e,
        ];
        let aes = Aes128::new(&[0u8; 16]);
        let ct = aes.encrypt(&[0u8; 16]);
        assert_eq!(ct, expected);
        assert_eq!(aes.decrypt(&ct), [0u8; 16]);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key = [0u8; 32];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key);
            rng.fill_bytes(&mut block);

            let aes = Aes256::new(&key);
            let ct = aes.encrypt(&block);
            assert_eq!(aes.decrypt(&ct), block);
            assert_eq!(aes.encrypt(&aes.decrypt(&block)), block);
        }
    }

    #[test]
    fn in_place_matches_by_value() {
        let key: [u8; 16] = core::array::from_fn(|i| i as u8);
        let aes = Aes128::new(&key);

        let mut block = NIST_PLAIN;
        aes.encrypt_in_place(&mut block);
        assert_eq!(block, aes.encrypt(&NIST_PLAIN));
        aes.decrypt_in_place(&mut block);
        assert_eq!(block, NIST_PLAIN);
    }

    #[test]
    fn set_replaces_the_schedule() {
        let mut aes = Aes128::new(&[0u8; 16]);
        let zero_ct = aes.encrypt(&NIST_PLAIN);
        aes.set(&core::array::from_fn(|i| i as u8));
        assert_ne!(aes.encrypt(&NIST_PLAIN), zero_ct);
        aes.set(&[0u8; 16]);
        assert_eq!(aes.encrypt(&NIST_PLAIN), zero_ct);
    }

    #[test]
    fn usable_through_the_trait() {
        fn round_trip<C: BlockCipher>(cipher: &C, block: &Block) -> Block {
            cipher.decrypt(&cipher.encrypt(block))
        }

        let aes = Aes192::new(&[0x42u8; 24]);
        assert_eq!(round_trip(&aes, &NIST_PLAIN), NIST_PLAIN);
    }
}
